pub mod gif;

pub use gif::GifSink;
