pub mod animator;
pub mod ballistics;
pub mod error;
pub mod sampler;
pub mod window;

pub use animator::{Frame, Playback, RenderSink, TrajectoryAnimator, summarize};
pub use ballistics::{
    EARTH_GRAVITY_MPS2, FlightMetrics, InitialConditions, KinematicsEngine, VelocityComponents,
    resolve_velocity,
};
pub use error::{DegenerateCase, DomainError, RenderError};
pub use sampler::{TrajectoryPoint, TrajectorySamples, sample};
pub use window::AxisWindow;
