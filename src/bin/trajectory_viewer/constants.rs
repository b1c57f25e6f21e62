use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 720;
pub const MSAA_SAMPLES: i32 = 4;

pub const LEFT_MARGIN: f32 = 90.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 90.0;
pub const BOTTOM_MARGIN: f32 = 80.0;

pub const TITLE_Y: f32 = 46.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.443, 0.486, 1.0);
pub const PATH_COLOR: Color = Color::new(0.212, 0.482, 0.961, 1.0);
pub const PATH_THICKNESS: f32 = 3.0;
pub const HEAD_RADIUS: f32 = 6.0;
