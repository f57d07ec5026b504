//! Default marker dimensions and styling (logical units)

pub const DOT_RADIUS: f64 = 4.0;
pub const SQUARE_SIDE: f64 = 8.0;
pub const TRIANGLE_SIDE: f64 = 10.0;
pub const DIAMOND_WIDTH: f64 = 10.0;
pub const DIAMOND_HEIGHT: f64 = 10.0;
pub const STROKE_WIDTH: f64 = 1.0;
