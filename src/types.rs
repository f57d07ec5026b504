//! Coordinate primitives for markers.
//!
//! All values are logical units in the host's coordinate space (Y grows
//! downward, as on screen). "Not yet known" is never encoded as a magic
//! coordinate: unset positions and sizes are `Option::None` at the call sites.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// A point in logical coordinates
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Create a point with validation (rejects NaN/infinite)
    pub fn try_new(x: f64, y: f64) -> Result<Self, NumericError> {
        Ok(Point { x: check_finite(x)?, y: check_finite(y)? })
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// Measured width/height of a rendered marker
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// Create a size with validation (rejects NaN, infinite and negative)
    pub fn try_new(width: f64, height: f64) -> Result<Self, NumericError> {
        let width = check_finite(width)?;
        let height = check_finite(height)?;
        if width < 0.0 || height < 0.0 {
            return Err(NumericError::Negative);
        }
        Ok(Size { width, height })
    }

    /// A size nothing can be anchored against: zero, negative or non-finite
    /// in either dimension.
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Grow both dimensions by `amount` (e.g. a stroke straddling the outline)
    pub fn inflate(self, amount: f64) -> Size {
        Size {
            width: self.width + amount,
            height: self.height + amount,
        }
    }
}

/// A displacement vector (not an absolute position).
/// Point + Offset = Point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Offset { dx, dy }
    }

    pub fn is_finite(self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

impl Neg for Offset {
    type Output = Offset;
    fn neg(self) -> Offset {
        Offset { dx: -self.dx, dy: -self.dy }
    }
}

impl Add<Offset> for Point {
    type Output = Point;
    fn add(self, rhs: Offset) -> Point {
        Point { x: self.x + rhs.dx, y: self.y + rhs.dy }
    }
}

impl Sub<Point> for Point {
    type Output = Offset;
    fn sub(self, rhs: Point) -> Offset {
        Offset { dx: self.x - rhs.x, dy: self.y - rhs.y }
    }
}

/// Paint color for marker fill and stroke
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
    None,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
            Color::None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_try_new_rejects_non_finite() {
        assert_eq!(Point::try_new(f64::NAN, 0.0), Err(NumericError::NaN));
        assert_eq!(Point::try_new(0.0, f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Point::try_new(-3.0, 4.0), Ok(Point::new(-3.0, 4.0)));
    }

    #[test]
    fn size_try_new_validation() {
        assert_eq!(Size::try_new(10.0, 0.0), Ok(Size::new(10.0, 0.0)));
        assert_eq!(Size::try_new(-1.0, 2.0), Err(NumericError::Negative));
        assert_eq!(Size::try_new(1.0, f64::NAN), Err(NumericError::NaN));
        assert_eq!(Size::try_new(f64::NEG_INFINITY, 1.0), Err(NumericError::Infinite));
    }

    #[test]
    fn size_degenerate() {
        assert!(Size::ZERO.is_degenerate());
        assert!(Size::new(10.0, 0.0).is_degenerate());
        assert!(Size::new(f64::NAN, 10.0).is_degenerate());
        assert!(Size::new(-2.0, 10.0).is_degenerate());
        assert!(!Size::new(0.5, 0.5).is_degenerate());
    }

    #[test]
    fn point_plus_offset_gives_point() {
        let p = Point::new(100.0, 50.0) + Offset::new(-5.0, -5.0);
        assert_eq!(p, Point::new(95.0, 45.0));
    }

    #[test]
    fn point_minus_point_gives_offset() {
        let o = Point::new(5.0, 7.0) - Point::new(2.0, 3.0);
        assert_eq!(o, Offset::new(3.0, 4.0));
        assert_eq!(-o, Offset::new(-3.0, -4.0));
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::Rgb(255, 0, 10).to_string(), "rgb(255,0,10)");
        assert_eq!(Color::Named("steelblue".into()).to_string(), "steelblue");
        assert_eq!(Color::None.to_string(), "none");
    }
}
