//! Geometry providers: the strategy that decides what a marker looks like.
//!
//! Every built-in shape produces its outline in the marker's layout frame:
//! bounds start at (0,0) and extend to the shape's natural size. Placement is
//! never baked into the outline.

use std::f64::consts::{FRAC_PI_2, TAU};

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use crate::defaults;
use crate::errors::GlyphError;
use crate::geometry::Geometry;
use crate::glyph::parse_glyph;

/// Produces the outline a marker draws.
///
/// Called once per assignment to a marker; implementations should be cheap
/// and free of side effects.
#[enum_dispatch]
pub trait GeometryProvider {
    fn produce_geometry(&self) -> Geometry;
}

impl<F> GeometryProvider for F
where
    F: Fn() -> Geometry,
{
    fn produce_geometry(&self) -> Geometry {
        self()
    }
}

/// Built-in marker shapes
#[enum_dispatch(GeometryProvider)]
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerShape {
    Dot,
    Square,
    Triangle,
    Diamond,
    Glyph,
}

impl Default for MarkerShape {
    fn default() -> Self {
        MarkerShape::Dot(Dot::default())
    }
}

/// A filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub radius: f64,
}

impl Dot {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new(defaults::DOT_RADIUS)
    }
}

impl GeometryProvider for Dot {
    fn produce_geometry(&self) -> Geometry {
        let r = DVec2::splat(self.radius);
        Geometry::ellipse(r, r)
    }
}

/// An axis-aligned square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::new(defaults::SQUARE_SIDE)
    }
}

impl GeometryProvider for Square {
    fn produce_geometry(&self) -> Geometry {
        let s = self.side;
        Geometry::polygon([dvec2(0.0, 0.0), dvec2(s, 0.0), dvec2(s, s), dvec2(0.0, s)])
    }
}

/// Which way a triangle's apex points on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriangleDirection {
    #[default]
    Up,
    Down,
}

/// An equilateral triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub side: f64,
    pub direction: TriangleDirection,
}

impl Triangle {
    pub fn new(side: f64) -> Self {
        Self {
            side,
            direction: TriangleDirection::Up,
        }
    }

    pub fn with_direction(mut self, direction: TriangleDirection) -> Self {
        self.direction = direction;
        self
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new(defaults::TRIANGLE_SIDE)
    }
}

impl GeometryProvider for Triangle {
    fn produce_geometry(&self) -> Geometry {
        // Screen Y grows downward, so -90deg is straight up.
        let apex = match self.direction {
            TriangleDirection::Up => -FRAC_PI_2,
            TriangleDirection::Down => FRAC_PI_2,
        };
        let circumradius = self.side / 3f64.sqrt();
        let vertices = (0..3).map(|i| DVec2::from_angle(apex + TAU * i as f64 / 3.0) * circumradius);
        Geometry::polygon(vertices).normalized()
    }
}

/// A rhombus with its corners on the bounds' edge midpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diamond {
    pub width: f64,
    pub height: f64,
}

impl Diamond {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Diamond {
    fn default() -> Self {
        Self::new(defaults::DIAMOND_WIDTH, defaults::DIAMOND_HEIGHT)
    }
}

impl GeometryProvider for Diamond {
    fn produce_geometry(&self) -> Geometry {
        let (w, h) = (self.width, self.height);
        Geometry::polygon([
            dvec2(w / 2.0, 0.0),
            dvec2(w, h / 2.0),
            dvec2(w / 2.0, h),
            dvec2(0.0, h / 2.0),
        ])
    }
}

/// A custom outline, typically parsed from path data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Glyph {
    geometry: Geometry,
}

impl Glyph {
    /// Wrap an existing outline, moving its bounds to the origin
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry: geometry.normalized(),
        }
    }

    /// Parse path data such as `"M0,10 L5,0 L10,10 Z"`
    pub fn parse(path_data: &str) -> Result<Self, GlyphError> {
        Ok(Self::new(parse_glyph(path_data)?))
    }
}

impl GeometryProvider for Glyph {
    fn produce_geometry(&self) -> Geometry {
        self.geometry.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn dot_fits_diameter() {
        let g = MarkerShape::from(Dot::new(5.0)).produce_geometry();
        let b = g.bounds();
        assert_eq!(b.min, DVec2::ZERO);
        assert_eq!(b.size(), Size::new(10.0, 10.0));
    }

    #[test]
    fn square_path() {
        let g = Square::new(10.0).produce_geometry();
        assert_eq!(g.to_path_data(), "M0,0L10,0L10,10L0,10Z");
    }

    #[test]
    fn triangle_is_equilateral_and_normalized() {
        let g = Triangle::new(10.0).produce_geometry();
        let b = g.bounds();
        assert!(approx(b.min.x, 0.0) && approx(b.min.y, 0.0));
        let size = b.size();
        assert!(approx(size.width, 10.0));
        assert!(approx(size.height, 10.0 * 3f64.sqrt() / 2.0));
    }

    #[test]
    fn triangle_direction_flips_apex() {
        let up = Triangle::new(10.0).produce_geometry();
        let down = Triangle::new(10.0)
            .with_direction(TriangleDirection::Down)
            .produce_geometry();
        let apex_y = |g: &Geometry| match &g.figures()[0] {
            crate::Figure::Polyline { points, .. } => points[0].y,
            other => panic!("unexpected figure {:?}", other),
        };
        assert!(approx(apex_y(&up), 0.0));
        assert!(approx(apex_y(&down), down.bounds().max.y));
    }

    #[test]
    fn diamond_bounds() {
        let g = Diamond::new(8.0, 6.0).produce_geometry();
        assert_eq!(g.bounds().size(), Size::new(8.0, 6.0));
    }

    #[test]
    fn glyph_is_normalized() {
        let glyph = Glyph::parse("M-5,-5 L5,-5 L0,5 Z").unwrap();
        let g = glyph.produce_geometry();
        assert_eq!(g.bounds().min, DVec2::ZERO);
        assert_eq!(g.bounds().size(), Size::new(10.0, 10.0));
    }

    #[test]
    fn closure_provider() {
        let provider = || Square::new(2.0).produce_geometry();
        assert_eq!(provider.produce_geometry().bounds().size(), Size::new(2.0, 2.0));
    }

    #[test]
    fn default_shape_is_dot() {
        assert_eq!(MarkerShape::default(), MarkerShape::Dot(Dot::default()));
    }
}
