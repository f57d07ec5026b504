//! Marker outlines.
//!
//! A [`Geometry`] is a list of figures in the marker's local coordinate space.
//! It carries no position: placement is the marker's translation.

use glam::{DVec2, dvec2};

use crate::render::fmt_num;
use crate::types::Size;

static EMPTY: Geometry = Geometry::empty();

/// One closed or open outline
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Ellipse { center: DVec2, radii: DVec2 },
    Polyline { points: Vec<DVec2>, closed: bool },
}

impl Figure {
    fn is_empty(&self) -> bool {
        match self {
            Figure::Ellipse { radii, .. } => radii.x <= 0.0 && radii.y <= 0.0,
            Figure::Polyline { points, .. } => points.is_empty(),
        }
    }

    fn expand_bounds(&self, bounds: &mut Bounds) {
        match self {
            Figure::Ellipse { center, radii } => {
                bounds.expand_point(*center - *radii);
                bounds.expand_point(*center + *radii);
            }
            Figure::Polyline { points, .. } => {
                for p in points {
                    bounds.expand_point(*p);
                }
            }
        }
    }

    fn translated(&self, by: DVec2) -> Figure {
        match self {
            Figure::Ellipse { center, radii } => Figure::Ellipse {
                center: *center + by,
                radii: *radii,
            },
            Figure::Polyline { points, closed } => Figure::Polyline {
                points: points.iter().map(|p| *p + by).collect(),
                closed: *closed,
            },
        }
    }

    fn write_path_data(&self, out: &mut String) {
        match self {
            Figure::Ellipse { center, radii } => {
                // Two half arcs; a single arc with equal endpoints draws nothing.
                let (rx, ry) = (fmt_num(radii.x), fmt_num(radii.y));
                let left = fmt_pt(dvec2(center.x - radii.x, center.y));
                let right = fmt_pt(dvec2(center.x + radii.x, center.y));
                out.push_str(&format!(
                    "M{left}A{rx},{ry} 0 1,0 {right}A{rx},{ry} 0 1,0 {left}Z"
                ));
            }
            Figure::Polyline { points, closed } => {
                for (i, p) in points.iter().enumerate() {
                    out.push(if i == 0 { 'M' } else { 'L' });
                    out.push_str(&fmt_pt(*p));
                }
                if *closed && !points.is_empty() {
                    out.push('Z');
                }
            }
        }
    }
}

fn fmt_pt(p: DVec2) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

/// Axis-aligned bounds of a geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Create empty bounds (will expand on first point)
    pub fn new() -> Self {
        Bounds {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    /// Check if the bounds are empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn size(&self) -> Size {
        if self.is_empty() {
            return Size::ZERO;
        }
        let extent = self.max - self.min;
        Size::new(extent.x, extent.y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

/// A drawable outline made of zero or more figures
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geometry {
    figures: Vec<Figure>,
}

impl Geometry {
    /// The empty outline: draws nothing, measures as zero
    pub const fn empty() -> Self {
        Geometry { figures: Vec::new() }
    }

    /// Shared instance of the empty outline
    pub fn empty_ref() -> &'static Geometry {
        &EMPTY
    }

    pub fn from_figures(figures: Vec<Figure>) -> Self {
        Geometry { figures }
    }

    pub fn ellipse(center: DVec2, radii: DVec2) -> Self {
        Geometry {
            figures: vec![Figure::Ellipse { center, radii }],
        }
    }

    /// A single closed polygon
    pub fn polygon(points: impl IntoIterator<Item = DVec2>) -> Self {
        Geometry {
            figures: vec![Figure::Polyline {
                points: points.into_iter().collect(),
                closed: true,
            }],
        }
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn is_empty(&self) -> bool {
        self.figures.iter().all(Figure::is_empty)
    }

    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new();
        for figure in &self.figures {
            figure.expand_bounds(&mut bounds);
        }
        bounds
    }

    /// Copy of this outline shifted by `by`
    pub fn translated(&self, by: DVec2) -> Geometry {
        Geometry {
            figures: self.figures.iter().map(|f| f.translated(by)).collect(),
        }
    }

    /// Copy of this outline shifted so its bounds start at the origin.
    /// Layout measures a marker from (0,0), so providers hand out outlines in
    /// this frame.
    pub fn normalized(&self) -> Geometry {
        let bounds = self.bounds();
        if bounds.is_empty() {
            return self.clone();
        }
        self.translated(-bounds.min)
    }

    /// SVG path data (`d` attribute) for this outline
    pub fn to_path_data(&self) -> String {
        let mut out = String::new();
        for figure in &self.figures {
            figure.write_path_data(&mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_geometry_has_empty_bounds() {
        let g = Geometry::empty();
        assert!(g.is_empty());
        assert!(g.bounds().is_empty());
        assert_eq!(g.bounds().size(), Size::ZERO);
        assert_eq!(g.to_path_data(), "");
        assert!(Geometry::empty_ref().is_empty());
    }

    #[test]
    fn polygon_bounds() {
        let g = Geometry::polygon([dvec2(1.0, 2.0), dvec2(5.0, 2.0), dvec2(3.0, 8.0)]);
        let b = g.bounds();
        assert_eq!(b.min, dvec2(1.0, 2.0));
        assert_eq!(b.max, dvec2(5.0, 8.0));
        assert_eq!(b.size(), Size::new(4.0, 6.0));
    }

    #[test]
    fn ellipse_bounds_cover_radii() {
        let g = Geometry::ellipse(dvec2(5.0, 5.0), dvec2(5.0, 3.0));
        assert_eq!(g.bounds().size(), Size::new(10.0, 6.0));
    }

    #[test]
    fn normalized_moves_bounds_to_origin() {
        let g = Geometry::polygon([dvec2(-5.0, -5.0), dvec2(5.0, -5.0), dvec2(5.0, 5.0)]);
        let n = g.normalized();
        assert_eq!(n.bounds().min, DVec2::ZERO);
        assert_eq!(n.bounds().size(), g.bounds().size());
    }

    #[test]
    fn path_data_for_square() {
        let g = Geometry::polygon([
            dvec2(0.0, 0.0),
            dvec2(10.0, 0.0),
            dvec2(10.0, 10.0),
            dvec2(0.0, 10.0),
        ]);
        assert_eq!(g.to_path_data(), "M0,0L10,0L10,10L0,10Z");
    }

    #[test]
    fn path_data_for_circle() {
        let g = Geometry::ellipse(dvec2(4.0, 4.0), dvec2(4.0, 4.0));
        assert_eq!(g.to_path_data(), "M0,4A4,4 0 1,0 8,4A4,4 0 1,0 0,4Z");
    }

    #[test]
    fn open_polyline_has_no_close() {
        let g = Geometry::from_figures(vec![Figure::Polyline {
            points: vec![dvec2(0.0, 0.0), dvec2(2.5, 1.0)],
            closed: false,
        }]);
        assert_eq!(g.to_path_data(), "M0,0L2.5,1");
    }
}
