//! Positioned scatter markers for 2D charts.
//!
//! A [`Marker`] draws one data item as a small shape (dot, triangle, custom
//! glyph). Its logical position comes from the chart; its size comes from the
//! host's layout pass. The marker reconciles the two into a translation that
//! puts its anchor point (the center, by default) exactly on the position.
//!
//! ```
//! use std::rc::Rc;
//! use scatter_marker::{GeometryProvider, Marker, MarkerShape, Point, Square, Translation};
//!
//! let shape: Rc<dyn GeometryProvider> = Rc::new(MarkerShape::from(Square::new(10.0)));
//! let mut marker = Marker::new();
//! marker.set_geometry_provider(Some(&shape));
//! marker.set_position(Point::new(100.0, 50.0));
//! marker.on_size_changed(scatter_marker::Size::new(10.0, 10.0));
//!
//! assert_eq!(marker.translation(), Some(Translation::new(95.0, 45.0)));
//! ```

pub mod anchor;
pub mod defaults;
pub mod errors;
pub mod geometry;
pub mod glyph;
pub mod log;
pub mod marker;
pub mod provider;
pub mod render;
pub mod types;

pub use anchor::{Anchor, AnchorPolicy};
pub use errors::GlyphError;
pub use geometry::{Bounds, Figure, Geometry};
pub use glyph::parse_glyph;
pub use marker::{Invalidation, Marker, MarkerStyle, Translation};
pub use provider::{
    Diamond, Dot, GeometryProvider, Glyph, MarkerShape, Square, Triangle, TriangleDirection,
};
pub use render::render_svg;
pub use types::{Color, NumericError, Offset, Point, Size};
