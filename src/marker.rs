//! The positioned marker.
//!
//! A [`Marker`] is laid out by its host at the top-left of the plot area and
//! then moved into place by a translation. The translation is derived from two
//! inputs that arrive independently and in any order:
//!
//! - the logical position, from the chart's data-to-screen mapping
//!   ([`Marker::set_position`])
//! - the measured size, from the host's layout pass
//!   ([`Marker::on_size_changed`])
//!
//! Both entry points run the same reconciliation, which reads the current
//! values of both inputs. Until both are usable, and the marker has an outline
//! to draw, the translation is left untouched.

use std::fmt;
use std::mem;
use std::rc::{Rc, Weak};

use crate::anchor::{Anchor, AnchorPolicy};
use crate::defaults;
use crate::geometry::Geometry;
use crate::log::{debug, trace};
use crate::provider::GeometryProvider;
use crate::types::{Color, Point, Size};

/// Translation applied to the marker's visual
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

impl Translation {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Work the host owes the marker after a mutation.
///
/// Drained with [`Marker::take_invalidation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Invalidation {
    /// Geometry or stroke changed; measure again and report the size back
    /// through [`Marker::on_size_changed`].
    pub measure: bool,
    /// Something visible changed; repaint.
    pub render: bool,
}

impl Invalidation {
    pub fn is_clean(self) -> bool {
        !self.measure && !self.render
    }
}

/// Paint for the marker outline
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            fill: Color::Named("black".to_string()),
            stroke: Color::Named("black".to_string()),
            stroke_width: defaults::STROKE_WIDTH,
        }
    }
}

/// A shape drawn at one data item's position on a chart
pub struct Marker {
    geometry: Option<Geometry>,
    provider: Option<Weak<dyn GeometryProvider>>,
    position: Option<Point>,
    rendered_size: Option<Size>,
    translation: Option<Translation>,
    anchor: Box<dyn AnchorPolicy>,
    style: MarkerStyle,
    invalidation: Invalidation,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            geometry: None,
            provider: None,
            position: None,
            rendered_size: None,
            translation: None,
            anchor: Box::new(Anchor::Center),
            style: MarkerStyle::default(),
            invalidation: Invalidation::default(),
        }
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Marker")
            .field("geometry", &self.geometry)
            .field("has_provider", &self.geometry_provider().is_some())
            .field("position", &self.position)
            .field("rendered_size", &self.rendered_size)
            .field("translation", &self.translation)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl Marker {
    /// A center-anchored marker with no geometry and no position
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(mut self, anchor: impl AnchorPolicy + 'static) -> Self {
        self.set_anchor(anchor);
        self
    }

    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Replace the anchor policy and re-place the marker with it
    pub fn set_anchor(&mut self, anchor: impl AnchorPolicy + 'static) {
        self.anchor = Box::new(anchor);
        self.reconcile();
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: MarkerStyle) {
        if style.stroke_width != self.style.stroke_width {
            self.invalidation.measure = true;
        }
        self.style = style;
        self.invalidation.render = true;
    }

    /// Assign the shape strategy and immediately take its geometry.
    ///
    /// `None` leaves both the provider and the current geometry untouched.
    /// The marker only holds a weak reference; the caller keeps the provider
    /// alive.
    pub fn set_geometry_provider(&mut self, provider: Option<&Rc<dyn GeometryProvider>>) {
        let Some(provider) = provider else {
            return;
        };
        self.provider = Some(Rc::downgrade(provider));
        self.refresh_geometry();
    }

    /// The current provider, if one was assigned and is still alive
    pub fn geometry_provider(&self) -> Option<Rc<dyn GeometryProvider>> {
        self.provider.as_ref().and_then(Weak::upgrade)
    }

    /// Ask the current provider for a fresh outline.
    ///
    /// No-op when no provider was assigned or it has been dropped.
    pub fn refresh_geometry(&mut self) {
        let Some(provider) = self.geometry_provider() else {
            return;
        };
        let geometry = provider.produce_geometry();
        debug!(figures = geometry.figures().len(), "marker geometry refreshed");
        self.set_geometry(Some(geometry));
    }

    /// Set the outline directly, bypassing any provider
    pub fn set_geometry(&mut self, geometry: Option<Geometry>) {
        self.geometry = geometry;
        self.invalidation.measure = true;
        self.invalidation.render = true;
        self.reconcile();
    }

    /// The outline to paint; the empty outline when none is set
    pub fn drawable_geometry(&self) -> &Geometry {
        self.geometry.as_ref().unwrap_or(Geometry::empty_ref())
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Move the marker's anchor point to `position`
    pub fn set_position(&mut self, position: Point) {
        self.position = Some(position);
        self.reconcile();
    }

    /// Forget the position. The current translation stays where it is.
    pub fn clear_position(&mut self) {
        self.position = None;
    }

    pub fn rendered_size(&self) -> Option<Size> {
        self.rendered_size
    }

    /// Called by the host whenever layout measures the marker at a new size,
    /// including the first measurement.
    pub fn on_size_changed(&mut self, size: Size) {
        self.rendered_size = Some(size);
        self.reconcile();
    }

    /// The translation currently applied, `None` until the marker has been
    /// placed once.
    pub fn translation(&self) -> Option<Translation> {
        self.translation
    }

    /// Size the host should give the marker: outline bounds plus stroke.
    pub fn desired_size(&self) -> Size {
        let geometry = self.drawable_geometry();
        if geometry.is_empty() {
            return Size::ZERO;
        }
        geometry.bounds().size().inflate(self.style.stroke_width.max(0.0))
    }

    /// Drain pending measure/render work
    pub fn take_invalidation(&mut self) -> Invalidation {
        mem::take(&mut self.invalidation)
    }

    fn reconcile(&mut self) {
        let Some(position) = self.position else {
            return;
        };
        // Nothing to draw, nothing to place.
        if self.drawable_geometry().is_empty() {
            return;
        }
        let size = self.rendered_size.unwrap_or(Size::ZERO);
        let Some(offset) = self.anchor.anchor_offset(size) else {
            return;
        };
        let target = position + offset;
        if !target.is_finite() {
            return;
        }

        match &mut self.translation {
            Some(t) => {
                if t.x == target.x && t.y == target.y {
                    return;
                }
                t.x = target.x;
                t.y = target.y;
            }
            None => self.translation = Some(Translation::new(target.x, target.y)),
        }
        trace!(x = target.x, y = target.y, "marker translation applied");
        self.invalidation.render = true;
    }
}
