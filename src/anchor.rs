//! Anchor policies: which point of a marker's measured bounds sits on its
//! logical position.

use crate::types::{Offset, Size};

/// Maps a measured marker size to the offset added to its logical position.
///
/// Returning `None` means no offset can be computed yet (unmeasured or
/// degenerate size); the marker then keeps its current translation.
pub trait AnchorPolicy {
    fn anchor_offset(&self, size: Size) -> Option<Offset>;
}

impl<F> AnchorPolicy for F
where
    F: Fn(Size) -> Option<Offset>,
{
    fn anchor_offset(&self, size: Size) -> Option<Offset> {
        self(size)
    }
}

/// Reference point within the marker's bounds, in screen orientation
/// (North is the top edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Dots and symmetric glyphs
    #[default]
    Center,
    North,
    NorthEast,
    East,
    SouthEast,
    /// Pins: the bottom tip touches the data point
    South,
    SouthWest,
    West,
    /// Labels: the top-left corner is the data point
    NorthWest,
}

impl Anchor {
    /// Fraction of (width, height) between the bounds' top-left corner and
    /// the reference point.
    fn fractions(self) -> (f64, f64) {
        match self {
            Anchor::Center => (0.5, 0.5),
            Anchor::North => (0.5, 0.0),
            Anchor::NorthEast => (1.0, 0.0),
            Anchor::East => (1.0, 0.5),
            Anchor::SouthEast => (1.0, 1.0),
            Anchor::South => (0.5, 1.0),
            Anchor::SouthWest => (0.0, 1.0),
            Anchor::West => (0.0, 0.5),
            Anchor::NorthWest => (0.0, 0.0),
        }
    }
}

impl AnchorPolicy for Anchor {
    fn anchor_offset(&self, size: Size) -> Option<Offset> {
        if size.is_degenerate() {
            return None;
        }
        let (fx, fy) = self.fractions();
        Some(Offset::new(-size.width * fx, -size.height * fy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_offsets_by_half_size() {
        let o = Anchor::Center.anchor_offset(Size::new(10.0, 6.0));
        assert_eq!(o, Some(Offset::new(-5.0, -3.0)));
    }

    #[test]
    fn pin_and_label_anchors() {
        let size = Size::new(8.0, 12.0);
        assert_eq!(Anchor::South.anchor_offset(size), Some(Offset::new(-4.0, -12.0)));
        assert_eq!(Anchor::NorthWest.anchor_offset(size), Some(Offset::new(-0.0, -0.0)));
        assert_eq!(Anchor::East.anchor_offset(size), Some(Offset::new(-8.0, -6.0)));
    }

    #[test]
    fn degenerate_size_has_no_offset() {
        for anchor in [Anchor::Center, Anchor::NorthWest, Anchor::South] {
            assert_eq!(anchor.anchor_offset(Size::ZERO), None);
            assert_eq!(anchor.anchor_offset(Size::new(f64::NAN, 3.0)), None);
        }
    }

    #[test]
    fn closure_policy() {
        let fixed = |_size: Size| Some(Offset::new(1.0, 2.0));
        assert_eq!(fixed.anchor_offset(Size::ZERO), Some(Offset::new(1.0, 2.0)));
    }
}
