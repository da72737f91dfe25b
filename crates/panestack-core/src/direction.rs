//! Reading directions and the quarter-turn rotation group.
//!
//! A stack flows in one of four [`Direction`]s. When a stack changes
//! direction, anything positioned relative to it (hit zones for resize
//! handles, for instance) must be re-oriented. The four directions form a
//! cycle of quarter turns, so re-orientation is an element of the cyclic
//! group of order four: a [`Rotation`].
//!
//! # Invariants
//!
//! 1. `Rotation::between(a, b).then(Rotation::between(b, c)) == Rotation::between(a, c)`.
//! 2. `r.then(r.inverse()) == Rotation::IDENTITY`.
//! 3. `apply_normalized` maps the unit square onto itself.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Size};

/// The axis a stack is laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Children placed left/right of each other.
    Horizontal,
    /// Children placed above/below each other.
    #[default]
    Vertical,
}

impl Orientation {
    /// The perpendicular orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// The direction a stack's children are read in.
///
/// Variants are declared in quarter-turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    TopToBottom,
    LeftToRight,
    BottomToTop,
    RightToLeft,
}

impl Direction {
    /// All directions, in quarter-turn order.
    pub const ALL: [Self; 4] = [
        Self::TopToBottom,
        Self::LeftToRight,
        Self::BottomToTop,
        Self::RightToLeft,
    ];

    /// Position in the quarter-turn cycle.
    #[inline]
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::TopToBottom => 0,
            Self::LeftToRight => 1,
            Self::BottomToTop => 2,
            Self::RightToLeft => 3,
        }
    }

    /// Whether the direction is vertical or horizontal.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::TopToBottom | Self::BottomToTop => Orientation::Vertical,
            Self::LeftToRight | Self::RightToLeft => Orientation::Horizontal,
        }
    }

    /// Rotation taking a layout oriented along `self` to one along `to`.
    #[inline]
    #[must_use]
    pub const fn rotation_to(self, to: Self) -> Rotation {
        Rotation::between(self, to)
    }

    /// Re-orient `rect` from this direction to `to`, rotating about the
    /// centre of `bounds`.
    ///
    /// The rectangle is normalized against `bounds`, rotated inside the unit
    /// square, then scaled back. Degenerate bounds leave `rect` unchanged.
    #[must_use]
    pub fn orientate_rect(self, to: Self, rect: Rect, bounds: Size) -> Rect {
        if bounds.is_degenerate() {
            return rect;
        }
        let normalized = rect.scale(bounds.width.recip(), bounds.height.recip());
        self.rotation_to(to)
            .apply_normalized(normalized)
            .scale(bounds.width, bounds.height)
    }
}

/// A rotation by a whole number of quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rotation {
    quarter_turns: u8,
}

impl Rotation {
    /// The identity rotation.
    pub const IDENTITY: Self = Self { quarter_turns: 0 };

    /// A rotation by `turns` quarter turns (reduced mod 4).
    #[inline]
    #[must_use]
    pub const fn quarter(turns: u8) -> Self {
        Self {
            quarter_turns: turns % 4,
        }
    }

    /// The rotation from one direction to another.
    #[inline]
    #[must_use]
    pub const fn between(from: Direction, to: Direction) -> Self {
        Self::quarter(to.quarter_turns() + 4 - from.quarter_turns())
    }

    /// Number of quarter turns, in `0..4`.
    #[inline]
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self.quarter_turns
    }

    /// Apply `self`, then `next`.
    #[inline]
    #[must_use]
    pub const fn then(self, next: Self) -> Self {
        Self::quarter(self.quarter_turns + next.quarter_turns)
    }

    /// The rotation undoing `self`.
    #[inline]
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::quarter(4 - self.quarter_turns)
    }

    /// Rotate a rectangle expressed in unit-square coordinates.
    #[must_use]
    pub fn apply_normalized(self, rect: Rect) -> Rect {
        match self.quarter_turns {
            0 => rect,
            1 => Rect::new(rect.top(), 1.0 - rect.right(), rect.height, rect.width),
            2 => Rect::new(
                1.0 - rect.right(),
                1.0 - rect.bottom(),
                rect.width,
                rect.height,
            ),
            _ => Rect::new(1.0 - rect.bottom(), rect.left(), rect.height, rect.width),
        }
    }
}
