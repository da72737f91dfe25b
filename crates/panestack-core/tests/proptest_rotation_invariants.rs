//! Property-based invariants for direction re-orientation.
//!
//! 1. Rotating a rect inside the unit square keeps it inside the unit square
//! 2. Area is preserved by every rotation
//! 3. Re-orienting a → b → a returns the original rect

use panestack_core::{Direction, Rect, Rotation, Size};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::TopToBottom),
        Just(Direction::LeftToRight),
        Just(Direction::BottomToTop),
        Just(Direction::RightToLeft),
    ]
}

/// A rect fully contained in the unit square.
fn unit_rect_strategy() -> impl Strategy<Value = Rect> {
    (0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0).prop_map(|(x, y, w, h)| {
        Rect::new(x, y, w * (1.0 - x), h * (1.0 - y))
    })
}

proptest! {
    #[test]
    fn rotation_stays_in_unit_square(
        rect in unit_rect_strategy(),
        turns in 0u8..4,
    ) {
        let rotated = Rotation::quarter(turns).apply_normalized(rect);
        prop_assert!(rotated.left() >= -EPS);
        prop_assert!(rotated.top() >= -EPS);
        prop_assert!(rotated.right() <= 1.0 + EPS);
        prop_assert!(rotated.bottom() <= 1.0 + EPS);
    }

    #[test]
    fn rotation_preserves_area(
        rect in unit_rect_strategy(),
        turns in 0u8..4,
    ) {
        let rotated = Rotation::quarter(turns).apply_normalized(rect);
        let before = rect.width * rect.height;
        let after = rotated.width * rotated.height;
        prop_assert!((before - after).abs() <= EPS);
    }

    #[test]
    fn reorientation_is_reversible(
        from in direction_strategy(),
        to in direction_strategy(),
        rect in unit_rect_strategy(),
        width in 1.0f64..500.0,
        height in 1.0f64..500.0,
    ) {
        let bounds = Size::new(width, height);
        let scaled = rect.scale(width, height);
        let there = from.orientate_rect(to, scaled, bounds);
        let back = to.orientate_rect(from, there, bounds);
        prop_assert!(back.approx_eq(&scaled, 1e-6), "{scaled:?} -> {there:?} -> {back:?}");
    }
}
