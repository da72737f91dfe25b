//! Weighting of one physical drag across synchronized handles.
//!
//! A single drag may move several handles at once. Each handle asks a
//! [`ResizeAmountTransform`] how far it should move given where it sits
//! relative to the handle under the pointer. Any transform must return 0
//! for a zero drag and, for the handle under the pointer itself, preserve
//! the sign of the drag.

use serde::{Deserialize, Serialize};

/// Maps a raw drag amount to the amount applied at one handle.
pub trait ResizeAmountTransform {
    /// `active_position` is the prefix size at the handle under the pointer,
    /// `handle_position` the prefix size at the handle being resized, and
    /// `total_size` the size of the whole stack.
    fn transform(
        &self,
        resize_amount: f64,
        active_position: f64,
        handle_position: f64,
        total_size: f64,
    ) -> f64;
}

impl<F> ResizeAmountTransform for F
where
    F: Fn(f64, f64, f64, f64) -> f64,
{
    fn transform(
        &self,
        resize_amount: f64,
        active_position: f64,
        handle_position: f64,
        total_size: f64,
    ) -> f64 {
        self(resize_amount, active_position, handle_position, total_size)
    }
}

/// Transforms available from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinTransform {
    /// Every handle moves by the raw drag amount.
    #[default]
    Identity,
    /// Handles move in proportion to their distance from the stack start,
    /// so the one under the pointer moves exactly with it.
    Proportional,
    /// Only handles at the pointer's position move.
    ActiveOnly,
}

impl ResizeAmountTransform for BuiltinTransform {
    fn transform(
        &self,
        resize_amount: f64,
        active_position: f64,
        handle_position: f64,
        _total_size: f64,
    ) -> f64 {
        match self {
            Self::Identity => resize_amount,
            Self::Proportional => {
                if active_position <= 0.0 {
                    resize_amount
                } else {
                    resize_amount * (handle_position / active_position)
                }
            }
            Self::ActiveOnly => {
                if handle_position == active_position {
                    resize_amount
                } else {
                    0.0
                }
            }
        }
    }
}
