//! Handle modes and the boundary policy.
//!
//! A handle's [`ResizerMode`] picks the [`ResizeMethod`] used on each side
//! of it. [`ResizerMode::is_accessible`] says which modes make sense at a
//! given position; it is advisory, for presentation layers deciding what to
//! offer, and is not enforced by execution.
//!
//! | Mode          | Before          | After           |
//! |---------------|-----------------|-----------------|
//! | `None`        | -               | -               |
//! | `ArrowBefore` | `SqueezeExpand` | `Cascade`       |
//! | `Default`     | `Cascade`       | `Cascade`       |
//! | `ArrowAfter`  | `Cascade`       | `SqueezeExpand` |

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::method::ResizeMethod;
use crate::resize::HandleIndex;

bitflags! {
    /// Which outer boundaries may change the stack's footprint.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ResizeFlags: u8 {
        /// The leading side may grow into / give back slack before the stack.
        const CAN_CONSUME_SPACE_BEFORE_STACK = 0b01;
        /// The trailing side may grow into / give back slack after the stack.
        const CAN_CONSUME_SPACE_AFTER_STACK  = 0b10;
    }
}

impl Default for ResizeFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Interaction mode of a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizerMode {
    /// Inert handle.
    None,
    /// Squeeze only the element before the handle.
    ArrowBefore,
    /// Cascade on both sides.
    #[default]
    Default,
    /// Squeeze only the element after the handle.
    ArrowAfter,
}

impl ResizerMode {
    /// Every selectable mode (all but `None`).
    pub const ALL: [Self; 3] = [Self::ArrowBefore, Self::Default, Self::ArrowAfter];

    /// Methods for the sides before and after the handle, or `None` when the
    /// handle is inert.
    #[must_use]
    pub const fn resize_methods(self) -> Option<(ResizeMethod, ResizeMethod)> {
        match self {
            Self::None => None,
            Self::ArrowBefore => Some((ResizeMethod::SqueezeExpand, ResizeMethod::Cascade)),
            Self::Default => Some((ResizeMethod::Cascade, ResizeMethod::Cascade)),
            Self::ArrowAfter => Some((ResizeMethod::Cascade, ResizeMethod::SqueezeExpand)),
        }
    }

    /// Whether this mode should be offered at `handle` in a stack of
    /// `element_count` elements.
    #[must_use]
    pub fn is_accessible(
        self,
        handle: HandleIndex,
        element_count: usize,
        flags: ResizeFlags,
    ) -> bool {
        let index = handle.get();
        let last = element_count as isize - 1;
        match self {
            Self::None => false,
            Self::Default => true,
            Self::ArrowBefore => index >= 1,
            Self::ArrowAfter => {
                index != last
                    && !(flags.contains(ResizeFlags::CAN_CONSUME_SPACE_AFTER_STACK)
                        && index == last - 1)
            }
        }
    }
}

/// The selectable modes accessible at `handle`.
pub fn accessible_modes(
    handle: HandleIndex,
    element_count: usize,
    flags: ResizeFlags,
) -> impl Iterator<Item = ResizerMode> {
    ResizerMode::ALL
        .into_iter()
        .filter(move |mode| mode.is_accessible(handle, element_count, flags))
}

impl TryFrom<u8> for ResizerMode {
    type Error = ModeError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::None),
            1 => Ok(Self::ArrowBefore),
            2 => Ok(Self::Default),
            3 => Ok(Self::ArrowAfter),
            other => Err(ModeError::Unknown(other)),
        }
    }
}

impl From<ResizerMode> for u8 {
    fn from(mode: ResizerMode) -> Self {
        match mode {
            ResizerMode::None => 0,
            ResizerMode::ArrowBefore => 1,
            ResizerMode::Default => 2,
            ResizerMode::ArrowAfter => 3,
        }
    }
}

/// Errors while decoding a [`ResizerMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeError {
    Unknown(u8),
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(raw) => write!(f, "unknown resizer mode {raw}"),
        }
    }
}

impl std::error::Error for ModeError {}
