//! Resize execution for a single handle.
//!
//! [`Resize::execute`] takes one drag sample at one handle and distributes
//! it over the stack:
//!
//! 1. Locate the handle with the prefix-size table.
//! 2. Weight the raw drag with the resize's [`ResizeAmountTransform`].
//! 3. Resolve the mode's methods; outer boundaries always change the stack
//!    footprint on the side facing out of the stack.
//! 4. Prepend [`ResizeMethod::ChangeStackSize`] on any side whose flag
//!    allows consuming slack.
//! 5. Shrink the side the handle moves into, then grow the other side by
//!    exactly what was freed. When the growing side can only change the
//!    footprint, the shrink is first capped at the slack so nothing is
//!    freed that cannot be taken up.
//!
//! # Invariants
//!
//! 1. The total size of the stack changes only through `ChangeStackSize`,
//!    and by at most `space_to_expand_into` in either direction. All
//!    footprint steps of one resize draw on a single [`SlackBudget`].
//! 2. The result is the growth realised on the side the handle moves away
//!    from: `0 <= achieved <= |requested|`.
//! 3. Every element stays at or above its minimum.
//!
//! # Failure Modes
//!
//! Out-of-range handles and prefix tables of the wrong length are caller
//! bugs and are reported as [`ResizeError`]. Running out of room is not an
//! error: the reported growth is simply smaller than requested.

use std::fmt;

use panestack_core::{debug, debug_span};
use serde::{Deserialize, Serialize};

use crate::harness::ResizingHarness;
use crate::method::{ResizeMethod, SlackBudget, run_methods};
use crate::mode::{ResizeFlags, ResizerMode};
use crate::slice::OrderedSlice;
use crate::transform::{BuiltinTransform, ResizeAmountTransform};

/// Position of a resize handle in a stack of `n` elements.
///
/// `-1` is the leading boundary (before element 0), `i` in `0..n-1` sits
/// between elements `i` and `i + 1`, and `n - 1` is the trailing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandleIndex(isize);

impl HandleIndex {
    /// The boundary before the first element.
    pub const LEADING: Self = Self(-1);

    /// Wrap a raw handle index. Range is checked by [`validate`](Self::validate).
    #[inline]
    #[must_use]
    pub const fn new(raw: isize) -> Self {
        Self(raw)
    }

    /// The handle after element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` exceeds `isize::MAX`. Slices never hold that many
    /// elements, so such an index is a caller bug.
    #[inline]
    #[must_use]
    pub const fn after(index: usize) -> Self {
        assert!(index <= isize::MAX as usize, "element index exceeds isize::MAX");
        Self(index as isize)
    }

    /// The trailing boundary of a stack of `element_count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `element_count` exceeds `isize::MAX`.
    #[inline]
    #[must_use]
    pub const fn trailing(element_count: usize) -> Self {
        Self::after(element_count).offset(-1)
    }

    /// Raw index.
    #[inline]
    #[must_use]
    pub const fn get(self) -> isize {
        self.0
    }

    /// The handle `by` positions away.
    #[inline]
    #[must_use]
    pub const fn offset(self, by: isize) -> Self {
        Self(self.0.saturating_add(by))
    }

    /// Whether this is the boundary before the first element.
    #[inline]
    #[must_use]
    pub const fn is_leading(self) -> bool {
        self.0 == -1
    }

    /// Whether this is the boundary after the last of `element_count`
    /// elements. For an empty stack that is also the leading boundary.
    #[inline]
    #[must_use]
    pub const fn is_trailing(self, element_count: usize) -> bool {
        element_count <= isize::MAX as usize && self.0 == element_count as isize - 1
    }

    /// Check the handle lies in `[-1, element_count - 1]`.
    pub fn validate(self, element_count: usize) -> Result<(), ResizeError> {
        if self.0 < -1 || self.0 > element_count as isize - 1 {
            return Err(ResizeError::HandleOutOfRange {
                handle: self.0,
                element_count,
            });
        }
        Ok(())
    }

    /// Space before this handle, read from a prefix-size table. The leading
    /// boundary has no slot and sits at 0.
    fn position(self, prefix_sizes: &[f64]) -> f64 {
        usize::try_from(self.0)
            .ok()
            .and_then(|slot| prefix_sizes.get(slot))
            .copied()
            .unwrap_or(0.0)
    }
}

/// One drag sample addressed to one handle.
#[derive(Debug, Clone, Copy)]
pub struct ResizeRequest<'a> {
    /// Raw drag amount; positive moves the handle towards the end of the stack.
    pub resize_amount: f64,
    /// Slack outside the stack available to footprint changes.
    pub space_to_expand_into: f64,
    /// Handle being resized.
    pub handle: HandleIndex,
    /// Handle under the pointer.
    pub active_handle: HandleIndex,
    /// Prefix-size table of the stack (`n + 1` slots), current as of this call.
    pub prefix_sizes: &'a [f64],
    pub flags: ResizeFlags,
}

/// A configured resize: which handle (relative to the active one), how the
/// drag is weighted there, and which mode applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resize<X = BuiltinTransform> {
    /// Offset from the active handle to the handle this resize moves.
    pub index_offset: isize,
    pub transform: X,
    pub mode: ResizerMode,
}

impl<X: Default> Default for Resize<X> {
    fn default() -> Self {
        Self {
            index_offset: 0,
            transform: X::default(),
            mode: ResizerMode::Default,
        }
    }
}

impl<X> Resize<X> {
    #[must_use]
    pub const fn new(index_offset: isize, transform: X, mode: ResizerMode) -> Self {
        Self {
            index_offset,
            transform,
            mode,
        }
    }
}

impl Resize {
    /// The plain resize: the active handle, unweighted, in `mode`.
    #[must_use]
    pub const fn active(mode: ResizerMode) -> Self {
        Self::new(0, BuiltinTransform::Identity, mode)
    }
}

impl<X: ResizeAmountTransform> Resize<X> {
    /// Apply one drag sample at `request.handle`.
    ///
    /// Returns the growth realised on the side the handle moves away from,
    /// which is never negative: a drag towards the end reports how much the
    /// elements before the handle grew, a drag towards the start how much
    /// the elements after it grew.
    pub fn execute<T, H>(
        &self,
        elements: &mut [T],
        harness: &H,
        request: &ResizeRequest<'_>,
    ) -> Result<f64, ResizeError>
    where
        H: ResizingHarness<T> + ?Sized,
    {
        let element_count = elements.len();
        request.handle.validate(element_count)?;
        request.active_handle.validate(element_count)?;
        let prefix_sizes = request.prefix_sizes;
        if prefix_sizes.len() != element_count + 1 {
            return Err(ResizeError::PrefixTableLength {
                expected: element_count + 1,
                actual: prefix_sizes.len(),
            });
        }

        let Some((mut method_before, mut method_after)) = self.mode.resize_methods() else {
            return Ok(0.0);
        };

        let _span = debug_span!("resize", handle = request.handle.get()).entered();

        let total_size = prefix_sizes[element_count];
        let space_before = request.handle.position(prefix_sizes);
        let active_position = request.active_handle.position(prefix_sizes);
        let amount = self.transform.transform(
            request.resize_amount,
            active_position,
            space_before,
            total_size,
        );

        if request.handle.is_trailing(element_count) {
            method_after = ResizeMethod::ChangeStackSize;
        }
        if request.handle.is_leading() {
            method_before = ResizeMethod::ChangeStackSize;
        }

        let pipeline_before = Pipeline::new(
            request
                .flags
                .contains(ResizeFlags::CAN_CONSUME_SPACE_BEFORE_STACK),
            method_before,
        );
        let pipeline_after = Pipeline::new(
            request
                .flags
                .contains(ResizeFlags::CAN_CONSUME_SPACE_AFTER_STACK),
            method_after,
        );

        let split = (request.handle.get() + 1) as usize;
        let (items_before, items_after) = elements.split_at_mut(split);
        let mut before = OrderedSlice::backwards(items_before, request.handle.get());
        let mut after = OrderedSlice::forwards(items_after, 0);
        let mut slack = SlackBudget::new(request.space_to_expand_into);

        let achieved = if amount > 0.0 {
            let wanted = pipeline_before.bound_growth(amount, &slack);
            let shrunk = run_methods(
                pipeline_after.methods(),
                &mut after,
                harness,
                -wanted,
                &mut slack,
            );
            run_methods(
                pipeline_before.methods(),
                &mut before,
                harness,
                -shrunk,
                &mut slack,
            )
        } else if amount < 0.0 {
            let wanted = pipeline_after.bound_growth(-amount, &slack);
            let shrunk = run_methods(
                pipeline_before.methods(),
                &mut before,
                harness,
                -wanted,
                &mut slack,
            );
            run_methods(
                pipeline_after.methods(),
                &mut after,
                harness,
                -shrunk,
                &mut slack,
            )
        } else {
            0.0
        };

        debug!(
            requested = amount,
            achieved,
            space_before,
            footprint_change = slack.footprint_change(),
            ?method_before,
            ?method_after,
            "resize executed"
        );
        Ok(achieved)
    }
}

/// Up to two methods: an optional footprint change, then the side's method.
#[derive(Debug, Clone, Copy)]
struct Pipeline {
    methods: [ResizeMethod; 2],
    len: usize,
}

impl Pipeline {
    fn new(consume_slack: bool, method: ResizeMethod) -> Self {
        Self {
            methods: [ResizeMethod::ChangeStackSize, method],
            len: if consume_slack { 2 } else { 1 },
        }
    }

    fn methods(&self) -> &[ResizeMethod] {
        &self.methods[2 - self.len..]
    }

    /// How much of `wanted` this side can grow by. Elements can always
    /// grow; a side that only changes the footprint is held to the slack.
    fn bound_growth(&self, wanted: f64, slack: &SlackBudget) -> f64 {
        let footprint_only = self
            .methods()
            .iter()
            .all(|&method| method == ResizeMethod::ChangeStackSize);
        if footprint_only {
            wanted.min(slack.limit())
        } else {
            wanted
        }
    }
}

/// Errors from resize execution. All indicate caller bugs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeError {
    HandleOutOfRange { handle: isize, element_count: usize },
    PrefixTableLength { expected: usize, actual: usize },
    NegativeMinimum { index: usize, minimum: f64 },
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HandleOutOfRange {
                handle,
                element_count,
            } => write!(
                f,
                "handle {handle} outside [-1, {}] for a stack of {element_count}",
                *element_count as isize - 1
            ),
            Self::PrefixTableLength { expected, actual } => write!(
                f,
                "prefix-size table has {actual} slots, expected {expected}"
            ),
            Self::NegativeMinimum { index, minimum } => write!(
                f,
                "element {index} has invalid minimum size {minimum}"
            ),
        }
    }
}

impl std::error::Error for ResizeError {}
