//! Driving a whole stack through one drag.
//!
//! [`StackResizer`] bundles a harness, the stack's [`ResizeFlags`], and the
//! set of [`Resize`]s one physical drag fans out to. Each resize targets the
//! handle at its offset from the one under the pointer. Between resizes the
//! prefix-size table is rebuilt and the remaining slack is reduced by any
//! footprint the earlier resizes consumed.

use panestack_core::debug;
use serde::{Deserialize, Serialize};

use crate::harness::{ResizingHarness, validate_minimums};
use crate::mode::{ResizeFlags, ResizerMode, accessible_modes};
use crate::resize::{HandleIndex, Resize, ResizeError, ResizeRequest};

/// Build the prefix-size table for `elements`.
///
/// Slot `k` holds the space before handle `k` (elements `0..=k`); the final
/// slot holds the stack's total size, so the table has `n + 1` slots.
pub fn prefix_sizes<T, H>(elements: &[T], harness: &H) -> Vec<f64>
where
    H: ResizingHarness<T> + ?Sized,
{
    let mut table = Vec::with_capacity(elements.len() + 1);
    let mut running = 0.0;
    for element in elements {
        running += harness.size(element);
        table.push(running);
    }
    table.push(running);
    table
}

fn total_size<T, H>(elements: &[T], harness: &H) -> f64
where
    H: ResizingHarness<T> + ?Sized,
{
    elements.iter().map(|element| harness.size(element)).sum()
}

/// Serializable description of how a stack responds to drags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub flags: ResizeFlags,
    /// Resizes each drag fans out to.
    pub resizes: Vec<Resize>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            flags: ResizeFlags::empty(),
            resizes: vec![Resize::default()],
        }
    }
}

/// Applies drags to a stack of elements sized through `H`.
#[derive(Debug, Clone)]
pub struct StackResizer<H> {
    harness: H,
    flags: ResizeFlags,
    resizes: Vec<Resize>,
}

impl<H> StackResizer<H> {
    /// A resizer with no resizes configured yet.
    pub fn new(harness: H, flags: ResizeFlags) -> Self {
        Self {
            harness,
            flags,
            resizes: Vec::new(),
        }
    }

    pub fn from_config(harness: H, config: StackConfig) -> Self {
        Self {
            harness,
            flags: config.flags,
            resizes: config.resizes,
        }
    }

    /// Add a resize to the fan-out.
    #[must_use]
    pub fn with_resize(mut self, resize: Resize) -> Self {
        self.resizes.push(resize);
        self
    }

    #[inline]
    pub const fn harness(&self) -> &H {
        &self.harness
    }

    #[inline]
    pub const fn flags(&self) -> ResizeFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: ResizeFlags) {
        self.flags = flags;
    }

    pub fn resizes(&self) -> &[Resize] {
        &self.resizes
    }

    /// Modes worth offering at `handle` under this resizer's flags.
    pub fn accessible_modes(
        &self,
        handle: HandleIndex,
        element_count: usize,
    ) -> impl Iterator<Item = ResizerMode> + use<H> {
        accessible_modes(handle, element_count, self.flags)
    }

    /// Apply one drag sample with the pointer on `active_handle`.
    ///
    /// Resizes whose target handle falls outside the stack are skipped.
    /// Returns what the active handle's own resize (offset 0) achieved, as
    /// reported by [`Resize::execute`], or 0 when no such resize is
    /// configured.
    pub fn drag<T>(
        &self,
        elements: &mut [T],
        active_handle: HandleIndex,
        resize_amount: f64,
        space_to_expand_into: f64,
    ) -> Result<f64, ResizeError>
    where
        H: ResizingHarness<T>,
    {
        let element_count = elements.len();
        validate_minimums(elements, &self.harness)?;
        active_handle.validate(element_count)?;

        let mut slack = space_to_expand_into;
        let mut active_achieved = 0.0;
        for resize in &self.resizes {
            let handle = active_handle.offset(resize.index_offset);
            if handle.validate(element_count).is_err() {
                debug!(
                    handle = handle.get(),
                    element_count, "synchronized handle outside stack, skipped"
                );
                continue;
            }

            let prefix = prefix_sizes(elements, &self.harness);
            let total_before = prefix[element_count];
            let request = ResizeRequest {
                resize_amount,
                space_to_expand_into: slack,
                handle,
                active_handle,
                prefix_sizes: &prefix,
                flags: self.flags,
            };
            let achieved = resize.execute(elements, &self.harness, &request)?;
            let grown = total_size(elements, &self.harness) - total_before;
            slack = (slack - grown).max(0.0);

            if resize.index_offset == 0 {
                active_achieved = achieved;
            }
        }
        Ok(active_achieved)
    }
}
