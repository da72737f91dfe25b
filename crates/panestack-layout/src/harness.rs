//! Size access for anything the engine resizes.
//!
//! The engine never owns the elements of a stack. It reads and writes sizes
//! through a [`ResizingHarness`], a stateless policy object shared by every
//! element of one stack. A harness must not clamp in `set_size`: after
//! `set_size(e, s)`, `size(e)` returns `s`. Keeping sizes above their
//! minimum is the engine's job, done in one place: [`ResizingHarness::try_resize`].

use std::fmt;

use crate::resize::ResizeError;

/// Read/write access to the size and minimum size of `T`.
pub trait ResizingHarness<T: ?Sized> {
    /// Smallest size `element` may take. Must be finite and `>= 0`.
    fn minimum_size(&self, element: &T) -> f64;

    /// Current size of `element`.
    fn size(&self, element: &T) -> f64;

    /// Overwrite the size of `element`.
    fn set_size(&self, element: &mut T, size: f64);

    /// Change the size of `element` by `delta` without clamping.
    ///
    /// Only for deltas already known to keep the element above its minimum.
    fn resize(&self, element: &mut T, delta: f64) {
        let size = self.size(element);
        self.set_size(element, size + delta);
    }

    /// Change the size of `element` by up to `delta`, stopping at its
    /// minimum. Returns the change actually applied.
    fn try_resize(&self, element: &mut T, delta: f64) -> f64 {
        let original = self.size(element);
        let minimum = self.minimum_size(element);
        let size = minimum.max(original + delta);
        debug_assert!(
            size >= 0.0,
            "resize produced negative size {size} (minimum {minimum})"
        );
        self.set_size(element, size);
        size - original
    }
}

impl<T: ?Sized, H: ResizingHarness<T> + ?Sized> ResizingHarness<T> for &H {
    fn minimum_size(&self, element: &T) -> f64 {
        (**self).minimum_size(element)
    }

    fn size(&self, element: &T) -> f64 {
        (**self).size(element)
    }

    fn set_size(&self, element: &mut T, size: f64) {
        (**self).set_size(element, size);
    }
}

/// Reject any element whose minimum size is negative or not finite.
///
/// Run once when a stack is set up (or a gesture starts); the engine relies
/// on it to guarantee clamped sizes are never negative.
pub fn validate_minimums<T, H>(elements: &[T], harness: &H) -> Result<(), ResizeError>
where
    H: ResizingHarness<T> + ?Sized,
{
    for (index, element) in elements.iter().enumerate() {
        let minimum = harness.minimum_size(element);
        if !minimum.is_finite() || minimum < 0.0 {
            return Err(ResizeError::NegativeMinimum { index, minimum });
        }
    }
    Ok(())
}

/// A plain resizable panel: a current size and a floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    size: f64,
    min_size: f64,
}

impl Panel {
    /// Create a panel, rejecting invalid minimums and sizes below them.
    pub fn new(size: f64, min_size: f64) -> Result<Self, PanelError> {
        if !min_size.is_finite() || min_size < 0.0 {
            return Err(PanelError::InvalidMinimum { min_size });
        }
        if !size.is_finite() {
            return Err(PanelError::NonFiniteSize { size });
        }
        if size < min_size {
            return Err(PanelError::BelowMinimum { size, min_size });
        }
        Ok(Self { size, min_size })
    }

    /// A panel with no minimum.
    pub fn flexible(size: f64) -> Result<Self, PanelError> {
        Self::new(size, 0.0)
    }

    /// Current size.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// Minimum size.
    #[inline]
    #[must_use]
    pub const fn min_size(&self) -> f64 {
        self.min_size
    }
}

/// Errors while constructing a [`Panel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelError {
    InvalidMinimum { min_size: f64 },
    NonFiniteSize { size: f64 },
    BelowMinimum { size: f64, min_size: f64 },
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMinimum { min_size } => {
                write!(f, "panel minimum size {min_size} must be finite and >= 0")
            }
            Self::NonFiniteSize { size } => write!(f, "panel size {size} is not finite"),
            Self::BelowMinimum { size, min_size } => {
                write!(f, "panel size {size} is below its minimum {min_size}")
            }
        }
    }
}

impl std::error::Error for PanelError {}

/// Harness for [`Panel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelHarness;

impl ResizingHarness<Panel> for PanelHarness {
    fn minimum_size(&self, element: &Panel) -> f64 {
        element.min_size
    }

    fn size(&self, element: &Panel) -> f64 {
        element.size
    }

    fn set_size(&self, element: &mut Panel, size: f64) {
        element.size = size;
    }
}

/// A harness assembled from three closures.
///
/// ```ignore
/// let harness = FnHarness::new(
///     |w: &Widget| w.min_height,
///     |w: &Widget| w.height,
///     |w: &mut Widget, h: f64| w.height = h,
/// );
/// ```
pub struct FnHarness<M, G, S> {
    minimum: M,
    get: G,
    set: S,
}

impl<M, G, S> FnHarness<M, G, S> {
    /// Bundle the three accessors.
    pub const fn new(minimum: M, get: G, set: S) -> Self {
        Self { minimum, get, set }
    }
}

impl<M, G, S> fmt::Debug for FnHarness<M, G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHarness").finish_non_exhaustive()
    }
}

impl<T, M, G, S> ResizingHarness<T> for FnHarness<M, G, S>
where
    M: Fn(&T) -> f64,
    G: Fn(&T) -> f64,
    S: Fn(&mut T, f64),
{
    fn minimum_size(&self, element: &T) -> f64 {
        (self.minimum)(element)
    }

    fn size(&self, element: &T) -> f64 {
        (self.get)(element)
    }

    fn set_size(&self, element: &mut T, size: f64) {
        (self.set)(element, size);
    }
}
