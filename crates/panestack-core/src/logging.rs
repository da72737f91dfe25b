//! Feature-gated logging facade.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros. Without it, the crate root exports no-op macros with the same
//! names so call sites never need their own `cfg` attributes.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, trace, trace_span, warn};

#[cfg(not(feature = "tracing"))]
mod noop {
    /// No-op stand-in for `tracing::trace!`.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op stand-in for `tracing::debug!`.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op stand-in for `tracing::info!`.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op stand-in for `tracing::warn!`.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// No-op stand-in for `tracing::error!`.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    /// No-op stand-in for `tracing::debug_span!`; yields a unit guard.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// No-op stand-in for `tracing::trace_span!`; yields a unit guard.
    #[macro_export]
    macro_rules! trace_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Span placeholder used when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Matches `tracing::Span::entered` so call sites read the same.
    #[inline]
    #[must_use]
    pub const fn entered(self) -> Self {
        self
    }
}
