#![forbid(unsafe_code)]

//! Core: geometry, reading directions, and the logging facade.
//!
//! # Role in panestack
//! `panestack-core` holds the small primitives shared by the resize engine
//! and by any host layout layer: `f64` rectangles and sizes, the four
//! reading directions a stack can flow in, and the quarter-turn rotation
//! group used to re-orient hit zones when that direction changes.
//!
//! Logging goes through [`logging`]. With the `tracing` feature the macros
//! are the real `tracing` macros; without it they compile to nothing.

pub mod direction;
pub mod geometry;
pub mod logging;

pub use direction::{Direction, Orientation, Rotation};
pub use geometry::{Rect, Size};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, trace_span, warn};
