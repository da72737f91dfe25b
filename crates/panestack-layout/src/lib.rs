#![forbid(unsafe_code)]

//! Resize distribution for linear stacks of panels.
//!
//! Dragging the handle between two panels changes their sizes. How that
//! change spreads through the rest of the stack is decided per handle:
//!
//! - [`ResizeMethod::SqueezeExpand`] changes only the neighbour.
//! - [`ResizeMethod::Cascade`] moves on to the next panel once the
//!   neighbour reaches its minimum.
//! - [`ResizeMethod::ChangeStackSize`] grows or shrinks the stack itself
//!   into the slack around it.
//!
//! The engine owns no panels. It reads and writes sizes through a
//! [`ResizingHarness`] and walks the stack outward from the handle through
//! an [`OrderedSlice`]. [`Resize::execute`] handles one sample at one
//! handle; [`StackResizer`] fans a sample out over synchronized handles.
//!
//! # Usage
//!
//! ```ignore
//! use panestack_layout::{HandleIndex, Panel, PanelHarness, StackConfig, StackResizer};
//!
//! let mut stack = vec![Panel::new(100.0, 20.0)?, Panel::new(100.0, 20.0)?];
//! let resizer = StackResizer::from_config(PanelHarness, StackConfig::default());
//! let moved = resizer.drag(&mut stack, HandleIndex::after(0), 30.0, 0.0)?;
//! assert_eq!(moved, 30.0);
//! ```

pub mod harness;
pub mod method;
pub mod mode;
pub mod resize;
pub mod slice;
pub mod stack;
pub mod transform;

pub use harness::{FnHarness, Panel, PanelError, PanelHarness, ResizingHarness, validate_minimums};
pub use method::{ResizeMethod, SlackBudget, run_methods};
pub use mode::{ModeError, ResizeFlags, ResizerMode, accessible_modes};
pub use resize::{HandleIndex, Resize, ResizeError, ResizeRequest};
pub use slice::{Order, OrderedSlice};
pub use stack::{StackConfig, StackResizer, prefix_sizes};
pub use transform::{BuiltinTransform, ResizeAmountTransform};
