//! tabkit Tab Navigation State Machine
//!
//! Headless interaction core for an accessible tabs widget. Owns the
//! selected value, the keyboard-focused value (roving tabindex), the
//! orientation, and the selection-indicator geometry. Knows nothing about
//! the DOM; the binding layer talks to it through `TabEvent` dispatch and
//! plain read accessors.

mod descriptor;
mod error;
mod indicator;
mod machine;
mod order;

pub use descriptor::{Orientation, ParseOrientationError, Rect, TabDescriptor};
pub use error::MachineError;
pub use indicator::IndicatorTracker;
pub use machine::{MachineConfig, TabEvent, TabsMachine};
pub use order::NavigationOrder;

pub type Result<T> = std::result::Result<T, MachineError>;
