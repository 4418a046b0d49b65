//! Run status state machine
//!
//! The run status only moves through `Transition`s computed from the
//! current status and the selected preset. Direct protocol writes are the
//! one documented bypass.

pub mod events;
pub mod machine;

pub use events::ControlEvent;
pub use machine::{RunStatus, Transition};
