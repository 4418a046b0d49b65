//! Physical override input
//!
//! Three endstop switches double as preset buttons. Each is debounced by
//! a polled state machine, so a held button never stalls the control loop.

pub mod debounce;
pub mod override_input;

pub use debounce::Debouncer;
pub use override_input::{OverrideAction, OverrideInput};
