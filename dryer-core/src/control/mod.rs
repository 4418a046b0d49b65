//! Drying process control
//!
//! `ProcessController` owns the single `ProcessState`. Everything that
//! mutates the process goes through its operations: host overrides, button
//! actions, preset application, regulation and the dry timer.

pub mod controller;
pub mod process;
pub mod regulation;

pub use controller::{ActuatorCommand, ProcessController};
pub use process::{ProcessState, StateOverride};
