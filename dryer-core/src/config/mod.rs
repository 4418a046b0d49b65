//! Configuration types
//!
//! Board-agnostic tunables for regulation, protocol bounds, loop cadence
//! and the thermistor curve. The firmware fills these in at build time.

pub mod types;

pub use types::*;
