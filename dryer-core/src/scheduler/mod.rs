//! Control loop scheduling
//!
//! One cooperative loop drives every component. Each component runs on
//! its own elapsed-time gate.

pub mod cadence;

pub use cadence::{Cadence, Due, Interval};
