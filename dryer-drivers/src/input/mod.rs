//! Input drivers

pub mod endstop;

pub use endstop::Endstop;
