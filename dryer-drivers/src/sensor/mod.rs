//! Sensor drivers

pub mod ntc;
pub mod shtc3;

pub use ntc::{AdcReader, NtcThermistor};
pub use shtc3::Shtc3;
