//! Sensor adapter
//!
//! Wraps the bed and chamber thermistors and the I2C humidity sensor,
//! keeps the last good value of each for telemetry, and assembles the
//! per-tick `SensorSnapshot`.

pub mod adapter;

pub use adapter::{HumidityReading, LastGood, SensorAdapter, SensorSnapshot};
