//! Hardware abstraction traits
//!
//! These traits define the interface between the process controller
//! and hardware-specific implementations.

pub mod input;
pub mod output;
pub mod sensor;

pub use input::SwitchInput;
pub use output::{PwmOutput, SwitchOutput};
pub use sensor::{HumidityMeasurement, HumiditySensor, SensorError, TemperatureSensor};
