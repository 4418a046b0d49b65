//! Temperature and humidity sensor traits

/// Errors that can occur while reading a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor disconnected (open circuit)
    OpenCircuit,
    /// Sensor shorted to ground
    ShortCircuit,
    /// Reading out of expected range
    OutOfRange,
    /// ADC conversion error
    ConversionError,
    /// I2C transaction failed (NACK, arbitration loss)
    Bus,
    /// Checksum of a received word did not match
    CrcMismatch,
    /// No measurement taken yet
    NotReady,
}

/// Trait for temperature sensors
///
/// Implementations handle the specific sensor type (NTC thermistor on an
/// ADC channel for the bed and chamber).
pub trait TemperatureSensor {
    /// Read the current temperature in degrees Celsius
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_celsius(&mut self) -> Result<f32, SensorError>;
}

/// One combined reading from a humidity/temperature sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HumidityMeasurement {
    /// Relative humidity in percent
    pub relative_humidity: f32,
    /// Sensor die temperature in degrees Celsius
    pub temperature_c: f32,
}

/// Trait for combined humidity/temperature sensors
pub trait HumiditySensor {
    /// Perform one measurement
    ///
    /// A failure is returned as-is; callers retry on their next poll.
    fn measure(&mut self) -> Result<HumidityMeasurement, SensorError>;
}
