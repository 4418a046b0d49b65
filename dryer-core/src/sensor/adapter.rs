//! Sensor adapter implementation

use crate::humidity::absolute_humidity;
use crate::traits::{HumiditySensor, SensorError, TemperatureSensor};

/// Readings used by one control tick
///
/// Each field is either a fresh value or the error from this tick's read.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSnapshot {
    pub bed_c: Result<f32, SensorError>,
    pub ambient_c: Result<f32, SensorError>,
    /// g/m³, from the most recent humidity poll
    pub abs_humidity: Result<f32, SensorError>,
}

/// Result of a successful humidity poll
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HumidityReading {
    pub relative_humidity: f32,
    pub temperature_c: f32,
    /// g/m³
    pub absolute_humidity: f32,
}

/// Most recent successful value of each reading
///
/// For display and telemetry only; never substituted for a failed read
/// in regulation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LastGood {
    pub bed_c: Option<f32>,
    pub ambient_c: Option<f32>,
    pub humidity: Option<HumidityReading>,
}

/// Adapter over the three sensors
pub struct SensorAdapter<B, A, H> {
    bed: B,
    ambient: A,
    humidity: H,
    last_good: LastGood,
    /// Outcome of the latest humidity poll
    humidity_status: Result<f32, SensorError>,
}

impl<B, A, H> SensorAdapter<B, A, H>
where
    B: TemperatureSensor,
    A: TemperatureSensor,
    H: HumiditySensor,
{
    pub fn new(bed: B, ambient: A, humidity: H) -> Self {
        Self {
            bed,
            ambient,
            humidity,
            last_good: LastGood::default(),
            humidity_status: Err(SensorError::NotReady),
        }
    }

    /// Read the bed thermistor
    pub fn read_bed(&mut self) -> Result<f32, SensorError> {
        let t = self.bed.read_celsius()?;
        self.last_good.bed_c = Some(t);
        Ok(t)
    }

    /// Read the chamber thermistor
    pub fn read_ambient(&mut self) -> Result<f32, SensorError> {
        let t = self.ambient.read_celsius()?;
        self.last_good.ambient_c = Some(t);
        Ok(t)
    }

    /// Poll the humidity sensor once
    ///
    /// A failure is returned and remembered until the next poll; it is
    /// not retried here.
    pub fn read_humidity_sensor(&mut self) -> Result<HumidityReading, SensorError> {
        let result = self.humidity.measure().map(|m| HumidityReading {
            relative_humidity: m.relative_humidity,
            temperature_c: m.temperature_c,
            absolute_humidity: absolute_humidity(m.relative_humidity, m.temperature_c),
        });

        self.humidity_status = result.map(|r| r.absolute_humidity);
        if let Ok(reading) = result {
            self.last_good.humidity = Some(reading);
        }
        result
    }

    /// Read both thermistors and combine with the latest humidity poll
    pub fn snapshot(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            bed_c: self.read_bed(),
            ambient_c: self.read_ambient(),
            abs_humidity: self.humidity_status,
        }
    }

    pub fn last_good(&self) -> &LastGood {
        &self.last_good
    }
}
