//! NTC thermistor sensor
//!
//! 100K NTC on a pull-up divider, as used for the bed and chamber thermistors.
//! Temperature follows the beta equation:
//!
//! 1/T = 1/T0 + ln(R/R0) / B

use dryer_core::config::ThermistorConfig;
use dryer_core::traits::{SensorError, TemperatureSensor};

const KELVIN_OFFSET: f32 = 273.15;

/// Counts from either rail treated as a wiring fault
const RAIL_MARGIN: u16 = 10;

/// Plausible thermistor range (°C)
const MIN_TEMP_C: f32 = -40.0;
const MAX_TEMP_C: f32 = 300.0;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read raw ADC counts
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// NTC thermistor with beta-equation conversion
pub struct NtcThermistor<ADC> {
    adc: ADC,
    config: ThermistorConfig,
}

impl<ADC> NtcThermistor<ADC> {
    pub fn new(adc: ADC, config: ThermistorConfig) -> Self {
        Self { adc, config }
    }

    /// Convert ADC reading to resistance
    ///
    /// Circuit: VCC -- pullup -- ADC_PIN -- NTC -- GND
    /// R_ntc = R_pullup * adc / (adc_max - adc)
    pub fn adc_to_resistance(&self, adc_value: u16) -> Result<f32, SensorError> {
        let adc_max = self.config.adc_max;

        if adc_value >= adc_max.saturating_sub(RAIL_MARGIN) {
            return Err(SensorError::OpenCircuit);
        }
        if adc_value < RAIL_MARGIN {
            return Err(SensorError::ShortCircuit);
        }

        let numerator = self.config.pullup_ohms as f32 * adc_value as f32;
        let denominator = (adc_max - adc_value) as f32;
        Ok(numerator / denominator)
    }

    /// Temperature in °C for a thermistor resistance
    pub fn resistance_to_celsius(&self, resistance: f32) -> Result<f32, SensorError> {
        if !(resistance > 0.0) {
            return Err(SensorError::ConversionError);
        }

        let t0_k = self.config.t0_c + KELVIN_OFFSET;
        let inv_t = 1.0 / t0_k + libm::logf(resistance / self.config.r0_ohms as f32) / self.config.beta;
        let celsius = 1.0 / inv_t - KELVIN_OFFSET;

        if !celsius.is_finite() || celsius < MIN_TEMP_C || celsius > MAX_TEMP_C {
            return Err(SensorError::OutOfRange);
        }
        Ok(celsius)
    }
}

impl<ADC: AdcReader> TemperatureSensor for NtcThermistor<ADC> {
    fn read_celsius(&mut self) -> Result<f32, SensorError> {
        let adc_value = self.adc.read().map_err(|_| SensorError::ConversionError)?;
        let resistance = self.adc_to_resistance(adc_value)?;
        self.resistance_to_celsius(resistance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dummy ADC for testing (returns a fixed value)
    struct DummyAdc(Result<u16, ()>);

    impl AdcReader for DummyAdc {
        fn read(&mut self) -> Result<u16, ()> {
            self.0
        }
    }

    fn sensor(raw: u16) -> NtcThermistor<DummyAdc> {
        NtcThermistor::new(DummyAdc(Ok(raw)), ThermistorConfig::default())
    }

    #[test]
    fn test_reference_point() {
        let s = sensor(0);
        let t = s.resistance_to_celsius(100_000.0).unwrap();
        assert!((t - 25.0).abs() < 0.01);
    }

    #[test]
    fn test_hot_bed() {
        // 100K/3950 is about 6.98K at 100°C
        let s = sensor(0);
        let t = s.resistance_to_celsius(6_975.0).unwrap();
        assert!((t - 100.0).abs() < 1.0, "got {}", t);
    }

    #[test]
    fn test_read_through_divider() {
        // 4096 * 100K / (4.7K + 100K) ≈ 3912 counts at 25°C
        let mut s = sensor(3912);
        let t = s.read_celsius().unwrap();
        assert!((t - 25.0).abs() < 0.5, "got {}", t);
    }

    #[test]
    fn test_open_circuit() {
        let mut s = sensor(4095);
        assert_eq!(s.read_celsius(), Err(SensorError::OpenCircuit));
    }

    #[test]
    fn test_short_circuit() {
        let mut s = sensor(0);
        assert_eq!(s.read_celsius(), Err(SensorError::ShortCircuit));
    }

    #[test]
    fn test_adc_failure() {
        let mut s = NtcThermistor::new(DummyAdc(Err(())), ThermistorConfig::default());
        assert_eq!(s.read_celsius(), Err(SensorError::ConversionError));
    }

    #[test]
    fn test_higher_counts_are_colder() {
        let s = sensor(0);
        let warm = s.resistance_to_celsius(s.adc_to_resistance(2000).unwrap()).unwrap();
        let cold = s.resistance_to_celsius(s.adc_to_resistance(3500).unwrap()).unwrap();
        assert!(cold < warm);
    }
}
