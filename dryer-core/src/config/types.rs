//! Configuration type definitions
//!
//! Defaults reproduce the behavior of the stock dryer: ±0.1°C bed deadband,
//! 2°C exhaust fan deadband, full-duty fan2 and the four loop cadences.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hysteresis regulation settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RegulationConfig {
    /// Bed heater deadband around the bed target (°C)
    pub bed_deadband_c: f32,
    /// Exhaust fan switches off this far below the air target (°C)
    pub fan_deadband_c: f32,
    /// Duty cycle applied to fan2 when enabled (0-255)
    pub fan2_duty: u8,
}

impl Default for RegulationConfig {
    fn default() -> Self {
        Self {
            bed_deadband_c: 0.1,
            fan_deadband_c: 2.0,
            fan2_duty: 255,
        }
    }
}

/// Bounds applied to values written by the host
///
/// Regulation itself never consults these; they guard the protocol boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TargetLimits {
    /// Highest accepted air target (°C)
    pub max_air_temp_c: f32,
    /// Highest accepted bed target (°C)
    pub max_bed_temp_c: f32,
    /// Longest accepted dry timer (seconds)
    pub max_dry_timer_s: u32,
}

impl Default for TargetLimits {
    fn default() -> Self {
        Self {
            max_air_temp_c: 90.0,
            max_bed_temp_c: 130.0,
            max_dry_timer_s: 72 * 3600,
        }
    }
}

/// Elapsed-time gates of the control loop (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CadenceConfig {
    /// Button polling and serial draining
    pub input_ms: u32,
    /// Preset application and hysteresis regulation
    pub control_ms: u32,
    /// Dry timer and telemetry
    pub second_ms: u32,
    /// Humidity sensor polling
    pub humidity_ms: u32,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            input_ms: 10,
            control_ms: 100,
            second_ms: 1000,
            humidity_ms: 30_000,
        }
    }
}

/// NTC thermistor divider and curve parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ThermistorConfig {
    /// Pull-up resistor value in ohms
    pub pullup_ohms: u32,
    /// Nominal resistance at `t0_c`
    pub r0_ohms: u32,
    /// Reference temperature for `r0_ohms` (°C)
    pub t0_c: f32,
    /// Beta coefficient (K)
    pub beta: f32,
    /// ADC full scale (4096 for 12-bit)
    pub adc_max: u16,
}

impl Default for ThermistorConfig {
    fn default() -> Self {
        Self {
            pullup_ohms: 4700,
            r0_ohms: 100_000,
            t0_c: 25.0,
            beta: 3950.0,
            adc_max: 4096,
        }
    }
}

/// Complete dryer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DryerConfig {
    pub regulation: RegulationConfig,
    pub limits: TargetLimits,
    pub cadence: CadenceConfig,
    pub thermistor: ThermistorConfig,
    /// Endstop buttons must hold a level this long to count (ms)
    pub debounce_ms: u32,
}

impl Default for DryerConfig {
    fn default() -> Self {
        Self {
            regulation: RegulationConfig::default(),
            limits: TargetLimits::default(),
            cadence: CadenceConfig::default(),
            thermistor: ThermistorConfig::default(),
            debounce_ms: 30,
        }
    }
}

impl DryerConfig {
    /// Check the configuration for values the control loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.cadence;
        if c.input_ms == 0 || c.control_ms == 0 || c.second_ms == 0 || c.humidity_ms == 0 {
            return Err(ConfigError::ZeroCadence);
        }
        if !(self.regulation.bed_deadband_c >= 0.0) || !(self.regulation.fan_deadband_c >= 0.0) {
            return Err(ConfigError::NegativeDeadband);
        }
        if !(self.limits.max_air_temp_c > 0.0) || !(self.limits.max_bed_temp_c > 0.0) {
            return Err(ConfigError::InvalidLimit);
        }
        let t = &self.thermistor;
        if t.pullup_ohms == 0 || t.r0_ohms == 0 || !(t.beta > 0.0) || t.adc_max < 64 {
            return Err(ConfigError::InvalidThermistor);
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A loop cadence of 0 ms
    ZeroCadence,
    /// Deadband below zero or NaN
    NegativeDeadband,
    /// Target limit not strictly positive
    InvalidLimit,
    /// Thermistor parameters cannot produce a curve
    InvalidThermistor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DryerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.debounce_ms, 30);
        assert_eq!(config.regulation.fan2_duty, 255);
        assert_eq!(config.cadence.humidity_ms, 30_000);
    }

    #[test]
    fn test_zero_cadence_rejected() {
        let mut config = DryerConfig::default();
        config.cadence.control_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroCadence));
    }

    #[test]
    fn test_nan_deadband_rejected() {
        let mut config = DryerConfig::default();
        config.regulation.bed_deadband_c = f32::NAN;
        assert_eq!(config.validate(), Err(ConfigError::NegativeDeadband));
    }

    #[test]
    fn test_bad_thermistor_rejected() {
        let mut config = DryerConfig::default();
        config.thermistor.beta = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidThermistor));
    }
}
