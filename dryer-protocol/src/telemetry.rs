//! Outbound telemetry and error reports

use crate::error::{EncodeError, ProtocolError};
use dryer_core::control::ProcessState;
use dryer_core::sensor::{LastGood, SensorSnapshot};
use serde::Serialize;

/// Buffer size that fits any outbound line
pub const MAX_OUTBOUND_LEN: usize = 384;

/// Once-per-second status line
///
/// Readings are the last good values, `0` before the first one.
/// `sensorFault` is set while any reading of the latest tick failed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub current_air_temp: f32,
    pub current_bed_temp: f32,
    pub current_abs_humidity: f32,
    pub sensor_fault: bool,
    pub status: &'static str,
    pub preset: &'static str,
    pub target_air_temp: f32,
    pub target_bed_temp: f32,
    pub dry_timer: u32,
    pub is_stepper_on: bool,
    #[serde(rename = "isFan1On")]
    pub is_fan1_on: bool,
    #[serde(rename = "isFan2On")]
    pub is_fan2_on: bool,
    pub is_heater_on: bool,
    pub debug: u8,
}

impl StatusReport {
    pub fn new(
        state: &ProcessState,
        snapshot: &SensorSnapshot,
        last_good: &LastGood,
        heater_on: bool,
    ) -> Self {
        Self {
            current_air_temp: last_good.ambient_c.unwrap_or(0.0),
            current_bed_temp: last_good.bed_c.unwrap_or(0.0),
            current_abs_humidity: last_good
                .humidity
                .map_or(0.0, |h| h.absolute_humidity),
            sensor_fault: snapshot.bed_c.is_err()
                || snapshot.ambient_c.is_err()
                || snapshot.abs_humidity.is_err(),
            status: state.status.as_str(),
            preset: state.preset.as_str(),
            target_air_temp: state.target_air_temp_c,
            target_bed_temp: state.target_bed_temp_c,
            dry_timer: state.dry_timer_s,
            is_stepper_on: state.stepper_enabled,
            is_fan1_on: state.fan1_enabled,
            is_fan2_on: state.fan2_enabled,
            is_heater_on: heater_on,
            debug: state.debug_level,
        }
    }
}

/// Rejection notice for one inbound line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error: &'static str,
}

impl From<ProtocolError> for ErrorReport {
    fn from(e: ProtocolError) -> Self {
        Self { error: e.kind() }
    }
}

/// Serialize `value` followed by `\n`
///
/// Returns the number of bytes written
fn encode_line<T: Serialize>(value: &T, buffer: &mut [u8]) -> Result<usize, EncodeError> {
    let len = serde_json_core::to_slice(value, buffer).map_err(|_| EncodeError::BufferTooSmall)?;
    let newline = buffer.get_mut(len).ok_or(EncodeError::BufferTooSmall)?;
    *newline = b'\n';
    Ok(len + 1)
}

/// Encode a status line
pub fn encode_status(report: &StatusReport, buffer: &mut [u8]) -> Result<usize, EncodeError> {
    encode_line(report, buffer)
}

/// Encode an error line
pub fn encode_error(error: ProtocolError, buffer: &mut [u8]) -> Result<usize, EncodeError> {
    encode_line(&ErrorReport::from(error), buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use dryer_core::preset::Preset;
    use dryer_core::sensor::HumidityReading;
    use dryer_core::state::RunStatus;
    use dryer_core::traits::SensorError;

    fn text(buffer: &[u8], len: usize) -> &str {
        core::str::from_utf8(&buffer[..len]).unwrap()
    }

    #[test]
    fn test_error_line() {
        let mut buffer = [0u8; 64];
        let len = encode_error(ValidationError::BedTempOutOfRange.into(), &mut buffer).unwrap();
        assert_eq!(text(&buffer, len), "{\"error\":\"bed_temp_out_of_range\"}\n");
    }

    #[test]
    fn test_status_line_keys() {
        let state = ProcessState {
            status: RunStatus::Running,
            preset: Preset::Petg,
            target_air_temp_c: 65.0,
            target_bed_temp_c: 110.0,
            stepper_enabled: true,
            fan2_enabled: true,
            dry_timer_s: 28800,
            ..Default::default()
        };
        let snapshot = SensorSnapshot {
            bed_c: Ok(100.0),
            ambient_c: Ok(50.0),
            abs_humidity: Ok(9.5),
        };
        let last_good = LastGood {
            bed_c: Some(100.0),
            ambient_c: Some(50.0),
            humidity: Some(HumidityReading {
                relative_humidity: 12.0,
                temperature_c: 50.0,
                absolute_humidity: 9.5,
            }),
        };

        let mut buffer = [0u8; MAX_OUTBOUND_LEN];
        let report = StatusReport::new(&state, &snapshot, &last_good, true);
        let len = encode_status(&report, &mut buffer).unwrap();
        let line = text(&buffer, len);

        assert!(line.ends_with('\n'));
        assert!(!line.contains("null"));
        assert!(line.contains("\"currentAbsHumidity\":9.5"));
        assert!(line.contains("\"sensorFault\":false"));
        assert!(line.contains("\"status\":\"RUNNING\""));
        assert!(line.contains("\"preset\":\"PET\""));
        assert!(line.contains("\"dryTimer\":28800"));
        assert!(line.contains("\"isFan1On\":false"));
        assert!(line.contains("\"isFan2On\":true"));
        assert!(line.contains("\"isHeaterOn\":true"));
        assert!(line.contains("\"debug\":0"));
    }

    #[test]
    fn test_failed_read_reports_cached_value() {
        let state = ProcessState::default();
        let snapshot = SensorSnapshot {
            bed_c: Err(SensorError::OpenCircuit),
            ambient_c: Ok(42.0),
            abs_humidity: Err(SensorError::CrcMismatch),
        };
        let last_good = LastGood {
            bed_c: Some(88.5),
            ambient_c: Some(42.0),
            humidity: Some(HumidityReading {
                relative_humidity: 20.0,
                temperature_c: 40.0,
                absolute_humidity: 10.25,
            }),
        };

        let report = StatusReport::new(&state, &snapshot, &last_good, false);
        assert_eq!(report.current_bed_temp, 88.5);
        assert_eq!(report.current_abs_humidity, 10.25);
        assert!(report.sensor_fault);

        let mut buffer = [0u8; MAX_OUTBOUND_LEN];
        let len = encode_status(&report, &mut buffer).unwrap();
        let line = text(&buffer, len);
        assert!(line.contains("\"currentBedTemp\":88.5"));
        assert!(line.contains("\"sensorFault\":true"));
    }

    #[test]
    fn test_never_read_reports_zero() {
        let snapshot = SensorSnapshot {
            bed_c: Err(SensorError::NotReady),
            ambient_c: Err(SensorError::NotReady),
            abs_humidity: Err(SensorError::NotReady),
        };
        let report = StatusReport::new(
            &ProcessState::default(),
            &snapshot,
            &LastGood::default(),
            false,
        );

        let mut buffer = [0u8; MAX_OUTBOUND_LEN];
        let len = encode_status(&report, &mut buffer).unwrap();
        let line = text(&buffer, len);
        assert!(!line.contains("null"));
        assert!(line.contains("\"currentAbsHumidity\":0"));
    }

    #[test]
    fn test_buffer_too_small() {
        let mut buffer = [0u8; 8];
        assert_eq!(
            encode_error(ValidationError::NotFinite.into(), &mut buffer),
            Err(EncodeError::BufferTooSmall)
        );

        // JSON fits exactly but the newline does not
        let mut buffer = [0u8; 22];
        assert_eq!(
            encode_error(ValidationError::NotFinite.into(), &mut buffer),
            Err(EncodeError::BufferTooSmall)
        );
    }
}
