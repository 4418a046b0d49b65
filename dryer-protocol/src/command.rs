//! Inbound host commands
//!
//! A command is decoded and validated completely before anything is
//! written to the process, so a rejected message leaves it untouched.
//!
//! On/off keys accept JSON booleans or integers (nonzero is on), since
//! hosts send both.

use crate::error::{DecodeError, ProtocolError, ValidationError};
use crate::line::Line;
use dryer_core::config::TargetLimits;
use dryer_core::control::StateOverride;
use dryer_core::preset::Preset;
use dryer_core::state::RunStatus;
use serde::Deserialize;

/// Wire form of an inbound message
///
/// Unknown keys are ignored. On/off keys are read as integers; run the
/// line through `normalize_literals` first to accept `true`/`false`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostCommand<'a> {
    #[serde(borrow)]
    pub preset: Option<&'a str>,
    #[serde(borrow)]
    pub status: Option<&'a str>,
    pub dry_timer: Option<u32>,
    pub is_stepper_on: Option<i32>,
    #[serde(rename = "isFan1On")]
    pub is_fan1_on: Option<i32>,
    #[serde(rename = "isFan2On")]
    pub is_fan2_on: Option<i32>,
    pub target_air_temp: Option<f32>,
    pub target_bed_temp: Option<f32>,
    pub debug: Option<u8>,
}

impl<'a> HostCommand<'a> {
    /// Parse one line of JSON
    pub fn parse(line: &'a str) -> Result<Self, DecodeError> {
        serde_json_core::from_str::<HostCommand<'a>>(line)
            .map(|(cmd, _)| cmd)
            .map_err(|_| DecodeError::Malformed)
    }

    /// Resolve names and check bounds
    pub fn validate(&self, limits: &TargetLimits) -> Result<StateOverride, ProtocolError> {
        let preset = self
            .preset
            .map(|name| Preset::from_name(name).ok_or(DecodeError::UnknownPreset))
            .transpose()?;
        let status = self
            .status
            .map(|name| RunStatus::from_name(name).ok_or(DecodeError::UnknownStatus))
            .transpose()?;

        let target_air_temp_c = self
            .target_air_temp
            .map(|t| check_temp(t, limits.max_air_temp_c, ValidationError::AirTempOutOfRange))
            .transpose()?;
        let target_bed_temp_c = self
            .target_bed_temp
            .map(|t| check_temp(t, limits.max_bed_temp_c, ValidationError::BedTempOutOfRange))
            .transpose()?;

        if let Some(s) = self.dry_timer {
            if s > limits.max_dry_timer_s {
                return Err(ValidationError::DryTimerOutOfRange.into());
            }
        }

        Ok(StateOverride {
            status,
            preset,
            target_air_temp_c,
            target_bed_temp_c,
            stepper_enabled: self.is_stepper_on.map(|v| v != 0),
            fan1_enabled: self.is_fan1_on.map(|v| v != 0),
            fan2_enabled: self.is_fan2_on.map(|v| v != 0),
            dry_timer_s: self.dry_timer,
            debug_level: self.debug,
        })
    }
}

fn check_temp(t: f32, max: f32, out_of_range: ValidationError) -> Result<f32, ValidationError> {
    if !t.is_finite() {
        return Err(ValidationError::NotFinite);
    }
    if t < 0.0 || t > max {
        return Err(out_of_range);
    }
    Ok(t)
}

/// Rewrite bare `true`/`false` outside strings as `1`/`0`
pub fn normalize_literals(line: &str) -> Result<Line, DecodeError> {
    let mut out = Line::new();
    let mut rest = line;
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(tail) = rest.strip_prefix("true") {
            out.push('1').map_err(|_| DecodeError::Malformed)?;
            rest = tail;
            continue;
        } else if let Some(tail) = rest.strip_prefix("false") {
            out.push('0').map_err(|_| DecodeError::Malformed)?;
            rest = tail;
            continue;
        }
        out.push(c).map_err(|_| DecodeError::Malformed)?;
        rest = &rest[c.len_utf8()..];
    }
    Ok(out)
}

/// Decode and validate one line into field writes
pub fn decode_command(line: &str, limits: &TargetLimits) -> Result<StateOverride, ProtocolError> {
    let normalized = normalize_literals(line)?;
    HostCommand::parse(&normalized)?.validate(limits)
}
