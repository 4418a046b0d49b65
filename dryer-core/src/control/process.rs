//! Process state and field overrides

use crate::preset::Preset;
use crate::state::RunStatus;

/// Complete state of the drying process
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProcessState {
    pub status: RunStatus,
    pub preset: Preset,
    /// Chamber air target (°C)
    pub target_air_temp_c: f32,
    /// Bed target (°C)
    pub target_bed_temp_c: f32,
    pub stepper_enabled: bool,
    /// Exhaust fan state, written by host and by regulation
    pub fan1_enabled: bool,
    pub fan2_enabled: bool,
    /// Remaining drying time (seconds)
    pub dry_timer_s: u32,
    /// Diagnostic verbosity, no effect on control
    pub debug_level: u8,
}

/// A set of direct field writes
///
/// `None` leaves the field untouched. Produced by the protocol decoder and
/// by the endstop buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateOverride {
    pub status: Option<RunStatus>,
    pub preset: Option<Preset>,
    pub target_air_temp_c: Option<f32>,
    pub target_bed_temp_c: Option<f32>,
    pub stepper_enabled: Option<bool>,
    pub fan1_enabled: Option<bool>,
    pub fan2_enabled: Option<bool>,
    pub dry_timer_s: Option<u32>,
    pub debug_level: Option<u8>,
}

impl StateOverride {
    /// Select a preset and assert the run trigger
    pub fn arm(preset: Preset) -> Self {
        Self {
            preset: Some(preset),
            status: Some(RunStatus::Armed),
            ..Default::default()
        }
    }

    /// Check if no field is written
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ProcessState {
    /// Write every present field verbatim
    pub fn apply(&mut self, ov: &StateOverride) {
        if let Some(status) = ov.status {
            self.status = status;
        }
        if let Some(preset) = ov.preset {
            self.preset = preset;
        }
        if let Some(t) = ov.target_air_temp_c {
            self.target_air_temp_c = t;
        }
        if let Some(t) = ov.target_bed_temp_c {
            self.target_bed_temp_c = t;
        }
        if let Some(on) = ov.stepper_enabled {
            self.stepper_enabled = on;
        }
        if let Some(on) = ov.fan1_enabled {
            self.fan1_enabled = on;
        }
        if let Some(on) = ov.fan2_enabled {
            self.fan2_enabled = on;
        }
        if let Some(s) = ov.dry_timer_s {
            self.dry_timer_s = s;
        }
        if let Some(level) = ov.debug_level {
            self.debug_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_override_changes_nothing() {
        let mut state = ProcessState {
            target_air_temp_c: 42.0,
            fan2_enabled: true,
            ..Default::default()
        };
        let before = state;
        state.apply(&StateOverride::default());
        assert_eq!(state, before);
        assert!(StateOverride::default().is_empty());
    }

    #[test]
    fn test_single_field_override() {
        let mut state = ProcessState {
            target_air_temp_c: 42.0,
            dry_timer_s: 100,
            ..Default::default()
        };
        state.apply(&StateOverride {
            target_bed_temp_c: Some(75.0),
            ..Default::default()
        });
        assert_eq!(state.target_bed_temp_c, 75.0);
        assert_eq!(state.target_air_temp_c, 42.0);
        assert_eq!(state.dry_timer_s, 100);
    }

    #[test]
    fn test_arm() {
        let ov = StateOverride::arm(Preset::Petg);
        assert_eq!(ov.preset, Some(Preset::Petg));
        assert_eq!(ov.status, Some(RunStatus::Armed));
        assert!(ov.target_air_temp_c.is_none());
    }
}
