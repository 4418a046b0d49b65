//! Process controller
//!
//! Each control tick first evaluates the preset state machine, then runs
//! hysteresis regulation against the stored targets. Regulation does not
//! depend on the run status: with nonzero targets the outputs are held
//! while stopped too, which is how manual hold works.

use super::process::{ProcessState, StateOverride};
use super::regulation;
use crate::config::RegulationConfig;
use crate::sensor::SensorSnapshot;
use crate::state::{ControlEvent, Transition};

/// Output levels for the four actuators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorCommand {
    pub heater_on: bool,
    pub fan1_on: bool,
    /// 0-255
    pub fan2_duty: u8,
    pub stepper_on: bool,
}

/// Owner of the process state
pub struct ProcessController {
    state: ProcessState,
    config: RegulationConfig,
    /// Bed heater hysteresis state, not host-writable
    heater_on: bool,
}

impl ProcessController {
    /// Create a stopped controller with all targets at zero
    pub fn new(config: RegulationConfig) -> Self {
        Self {
            state: ProcessState::default(),
            config,
            heater_on: false,
        }
    }

    /// Current process state
    pub fn state(&self) -> &ProcessState {
        &self.state
    }

    /// Whether regulation currently calls for bed heat
    pub fn heater_on(&self) -> bool {
        self.heater_on
    }

    /// Write host or button fields verbatim
    ///
    /// No transition rules are checked here; the next `apply_preset` sees
    /// the new status and preset.
    pub fn apply_override(&mut self, ov: &StateOverride) {
        self.state.apply(ov);
    }

    /// Evaluate the preset state machine once
    pub fn apply_preset(&mut self) -> Option<ControlEvent> {
        let transition = self.state.status.transition(self.state.preset);
        let event = match transition {
            Transition::None => return None,
            Transition::Start(def) => {
                let s = &mut self.state;
                s.target_air_temp_c = def.target_air_temp_c;
                s.target_bed_temp_c = def.target_bed_temp_c;
                s.stepper_enabled = def.stepper_enabled;
                s.fan2_enabled = def.fan2_enabled;
                s.dry_timer_s = def.dry_duration_s;
                ControlEvent::PresetApplied(s.preset)
            }
            Transition::Stop => {
                let s = &mut self.state;
                s.target_air_temp_c = 0.0;
                s.target_bed_temp_c = 0.0;
                s.stepper_enabled = false;
                s.fan1_enabled = false;
                s.fan2_enabled = false;
                s.dry_timer_s = 0;
                ControlEvent::Stopped
            }
        };
        self.state.status = self.state.status.after(&transition);
        Some(event)
    }

    /// Run one hysteresis pass and return the resulting outputs
    ///
    /// A failed reading holds every decision that depends on it.
    pub fn regulate(&mut self, snapshot: &SensorSnapshot) -> ActuatorCommand {
        let target_air = self.state.target_air_temp_c;

        if let (Ok(bed), Ok(ambient)) = (snapshot.bed_c, snapshot.ambient_c) {
            self.heater_on = regulation::bed_heater(
                self.heater_on,
                bed,
                ambient,
                self.state.target_bed_temp_c,
                target_air,
                self.config.bed_deadband_c,
            );
        }

        if let Ok(ambient) = snapshot.ambient_c {
            self.state.fan1_enabled = regulation::exhaust_fan(
                self.state.fan1_enabled,
                ambient,
                target_air,
                self.config.fan_deadband_c,
            );
        }

        self.command()
    }

    /// One control tick: preset evaluation followed by regulation
    pub fn tick(&mut self, snapshot: &SensorSnapshot) -> (Option<ControlEvent>, ActuatorCommand) {
        let event = self.apply_preset();
        let command = self.regulate(snapshot);
        (event, command)
    }

    /// Outputs implied by the current state, without regulating
    pub fn command(&self) -> ActuatorCommand {
        ActuatorCommand {
            heater_on: self.heater_on,
            fan1_on: self.state.fan1_enabled,
            fan2_duty: if self.state.fan2_enabled {
                self.config.fan2_duty
            } else {
                0
            },
            stepper_on: self.state.stepper_enabled,
        }
    }

    /// Count down the dry timer by `seconds`
    ///
    /// Only counts while running and saturates at zero. Reaching zero is
    /// reported once; it does not stop the process.
    pub fn elapse_seconds(&mut self, seconds: u32) -> Option<ControlEvent> {
        if !self.state.status.is_active() || self.state.dry_timer_s == 0 {
            return None;
        }
        self.state.dry_timer_s = self.state.dry_timer_s.saturating_sub(seconds);
        (self.state.dry_timer_s == 0).then_some(ControlEvent::DryTimerExpired)
    }
}
