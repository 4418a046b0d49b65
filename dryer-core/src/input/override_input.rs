//! Endstop preset buttons

use super::debounce::Debouncer;
use crate::control::StateOverride;
use crate::preset::Preset;
use crate::traits::SwitchInput;

/// Fixed action bound to each button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverrideAction {
    /// X endstop
    RunPla,
    /// Y endstop
    RunPetg,
    /// Z endstop
    Stop,
}

impl OverrideAction {
    /// Field writes equivalent to this button
    ///
    /// All three assert the run trigger; `Stop` pairs it with the OFF preset
    /// so the next control tick clears the process.
    pub fn to_override(self) -> StateOverride {
        let preset = match self {
            OverrideAction::RunPla => Preset::Pla,
            OverrideAction::RunPetg => Preset::Petg,
            OverrideAction::Stop => Preset::Off,
        };
        StateOverride::arm(preset)
    }
}

/// The three override buttons
pub struct OverrideInput<I> {
    buttons: [(I, Debouncer, OverrideAction); 3],
}

impl<I: SwitchInput> OverrideInput<I> {
    pub fn new(pla: I, petg: I, stop: I, debounce_ms: u32) -> Self {
        Self {
            buttons: [
                (pla, Debouncer::new(debounce_ms), OverrideAction::RunPla),
                (petg, Debouncer::new(debounce_ms), OverrideAction::RunPetg),
                (stop, Debouncer::new(debounce_ms), OverrideAction::Stop),
            ],
        }
    }

    /// Sample all buttons once
    ///
    /// Every debouncer advances on each poll. When several clicks complete
    /// in the same poll, the last button wins, matching the order the field
    /// writes would have been applied.
    pub fn poll(&mut self, now_ms: u32) -> Option<OverrideAction> {
        let mut action = None;
        for (input, debouncer, bound) in self.buttons.iter_mut() {
            let active = input.is_active();
            if debouncer.update(active, now_ms) {
                action = Some(*bound);
            }
        }
        action
    }
}
