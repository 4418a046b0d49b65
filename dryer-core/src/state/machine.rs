//! State machine definition
//!
//! Preset application is a function of the current run status and the
//! selected preset.

use crate::preset::{Preset, PresetDefinition};

/// Run status of the drying process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunStatus {
    /// Idle
    #[default]
    Stopped,
    /// Preset selected, run trigger asserted, waiting for the next control tick
    Armed,
    /// Actively drying
    Running,
}

/// Outcome of evaluating the selected preset against the run status
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Nothing to apply
    None,
    /// Load the preset setpoints and start running
    Start(PresetDefinition),
    /// Clear all targets and flags and stop
    Stop,
}

impl RunStatus {
    /// Wire name of the status
    pub const fn as_str(self) -> &'static str {
        match self {
            RunStatus::Stopped => "STOP",
            RunStatus::Armed => "RUN",
            RunStatus::Running => "RUNNING",
        }
    }

    /// Parse a wire name, exact match
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "STOP" => Some(RunStatus::Stopped),
            "RUN" => Some(RunStatus::Armed),
            "RUNNING" => Some(RunStatus::Running),
            _ => None,
        }
    }

    /// Check if the dry timer counts down in this status
    pub fn is_active(&self) -> bool {
        matches!(self, RunStatus::Running)
    }

    /// Evaluate the selected preset
    ///
    /// `Off` stops an armed or running process. A material preset starts
    /// only from `Armed`. `Manual` never applies anything.
    pub fn transition(self, preset: Preset) -> Transition {
        use RunStatus::*;

        match (self, preset) {
            (_, Preset::Manual) => Transition::None,
            (Armed | Running, Preset::Off) => Transition::Stop,
            (Stopped, Preset::Off) => Transition::None,
            (Armed, material) => match material.definition() {
                Some(def) => Transition::Start(*def),
                None => Transition::None,
            },
            _ => Transition::None,
        }
    }

    /// Status after applying a transition
    pub fn after(self, transition: &Transition) -> Self {
        match transition {
            Transition::None => self,
            Transition::Start(_) => RunStatus::Running,
            Transition::Stop => RunStatus::Stopped,
        }
    }
}
