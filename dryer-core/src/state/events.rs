//! Events reported by the process controller

use crate::preset::Preset;

/// Notable outcomes of a controller operation
///
/// The firmware logs these; they carry no control authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlEvent {
    /// A material preset was loaded and the process started
    PresetApplied(Preset),
    /// The process was stopped and all targets cleared
    Stopped,
    /// The dry timer reached zero while running
    DryTimerExpired,
}

impl ControlEvent {
    /// Check if this event changed the run status
    pub fn is_transition(&self) -> bool {
        matches!(self, ControlEvent::PresetApplied(_) | ControlEvent::Stopped)
    }
}
