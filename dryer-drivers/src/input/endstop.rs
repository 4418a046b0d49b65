//! Endstop switch used as a button
//!
//! Mechanical endstops short the input to ground when pressed; the pin
//! needs a pull-up.

use dryer_core::traits::SwitchInput;
use embedded_hal::digital::InputPin;

pub struct Endstop<P> {
    pin: P,
}

impl<P: InputPin> Endstop<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> SwitchInput for Endstop<P> {
    /// Active-low; a read error counts as released
    fn is_active(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}
