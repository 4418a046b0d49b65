//! GPIO switched output
//!
//! Drives a heater MOSFET, fan MOSFET or driver enable line from a
//! single pin. The pin can be configured as active-high or active-low.

use core::convert::Infallible;
use dryer_core::traits::SwitchOutput;
use embedded_hal::digital::OutputPin;

pub struct GpioSwitch<P> {
    pin: P,
    /// If true, ON = pin LOW
    inverted: bool,
    on: bool,
}

impl<P: OutputPin<Error = Infallible>> GpioSwitch<P> {
    /// Create a switch and drive it off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut switch = Self {
            pin,
            inverted,
            on: false,
        };
        switch.set_on(false);
        switch
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin<Error = Infallible>> SwitchOutput for GpioSwitch<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }
    }

    #[test]
    fn test_active_high() {
        let mut out = GpioSwitch::new_active_high(MockPin { high: true });
        assert!(!out.is_on());
        assert!(!out.pin.high);

        out.set_on(true);
        assert!(out.is_on());
        assert!(out.pin.high);
    }

    #[test]
    fn test_active_low() {
        // Stepper enable on the A4988/TMC boards is active-low
        let mut out = GpioSwitch::new_active_low(MockPin { high: false });
        assert!(!out.is_on());
        assert!(out.pin.high);

        out.set_on(true);
        assert!(out.is_on());
        assert!(!out.pin.high);
    }
}
