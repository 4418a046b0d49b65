//! Continuous-rotation stepper
//!
//! The auger stepper only ever turns at one speed in one direction. The
//! STEP line carries a fixed-frequency square wave from a PWM slice and
//! the active-low ENABLE line gates the driver. DIR is strapped once at
//! boot by the firmware.

use core::convert::Infallible;
use dryer_core::traits::SwitchOutput;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

pub struct ContinuousStepper<EN, STEP> {
    enable: EN,
    step: STEP,
    on: bool,
}

impl<EN, STEP> ContinuousStepper<EN, STEP>
where
    EN: OutputPin<Error = Infallible>,
    STEP: SetDutyCycle,
{
    /// Create a stepper output with the driver disabled
    pub fn new(enable: EN, step: STEP) -> Self {
        let mut stepper = Self {
            enable,
            step,
            on: true,
        };
        stepper.set_on(false);
        stepper
    }
}

impl<EN, STEP> SwitchOutput for ContinuousStepper<EN, STEP>
where
    EN: OutputPin<Error = Infallible>,
    STEP: SetDutyCycle,
{
    fn set_on(&mut self, on: bool) {
        let clock = if on {
            self.step.set_duty_cycle_percent(50)
        } else {
            self.step.set_duty_cycle_fully_off()
        };
        if clock.is_err() {
            return;
        }

        let result = if on {
            self.enable.set_low()
        } else {
            self.enable.set_high()
        };
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
        self.on = on;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
