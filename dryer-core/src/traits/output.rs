//! Actuator output traits

/// Trait for binary outputs (bed heater, fan1, stepper enable)
pub trait SwitchOutput {
    /// Turn the output on or off
    fn set_on(&mut self, on: bool);

    /// Check if the output is currently on
    fn is_on(&self) -> bool;
}

/// Trait for duty-cycle controlled outputs (fan2)
pub trait PwmOutput {
    /// Set the duty cycle, 0 = off, 255 = full
    fn set_duty(&mut self, duty: u8);

    /// Last duty cycle written
    fn duty(&self) -> u8;
}
