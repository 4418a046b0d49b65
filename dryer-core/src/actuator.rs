//! Actuator driver
//!
//! Applies commands to the bed heater, both fans and the stepper enable.
//! Each setter only touches hardware when the value differs from the last
//! one written. There is no feedback from these lines, so a stuck output
//! cannot be detected here.

use crate::control::ActuatorCommand;
use crate::traits::{PwmOutput, SwitchOutput};

pub struct ActuatorDriver<H, F1, F2, S> {
    heater: H,
    fan1: F1,
    fan2: F2,
    stepper: S,
    /// Last commanded levels, `None` until first written
    last: LastCommanded,
}

#[derive(Default)]
struct LastCommanded {
    heater: Option<bool>,
    fan1: Option<bool>,
    fan2: Option<u8>,
    stepper: Option<bool>,
}

impl<H, F1, F2, S> ActuatorDriver<H, F1, F2, S>
where
    H: SwitchOutput,
    F1: SwitchOutput,
    F2: PwmOutput,
    S: SwitchOutput,
{
    pub fn new(heater: H, fan1: F1, fan2: F2, stepper: S) -> Self {
        Self {
            heater,
            fan1,
            fan2,
            stepper,
            last: LastCommanded::default(),
        }
    }

    pub fn set_bed_heater(&mut self, on: bool) {
        if self.last.heater != Some(on) {
            self.heater.set_on(on);
            self.last.heater = Some(on);
        }
    }

    pub fn set_fan1(&mut self, on: bool) {
        if self.last.fan1 != Some(on) {
            self.fan1.set_on(on);
            self.last.fan1 = Some(on);
        }
    }

    pub fn set_fan2(&mut self, duty: u8) {
        if self.last.fan2 != Some(duty) {
            self.fan2.set_duty(duty);
            self.last.fan2 = Some(duty);
        }
    }

    pub fn set_stepper(&mut self, on: bool) {
        if self.last.stepper != Some(on) {
            self.stepper.set_on(on);
            self.last.stepper = Some(on);
        }
    }

    /// Apply all four outputs
    pub fn apply(&mut self, cmd: &ActuatorCommand) {
        self.set_bed_heater(cmd.heater_on);
        self.set_fan1(cmd.fan1_on);
        self.set_fan2(cmd.fan2_duty);
        self.set_stepper(cmd.stepper_on);
    }

    /// Force every output off
    pub fn all_off(&mut self) {
        self.apply(&ActuatorCommand::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockSwitch {
        on: bool,
        writes: u32,
    }

    impl SwitchOutput for MockSwitch {
        fn set_on(&mut self, on: bool) {
            self.on = on;
            self.writes += 1;
        }

        fn is_on(&self) -> bool {
            self.on
        }
    }

    #[derive(Default)]
    struct MockPwm {
        duty: u8,
        writes: u32,
    }

    impl PwmOutput for MockPwm {
        fn set_duty(&mut self, duty: u8) {
            self.duty = duty;
            self.writes += 1;
        }

        fn duty(&self) -> u8 {
            self.duty
        }
    }

    type Driver = ActuatorDriver<MockSwitch, MockSwitch, MockPwm, MockSwitch>;

    fn driver() -> Driver {
        ActuatorDriver::new(
            MockSwitch::default(),
            MockSwitch::default(),
            MockPwm::default(),
            MockSwitch::default(),
        )
    }

    #[test]
    fn test_first_write_always_happens() {
        let mut d = driver();
        d.all_off();
        assert_eq!(d.heater.writes, 1);
        assert_eq!(d.fan1.writes, 1);
        assert_eq!(d.fan2.writes, 1);
        assert_eq!(d.stepper.writes, 1);
    }

    #[test]
    fn test_repeated_commands_are_idempotent() {
        let mut d = driver();
        let cmd = ActuatorCommand {
            heater_on: true,
            fan1_on: false,
            fan2_duty: 255,
            stepper_on: true,
        };
        d.apply(&cmd);
        d.apply(&cmd);
        d.apply(&cmd);

        assert!(d.heater.is_on());
        assert!(d.stepper.is_on());
        assert_eq!(d.fan2.duty(), 255);
        assert_eq!(d.heater.writes, 1);
        assert_eq!(d.fan2.writes, 1);
    }

    #[test]
    fn test_changes_are_written() {
        let mut d = driver();
        d.set_fan2(128);
        d.set_fan2(0);
        d.set_bed_heater(true);
        d.set_bed_heater(false);
        assert_eq!(d.fan2.duty(), 0);
        assert_eq!(d.fan2.writes, 2);
        assert!(!d.heater.is_on());
        assert_eq!(d.heater.writes, 2);
    }
}
