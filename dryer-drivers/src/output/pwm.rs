//! PWM fan output

use dryer_core::traits::PwmOutput;
use embedded_hal::pwm::SetDutyCycle;

/// Fan on a PWM channel, duty in 0-255
pub struct PwmFan<P> {
    pwm: P,
    duty: u8,
}

impl<P: SetDutyCycle> PwmFan<P> {
    /// Create a fan output, initially stopped
    pub fn new(pwm: P) -> Self {
        let mut fan = Self { pwm, duty: 0 };
        fan.set_duty(0);
        fan
    }
}

impl<P: SetDutyCycle> PwmOutput for PwmFan<P> {
    fn set_duty(&mut self, duty: u8) {
        // Duty is only recorded once the hardware accepted it
        if self
            .pwm
            .set_duty_cycle_fraction(duty as u16, u8::MAX as u16)
            .is_ok()
        {
            self.duty = duty;
        }
    }

    fn duty(&self) -> u8 {
        self.duty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::pwm::{ErrorKind, ErrorType};

    struct MockPwm {
        max: u16,
        value: u16,
    }

    impl ErrorType for MockPwm {
        type Error = ErrorKind;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), ErrorKind> {
            self.value = duty;
            Ok(())
        }
    }

    #[test]
    fn test_starts_stopped() {
        let fan = PwmFan::new(MockPwm { max: 1000, value: 500 });
        assert_eq!(fan.duty(), 0);
        assert_eq!(fan.pwm.value, 0);
    }

    #[test]
    fn test_scales_to_counter_top() {
        let mut fan = PwmFan::new(MockPwm { max: 1000, value: 0 });
        fan.set_duty(255);
        assert_eq!(fan.pwm.value, 1000);
        fan.set_duty(51);
        assert_eq!(fan.pwm.value, 200);
        assert_eq!(fan.duty(), 51);
    }
}
