//! Board wiring for the BTT SKR Pico
//!
//! | Function          | Pin    | Peripheral        |
//! |-------------------|--------|-------------------|
//! | Host serial TX/RX | 0 / 1  | UART0             |
//! | Bed thermistor    | 26     | ADC0 (TH0)        |
//! | Chamber thermistor| 27     | ADC1 (TH1)        |
//! | SHTC3 SDA / SCL   | 6 / 7  | I2C1              |
//! | Bed heater        | 21     | GPIO (HB)         |
//! | Exhaust fan       | 17     | GPIO (FAN1)       |
//! | Circulation fan   | 18     | PWM1 A (FAN2)     |
//! | Stepper STEP      | 14     | PWM7 A            |
//! | Stepper DIR / EN  | 13 / 15| GPIO, EN active-low |
//! | Endstops X / Y / Z| 4 / 3 / 25 | GPIO, pull-up |

use core::cell::RefCell;

use embassy_rp::adc::{self, Adc};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::{self, PwmOutput};
use embassy_time::Delay;

use dryer_core::actuator::ActuatorDriver;
use dryer_core::input::OverrideInput;
use dryer_core::sensor::SensorAdapter;
use dryer_drivers::input::Endstop;
use dryer_drivers::output::{ContinuousStepper, GpioSwitch, PwmFan};
use dryer_drivers::sensor::{AdcReader, NtcThermistor, Shtc3};

/// Fan PWM: 125 MHz / 5000 = 25 kHz
pub const FAN_PWM_TOP: u16 = 4999;

/// Stepper clock: 125 MHz / 125 / 625 = 1.6 kHz
pub const STEPPER_PWM_DIVIDER: u8 = 125;
pub const STEPPER_PWM_TOP: u16 = 624;

/// Shared blocking ADC
pub type SharedAdc = RefCell<Adc<'static, adc::Blocking>>;

/// One thermistor input on the shared ADC
pub struct AdcChannel {
    adc: &'static SharedAdc,
    channel: adc::Channel<'static>,
}

impl AdcChannel {
    pub fn new(adc: &'static SharedAdc, channel: adc::Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for AdcChannel {
    fn read(&mut self) -> Result<u16, ()> {
        let mut adc = self.adc.try_borrow_mut().map_err(|_| ())?;
        adc.blocking_read(&mut self.channel).map_err(|_| ())
    }
}

pub type Thermistor = NtcThermistor<AdcChannel>;
pub type HumidityChip = Shtc3<I2c<'static, I2C1, i2c::Blocking>, Delay>;
pub type Sensors = SensorAdapter<Thermistor, Thermistor, HumidityChip>;

pub type Heater = GpioSwitch<Output<'static>>;
pub type ExhaustFan = GpioSwitch<Output<'static>>;
pub type CirculationFan = PwmFan<PwmOutput<'static>>;
pub type Stepper = ContinuousStepper<Output<'static>, PwmOutput<'static>>;
pub type Actuators = ActuatorDriver<Heater, ExhaustFan, CirculationFan, Stepper>;

pub type Buttons = OverrideInput<Endstop<Input<'static>>>;

/// PWM slice config for the fan output
pub fn fan_pwm_config() -> pwm::Config {
    let mut cfg = pwm::Config::default();
    cfg.top = FAN_PWM_TOP;
    cfg.compare_a = 0;
    cfg
}

/// PWM slice config for the stepper clock, idle until enabled
pub fn stepper_pwm_config() -> pwm::Config {
    let mut cfg = pwm::Config::default();
    cfg.divider = STEPPER_PWM_DIVIDER.into();
    cfg.top = STEPPER_PWM_TOP;
    cfg.compare_a = 0;
    cfg
}
