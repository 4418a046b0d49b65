//! Actuator output drivers

pub mod gpio;
pub mod pwm;
pub mod stepper;

pub use gpio::GpioSwitch;
pub use pwm::PwmFan;
pub use stepper::ContinuousStepper;
