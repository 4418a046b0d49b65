//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in dryer-core for the dryer hardware:
//!
//! - Temperature sensors (NTC thermistor on an ADC channel)
//! - Humidity sensor (Sensirion SHTC3 over I2C)
//! - Binary outputs (bed heater, exhaust fan)
//! - PWM fan output
//! - Continuous-rotation stepper
//! - Endstop buttons

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod output;
pub mod sensor;
