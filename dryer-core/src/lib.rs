//! Board-agnostic core logic for the filament dryer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (sensors, switched and PWM outputs, buttons)
//! - Process controller: run status, presets, hysteresis regulation
//! - Sensor adapter with last-known-good cache
//! - Actuator driver with idempotent output writes
//! - Endstop override debouncing
//! - Control loop cadence gates
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod config;
pub mod control;
pub mod humidity;
pub mod input;
pub mod preset;
pub mod scheduler;
pub mod sensor;
pub mod state;
pub mod traits;
