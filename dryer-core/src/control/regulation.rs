//! Hysteresis regulation
//!
//! Pure decisions: each function takes the current output state and
//! returns the next one. Inside the deadband the output holds.

/// Next bed heater state
///
/// On when the bed is below its band and the chamber is below its target.
/// Off when the chamber exceeds its target or the bed exceeds its band.
pub fn bed_heater(
    on: bool,
    bed_c: f32,
    ambient_c: f32,
    target_bed_c: f32,
    target_air_c: f32,
    deadband_c: f32,
) -> bool {
    if bed_c < target_bed_c - deadband_c && ambient_c < target_air_c {
        true
    } else if ambient_c > target_air_c || bed_c > target_bed_c + deadband_c {
        false
    } else {
        on
    }
}

/// Next exhaust fan state
///
/// On above the air target, off once the chamber drops `deadband_c` below it.
pub fn exhaust_fan(on: bool, ambient_c: f32, target_air_c: f32, deadband_c: f32) -> bool {
    if ambient_c > target_air_c {
        true
    } else if ambient_c < target_air_c - deadband_c {
        false
    } else {
        on
    }
}
