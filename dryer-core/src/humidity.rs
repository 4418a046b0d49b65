//! Absolute humidity from relative humidity and temperature
//!
//! Uses the Magnus saturation vapour pressure approximation.

/// Saturation vapour pressure coefficient (hPa)
const MAGNUS_A_HPA: f32 = 6.112;
const MAGNUS_B: f32 = 17.67;
const MAGNUS_C_C: f32 = 243.5;
/// Water vapour gas constant factor (g·K/J scaled to hPa and percent)
const VAPOUR_FACTOR: f32 = 2.1674;
const ZERO_CELSIUS_K: f32 = 273.15;

/// Absolute humidity in g/m³
///
/// Total over `temp_c > -273.15`. Callers filter failed sensor readings
/// before calling.
pub fn absolute_humidity(rel_humidity_pct: f32, temp_c: f32) -> f32 {
    let saturation = MAGNUS_A_HPA * libm::expf(MAGNUS_B * temp_c / (temp_c + MAGNUS_C_C));
    saturation * rel_humidity_pct * VAPOUR_FACTOR / (ZERO_CELSIUS_K + temp_c)
}
