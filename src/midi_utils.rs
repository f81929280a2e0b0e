/*
    Helper functions for MIDI-style value ranges and tempo calculations.
 */

use std::str::FromStr;

use bigdecimal::BigDecimal; // Floating point arithmetic is unsuitable for exact beat positions

pub const MAX_VELOCITY: u8 = 127;
pub const MIN_AMPLITUDE: f32 = 0.0;
pub const MAX_AMPLITUDE: f32 = 1.0;

pub fn is_valid_velocity(velocity: u8) -> bool {
    velocity <= MAX_VELOCITY
}

pub fn is_valid_amplitude(amplitude: f32) -> bool {
    amplitude.is_finite() && amplitude >= MIN_AMPLITUDE && amplitude <= MAX_AMPLITUDE
}

// Goes via the shortest decimal representation, so 0.1 stays 0.1 rather than its binary expansion
pub fn to_decimal(seconds: f64) -> Option<BigDecimal> {
    if !seconds.is_finite() {
        return None;
    }
    BigDecimal::from_str(&seconds.to_string()).ok()
}

pub fn seconds_to_beats(seconds: &BigDecimal, bpm: u32) -> BigDecimal {
    // E.g. 120 bpm is 2 beats per second
    seconds * BigDecimal::from(bpm) / BigDecimal::from(60)
}
