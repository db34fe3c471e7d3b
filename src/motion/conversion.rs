//! Servo angle to PWM tick conversion.
//!
//! 0–180° maps linearly onto a 600–2400 µs pulse inside the 20 ms frame of a 50 Hz
//! PCA9685, expressed in its 4096-tick resolution.
use crate::robot::config::{
    PCA_PERIOD_US, PCA_RESOLUTION, SERVO_ANGLE_RANGE, SERVO_MAX_PULSE_US, SERVO_MIN_PULSE_US,
};

/// Off-tick for `angle` degrees. Integer math, truncating.
///
/// Angles outside 0–180 are converted as-is; only a negative pulse width is floored at
/// tick 0.
pub fn angle_to_ticks(angle: i16) -> u16 {
    let pulse_width_range = SERVO_MAX_PULSE_US - SERVO_MIN_PULSE_US;
    let pulse_us = i32::from(angle) * pulse_width_range / SERVO_ANGLE_RANGE + SERVO_MIN_PULSE_US;
    // e.g.: 90° -> 1500 µs -> 307 ticks
    let ticks = pulse_us * PCA_RESOLUTION / PCA_PERIOD_US;
    u16::try_from(ticks.max(0)).unwrap_or(u16::MAX)
}
