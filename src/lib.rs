//! Library root for the quadbot firmware.
//!
//! Re-exports the main modules: [`robot`] (servo state, chassis data, commands),
//! [`motion`] (angle conversion, pose interpolation and gait sequencing),
//! [`pca9685`] (the PWM driver the servos hang off) and [`sensors`].
//! With the `firmware` feature, [`tasks`] holds the embassy tasks spawned by the binary.
#![no_std]

pub mod error;
pub mod motion;
pub mod pca9685;
pub mod robot;
pub mod sensors;
#[cfg(feature = "firmware")]
pub mod tasks;

#[cfg(test)]
mod mock;

pub use error::Error;

pub const MOTIONCMD_CHANNEL_SIZE: usize = 4;
