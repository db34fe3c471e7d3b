//! Core robot types and configuration.
//!
//! - [`commands`]: messages consumed by the motion task.
//! - [`config`]: hardware constants and the [`ChassisProfile`](config::ChassisProfile).
//! - [`gaits`]: the built-in gaits and their pose tables.
//! - [`joint`]: joint enumeration and the [`Pose`](joint::Pose) type.
//! - [`servo`]: the PWM bus seam and joint-to-channel mapping.
//! - [`state`]: per-joint angle, trim and bounds.
pub mod commands;
pub mod config;
pub mod gaits;
pub mod joint;
pub mod servo;
pub mod state;
