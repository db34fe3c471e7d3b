//! Motion algorithms for quadbot.
//!
//! - [`conversion`] maps joint angles to PCA9685 pulse ticks.
//! - [`interpolator`] drives the joints to a pose one degree at a time, in lock-step.
//! - [`gait_engine`] replays pose sequences and exposes the robot's motion surface.
//!
//! Used by the motion task, which owns the single [`GaitEngine`](gait_engine::GaitEngine).
pub mod conversion;
pub mod gait_engine;
pub mod interpolator;
