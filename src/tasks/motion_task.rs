//! Motion task for quadbot.
//!
//! Owns the [`GaitEngine`], and with it the PCA9685, so hardware writes from different
//! callers can never interleave. Commands queue up in [`MOTION_COMMANDS`]; the current
//! one can be interrupted through [`CANCEL`].
use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::{Channel, Receiver},
};
use embassy_time::Delay;
use esp_hal::{i2c::master::I2c, Async};
use log::{error, info};
use pwm_pca9685::Pca9685;

use crate::motion::gait_engine::GaitEngine;
use crate::motion::interpolator::CancelToken;
use crate::robot::commands::MotionCommand;
use crate::MOTIONCMD_CHANNEL_SIZE;

pub type RobotEngine = GaitEngine<Pca9685<I2c<'static, Async>>, Delay>;

pub static MOTION_COMMANDS: Channel<CriticalSectionRawMutex, MotionCommand, MOTIONCMD_CHANNEL_SIZE> =
    Channel::new();

/// Stops the command in progress at its next step; reset when the next command starts.
pub static CANCEL: CancelToken = CancelToken::new();

#[embassy_executor::task]
pub async fn motion_task(
    mut engine: RobotEngine,
    receiver: Receiver<'static, CriticalSectionRawMutex, MotionCommand, MOTIONCMD_CHANNEL_SIZE>,
) {
    info!("Starting motion task");
    loop {
        let cmd = receiver.receive().await;
        info!("[MOTION_TASK] received {cmd:?}");
        CANCEL.reset();
        if let Err(e) = engine.execute(cmd).await {
            error!("[MOTION_TASK] {e}");
        }
    }
}
