//! PCA9685 bring-up and the [`ServoBus`] binding of the `pwm_pca9685` driver.
//!
//! The chip powers up asleep: [`connect`] programs the 50 Hz servo frame, wakes the
//! oscillator and zeroes all 16 outputs before the engine gets hold of the driver.
use core::fmt::Debug;

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use fugit::HertzU32;
use log::{info, warn};
use micromath::F32Ext;
use pwm_pca9685::{Channel, Error, Pca9685};

use crate::robot::config::{OSCILLATOR_HZ, PCA_RESOLUTION, PWM_FREQUENCY};
use crate::robot::servo::ServoBus;

const PRESCALE_MIN: f32 = 3.0;
const OSCILLATOR_SETTLE_MS: u32 = 5;

static PWM_CHANNELS: [Channel; 16] = [
    Channel::C0,
    Channel::C1,
    Channel::C2,
    Channel::C3,
    Channel::C4,
    Channel::C5,
    Channel::C6,
    Channel::C7,
    Channel::C8,
    Channel::C9,
    Channel::C10,
    Channel::C11,
    Channel::C12,
    Channel::C13,
    Channel::C14,
    Channel::C15,
];

/// Sets the servo frame, enables the outputs and zeroes every channel.
pub async fn connect<I2C, E, D>(
    i2c: I2C,
    address: u8,
    delay: &mut D,
) -> Result<Pca9685<I2C>, Error<E>>
where
    I2C: I2c<Error = E>,
    E: Debug,
    D: DelayNs,
{
    let mut pwm = Pca9685::new(i2c, address)?;
    // prescale is only latched while the oscillator sleeps
    pwm.disable().await?;
    pwm.set_prescale(prescale_for(PWM_FREQUENCY)).await?;
    pwm.enable().await?;
    delay.delay_ms(OSCILLATOR_SETTLE_MS).await;

    for channel in PWM_CHANNELS {
        pwm.set_channel_on_off(channel, 0, 0).await?;
    }
    info!("PCA9685 at {address:#04x} running at {} Hz", PWM_FREQUENCY.raw());
    Ok(pwm)
}

/// Output `channel` of the chip, `None` above 15.
pub fn pwm_channel(channel: u8) -> Option<Channel> {
    PWM_CHANNELS.get(usize::from(channel)).copied()
}

impl<I2C, E> ServoBus for Pca9685<I2C>
where
    I2C: I2c<Error = E>,
    E: Debug,
{
    type Error = Error<E>;

    async fn set_pulse(&mut self, channel: u8, on: u16, off: u16) -> Result<(), Self::Error> {
        let Some(channel) = pwm_channel(channel) else {
            warn!("PCA9685 has no channel {channel}, write ignored");
            return Ok(());
        };
        self.set_channel_on_off(channel, on, off).await
    }
}

/// `round(25 MHz / 4096 / f) - 1`, limited to the 3..=255 the register accepts.
pub fn prescale_for(frequency: HertzU32) -> u8 {
    let prescale =
        (OSCILLATOR_HZ as f32 / PCA_RESOLUTION as f32 / frequency.raw() as f32).round() - 1.0;
    prescale.clamp(PRESCALE_MIN, 255.0) as u8
}
