//! Servo outputs on top of a PWM channel driver.
//!
//! [`ServoBus`] is the "set channel pulse" capability the engine writes through; the
//! PCA9685 driver implements it on real hardware. [`Servos`] maps servo connectors and
//! joints onto bus channels and converts angles to pulse ticks.
use core::fmt::Debug;

use super::config::CHANNEL_OFFSET;
use super::joint::{Joint, Pose};
use crate::motion::conversion::angle_to_ticks;

/// A 16-channel, 12-bit PWM output.
#[allow(async_fn_in_trait)]
pub trait ServoBus {
    type Error: Debug;

    /// Sets the on/off tick of one channel. Channels the driver does not have are ignored.
    async fn set_pulse(&mut self, channel: u8, on: u16, off: u16) -> Result<(), Self::Error>;
}

#[derive(Debug)]
pub struct Servos<B> {
    bus: B,
}

impl<B> Servos<B>
where
    B: ServoBus,
{
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Writes `angle` to servo connector `channel` (S1 is 1). No clamping, no trim.
    pub async fn write_channel(&mut self, channel: u8, angle: i16) -> Result<(), B::Error> {
        let ticks = angle_to_ticks(angle);
        self.bus
            .set_pulse(channel.saturating_add(CHANNEL_OFFSET), 0, ticks)
            .await
    }

    pub async fn write_joint(&mut self, joint: Joint, angle: i16) -> Result<(), B::Error> {
        self.write_channel(joint.channel(), angle).await
    }

    /// Commands all four joints as one frame, in joint order.
    pub async fn write_pose(&mut self, angles: &Pose) -> Result<(), B::Error> {
        for joint in Joint::ALL {
            self.write_joint(joint, angles[joint]).await?;
        }
        Ok(())
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn release(self) -> B {
        self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingBus;
    use embassy_futures::block_on;

    #[test]
    fn test_write_channel_applies_offset() {
        let mut servos = Servos::new(RecordingBus::new());
        block_on(servos.write_channel(1, 0)).unwrap();
        block_on(servos.write_channel(8, 180)).unwrap();

        assert_eq!(servos.bus().writes(), &[(8, 0, 122), (15, 0, 491)]);
    }

    #[test]
    fn test_write_pose_is_one_ordered_frame() {
        let mut servos = Servos::new(RecordingBus::new());
        block_on(servos.write_pose(&[90, 0, 180, 90])).unwrap();

        assert_eq!(
            servos.bus().writes(),
            &[(8, 0, 307), (9, 0, 122), (10, 0, 491), (11, 0, 307)]
        );
    }

    #[test]
    fn test_write_pose_stops_on_bus_error() {
        let mut servos = Servos::new(RecordingBus::failing_after(2));
        assert!(block_on(servos.write_pose(&[90; 4])).is_err());
        assert_eq!(servos.bus().writes().len(), 2);
    }
}
