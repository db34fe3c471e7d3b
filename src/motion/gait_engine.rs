//! Gait sequencing and the robot's motion surface.
//!
//! Looks up gait tables from the [`ChassisProfile`], applies the gait offset to the
//! stride gaits and settles every pose through the interpolator. Trim, angle limits
//! and direct servo writes go through here too.
//!
//! Held by the motion task, which feeds it one [`MotionCommand`] at a time.
use embedded_hal_async::delay::DelayNs;
use log::{debug, info, warn};

use super::interpolator::{settle, CancelToken};
use crate::error::Error;
use crate::robot::commands::MotionCommand;
use crate::robot::config::{ChassisProfile, SERVO_CHANNEL_COUNT};
use crate::robot::gaits::Gait;
use crate::robot::joint::{Pose, JOINT_COUNT};
use crate::robot::servo::{ServoBus, Servos};
use crate::robot::state::ServoState;

/// Sequencer that replays gaits pose by pose through the interpolator.
///
/// The engine owns the servo outputs, the delay source and the [`ServoState`], so a
/// single instance is the only writer to the PWM driver. Every motion call runs to
/// completion (or to cancellation) before returning; walking continuously means
/// calling [`GaitEngine::walk`] in a loop.
pub struct GaitEngine<B, D> {
    servos: Servos<B>,
    delay: D,
    state: ServoState,
    profile: ChassisProfile,
    gait_offset: Pose, // added to stride poses at lookup
    cancel: Option<&'static CancelToken>,
}

impl<B, D> GaitEngine<B, D>
where
    B: ServoBus,
    D: DelayNs,
{
    pub fn new(servos: Servos<B>, delay: D, profile: ChassisProfile) -> Self {
        Self {
            servos,
            delay,
            state: ServoState::new(&profile),
            profile,
            gait_offset: [0; JOINT_COUNT],
            cancel: None,
        }
    }

    pub fn with_cancel_token(mut self, token: &'static CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn state(&self) -> &ServoState {
        &self.state
    }

    pub fn profile(&self) -> &ChassisProfile {
        &self.profile
    }

    pub fn servos(&self) -> &Servos<B> {
        &self.servos
    }

    /// Sets servo connector `channel` (1..=8) straight to `degree`, bypassing bounds,
    /// trim and interpolation. Other connectors are ignored.
    pub async fn servo(&mut self, channel: u8, degree: i16) -> Result<(), Error<B::Error>> {
        if !(1..=SERVO_CHANNEL_COUNT).contains(&channel) {
            warn!("[GAIT] no servo connector S{channel}, ignored");
            return Ok(());
        }
        self.servos
            .write_channel(channel, degree)
            .await
            .map_err(Error::Bus)
    }

    /// Stores the trim and immediately re-writes the current pose with it applied.
    pub async fn calibrate_trim(&mut self, trim: Pose) -> Result<(), Error<B::Error>> {
        info!("[GAIT] trim {trim:?}");
        self.state.set_trim(trim);
        self.servos
            .write_pose(&self.state.output())
            .await
            .map_err(Error::Bus)
    }

    pub fn set_min_angles(&mut self, min: Pose) {
        info!("[GAIT] min angles {min:?}");
        self.state.set_min(min);
    }

    pub fn set_max_angles(&mut self, max: Pose) {
        info!("[GAIT] max angles {max:?}");
        self.state.set_max(max);
    }

    /// Per-joint offset added to the forward and backward poses when they are looked
    /// up. Replaces any previous offset; the gait tables are left untouched.
    pub fn set_gait_offset(&mut self, offset: Pose) {
        info!("[GAIT] stride offset {offset:?}");
        self.gait_offset = offset;
    }

    /// Pose `index` of `gait` as it will be played, stride offset included.
    pub fn gait_pose(&self, gait: Gait, index: usize) -> Option<Pose> {
        let pose = self.profile.gaits.poses(gait).get(index)?;
        Some(offset_pose(pose, &self.stride_offset(gait)))
    }

    fn stride_offset(&self, gait: Gait) -> Pose {
        if gait.is_stride() {
            self.gait_offset
        } else {
            [0; JOINT_COUNT]
        }
    }

    pub async fn settle(&mut self, target: Pose, delay_ms: i32) -> Result<u32, Error<B::Error>> {
        settle(
            &mut self.state,
            &mut self.servos,
            &mut self.delay,
            target,
            delay_ms,
            self.cancel,
        )
        .await
    }

    /// Settles each pose in order, each with `delay_ms` between steps. Returns the
    /// total number of interpolation steps.
    pub async fn run_gait<I>(&mut self, poses: I, delay_ms: i32) -> Result<u32, Error<B::Error>>
    where
        I: IntoIterator<Item = Pose>,
    {
        let mut steps = 0;
        for (index, pose) in poses.into_iter().enumerate() {
            let n = self.settle(pose, delay_ms).await?;
            debug!("[GAIT] pose {index} {pose:?} settled in {n} steps");
            steps += n;
        }
        Ok(steps)
    }

    pub async fn walk(&mut self, gait: Gait, delay_ms: i32) -> Result<u32, Error<B::Error>> {
        let poses = self.profile.gaits.poses(gait);
        let offset = self.stride_offset(gait);
        info!("[GAIT] {gait} ({} poses, delay {delay_ms} ms)", poses.len());
        self.run_gait(poses.iter().map(move |pose| offset_pose(pose, &offset)), delay_ms)
            .await
    }

    pub async fn run_custom_gait(
        &mut self,
        poses: &[Pose],
        delay_ms: i32,
    ) -> Result<u32, Error<B::Error>> {
        info!("[GAIT] custom ({} poses, delay {delay_ms} ms)", poses.len());
        self.run_gait(poses.iter().copied(), delay_ms).await
    }

    pub async fn execute(&mut self, cmd: MotionCommand) -> Result<(), Error<B::Error>> {
        match cmd {
            MotionCommand::Servo { channel, degree } => self.servo(channel, degree).await,
            MotionCommand::CalibrateTrim(trim) => self.calibrate_trim(trim).await,
            MotionCommand::SetMinAngles(min) => {
                self.set_min_angles(min);
                Ok(())
            }
            MotionCommand::SetMaxAngles(max) => {
                self.set_max_angles(max);
                Ok(())
            }
            MotionCommand::SetGaitOffset(offset) => {
                self.set_gait_offset(offset);
                Ok(())
            }
            MotionCommand::Walk { gait, delay_ms } => self.walk(gait, delay_ms).await.map(drop),
            MotionCommand::Custom { poses, delay_ms } => {
                self.run_custom_gait(&poses, delay_ms).await.map(drop)
            }
        }
    }
}

fn offset_pose(pose: &Pose, offset: &Pose) -> Pose {
    core::array::from_fn(|i| pose[i].saturating_add(offset[i]))
}
