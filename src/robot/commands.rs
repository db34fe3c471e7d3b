//! Command types for inter-task communication.
//!
//! [`MotionCommand`] is what the motion task receives; one variant per operation the
//! engine exposes. Custom gaits are built from loose angle slices through
//! [`MotionCommand::custom`], which rejects malformed poses.
use heapless::Vec;

use super::config::MAX_CUSTOM_POSES;
use super::gaits::Gait;
use super::joint::{Pose, JOINT_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MotionCommand {
    Servo { channel: u8, degree: i16 },
    CalibrateTrim(Pose),
    SetMinAngles(Pose),
    SetMaxAngles(Pose),
    SetGaitOffset(Pose),
    Walk { gait: Gait, delay_ms: i32 },
    Custom {
        poses: Vec<Pose, MAX_CUSTOM_POSES>,
        delay_ms: i32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Pose `index` does not hold exactly one angle per joint.
    InvalidPose { index: usize, len: usize },
    TooManyPoses { len: usize },
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommandError::InvalidPose { index, len } => {
                write!(f, "pose {index} has {len} angles, expected {JOINT_COUNT}")
            }
            CommandError::TooManyPoses { len } => {
                write!(f, "{len} poses exceed the limit of {MAX_CUSTOM_POSES}")
            }
        }
    }
}

impl MotionCommand {
    pub fn custom(poses: &[&[i16]], delay_ms: i32) -> Result<Self, CommandError> {
        if poses.len() > MAX_CUSTOM_POSES {
            return Err(CommandError::TooManyPoses { len: poses.len() });
        }
        let mut sequence = Vec::new();
        for (index, angles) in poses.iter().enumerate() {
            let pose = Pose::try_from(*angles).map_err(|_| CommandError::InvalidPose {
                index,
                len: angles.len(),
            })?;
            // length checked above
            let _ = sequence.push(pose);
        }
        Ok(MotionCommand::Custom {
            poses: sequence,
            delay_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_collects_poses_in_order() {
        let cmd = MotionCommand::custom(&[&[90, 90, 90, 90], &[100, 80, 70, 60]], 5).unwrap();
        match cmd {
            MotionCommand::Custom { poses, delay_ms } => {
                assert_eq!(poses.as_slice(), &[[90, 90, 90, 90], [100, 80, 70, 60]]);
                assert_eq!(delay_ms, 5);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_custom_rejects_short_pose() {
        let result = MotionCommand::custom(&[&[90, 90, 90, 90], &[90, 90]], 0);
        assert_eq!(result, Err(CommandError::InvalidPose { index: 1, len: 2 }));
    }

    #[test]
    fn test_custom_rejects_too_many_poses() {
        let pose: &[i16] = &[90, 90, 90, 90];
        let poses = [pose; MAX_CUSTOM_POSES + 1];
        let result = MotionCommand::custom(&poses, 0);
        assert_eq!(
            result,
            Err(CommandError::TooManyPoses {
                len: MAX_CUSTOM_POSES + 1
            })
        );
    }

    #[test]
    fn test_custom_accepts_empty_sequence() {
        let cmd = MotionCommand::custom(&[], 0).unwrap();
        assert_eq!(
            cmd,
            MotionCommand::Custom {
                poses: Vec::new(),
                delay_ms: 0
            }
        );
    }
}
