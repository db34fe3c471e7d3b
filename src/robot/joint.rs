//! Joint enumeration, pose type and indexing helpers.
//!
//! Defines the [`Joint`] enum for the four servos of the chassis (two legs, two feet),
//! the [`Pose`] alias holding one angle per joint, and display formatting for logging.
use core::fmt::Display;
use core::ops::{Index, IndexMut};

use super::config::CHANNEL_OFFSET;

pub const JOINT_COUNT: usize = 4;

/// One target angle in degrees per joint, indexed by [`Joint`].
pub type Pose = [i16; JOINT_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joint {
    LeftLeg = 0,
    RightLeg = 1,
    LeftFoot = 2,
    RightFoot = 3,
}

impl Joint {
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::LeftLeg,
        Joint::RightLeg,
        Joint::LeftFoot,
        Joint::RightFoot,
    ];

    /// Servo connector (S1..S4) the joint is plugged into.
    pub const fn channel(self) -> u8 {
        self as u8 + 1
    }

    /// PCA9685 output driving this joint.
    pub const fn hardware_channel(self) -> u8 {
        self.channel() + CHANNEL_OFFSET
    }
}

impl Display for Joint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Joint::LeftLeg => f.write_str("left leg"),
            Joint::RightLeg => f.write_str("right leg"),
            Joint::LeftFoot => f.write_str("left foot"),
            Joint::RightFoot => f.write_str("right foot"),
        }
    }
}

impl Index<Joint> for Pose {
    type Output = i16;

    fn index(&self, joint: Joint) -> &Self::Output {
        &self[joint as usize]
    }
}

impl IndexMut<Joint> for Pose {
    fn index_mut(&mut self, joint: Joint) -> &mut Self::Output {
        &mut self[joint as usize]
    }
}
