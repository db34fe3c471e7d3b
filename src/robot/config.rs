//! Chassis and hardware constants.
//!
//! Holds the PCA9685 and servo signal constants, plus [`ChassisProfile`], the
//! data describing one robot body (joint limits, home pose and gait tables).
use fugit::HertzU32;

use super::gaits::GaitTable;
use super::joint::Pose;

// --- PCA9685 ---
pub const PCA9685_ADDRESS: u8 = 0x40;
pub const OSCILLATOR_HZ: u32 = 25_000_000;
pub const PCA_RESOLUTION: i32 = 4096;
pub const PWM_FREQUENCY: HertzU32 = HertzU32::from_raw(50);
pub const PCA_PERIOD_US: i32 = (1_000_000 / PWM_FREQUENCY.raw()) as i32; // 20000 µs

// --- Servo signal ---
pub const SERVO_MIN_PULSE_US: i32 = 600;
pub const SERVO_MAX_PULSE_US: i32 = 2400;
pub const SERVO_ANGLE_RANGE: i32 = 180;

/// Servo connector S1 is wired to PCA9685 output 8.
pub const CHANNEL_OFFSET: u8 = 7;
pub const SERVO_CHANNEL_COUNT: u8 = 8;

pub const HOME_ANGLE: i16 = 90;
pub const MAX_CUSTOM_POSES: usize = 16;

/// Geometry-dependent parameters of a chassis.
///
/// Two bodies built from the same kit differ only in these numbers, so the engine
/// takes a profile instead of being compiled per robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChassisProfile {
    pub min: Pose,
    pub max: Pose,
    pub home: Pose,
    pub gaits: GaitTable,
}

impl ChassisProfile {
    pub const DEFAULT: Self = Self {
        min: [75, 75, 60, 60],
        max: [105, 105, 120, 120],
        home: [HOME_ANGLE; 4],
        gaits: GaitTable::DEFAULT,
    };
}

impl Default for ChassisProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}
