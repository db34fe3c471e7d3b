//! Per-joint servo state: commanded angle, trim and clamp bounds.
use core::cmp::Ordering;

use super::config::ChassisProfile;
use super::joint::{Pose, JOINT_COUNT};

/// The model the interpolator mutates.
///
/// `current` always stays inside `[min, max]` once a settle completes. `trim` is a
/// mechanical offset added only when angles are written to the hardware; it is never
/// clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServoState {
    trim: Pose,
    current: Pose,
    min: Pose,
    max: Pose,
}

impl ServoState {
    pub fn new(profile: &ChassisProfile) -> Self {
        Self {
            trim: [0; JOINT_COUNT],
            current: profile.home,
            min: profile.min,
            max: profile.max,
        }
    }

    pub fn trim(&self) -> Pose {
        self.trim
    }

    pub fn current(&self) -> Pose {
        self.current
    }

    pub fn min(&self) -> Pose {
        self.min
    }

    pub fn max(&self) -> Pose {
        self.max
    }

    pub fn set_trim(&mut self, trim: Pose) {
        self.trim = trim;
    }

    /// Replaces the lower bounds. `current` is not re-clamped until the next settle.
    pub fn set_min(&mut self, min: Pose) {
        self.min = min;
    }

    /// Replaces the upper bounds. `current` is not re-clamped until the next settle.
    pub fn set_max(&mut self, max: Pose) {
        self.max = max;
    }

    /// Clamps each angle of `target` to the joint bounds, upper bound first.
    ///
    /// With `max < min` (a misconfiguration) the lower bound wins.
    pub fn clamp(&self, target: Pose) -> Pose {
        core::array::from_fn(|i| target[i].min(self.max[i]).max(self.min[i]))
    }

    /// Moves every joint one degree towards `target`. Returns whether any joint moved.
    pub fn step_toward(&mut self, target: &Pose) -> bool {
        let mut moved = false;
        for (current, target) in self.current.iter_mut().zip(target) {
            match (*current).cmp(target) {
                Ordering::Greater => *current -= 1,
                Ordering::Less => *current += 1,
                Ordering::Equal => continue,
            }
            moved = true;
        }
        moved
    }

    /// Angles sent to the servos: `current + trim`.
    pub fn output(&self) -> Pose {
        core::array::from_fn(|i| self.current[i].saturating_add(self.trim[i]))
    }
}

impl Default for ServoState {
    fn default() -> Self {
        Self::new(&ChassisProfile::DEFAULT)
    }
}
