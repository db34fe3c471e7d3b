//! Built-in gaits and their pose tables.
use core::fmt::Display;

use super::joint::Pose;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gait {
    Stop,
    Forward,
    Backward,
    Left,
    Right,
    SlideLeft,
    SlideRight,
    ShakeLeft,
    ShakeRight,
}

impl Gait {
    pub const ALL: [Gait; 9] = [
        Gait::Stop,
        Gait::Forward,
        Gait::Backward,
        Gait::Left,
        Gait::Right,
        Gait::SlideLeft,
        Gait::SlideRight,
        Gait::ShakeLeft,
        Gait::ShakeRight,
    ];

    /// Straight-line strides, the gaits the stride offset applies to.
    pub const fn is_stride(self) -> bool {
        matches!(self, Gait::Forward | Gait::Backward)
    }
}

impl Display for Gait {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Gait::Stop => f.write_str("stop"),
            Gait::Forward => f.write_str("forward"),
            Gait::Backward => f.write_str("backward"),
            Gait::Left => f.write_str("turn left"),
            Gait::Right => f.write_str("turn right"),
            Gait::SlideLeft => f.write_str("slide left"),
            Gait::SlideRight => f.write_str("slide right"),
            Gait::ShakeLeft => f.write_str("shake left"),
            Gait::ShakeRight => f.write_str("shake right"),
        }
    }
}

/// Pose sequence of every [`Gait`] for one chassis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaitTable {
    pub stop: &'static [Pose],
    pub forward: &'static [Pose],
    pub backward: &'static [Pose],
    pub left: &'static [Pose],
    pub right: &'static [Pose],
    pub slide_left: &'static [Pose],
    pub slide_right: &'static [Pose],
    pub shake_left: &'static [Pose],
    pub shake_right: &'static [Pose],
}

impl GaitTable {
    pub const DEFAULT: Self = Self {
        stop: &[[90, 90, 90, 90]],
        forward: &[
            [105, 105, 110, 95],
            [75, 75, 110, 95],
            [75, 75, 85, 70],
            [105, 105, 85, 70],
        ],
        backward: &[
            [75, 75, 110, 95],
            [105, 105, 110, 95],
            [75, 75, 85, 70],
            [105, 105, 85, 70],
        ],
        left: &[
            [93, 87, 115, 100],
            [87, 93, 115, 100],
            [87, 93, 80, 65],
            [93, 87, 80, 65],
        ],
        right: &[
            [87, 93, 115, 110],
            [93, 87, 115, 110],
            [93, 87, 80, 65],
            [87, 93, 80, 65],
        ],
        slide_left: &[
            [90, 90, 90, 70],
            [90, 90, 120, 70],
            [90, 90, 120, 90],
            [90, 90, 90, 90],
        ],
        slide_right: &[
            [90, 90, 120, 90],
            [90, 90, 120, 70],
            [90, 90, 90, 70],
            [90, 90, 90, 90],
        ],
        shake_left: &[
            [90, 90, 110, 110],
            [70, 90, 120, 110],
            [90, 90, 110, 110],
            [70, 90, 120, 110],
        ],
        shake_right: &[
            [90, 90, 70, 60],
            [90, 120, 70, 70],
            [90, 90, 70, 60],
            [90, 120, 70, 70],
        ],
    };

    pub fn poses(&self, gait: Gait) -> &'static [Pose] {
        match gait {
            Gait::Stop => self.stop,
            Gait::Forward => self.forward,
            Gait::Backward => self.backward,
            Gait::Left => self.left,
            Gait::Right => self.right,
            Gait::SlideLeft => self.slide_left,
            Gait::SlideRight => self.slide_right,
            Gait::ShakeLeft => self.shake_left,
            Gait::ShakeRight => self.shake_right,
        }
    }
}

impl Default for GaitTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_is_a_single_home_pose() {
        assert_eq!(GaitTable::DEFAULT.poses(Gait::Stop), &[[90, 90, 90, 90]]);
    }

    #[test]
    fn test_locomotion_gaits_have_four_poses() {
        for gait in Gait::ALL.into_iter().filter(|g| *g != Gait::Stop) {
            assert_eq!(GaitTable::DEFAULT.poses(gait).len(), 4, "{gait}");
        }
    }

    #[test]
    fn test_only_forward_and_backward_are_strides() {
        let strides = Gait::ALL.into_iter().filter(|g| g.is_stride()).count();
        assert_eq!(strides, 2);
        assert!(Gait::Backward.is_stride());
        assert!(!Gait::SlideLeft.is_stride());
    }
}
