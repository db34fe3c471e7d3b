//! Pose interpolation.
//!
//! [`settle`] walks every joint towards its target one degree per iteration. All joints
//! step together and the four channels are written as one frame before the delay, so
//! the legs move simultaneously instead of one after the other. The number of
//! iterations is the largest angular distance of any joint.
use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal_async::delay::DelayNs;
use log::{debug, trace};

use crate::error::Error;
use crate::robot::joint::Pose;
use crate::robot::servo::{ServoBus, Servos};
use crate::robot::state::ServoState;

/// Flag checked by [`settle`] between iterations.
#[derive(Debug, Default)]
pub struct CancelToken(AtomicBool);

impl CancelToken {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Drives `state` to `target` (clamped to the joint bounds), writing a frame per step.
///
/// A negative `delay_ms` is treated as 0, which settles as fast as the bus allows.
/// Returns the number of iterations; a pose already reached costs no write and no
/// delay. On cancellation `state` keeps the last written angles.
pub async fn settle<B, D>(
    state: &mut ServoState,
    servos: &mut Servos<B>,
    delay: &mut D,
    target: Pose,
    delay_ms: i32,
    cancel: Option<&CancelToken>,
) -> Result<u32, Error<B::Error>>
where
    B: ServoBus,
    D: DelayNs,
{
    let target = state.clamp(target);
    let delay_ms = u32::try_from(delay_ms).unwrap_or(0);
    let mut iterations = 0;

    while state.step_toward(&target) {
        iterations += 1;
        trace!("[SETTLE] step {iterations}: {:?}", state.current());
        servos
            .write_pose(&state.output())
            .await
            .map_err(Error::Bus)?;

        if cancel.is_some_and(CancelToken::is_cancelled) {
            debug!("[SETTLE] cancelled at {:?}", state.current());
            return Err(Error::Cancelled);
        }
        if delay_ms > 0 {
            delay.delay_ms(delay_ms).await;
        }
    }

    debug!("[SETTLE] reached {target:?} in {iterations} steps");
    Ok(iterations)
}
