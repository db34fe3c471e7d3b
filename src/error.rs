//! Error type returned by the motion engine.
use core::fmt::{self, Debug, Display, Formatter};

/// Failure of a motion request. `E` is the error of the underlying servo bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The PWM driver (I2C bus) rejected a write.
    Bus(E),
    /// The settle was interrupted through its [`CancelToken`](crate::motion::interpolator::CancelToken).
    Cancelled,
}

impl<E: Debug> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "servo bus error: {e:?}"),
            Error::Cancelled => f.write_str("motion cancelled"),
        }
    }
}
