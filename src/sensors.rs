//! Scalar sensor reads: ultrasonic range finder, smoke detector and PIR motion sensor.
use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::{debug, trace};

const US_PER_CM: u32 = 58;
const MAX_DISTANCE_CM: u32 = 500;
const MAX_ECHO_US: u32 = MAX_DISTANCE_CM * US_PER_CM;
const POLL_US: u32 = 1;

/// HC-SR04 style range finder on a trigger and an echo pin.
pub struct Sonar<T, E, D> {
    trig: T,
    echo: E,
    delay: D,
}

impl<T, E, D> Sonar<T, E, D>
where
    T: OutputPin,
    E: InputPin<Error = T::Error>,
    D: DelayNs,
{
    pub fn new(trig: T, echo: E, delay: D) -> Self {
        Self { trig, echo, delay }
    }

    /// Distance in centimeters, 0 when no echo comes back within range.
    pub fn distance_cm(&mut self) -> Result<u32, T::Error> {
        self.trig.set_low()?;
        self.delay.delay_us(2);
        self.trig.set_high()?;
        self.delay.delay_us(10);
        self.trig.set_low()?;

        let mut waited = 0;
        while self.echo.is_low()? {
            if waited >= MAX_ECHO_US {
                debug!("[SONAR] no echo");
                return Ok(0);
            }
            self.delay.delay_us(POLL_US);
            waited += POLL_US;
        }

        let mut width = 0;
        while self.echo.is_high()? {
            if width >= MAX_ECHO_US {
                return Ok(0);
            }
            self.delay.delay_us(POLL_US);
            width += POLL_US;
        }
        Ok(width / US_PER_CM)
    }

    pub fn release(self) -> (T, E, D) {
        (self.trig, self.echo, self.delay)
    }
}

/// Active-low smoke detector output.
pub struct SmokeSensor<P> {
    pin: P,
}

impl<P> SmokeSensor<P>
where
    P: InputPin,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// 1 when smoke is detected (pin pulled low), 0 otherwise.
    pub fn read(&mut self) -> Result<u8, P::Error> {
        Ok(if self.pin.is_high()? { 0 } else { 1 })
    }

    pub fn detected(&mut self) -> Result<bool, P::Error> {
        Ok(self.read()? == 1)
    }
}

/// One-shot conversion of an analog input, in raw converter counts.
pub trait AnalogInput {
    type Error: Debug;

    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

/// Analog PIR motion sensor.
pub struct MotionSensor<A> {
    input: A,
}

impl<A> MotionSensor<A>
where
    A: AnalogInput,
{
    pub fn new(input: A) -> Self {
        Self { input }
    }

    /// Raw level as the converter reports it.
    pub fn level(&mut self) -> Result<u16, A::Error> {
        let level = self.input.read_raw()?;
        trace!("[PIR] level {level}");
        Ok(level)
    }

    pub fn release(self) -> A {
        self.input
    }
}
