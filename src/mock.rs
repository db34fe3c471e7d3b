//! Recording fakes for the hardware seams, host tests only.
use core::convert::Infallible;

use embedded_hal_async::i2c::{ErrorType, I2c, Operation};
use heapless::Vec;

use crate::motion::interpolator::CancelToken;
use crate::robot::servo::ServoBus;

/// `(channel, on, off)` of one `set_pulse` call.
pub type Write = (u8, u16, u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

pub struct RecordingBus {
    writes: Vec<Write, 1024>,
    fail_after: Option<usize>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            fail_after: None,
        }
    }

    /// Accepts `n` writes, then fails every following one.
    pub fn failing_after(n: usize) -> Self {
        Self {
            writes: Vec::new(),
            fail_after: Some(n),
        }
    }

    pub fn writes(&self) -> &[Write] {
        &self.writes
    }
}

impl ServoBus for RecordingBus {
    type Error = BusFault;

    async fn set_pulse(&mut self, channel: u8, on: u16, off: u16) -> Result<(), Self::Error> {
        if self.fail_after.is_some_and(|n| self.writes.len() >= n) {
            return Err(BusFault);
        }
        self.writes
            .push((channel, on, off))
            .expect("recording bus full");
        Ok(())
    }
}

/// Splits recorded writes into 4-channel frames.
pub fn frames(writes: &[Write]) -> Vec<&[Write], 512> {
    writes.chunks(4).collect()
}

/// Delay that returns immediately and remembers every millisecond wait.
pub struct CountingDelay {
    calls: Vec<u32, 256>,
    elapsed_ns: u64,
    cancel: Option<(usize, &'static CancelToken)>,
}

impl CountingDelay {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            elapsed_ns: 0,
            cancel: None,
        }
    }

    /// Cancels `token` during the `n`-th millisecond wait.
    pub fn cancelling_after(n: usize, token: &'static CancelToken) -> Self {
        Self {
            cancel: Some((n, token)),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> &[u32] {
        &self.calls
    }

    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed_ns
    }

    fn record_ms(&mut self, ms: u32) {
        self.calls.push(ms).expect("too many delays");
        if let Some((n, token)) = self.cancel {
            if self.calls.len() == n {
                token.cancel();
            }
        }
    }
}

impl embedded_hal_async::delay::DelayNs for CountingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.record_ms(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.record_ms(ms);
    }
}

impl embedded_hal::delay::DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}

/// I2C bus answering every read with zeroes and recording every write.
pub struct FakeI2c {
    pub address: Option<u8>,
    writes: Vec<Vec<u8, 8>, 128>,
}

impl FakeI2c {
    pub fn new() -> Self {
        Self {
            address: None,
            writes: Vec::new(),
        }
    }

    pub fn writes(&self) -> &[Vec<u8, 8>] {
        &self.writes
    }
}

impl ErrorType for FakeI2c {
    type Error = Infallible;
}

impl I2c for FakeI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.address = Some(address);
        for operation in operations {
            match operation {
                Operation::Write(bytes) => self
                    .writes
                    .push(Vec::from_slice(bytes).expect("write longer than 8 bytes"))
                    .expect("too many writes"),
                Operation::Read(buffer) => buffer.fill(0),
            }
        }
        Ok(())
    }
}
