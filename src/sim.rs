//! Builds expected pin and delay traffic for a simulated sensor.
//!
//! Each call appends what the driver will observe while waiting: `hold`
//! samples a level that does not match (each followed by a 1 us delay) and
//! `edge` is the sample that finally matches.

use embedded_hal_mock::eh1::delay::{CheckedDelay, Transaction as DelayTx};
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTx};

use crate::Timing;

pub(crate) const ZERO: (u32, u32) = (48, 26);
pub(crate) const ONE: (u32, u32) = (48, 68);

#[derive(Default)]
pub(crate) struct Script {
    pin: Vec<PinTx>,
    delay: Vec<DelayTx>,
}

impl Script {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Host request pulse.
    pub(crate) fn request(mut self, timing: &Timing) -> Self {
        self.pin.push(PinTx::set(State::Low));
        self.delay.push(DelayTx::delay_us(timing.request_low_us));
        self.pin.push(PinTx::set(State::High));
        self.delay.push(DelayTx::delay_us(timing.request_high_us));
        self
    }

    pub(crate) fn hold(mut self, level: State, samples: u32) -> Self {
        for _ in 0..samples {
            self.pin.push(PinTx::get(level));
            self.delay.push(DelayTx::delay_us(1));
        }
        self
    }

    pub(crate) fn edge(mut self, level: State) -> Self {
        self.pin.push(PinTx::get(level));
        self
    }

    /// Sensor acknowledgment: low, high, low again, each within its limit.
    pub(crate) fn ack(self) -> Self {
        self.hold(State::High, 20)
            .edge(State::Low)
            .hold(State::Low, 70)
            .edge(State::High)
            .hold(State::High, 70)
            .edge(State::Low)
    }

    /// One data bit made of `low` ticks of low followed by `high` ticks of high.
    pub(crate) fn bit(self, low: u32, high: u32) -> Self {
        self.hold(State::Low, low)
            .edge(State::High)
            .hold(State::High, high)
            .edge(State::Low)
    }

    pub(crate) fn byte(self, byte: u8) -> Self {
        (0..8).fold(self, |script, i| {
            let (low, high) = if (byte >> (7 - i)) & 1 == 1 { ONE } else { ZERO };
            script.bit(low, high)
        })
    }

    pub(crate) fn frame(self, bytes: [u8; 5]) -> Self {
        bytes.into_iter().fold(self, Script::byte)
    }

    /// A complete successful transaction with default timing.
    pub(crate) fn transaction(self, bytes: [u8; 5]) -> Self {
        self.request(&Timing::DHT11).ack().frame(bytes)
    }

    pub(crate) fn mocks(&self) -> (PinMock, CheckedDelay) {
        (PinMock::new(&self.pin), CheckedDelay::new(&self.delay))
    }
}
