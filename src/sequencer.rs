//! The request/acknowledge/data exchange that produces one raw frame.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin, PinState},
};

use crate::error::{DhtError, Phase};
use crate::frame::{FRAME_LEN, Frame};
use crate::pulse::{self, PulseError};
use crate::timing::{FRAME_BITS, Timing};

/// Runs one transaction on a borrowed line.
///
/// The line is expected to be open-drain with a pull-up: driving it high
/// releases it, after which the sensor owns the level until the transaction
/// ends.
pub struct Sequencer<'a, PIN, DELAY> {
    pin: &'a mut PIN,
    delay: &'a mut DELAY,
    timing: &'a Timing,
}

impl<'a, PIN, DELAY, E> Sequencer<'a, PIN, DELAY>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Borrows the line and delay provider for one transaction.
    ///
    /// # Arguments
    ///
    /// * `pin` - The open-drain data line, idling high.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `timing` - Pulse lengths and wait limits for this sensor.
    pub fn new(pin: &'a mut PIN, delay: &'a mut DELAY, timing: &'a Timing) -> Self {
        Sequencer { pin, delay, timing }
    }

    /// Sends the request, waits for the acknowledgment and reads 40 bits.
    ///
    /// No step is retried; the first timeout ends the transaction with the
    /// phase that failed.
    pub fn run(mut self) -> Result<Frame, DhtError<E>> {
        self.request()?;
        self.acknowledge()?;
        self.read_frame()
    }

    /// Pulls the line low long enough for the sensor to wake, then releases it.
    fn request(&mut self) -> Result<(), E> {
        self.pin.set_low()?;
        self.delay.delay_us(self.timing.request_low_us);
        self.pin.set_high()?;
        self.delay.delay_us(self.timing.request_high_us);
        Ok(())
    }

    /// Follows the sensor's response: low, high, then low again before data.
    fn acknowledge(&mut self) -> Result<(), DhtError<E>> {
        self.expect(Phase::RequestAck, self.timing.ack_low_us, PinState::Low)?;
        self.expect(Phase::AckHigh, self.timing.ack_high_us, PinState::High)?;
        self.expect(Phase::AckLow2, self.timing.ack_end_us, PinState::Low)?;
        Ok(())
    }

    fn read_frame(&mut self) -> Result<Frame, DhtError<E>> {
        let mut bytes = [0u8; FRAME_LEN];

        for index in 0..FRAME_BITS {
            let bit = self.read_bit(index as u8)?;
            let byte = &mut bytes[index / 8];
            *byte = (*byte << 1) | u8::from(bit);
        }

        Ok(Frame::new(bytes))
    }

    /// Reads a single bit from the sensor.
    ///
    /// Every bit starts with a low phase of fixed nominal length followed by a
    /// high phase that is short for `0` and long for `1`. The bit is `1` when
    /// the high phase outlasts the low phase that preceded it.
    fn read_bit(&mut self, index: u8) -> Result<bool, DhtError<E>> {
        let phase = Phase::Bit(index);
        let low_duration = self.expect(phase, self.timing.bit_low_us, PinState::High)?;
        let high_duration = self.expect(phase, self.timing.bit_high_us, PinState::Low)?;
        Ok(high_duration > low_duration)
    }

    /// Waits for `level`, attributing a timeout to `phase`.
    fn expect(
        &mut self,
        phase: Phase,
        timeout_us: u32,
        level: PinState,
    ) -> Result<u32, DhtError<E>> {
        pulse::await_level(&mut *self.pin, &mut *self.delay, timeout_us, level).map_err(
            |err| match err {
                PulseError::Timeout => {
                    warn!("dht11: timed out during {}", phase);
                    DhtError::Timeout { phase }
                }
                PulseError::Pin(err) => DhtError::PinError(err),
            },
        )
    }
}
