//! Busy-wait measurement of line levels.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, PinState},
};

/// Why [`await_level`] gave up.
#[derive(Debug, PartialEq, Eq)]
pub enum PulseError<E> {
    /// The expected level was not seen within the timeout.
    Timeout,
    /// Reading the pin failed.
    Pin(E),
}

impl<E> From<E> for PulseError<E> {
    fn from(value: E) -> Self {
        Self::Pin(value)
    }
}

/// Samples `pin` once per microsecond until it reads `expected`.
///
/// Returns the number of microsecond ticks that elapsed before the match, so a
/// level that is already present yields `0`. At most `timeout_us` samples and
/// `timeout_us` one-microsecond delays are taken before failing with
/// [`PulseError::Timeout`].
pub fn await_level<PIN, DELAY>(
    pin: &mut PIN,
    delay: &mut DELAY,
    timeout_us: u32,
    expected: PinState,
) -> Result<u32, PulseError<PIN::Error>>
where
    PIN: InputPin,
    DELAY: DelayNs,
{
    for elapsed in 0..timeout_us {
        if PinState::from(pin.is_high()?) == expected {
            return Ok(elapsed);
        }
        delay.delay_us(1);
    }
    Err(PulseError::Timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::{CheckedDelay, Transaction as DelayTx};
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTx};

    #[test]
    fn test_immediate_match() {
        let mut pin = PinMock::new(&[PinTx::get(State::Low)]);
        let mut delay = CheckedDelay::new(&[]);

        let elapsed = await_level(&mut pin, &mut delay, 40, PinState::Low).unwrap();
        assert_eq!(elapsed, 0);

        pin.done();
        delay.done();
    }

    #[test]
    fn test_counts_elapsed_ticks() {
        let mut pin = PinMock::new(&[
            PinTx::get(State::Low),
            PinTx::get(State::Low),
            PinTx::get(State::Low),
            PinTx::get(State::High),
        ]);
        let mut delay = CheckedDelay::new(&vec![DelayTx::delay_us(1); 3]);

        let elapsed = await_level(&mut pin, &mut delay, 50, PinState::High).unwrap();
        assert_eq!(elapsed, 3);

        pin.done();
        delay.done();
    }

    #[test]
    fn test_match_on_last_sample() {
        let mut expect: Vec<PinTx> = (0..9).map(|_| PinTx::get(State::High)).collect();
        expect.push(PinTx::get(State::Low));
        let mut pin = PinMock::new(&expect);
        let mut delay = CheckedDelay::new(&vec![DelayTx::delay_us(1); 9]);

        let elapsed = await_level(&mut pin, &mut delay, 10, PinState::Low).unwrap();
        assert_eq!(elapsed, 9);

        pin.done();
        delay.done();
    }

    #[test]
    fn test_stuck_line_times_out() {
        // A line that never changes is sampled exactly `timeout_us` times.
        let expect: Vec<PinTx> = (0..40).map(|_| PinTx::get(State::High)).collect();
        let mut pin = PinMock::new(&expect);
        let mut delay = CheckedDelay::new(&vec![DelayTx::delay_us(1); 40]);

        let result = await_level(&mut pin, &mut delay, 40, PinState::Low);
        assert_eq!(result, Err(PulseError::Timeout));

        pin.done();
        delay.done();
    }

    #[test]
    fn test_zero_timeout_never_samples() {
        let mut pin = PinMock::new(&[]);
        let mut delay = CheckedDelay::new(&[]);

        let result = await_level(&mut pin, &mut delay, 0, PinState::High);
        assert_eq!(result, Err(PulseError::Timeout));

        pin.done();
        delay.done();
    }
}
