use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::error::DhtError;
use crate::reading::Reading;
use crate::sequencer::Sequencer;
use crate::timing::Timing;
use crate::window::{Guard, TimingWindow, Unguarded};

/// Driver for the DHT11 temperature and humidity sensor.
pub struct Dht11<PIN, D, W = Unguarded> {
    pin: PIN,
    delay: D,
    window: W,
    timing: Timing,
}

impl<PIN, DELAY> Dht11<PIN, DELAY, Unguarded> {
    /// Creates a new instance of the DHT11 driver.
    ///
    /// # Arguments
    ///
    /// * `pin` - The GPIO pin connected to the DHT11 data line. Must support both input and
    ///   output, and should be configured open-drain with a pull-up so it idles high.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    ///
    /// Reads run without any protection from preemption; see
    /// [`with_window`](Self::with_window).
    pub fn new(pin: PIN, delay: DELAY) -> Self {
        Dht11::with_window(pin, delay, Unguarded)
    }
}

impl<PIN, DELAY, W> Dht11<PIN, DELAY, W> {
    /// Creates a driver that holds `window` open for the whole transaction.
    pub fn with_window(pin: PIN, delay: DELAY, window: W) -> Self {
        Dht11 {
            pin,
            delay,
            window,
            timing: Timing::DHT11,
        }
    }

    /// Replaces the protocol timing, for sensors that share the DHT11 encoding
    /// but need different limits.
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Protocol timing used by [`read`](Self::read).
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Gives back the pin, delay provider and window.
    pub fn release(self) -> (PIN, DELAY, W) {
        (self.pin, self.delay, self.window)
    }
}

impl<PIN, DELAY, W, E> Dht11<PIN, DELAY, W>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
    W: TimingWindow,
{
    /// Reads a temperature and humidity measurement from the DHT11 sensor.
    ///
    /// This method performs the complete DHT11 communication sequence inside
    /// the timing window: sending a start signal, waiting for the sensor's
    /// response and reading 5 bytes. The window is closed before the checksum
    /// is validated and the result decoded.
    ///
    /// Nothing is retried and no state is kept between calls. The sensor
    /// needs about a second between measurements; scheduling reads is up to
    /// the caller.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if the read is successful and the checksum is valid.
    /// * `Err(DhtError)` if a communication or checksum error occurs.
    pub fn read(&mut self) -> Result<Reading, DhtError<E>> {
        trace!("dht11: starting read");

        let frame = {
            let _window = Guard::enter(&mut self.window);
            Sequencer::new(&mut self.pin, &mut self.delay, &self.timing).run()?
        };

        let reading = Reading::try_from(frame).map_err(|err| {
            warn!("dht11: {}", err);
            DhtError::ChecksumMismatch(err)
        })?;

        trace!("dht11: read {}", reading);
        Ok(reading)
    }
}
