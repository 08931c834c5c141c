/// Number of data bits in one transmission.
pub const FRAME_BITS: usize = 40;

/// Protocol timing for one read transaction, in microseconds.
///
/// The defaults match the DHT11. Sensors of the same family that share the
/// bit encoding but tolerate different pulse widths can be read by adjusting
/// these values through [`Dht11::with_timing`](crate::Dht11::with_timing).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// How long the host holds the line low to request a measurement.
    pub request_low_us: u32,
    /// How long the host holds the line high before releasing it.
    pub request_high_us: u32,
    /// Maximum wait for the sensor to pull the line low after the request.
    pub ack_low_us: u32,
    /// Maximum wait for the sensor to release the line during acknowledgment.
    pub ack_high_us: u32,
    /// Maximum wait for the sensor to pull low again before the first bit.
    pub ack_end_us: u32,
    /// Maximum length of the low phase that precedes each bit.
    pub bit_low_us: u32,
    /// Maximum length of the high phase that carries each bit.
    pub bit_high_us: u32,
}

impl Timing {
    /// Limits used by the DHT11: a 20 ms request pulse, acknowledgment waits
    /// of 40/80/80 us and bit phases of at most 50 us low and 70 us high.
    pub const DHT11: Timing = Timing {
        request_low_us: 20_000,
        request_high_us: 40,
        ack_low_us: 40,
        ack_high_us: 80,
        ack_end_us: 80,
        bit_low_us: 50,
        bit_high_us: 70,
    };

    /// Upper bound on the time spent inside one transaction, excluding the
    /// cost of sampling the pin itself.
    ///
    /// Useful for sizing the budget of a [`TimingWindow`](crate::TimingWindow).
    pub const fn worst_case_us(&self) -> u64 {
        self.request_low_us as u64
            + self.request_high_us as u64
            + self.ack_low_us as u64
            + self.ack_high_us as u64
            + self.ack_end_us as u64
            + FRAME_BITS as u64 * (self.bit_low_us as u64 + self.bit_high_us as u64)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DHT11
    }
}
