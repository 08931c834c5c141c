use core::fmt;

/// Step of the read transaction in which the sensor stopped responding.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The sensor never pulled the line low after the request pulse.
    RequestAck,
    /// The sensor never released the line after its acknowledgment low.
    AckHigh,
    /// The sensor never pulled the line low again to end the acknowledgment.
    AckLow2,
    /// Data bit `n` (0..40, most significant first) was not received in time.
    Bit(u8),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::RequestAck => f.write_str("request acknowledgment"),
            Phase::AckHigh => f.write_str("acknowledgment high"),
            Phase::AckLow2 => f.write_str("second acknowledgment low"),
            Phase::Bit(n) => write!(f, "data bit {n}"),
        }
    }
}

/// The checksum byte of a frame did not match the sum of its data bytes.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("checksum mismatch: computed {computed:#04x}, received {received:#04x}")]
pub struct ChecksumError {
    /// Low byte of the sum of the four data bytes.
    pub computed: u8,
    /// Checksum byte sent by the sensor.
    pub received: u8,
}

/// Possible errors from the DHT11 driver.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DhtError<E> {
    /// Timed out waiting for a pin state change.
    #[error("timed out during {phase}")]
    Timeout {
        /// Where in the transaction the wait expired.
        phase: Phase,
    },
    /// Checksum did not match the received data.
    #[error("{0}")]
    ChecksumMismatch(ChecksumError),
    /// Error from the GPIO pin (input/output).
    #[error("pin error: {0:?}")]
    PinError(E),
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for DhtError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DhtError::Timeout { phase } => defmt::write!(f, "Timeout({})", phase),
            DhtError::ChecksumMismatch(err) => defmt::write!(f, "ChecksumMismatch({})", err),
            DhtError::PinError(_) => defmt::write!(f, "PinError"),
        }
    }
}
