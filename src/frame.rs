use crate::error::ChecksumError;
use crate::reading::Reading;

/// Length of a raw frame in bytes: four data bytes followed by a checksum.
pub const FRAME_LEN: usize = 5;

/// The five bytes sent by the sensor in one transaction, before validation.
///
/// Layout: `[humidity_int, humidity_frac, temp_int, temp_frac, checksum]`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    /// Wraps five bytes as received, checksum last.
    pub const fn new(bytes: [u8; FRAME_LEN]) -> Self {
        Frame(bytes)
    }

    /// The raw bytes, including the checksum.
    pub const fn bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Low byte of the sum of the four data bytes.
    pub fn checksum(&self) -> u8 {
        self.0[..4].iter().fold(0u8, |sum, v| sum.wrapping_add(*v))
    }

    /// Checks the transmitted checksum byte against the data bytes.
    pub fn validate(&self) -> Result<(), ChecksumError> {
        let computed = self.checksum();
        let received = self.0[4];
        if computed == received {
            Ok(())
        } else {
            Err(ChecksumError { computed, received })
        }
    }

    /// Converts the data bytes into a [`Reading`].
    ///
    /// Each quantity is an integral byte plus a tenths byte; only non-negative
    /// values are representable. The checksum is not consulted, so call
    /// [`validate`](Self::validate) first (or use `Reading::try_from`).
    pub fn decode(&self) -> Reading {
        let [hum_int, hum_frac, temp_int, temp_frac, _] = self.0;

        Reading {
            temperature: f32::from(temp_int) + f32::from(temp_frac) / 10.0,
            humidity: f32::from(hum_int) + f32::from(hum_frac) / 10.0,
        }
    }
}

impl From<[u8; FRAME_LEN]> for Frame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Frame(bytes)
    }
}

impl TryFrom<Frame> for Reading {
    type Error = ChecksumError;

    fn try_from(frame: Frame) -> Result<Self, Self::Error> {
        frame.validate()?;
        Ok(frame.decode())
    }
}
