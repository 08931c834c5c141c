//! DHT11 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the DHT11 temperature
//! and humidity sensor, built on top of the [`embedded-hal`] traits.
//!
//! The sensor talks over a single open-drain line. The host pulls the line
//! low to request a measurement, the sensor acknowledges and then sends 40
//! bits, each encoded as a low pulse followed by a high pulse whose length
//! relative to the low pulse decides the bit. The five resulting bytes carry
//! humidity, temperature and a checksum.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments, no allocation
//! - Pluggable [`TimingWindow`] to keep the read from being preempted
//! - Tunable protocol [`Timing`]
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access
//! - [`DelayNs`] for accurate timing
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for logging support and logs failed reads
//!
//! # Example
//!
//! ```ignore
//! let mut dht = Dht11::with_window(pin, delay, InterruptsMasked::new());
//! match dht.read() {
//!     Ok(reading) => publish(Record::new("greenhouse-1", reading, now)),
//!     Err(err) => defmt::warn!("skipping cycle: {}", err),
//! }
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod dht11;
pub mod error;
pub mod frame;
pub mod pulse;
pub mod reading;
pub mod record;
pub mod sequencer;
pub mod timing;
pub mod window;

#[cfg(test)]
mod sim;

pub use dht11::Dht11;
pub use error::{ChecksumError, DhtError, Phase};
pub use frame::Frame;
pub use reading::{Comfort, Reading};
pub use record::Record;
pub use timing::Timing;
pub use window::{TimingWindow, Unguarded};
