//! A tarot character device read generator with optional `no_std` support.
//!
//! Each read of the device draws one random card and fills the caller's
//! buffer with its serialized pattern, such as `+T5` or `-C14`, repeated as
//! many whole times as fit. Bytes after the last whole copy are zero.
//!
//! The crate provides [`TarotDevice`], which implements the read path on top
//! of pluggable [`EntropySource`], [`Clock`], and [`Destination`] types, and
//! [`Lifecycle`], which owns the device's registration with the OS.
//!
//! # Example
//!
//! ```
//! use devtarot::{DeviceOptions, SeededEntropy, SteppingClock, TarotDevice};
//!
//! let device = TarotDevice::new(DeviceOptions::default(), SeededEntropy::new(42), SteppingClock::new(1));
//! let reading = device.generate(10).unwrap();
//! assert_eq!(reading.bytes.len(), 10);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod clock;
pub mod device;
pub mod entropy;
pub mod error;
pub mod lifecycle;
pub mod options;
pub mod result;
mod sync;
pub mod transfer;

// Re-export main types
pub use card::{
    Card, MAJOR_ARCANA_COUNT, MINOR_ARCANA_COUNT, ORIENTATIONS, Orientation, Pattern, SUITES,
    Suite,
};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, SteppingClock};
pub use device::TarotDevice;
#[cfg(feature = "std")]
pub use entropy::OsEntropy;
pub use entropy::{EntropySource, SeededEntropy};
pub use error::{CardError, EntropyError, LifecycleError, ReadError, TransferFault};
pub use lifecycle::{DeviceNumber, Lifecycle, Registrar};
pub use options::{DeviceOptions, OrientationBias};
pub use result::Reading;
#[cfg(feature = "std")]
pub use transfer::IoDestination;
pub use transfer::Destination;
