//! The read generator behind the tarot device.

use alloc::vec::Vec;

use crate::card::Card;
use crate::clock::Clock;
use crate::entropy::{EntropySource, draw_seed};
use crate::error::ReadError;
use crate::options::{DeviceOptions, OrientationBias};
use crate::result::Reading;
use crate::transfer::Destination;

#[cfg(feature = "std")]
use crate::clock::SystemClock;
#[cfg(feature = "std")]
use crate::entropy::OsEntropy;

/// A tarot character device.
///
/// Every read draws a fresh card and fills the caller's buffer with copies of
/// it. The device keeps no state between reads, so it can serve concurrent
/// readers through a shared reference as long as its entropy source and clock
/// are `Sync`.
pub struct TarotDevice<E, C> {
    options: DeviceOptions,
    entropy: E,
    clock: C,
}

impl<E: EntropySource, C: Clock> TarotDevice<E, C> {
    /// Creates a device from its collaborators.
    ///
    /// # Example
    ///
    /// ```
    /// use devtarot::{DeviceOptions, SeededEntropy, SteppingClock, TarotDevice};
    ///
    /// let device = TarotDevice::new(
    ///     DeviceOptions::default(),
    ///     SeededEntropy::new(42),
    ///     SteppingClock::new(1),
    /// );
    /// let mut buf = [0u8; 16];
    /// assert_eq!(device.read(&mut buf[..], 16), Ok(16));
    /// ```
    #[must_use]
    pub const fn new(options: DeviceOptions, entropy: E, clock: C) -> Self {
        Self {
            options,
            entropy,
            clock,
        }
    }

    /// Returns the device options.
    #[must_use]
    pub const fn options(&self) -> &DeviceOptions {
        &self.options
    }

    /// Draws one card.
    ///
    /// The seed comes from the entropy source, or the fallback seed if the
    /// source fails. Under [`OrientationBias::TimingParity`], the card can
    /// only be reversed when the nanoseconds spent acquiring the seed are odd.
    #[must_use]
    pub fn draw(&self) -> Card {
        let start = self.clock.now_nanos();
        let seed = draw_seed(&self.entropy, self.options.fallback_seed);
        let elapsed = self.clock.now_nanos().wrapping_sub(start);

        let reversal_allowed = match self.options.orientation {
            OrientationBias::TimingParity => elapsed % 2 == 1,
            OrientationBias::Uniform => true,
        };

        Card::from_seed(seed, reversal_allowed)
    }

    /// Draws a card and tiles it into a zeroed buffer of exactly `count` bytes.
    ///
    /// Logs one line naming the byte count, the card, and the number of copies.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::ResourceExhausted`] if the buffer cannot be
    /// allocated.
    pub fn generate(&self, count: usize) -> Result<Reading, ReadError> {
        let card = self.draw();
        let pattern = card.pattern();

        let mut bytes = Vec::new();
        if bytes.try_reserve_exact(count).is_err() {
            log::warn!(target: "tarot", "cannot allocate {count} bytes for {card}");
            return Err(ReadError::ResourceExhausted { requested: count });
        }
        bytes.resize(count, 0);

        let copies = pattern.tile(&mut bytes);
        log::info!(target: "tarot", "filling {count} bytes with {card} ({copies} times)");

        Ok(Reading {
            card,
            copies,
            bytes,
        })
    }

    /// Serves a read of `count` bytes into `dest`.
    ///
    /// Returns the number of bytes `dest` accepted, which is `count` unless
    /// the destination takes fewer. Nothing is written to `dest` if the
    /// transfer buffer cannot be allocated.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::ResourceExhausted`] if the transfer buffer cannot
    /// be allocated, or [`ReadError::TransferFault`] if `dest` fails mid-copy.
    pub fn read<D: Destination + ?Sized>(
        &self,
        dest: &mut D,
        count: usize,
    ) -> Result<usize, ReadError> {
        let reading = self.generate(count)?;
        let delivered = dest.copy_out(&reading.bytes)?;
        Ok(delivered)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl TarotDevice<OsEntropy, SystemClock> {
    /// Creates a device drawing from operating system entropy and timing.
    #[must_use]
    pub fn system(options: DeviceOptions) -> Self {
        Self::new(options, OsEntropy, SystemClock::new())
    }
}
