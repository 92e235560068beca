//! Entropy sources for card draws.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::EntropyError;
use crate::sync::Mutex;

/// Number of entropy bytes consulted per draw. Seeds fall in `0..2^24`.
pub const SEED_BYTES: usize = 3;

/// A source of random bytes.
///
/// Implementations must not block indefinitely. A device shared between
/// threads needs a `Sync` source.
pub trait EntropySource {
    /// Fills `dest` with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::Unavailable`] if no bytes could be produced.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

/// Operating system entropy through `getrandom`.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

#[cfg(feature = "std")]
impl EntropySource for OsEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(|_| EntropyError::Unavailable)
    }
}

/// Deterministic entropy from a seeded `ChaCha8` stream.
pub struct SeededEntropy {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededEntropy {
    /// Creates a stream from `seed`. Equal seeds yield equal draws.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.rng.with(|rng| rng.fill_bytes(dest));
        Ok(())
    }
}

/// Draws a seed from the low [`SEED_BYTES`] bytes of `source`, or returns
/// `fallback` with a warning if the source is unavailable.
pub(crate) fn draw_seed<E: EntropySource + ?Sized>(source: &E, fallback: u32) -> u32 {
    let mut bytes = [0u8; 4];
    match source.fill_bytes(&mut bytes[..SEED_BYTES]) {
        Ok(()) => u32::from_le_bytes(bytes),
        Err(err) => {
            log::warn!(target: "tarot", "{err}; drawing with fallback seed {fallback}");
            fallback
        }
    }
}
