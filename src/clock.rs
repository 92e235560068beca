//! Monotonic clocks for the orientation timing window.

use core::sync::atomic::{AtomicU64, Ordering};

/// A monotonic nanosecond clock.
pub trait Clock {
    /// Returns the current reading in nanoseconds.
    fn now_nanos(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_nanos(&self) -> u64 {
        (**self).now_nanos()
    }
}

/// Wall clock backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Creates a clock whose readings count from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_nanos(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// A clock that advances by a fixed stride on every reading.
///
/// A single-threaded timing window on this clock always measures `stride`
/// nanoseconds, so its parity is fixed.
///
/// # Example
///
/// ```
/// use devtarot::{Clock, SteppingClock};
///
/// let clock = SteppingClock::new(3);
/// let start = clock.now_nanos();
/// assert_eq!(clock.now_nanos() - start, 3);
/// ```
#[derive(Debug)]
pub struct SteppingClock {
    ticks: AtomicU64,
    stride: u64,
}

impl SteppingClock {
    /// Creates a clock starting at zero.
    #[must_use]
    pub const fn new(stride: u64) -> Self {
        Self {
            ticks: AtomicU64::new(0),
            stride,
        }
    }
}

impl Clock for SteppingClock {
    fn now_nanos(&self) -> u64 {
        self.ticks.fetch_add(self.stride, Ordering::Relaxed)
    }
}
