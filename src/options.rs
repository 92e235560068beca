//! Device configuration options.

/// How a drawn card's orientation is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum OrientationBias {
    /// Upright unless the draw's timing window measured an odd number of
    /// nanoseconds, in which case the seed decides. Favors upright cards.
    #[default]
    TimingParity,
    /// The seed alone decides, giving an even split.
    Uniform,
}

/// Configuration options for a tarot device.
///
/// Options are fixed once the device is built. Use the builder methods to
/// customize them:
///
/// ```
/// use devtarot::{DeviceOptions, OrientationBias};
///
/// let options = DeviceOptions::default()
///     .with_orientation(OrientationBias::Uniform)
///     .with_fallback_seed(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeviceOptions {
    /// Orientation selection rule.
    pub orientation: OrientationBias,
    /// Seed used when the entropy source fails. The default, `0`, draws `+T0`.
    pub fallback_seed: u32,
}

impl DeviceOptions {
    /// Sets the orientation selection rule.
    ///
    /// # Example
    ///
    /// ```
    /// use devtarot::{DeviceOptions, OrientationBias};
    ///
    /// let options = DeviceOptions::default().with_orientation(OrientationBias::Uniform);
    /// assert_eq!(options.orientation, OrientationBias::Uniform);
    /// ```
    #[must_use]
    pub const fn with_orientation(mut self, orientation: OrientationBias) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the fallback seed.
    ///
    /// # Example
    ///
    /// ```
    /// use devtarot::DeviceOptions;
    ///
    /// let options = DeviceOptions::default().with_fallback_seed(42);
    /// assert_eq!(options.fallback_seed, 42);
    /// ```
    #[must_use]
    pub const fn with_fallback_seed(mut self, seed: u32) -> Self {
        self.fallback_seed = seed;
        self
    }
}
