//! Error types for device operations.

use thiserror::Error;

use crate::card::Suite;

/// `ENOMEM`, as reported to the kernel glue.
pub const ENOMEM: i32 = 12;

/// `EFAULT`, as reported to the kernel glue.
pub const EFAULT: i32 = 14;

/// A destination failed partway through a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("transfer to caller faulted after {delivered} bytes")]
pub struct TransferFault {
    /// Bytes that reached the destination before the fault.
    pub delivered: usize,
}

/// Errors that can occur during a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReadError {
    /// The transfer buffer could not be allocated.
    #[error("cannot allocate a {requested} byte transfer buffer")]
    ResourceExhausted {
        /// Requested byte count.
        requested: usize,
    },
    /// Copying to the caller failed.
    #[error(transparent)]
    TransferFault(#[from] TransferFault),
}

impl ReadError {
    /// Returns the number of bytes that reached the caller before the failure.
    #[must_use]
    pub const fn delivered(&self) -> usize {
        match self {
            Self::ResourceExhausted { .. } => 0,
            Self::TransferFault(fault) => fault.delivered,
        }
    }

    /// Returns the negative errno a device read handler reports.
    #[must_use]
    pub const fn errno(&self) -> i32 {
        match self {
            Self::ResourceExhausted { .. } => -ENOMEM,
            Self::TransferFault(_) => -EFAULT,
        }
    }
}

/// Errors reported by an entropy source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// The source could not supply bytes.
    #[error("entropy source unavailable")]
    Unavailable,
}

/// Errors that can occur while building or decoding a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Unknown orientation symbol.
    #[error("invalid orientation symbol {0:#04x}")]
    InvalidOrientation(u8),
    /// Unknown suite symbol.
    #[error("invalid suite symbol {0:#04x}")]
    InvalidSuite(u8),
    /// Rank digits are missing or malformed.
    #[error("invalid rank digits")]
    InvalidRank,
    /// Rank is outside the suite's range.
    #[error("rank {rank} is out of range for {suite:?}")]
    RankOutOfRange {
        /// The card's suite.
        suite: Suite,
        /// The offending rank.
        rank: u8,
    },
    /// Pattern is shorter than orientation plus suite.
    #[error("pattern is truncated")]
    Truncated,
}

/// Errors that can occur while registering the device.
///
/// Each variant carries the code the registrar reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// Device number region allocation failed.
    #[error("can't register character device region (error {0})")]
    Region(i32),
    /// Device class creation failed.
    #[error("device class creation failed (error {0})")]
    Class(i32),
    /// Device node creation failed.
    #[error("device node creation failed (error {0})")]
    Node(i32),
    /// Character device addition failed.
    #[error("character device addition failed (error {0})")]
    Cdev(i32),
}
