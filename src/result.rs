//! Read result types.

use alloc::vec::Vec;

use crate::card::Card;

/// A generated transfer buffer, before it reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// The card drawn for this read.
    pub card: Card,
    /// Whole copies of the card's pattern at the front of `bytes`.
    pub copies: usize,
    /// Exactly the requested number of bytes; anything past the last whole
    /// copy is zero.
    pub bytes: Vec<u8>,
}

impl Reading {
    /// Returns the tiled prefix, without the zeroed tail.
    #[must_use]
    pub fn tiled(&self) -> &[u8] {
        &self.bytes[..self.copies * self.card.pattern().len()]
    }
}
