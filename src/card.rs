//! Card types, the seed-to-card draw, and the serialized pattern.

use core::fmt;
use core::ops::RangeInclusive;

use crate::error::CardError;

/// Orientation symbols, indexed by [`Orientation`].
pub const ORIENTATIONS: [u8; 2] = *b"+-";

/// Suite symbols, indexed by [`Suite`]. The first one is the major suite.
pub const SUITES: [u8; 5] = *b"TCSPW";

/// Number of cards in the major arcana (ranks `0..22`).
pub const MAJOR_ARCANA_COUNT: u8 = 22;

/// Number of cards in each minor suite (ranks `1..=14`).
pub const MINOR_ARCANA_COUNT: u8 = 14;

/// Capacity of a [`Pattern`]: two symbols plus up to three rank digits.
pub const PATTERN_CAPACITY: usize = 5;

/// Card orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Upright (`+`).
    Upright,
    /// Reversed (`-`).
    Reversed,
}

impl Orientation {
    /// All orientations, in symbol order.
    pub const ALL: [Self; 2] = [Self::Upright, Self::Reversed];

    /// Returns the byte this orientation serializes to.
    #[must_use]
    pub const fn symbol(self) -> u8 {
        ORIENTATIONS[self as usize]
    }

    /// Looks up an orientation by its symbol.
    #[must_use]
    pub const fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'+' => Some(Self::Upright),
            b'-' => Some(Self::Reversed),
            _ => None,
        }
    }
}

/// Card suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suite {
    /// Trumps (`T`), the major arcana.
    Trumps,
    /// Cups (`C`).
    Cups,
    /// Swords (`S`).
    Swords,
    /// Pentacles (`P`).
    Pentacles,
    /// Wands (`W`).
    Wands,
}

impl Suite {
    /// All suites, in symbol order.
    pub const ALL: [Self; 5] = [
        Self::Trumps,
        Self::Cups,
        Self::Swords,
        Self::Pentacles,
        Self::Wands,
    ];

    /// Returns the byte this suite serializes to.
    #[must_use]
    pub const fn symbol(self) -> u8 {
        SUITES[self as usize]
    }

    /// Looks up a suite by its symbol.
    #[must_use]
    pub const fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'T' => Some(Self::Trumps),
            b'C' => Some(Self::Cups),
            b'S' => Some(Self::Swords),
            b'P' => Some(Self::Pentacles),
            b'W' => Some(Self::Wands),
            _ => None,
        }
    }

    /// Returns `true` for the major suite.
    #[must_use]
    pub const fn is_major(self) -> bool {
        matches!(self, Self::Trumps)
    }

    /// Returns the valid rank range for this suite.
    #[must_use]
    pub const fn ranks(self) -> RangeInclusive<u8> {
        if self.is_major() {
            0..=MAJOR_ARCANA_COUNT - 1
        } else {
            1..=MINOR_ARCANA_COUNT
        }
    }
}

/// A drawn card.
///
/// The rank always lies in [`Suite::ranks`] for the card's suite; a card
/// cannot be changed once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    orientation: Orientation,
    suite: Suite,
    rank: u8,
}

impl Card {
    /// Creates a card, validating the rank against the suite.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::RankOutOfRange`] if `rank` is outside
    /// [`Suite::ranks`].
    ///
    /// # Example
    ///
    /// ```
    /// use devtarot::{Card, Orientation, Suite};
    ///
    /// let card = Card::new(Orientation::Reversed, Suite::Cups, 14).unwrap();
    /// assert_eq!(card.to_string(), "-C14");
    /// assert!(Card::new(Orientation::Upright, Suite::Cups, 0).is_err());
    /// ```
    pub fn new(orientation: Orientation, suite: Suite, rank: u8) -> Result<Self, CardError> {
        if !suite.ranks().contains(&rank) {
            return Err(CardError::RankOutOfRange { suite, rank });
        }
        Ok(Self {
            orientation,
            suite,
            rank,
        })
    }

    /// Builds the card a seed maps to.
    ///
    /// The suite is `seed mod 5`. Major ranks are `seed mod 22`, minor ranks
    /// `seed mod 14 + 1`. When `reversal_allowed` is false the card is always
    /// upright, otherwise the orientation is `seed mod 2`.
    #[must_use]
    pub const fn from_seed(seed: u32, reversal_allowed: bool) -> Self {
        let orientation = if reversal_allowed {
            Orientation::ALL[(seed % ORIENTATIONS.len() as u32) as usize]
        } else {
            Orientation::Upright
        };
        let suite = Suite::ALL[(seed % SUITES.len() as u32) as usize];
        let rank = if suite.is_major() {
            seed % MAJOR_ARCANA_COUNT as u32
        } else {
            seed % MINOR_ARCANA_COUNT as u32 + 1
        };

        Self {
            orientation,
            suite,
            rank: rank as u8,
        }
    }

    /// Decodes one serialized card such as `+T5` or `-C14`.
    ///
    /// # Errors
    ///
    /// Returns a [`CardError`] describing the first malformed part.
    pub fn from_pattern(bytes: &[u8]) -> Result<Self, CardError> {
        let [orientation, suite, digits @ ..] = bytes else {
            return Err(CardError::Truncated);
        };
        let orientation =
            Orientation::from_symbol(*orientation).ok_or(CardError::InvalidOrientation(*orientation))?;
        let suite = Suite::from_symbol(*suite).ok_or(CardError::InvalidSuite(*suite))?;

        // No sign, no leading zeros, at most three digits.
        let well_formed = !digits.is_empty()
            && digits.len() <= PATTERN_CAPACITY - 2
            && digits.iter().all(u8::is_ascii_digit)
            && (digits.len() == 1 || digits[0] != b'0');
        if !well_formed {
            return Err(CardError::InvalidRank);
        }
        let rank = digits
            .iter()
            .fold(0u16, |acc, &d| acc * 10 + u16::from(d - b'0'));
        let rank = u8::try_from(rank).map_err(|_| CardError::InvalidRank)?;

        Self::new(orientation, suite, rank)
    }

    /// Returns the orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the suite.
    #[must_use]
    pub const fn suite(&self) -> Suite {
        self.suite
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns `true` if the card belongs to the major arcana.
    #[must_use]
    pub const fn is_major(&self) -> bool {
        self.suite.is_major()
    }

    /// Serializes the card.
    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        let mut bytes = [0u8; PATTERN_CAPACITY];
        bytes[0] = self.orientation.symbol();
        bytes[1] = self.suite.symbol();

        let mut len = 2;
        if self.rank >= 100 {
            bytes[len] = b'0' + self.rank / 100;
            len += 1;
        }
        if self.rank >= 10 {
            bytes[len] = b'0' + self.rank / 10 % 10;
            len += 1;
        }
        bytes[len] = b'0' + self.rank % 10;
        len += 1;

        Pattern { bytes, len }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            char::from(self.orientation.symbol()),
            char::from(self.suite.symbol()),
            self.rank
        )
    }
}

/// The byte pattern of one card: orientation, suite, then the decimal rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    bytes: [u8; PATTERN_CAPACITY],
    len: usize,
}

impl Pattern {
    /// Returns the serialized bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Returns the pattern length, `2 + digits(rank)`.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a pattern holds at least three bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fills `buf` with as many whole copies of the pattern as fit and
    /// zeroes the remainder.
    ///
    /// Returns the number of copies written.
    ///
    /// # Example
    ///
    /// ```
    /// use devtarot::{Card, Orientation, Suite};
    ///
    /// let card = Card::new(Orientation::Upright, Suite::Trumps, 5).unwrap();
    /// let mut buf = [0xff; 10];
    /// assert_eq!(card.pattern().tile(&mut buf), 3);
    /// assert_eq!(&buf, b"+T5+T5+T5\0");
    /// ```
    pub fn tile(&self, buf: &mut [u8]) -> usize {
        let pattern = self.as_bytes();
        let mut chunks = buf.chunks_exact_mut(pattern.len());
        let mut copies = 0;
        for chunk in &mut chunks {
            chunk.copy_from_slice(pattern);
            copies += 1;
        }
        chunks.into_remainder().fill(0);
        copies
    }
}
