//! Card model and pattern tests.

use std::collections::HashSet;

use devtarot::{
    Card, CardError, MAJOR_ARCANA_COUNT, MINOR_ARCANA_COUNT, ORIENTATIONS, Orientation, SUITES,
    Suite,
};

fn card(orientation: Orientation, suite: Suite, rank: u8) -> Card {
    Card::new(orientation, suite, rank).unwrap()
}

#[test]
fn symbols_match_alphabets() {
    for (orientation, &symbol) in Orientation::ALL.iter().zip(ORIENTATIONS.iter()) {
        assert_eq!(orientation.symbol(), symbol);
        assert_eq!(Orientation::from_symbol(symbol), Some(*orientation));
    }
    for (suite, &symbol) in Suite::ALL.iter().zip(SUITES.iter()) {
        assert_eq!(suite.symbol(), symbol);
        assert_eq!(Suite::from_symbol(symbol), Some(*suite));
    }
    assert!(Suite::Trumps.is_major());
    assert!(Suite::ALL[1..].iter().all(|suite| !suite.is_major()));
}

#[test]
fn new_validates_rank_against_suite() {
    assert!(Card::new(Orientation::Upright, Suite::Trumps, 0).is_ok());
    assert!(Card::new(Orientation::Upright, Suite::Trumps, 21).is_ok());
    assert_eq!(
        Card::new(Orientation::Upright, Suite::Trumps, MAJOR_ARCANA_COUNT),
        Err(CardError::RankOutOfRange {
            suite: Suite::Trumps,
            rank: 22
        })
    );

    assert!(Card::new(Orientation::Reversed, Suite::Wands, 1).is_ok());
    assert!(Card::new(Orientation::Reversed, Suite::Wands, MINOR_ARCANA_COUNT).is_ok());
    assert_eq!(
        Card::new(Orientation::Reversed, Suite::Wands, 0),
        Err(CardError::RankOutOfRange {
            suite: Suite::Wands,
            rank: 0
        })
    );
    assert!(Card::new(Orientation::Reversed, Suite::Cups, 15).is_err());
}

#[test]
fn from_seed_examples() {
    assert_eq!(Card::from_seed(0, true), card(Orientation::Upright, Suite::Trumps, 0));
    assert_eq!(Card::from_seed(5, true), card(Orientation::Reversed, Suite::Trumps, 5));
    assert_eq!(Card::from_seed(5, false), card(Orientation::Upright, Suite::Trumps, 5));
    assert_eq!(Card::from_seed(41, true), card(Orientation::Reversed, Suite::Cups, 14));
    assert_eq!(Card::from_seed(7, true), card(Orientation::Reversed, Suite::Swords, 8));
    assert_eq!(Card::from_seed(1234, true), card(Orientation::Upright, Suite::Wands, 3));
}

#[test]
fn from_seed_keeps_rank_in_range() {
    for seed in (0..1 << 16).chain([(1 << 24) - 1, u32::MAX]) {
        let drawn = Card::from_seed(seed, true);
        assert!(
            drawn.suite().ranks().contains(&drawn.rank()),
            "seed {seed} drew {drawn}"
        );
        if drawn.is_major() {
            assert!(drawn.rank() < MAJOR_ARCANA_COUNT);
        } else {
            assert!((1..=MINOR_ARCANA_COUNT).contains(&drawn.rank()));
        }
    }
}

#[test]
fn from_seed_without_reversal_is_upright() {
    for seed in 0..1000 {
        assert_eq!(Card::from_seed(seed, false).orientation(), Orientation::Upright);
    }
}

#[test]
fn every_card_of_the_deck_is_reachable() {
    let drawn: HashSet<Card> = (0..770).map(|seed| Card::from_seed(seed, false)).collect();
    assert_eq!(
        drawn.len(),
        usize::from(MAJOR_ARCANA_COUNT) + 4 * usize::from(MINOR_ARCANA_COUNT)
    );
}

#[test]
fn pattern_bytes_and_length() {
    let upright_five = card(Orientation::Upright, Suite::Trumps, 5).pattern();
    assert_eq!(upright_five.as_bytes(), b"+T5");
    assert_eq!(upright_five.len(), 3);
    assert!(!upright_five.is_empty());

    let reversed_fourteen = card(Orientation::Reversed, Suite::Cups, 14).pattern();
    assert_eq!(reversed_fourteen.as_bytes(), b"-C14");
    assert_eq!(reversed_fourteen.len(), 4);

    assert_eq!(card(Orientation::Upright, Suite::Trumps, 0).pattern().as_bytes(), b"+T0");
    assert_eq!(card(Orientation::Upright, Suite::Pentacles, 10).pattern().as_bytes(), b"+P10");
}

#[test]
fn pattern_matches_display() {
    for seed in 0..770 {
        let drawn = Card::from_seed(seed, true);
        let pattern = drawn.pattern();
        assert_eq!(pattern.as_bytes(), drawn.to_string().as_bytes());
        let digits = if drawn.rank() >= 10 { 2 } else { 1 };
        assert_eq!(pattern.len(), 2 + digits);
    }
}

#[test]
fn tile_writes_whole_copies_and_zeroes_tail() {
    let pattern = card(Orientation::Upright, Suite::Trumps, 5).pattern();
    let mut buf = [0xaa; 10];
    assert_eq!(pattern.tile(&mut buf), 3);
    assert_eq!(&buf, b"+T5+T5+T5\0");

    let pattern = card(Orientation::Reversed, Suite::Cups, 14).pattern();
    let mut buf = [0xaa; 9];
    assert_eq!(pattern.tile(&mut buf), 2);
    assert_eq!(&buf, b"-C14-C14\0");

    let mut exact = [0xaa; 8];
    assert_eq!(pattern.tile(&mut exact), 2);
    assert_eq!(&exact, b"-C14-C14");
}

#[test]
fn tile_short_and_empty_buffers() {
    let pattern = card(Orientation::Reversed, Suite::Cups, 14).pattern();

    let mut short = [0xaa; 3];
    assert_eq!(pattern.tile(&mut short), 0);
    assert_eq!(short, [0; 3]);

    let mut empty: [u8; 0] = [];
    assert_eq!(pattern.tile(&mut empty), 0);
}

#[test]
fn tile_is_deterministic() {
    let pattern = card(Orientation::Reversed, Suite::Swords, 8).pattern();
    let mut first = vec![0xaa; 37];
    let mut second = vec![0x55; 37];
    pattern.tile(&mut first);
    pattern.tile(&mut second);
    assert_eq!(first, second);
}

#[test]
fn from_pattern_round_trips_drawn_cards() {
    for seed in 0..770 {
        let drawn = Card::from_seed(seed, true);
        assert_eq!(Card::from_pattern(drawn.pattern().as_bytes()), Ok(drawn));
    }
}

#[test]
fn from_pattern_errors() {
    assert_eq!(Card::from_pattern(b""), Err(CardError::Truncated));
    assert_eq!(Card::from_pattern(b"+"), Err(CardError::Truncated));
    assert_eq!(Card::from_pattern(b"+T"), Err(CardError::InvalidRank));
    assert_eq!(Card::from_pattern(b"xT1"), Err(CardError::InvalidOrientation(b'x')));
    assert_eq!(Card::from_pattern(b"+X1"), Err(CardError::InvalidSuite(b'X')));
    assert_eq!(Card::from_pattern(b"+T05"), Err(CardError::InvalidRank));
    assert_eq!(Card::from_pattern(b"+T-1"), Err(CardError::InvalidRank));
    assert_eq!(Card::from_pattern(b"+T1000"), Err(CardError::InvalidRank));
    assert_eq!(Card::from_pattern(b"+T256"), Err(CardError::InvalidRank));
    assert_eq!(
        Card::from_pattern(b"+T22"),
        Err(CardError::RankOutOfRange {
            suite: Suite::Trumps,
            rank: 22
        })
    );
    assert_eq!(
        Card::from_pattern(b"-C0"),
        Err(CardError::RankOutOfRange {
            suite: Suite::Cups,
            rank: 0
        })
    );
}
