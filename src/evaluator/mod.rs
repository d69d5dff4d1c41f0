pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use core::fmt;

/// Number of cards a showdown evaluation takes: 2 hole + 5 community.
pub const HAND_SIZE: usize = 7;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High-Card",
            Category::OnePair => "One-Pair",
            Category::TwoPair => "Two-Pair",
            Category::ThreeOfAKind => "Three-of-a-Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full-House",
            Category::FourOfAKind => "Four-of-a-Kind",
            Category::StraightFlush => "Straight-Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ranks that break ties inside one category, most significant first.
///
/// The length depends on the category (1 for straights, up to 5 for high card)
/// and comparison is lexicographic by rank strength.
#[derive(Debug, Clone, Copy)]
pub struct TieBreak {
    ranks: [Rank; 5],
    len: u8,
}

impl TieBreak {
    /// Keep at most the first five ranks.
    pub(crate) fn new(ranks: &[Rank]) -> Self {
        let mut buf = [Rank::Two; 5];
        let len = ranks.len().min(5);
        buf[..len].copy_from_slice(&ranks[..len]);
        Self { ranks: buf, len: len as u8 }
    }

    pub fn as_slice(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl PartialEq for TieBreak {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for TieBreak {}

impl Ord for TieBreak {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for TieBreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{r}")?;
        }
        Ok(())
    }
}

/// Result of evaluating seven cards. Ordered by category, then tie-break key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub tie_break: TieBreak,
}

impl Evaluation {
    pub(crate) fn new(category: Category, tie_break: TieBreak) -> Self {
        Self { category, tie_break }
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| self.tie_break.cmp(&other.tie_break))
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.category, self.tie_break)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected exactly {expected} cards to evaluate, got {0}", expected = HAND_SIZE)]
    InvalidHandSize(usize),
}

/// Evaluate exactly seven cards into a category and tie-break key.
///
/// Pure and order independent: any permutation of the input gives the same result.
///
/// ```
/// use holdem_table::cards::parse_cards;
/// use holdem_table::evaluator::{evaluate, Category};
///
/// let eval = evaluate(&parse_cards("Ah 2h 3h 4h 5d 9c Ks").unwrap()).unwrap();
/// assert_eq!(eval.category, Category::Straight);
/// assert_eq!(eval.tie_break.to_string(), "5");
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    if cards.len() != HAND_SIZE {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }
    let analysis = HandAnalysis::new(cards);

    for detector in DETECTORS.iter() {
        if let Some(tie_break) = detector.detect(&analysis) {
            return Ok(Evaluation::new(detector.category(), tie_break));
        }
    }

    // HighCard always matches, but stay total without panicking.
    Ok(Evaluation::new(Category::HighCard, TieBreak::new(&analysis.rank_groups.top_ranks(5))))
}

/// Compare two seven-card hands.
pub fn compare(a: &[Card], b: &[Card]) -> Result<Ordering, EvalError> {
    Ok(evaluate(a)?.cmp(&evaluate(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn eval(s: &str) -> Evaluation {
        evaluate(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn wrong_card_count_is_rejected() {
        let six = parse_cards("As Ks Qs Js 9s 2h").unwrap();
        assert_eq!(evaluate(&six), Err(EvalError::InvalidHandSize(6)));
        let eight = parse_cards("As Ks Qs Js 9s 2h 3h 4h").unwrap();
        assert_eq!(evaluate(&eight), Err(EvalError::InvalidHandSize(8)));
        assert_eq!(evaluate(&[]), Err(EvalError::InvalidHandSize(0)));
    }

    #[test]
    fn category_order_decides_first() {
        let pair = eval("As Ah 2c 5d 7h 9s Jc");
        let two_pair = eval("2s 2h 3c 3d 7h 9s Jc");
        assert!(two_pair > pair);
    }

    #[test]
    fn tie_break_decides_within_category() {
        let kings = eval("Ks Kh 2c 5d 7h 9s Jc");
        let queens = eval("Qs Qh 2c 5d 7h 9s Ac");
        assert_eq!(kings.category, queens.category);
        assert!(kings > queens);
    }

    #[test]
    fn identical_keys_tie() {
        let a = eval("As Kd 9c 7h 4s 3c 2d");
        let b = eval("Ah Kc 9d 7s 4c 3h 2s");
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn six_high_run_outranks_the_wheel_it_contains() {
        let e = eval("Ah 2c 3d 4s 5h 6c Kd");
        assert_eq!(e.to_string(), "Straight [6]");
        assert!(e > eval("Ah 2c 3d 4s 5h 9c Kd"));
    }

    #[test]
    fn display_shows_label_and_key() {
        assert_eq!(eval("2h 2s 2d 7c 7d Kh 3s").to_string(), "Full-House [2,7]");
    }
}
