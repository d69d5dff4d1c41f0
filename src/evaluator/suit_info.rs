use crate::cards::{Card, Rank, Suit};

/// Minimum cards of one suit for a flush.
const FLUSH_LEN: u8 = 5;

/// The flush-eligible suit of a hand, if any, with that suit's ranks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
    /// Ranks of the flush suit, descending. Empty without a flush.
    pub flush_ranks: Vec<Rank>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts: Vec<(Suit, u8)> = Suit::ALL
            .iter()
            .map(|&s| (s, cards.iter().filter(|c| c.suit() == s).count() as u8))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        match counts.first() {
            Some(&(suit, n)) if n >= FLUSH_LEN => {
                let mut flush_ranks: Vec<Rank> =
                    cards.iter().filter(|c| c.suit() == suit).map(|c| c.rank()).collect();
                flush_ranks.sort_by(|a, b| b.cmp(a));
                flush_ranks.dedup();
                SuitInfo { flush_suit: Some(suit), flush_ranks }
            }
            _ => SuitInfo { flush_suit: None, flush_ranks: Vec::new() },
        }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}
