use crate::cards::{Card, Rank, Suit};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted: no cards remain to draw")]
    Exhausted,
}

/// The undealt cards of one hand plus the table's only source of randomness.
///
/// Draws remove a uniformly random card, so the deck never needs shuffling;
/// `remaining` plus everything drawn since the last reset is always the full 52.
#[derive(Debug, Clone)]
pub struct Deck {
    remaining: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// A full deck seeded from the thread RNG.
    pub fn new() -> Self {
        let seed: u64 = rand::rng().random();
        Self::seeded(seed)
    }

    /// A full deck whose draw sequence is reproducible from `seed`.
    ///
    /// ```
    /// use holdem_table::deck::Deck;
    ///
    /// let mut a = Deck::seeded(42);
    /// let mut b = Deck::seeded(42);
    /// assert_eq!(a.draw_many(5).unwrap(), b.draw_many(5).unwrap());
    /// assert_eq!(a.len(), 47);
    /// ```
    pub fn seeded(seed: u64) -> Self {
        Self { remaining: full_set(), rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Return every card to the deck. The random stream continues, so a seeded
    /// session deals a different (but still reproducible) hand each time.
    pub fn shuffle_and_reset(&mut self) {
        self.remaining = full_set();
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.remaining.contains(&card)
    }

    /// Remove and return one uniformly random card.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.remaining.is_empty() {
            return Err(DeckError::Exhausted);
        }
        let i = self.rng.random_range(0..self.remaining.len());
        Ok(self.remaining.swap_remove(i))
    }

    /// Draw `n` cards; the result is in draw order.
    pub fn draw_many(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        (0..n).map(|_| self.draw()).collect()
    }

    /// Pick a uniformly random index below `n` from the deck's stream.
    pub(crate) fn pick_index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.random_range(0..n)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

fn full_set() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}
