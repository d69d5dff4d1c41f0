use crate::cards::{Card, Rank};

/// Ranks grouped by how often they appear, sorted by (count desc, rank desc).
///
/// Example: AAKKK72 groups as [(King, 3), (Ace, 2), (Seven, 1), (Two, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        // indexed by rank strength, 2..=14
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().strength() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|r| {
                let c = counts[r.strength() as usize];
                (c > 0).then_some((r, c))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Size of the `i`th group, 0 when there are fewer groups.
    pub fn count_at(&self, i: usize) -> u8 {
        self.groups.get(i).map_or(0, |&(_, c)| c)
    }

    /// Rank of the `i`th group.
    pub fn rank_at(&self, i: usize) -> Option<Rank> {
        self.groups.get(i).map(|&(r, _)| r)
    }

    /// Ranks of the first `n` groups, in group order.
    pub fn top_ranks(&self, n: usize) -> Vec<Rank> {
        self.groups.iter().take(n).map(|&(r, _)| r).collect()
    }

    /// Quad rank and the highest rank outside it.
    pub fn quad_with_kicker(&self) -> Option<(Rank, Rank)> {
        if self.count_at(0) < 4 {
            return None;
        }
        let quad = self.rank_at(0)?;
        let kicker = self.groups[1..].iter().map(|&(r, _)| r).max()?;
        Some((quad, kicker))
    }

    /// Trip rank and pair rank. With two trips the lower one plays as the pair.
    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        if self.count_at(0) == 3 && self.count_at(1) >= 2 {
            return Some((self.rank_at(0)?, self.rank_at(1)?));
        }
        None
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
