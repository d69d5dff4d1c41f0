use crate::cards::Rank;

const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];

/// The straight found in a pool of ranks, identified by its top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Find the highest run of five consecutive ranks in `ranks` (any order,
    /// duplicates allowed). The wheel A-2-3-4-5 counts with Five on top, but
    /// only when no higher run exists.
    pub fn detect(ranks: &[Rank]) -> Self {
        let mut uniq = ranks.to_vec();
        uniq.sort_by(|a, b| b.cmp(a));
        uniq.dedup();

        let run = uniq
            .windows(5)
            .find(|w| w[0].strength() - w[4].strength() == 4)
            .map(|w| w[0]);
        if run.is_some() {
            return StraightInfo { top_rank: run };
        }

        if WHEEL.iter().all(|r| uniq.contains(r)) {
            return StraightInfo { top_rank: Some(Rank::Five) };
        }

        StraightInfo { top_rank: None }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn finds_run_among_seven() {
        let info = StraightInfo::detect(&[Two, Nine, King, Ten, Jack, Queen, Four]);
        assert_eq!(info.top_rank, Some(King));
    }

    #[test]
    fn prefers_highest_run() {
        let info = StraightInfo::detect(&[Four, Five, Six, Seven, Eight, Nine, Ten]);
        assert_eq!(info.top_rank, Some(Ten));
    }

    #[test]
    fn duplicates_do_not_break_runs() {
        let info = StraightInfo::detect(&[Five, Five, Six, Seven, Seven, Eight, Nine]);
        assert_eq!(info.top_rank, Some(Nine));
    }

    #[test]
    fn wheel_plays_five_high() {
        let info = StraightInfo::detect(&[Ace, Two, Three, Four, Five, Nine, King]);
        assert_eq!(info.top_rank, Some(Five));
    }

    #[test]
    fn six_high_beats_wheel_in_same_pool() {
        let info = StraightInfo::detect(&[Ace, Two, Three, Four, Five, Six, King]);
        assert_eq!(info.top_rank, Some(Six));
    }

    #[test]
    fn broadway() {
        let info = StraightInfo::detect(&[Ace, King, Queen, Jack, Ten, Two, Two]);
        assert_eq!(info.top_rank, Some(Ace));
    }

    #[test]
    fn gap_is_not_a_straight() {
        let info = StraightInfo::detect(&[Ace, King, Queen, Jack, Nine, Three, Two]);
        assert!(!info.is_straight());
    }

    #[test]
    fn too_few_ranks() {
        assert!(!StraightInfo::detect(&[Ace, King, Queen]).is_straight());
    }
}
