use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, TieBreak};

/// One hand category: recognizes itself in an analysis and builds its tie-break key.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    /// `Some(key)` when the analyzed hand belongs to this category.
    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak>;
}

// ============================================================================
// Detectors, in the order they are tried
// ============================================================================

/// Four cards of one rank; key = [quad, highest other rank]
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        let (quad, kicker) = analysis.rank_groups.quad_with_kicker()?;
        Some(TieBreak::new(&[quad, kicker]))
    }
}

/// Trips plus a second group of two or more; key = [trips, pair]
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        let (trips, pair) = analysis.rank_groups.full_house()?;
        Some(TieBreak::new(&[trips, pair]))
    }
}

/// Five consecutive ranks within the flush suit; key = [top]
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        if !analysis.suit_info.is_flush() {
            return None;
        }
        let top = analysis.straight_info.top_rank?;
        Some(TieBreak::new(&[top]))
    }
}

/// Five or more of one suit; key = five highest ranks of that suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        analysis.suit_info.is_flush().then(|| TieBreak::new(&analysis.suit_info.flush_ranks))
    }
}

/// Five consecutive ranks in any suits; key = [top]
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        let top = analysis.straight_info.top_rank?;
        Some(TieBreak::new(&[top]))
    }
}

/// Groups whose leading counts match `counts`; key = ranks of the first `key_len` groups.
///
/// Trips and two pair keep three groups, one pair four, high card five.
pub struct GroupDetector {
    category: Category,
    counts: &'static [u8],
    key_len: usize,
}

impl CategoryDetector for GroupDetector {
    fn category(&self) -> Category {
        self.category
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        let groups = &analysis.rank_groups;
        let matches = self.counts.iter().enumerate().all(|(i, &c)| groups.count_at(i) == c);
        matches.then(|| TieBreak::new(&groups.top_ranks(self.key_len)))
    }
}

pub const THREE_OF_A_KIND: GroupDetector =
    GroupDetector { category: Category::ThreeOfAKind, counts: &[3], key_len: 3 };
pub const TWO_PAIR: GroupDetector =
    GroupDetector { category: Category::TwoPair, counts: &[2, 2], key_len: 3 };
pub const ONE_PAIR: GroupDetector =
    GroupDetector { category: Category::OnePair, counts: &[2], key_len: 4 };
pub const HIGH_CARD: GroupDetector =
    GroupDetector { category: Category::HighCard, counts: &[], key_len: 5 };

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &FourOfAKindDetector,
    &FullHouseDetector,
    &StraightFlushDetector,
    &FlushDetector,
    &StraightDetector,
    &THREE_OF_A_KIND,
    &TWO_PAIR,
    &ONE_PAIR,
    &HIGH_CARD,
];
