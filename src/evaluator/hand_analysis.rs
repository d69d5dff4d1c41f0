use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Everything the category detectors need, computed once per evaluation.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    /// Straight search result. Restricted to the flush suit when one exists,
    /// so a straight here together with a flush is a straight flush.
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let rank_groups = RankGroups::from_cards(cards);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = if suit_info.is_flush() {
            StraightInfo::detect(&suit_info.flush_ranks)
        } else {
            let ranks: Vec<Rank> = cards.iter().map(|c| c.rank()).collect();
            StraightInfo::detect(&ranks)
        };
        Self { rank_groups, suit_info, straight_info }
    }
}
