use crate::betting::{ActionProvider, BettingRound, RoundOutcome};
use crate::cards::Card;
use crate::config::{is_positive, ConfigError, TableConfig};
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate, EvalError, Evaluation};
use crate::observer::TableObserver;
use crate::player::Player;
use crate::Chips;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// Community cards turned face up when this street opens (after a burn).
    pub const fn reveals(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            Street::PreFlop | Street::Showdown => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Street::PreFlop => "Pre-flop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
        }
    }
}

/// Faults that abort a hand. Stacks are left as they were before the hand.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TableError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("showdown evaluation failed: {0}")]
    Evaluation(#[from] EvalError),
    #[error("need at least 2 players with chips, have {0}")]
    NotEnoughPlayers(usize),
    #[error("no player named '{0}' at the table")]
    UnknownPlayer(String),
    #[error("reload amount must be positive, got {0}")]
    NonPositiveReload(Chips),
}

/// One player's hand as revealed at showdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowdownEntry {
    pub seat: usize,
    pub name: String,
    pub hole: [Card; 2],
    pub evaluation: Evaluation,
}

/// How a hand ended and who was paid.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct HandSummary {
    pub hand: u64,
    /// `Showdown`, or the street on which everyone else folded.
    pub last_street: Street,
    pub community: Vec<Card>,
    pub pot: Chips,
    pub winners: Vec<String>,
    /// What each winner received.
    pub share: Chips,
    /// Empty when the hand was won uncontested.
    pub showdown: Vec<ShowdownEntry>,
}

impl HandSummary {
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Indices (into `entries`) of the best hands.
///
/// Starts from the first entry; a strictly better hand replaces the winner
/// set and an equal one joins it, so exact ties all win.
pub fn showdown_winners(entries: &[ShowdownEntry]) -> Vec<usize> {
    let mut best: Option<Evaluation> = None;
    let mut winners = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        match best.map(|b| entry.evaluation.cmp(&b)) {
            None | Some(Ordering::Greater) => {
                best = Some(entry.evaluation);
                winners.clear();
                winners.push(i);
            }
            Some(Ordering::Equal) => winners.push(i),
            Some(Ordering::Less) => {}
        }
    }
    winners
}

struct Outcome {
    last_street: Street,
    winners: Vec<usize>,
    showdown: Vec<ShowdownEntry>,
}

impl Outcome {
    fn uncontested(street: Street, seat: usize) -> Self {
        Self { last_street: street, winners: vec![seat], showdown: Vec::new() }
    }
}

/// A session at one table: seats, blinds, deck, and pot.
///
/// Call [`Table::play_hand`] for each hand and [`Table::prepare_next_hand`]
/// between hands to let players leave or reload and to move the blinds.
#[derive(Debug)]
#[non_exhaustive]
pub struct Table {
    small_blind: Chips,
    big_blind: Chips,

    deck: Deck,
    players: Vec<Player>,
    small_blind_index: usize,
    big_blind_index: usize,
    pot: Chips,
    current_bet: Chips,
    raise_increment: Chips,
    community: Vec<Card>,
    street: Street,
    hands_played: u64,
}

impl Table {
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut deck = config.seed.map_or_else(Deck::new, Deck::seeded);
        let players: Vec<Player> = config
            .players
            .iter()
            .map(|name| Player::new(name.as_str(), config.starting_stack))
            .collect();
        let n = players.len();
        let small_blind_index = match &config.first_small_blind {
            Some(name) => players
                .iter()
                .position(|p| p.name() == name.as_str())
                .ok_or_else(|| ConfigError::UnknownSmallBlind(name.clone()))?,
            None => deck.pick_index(n),
        };
        Ok(Self {
            small_blind: config.small_blind,
            big_blind: config.big_blind,
            deck,
            players,
            small_blind_index,
            big_blind_index: (small_blind_index + 1) % n,
            pot: 0.0,
            current_bet: 0.0,
            raise_increment: config.big_blind,
            community: Vec::new(),
            street: Street::PreFlop,
            hands_played: 0,
        })
    }

    /// Returns the players in seating order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub fn small_blind_index(&self) -> usize {
        self.small_blind_index
    }

    pub fn big_blind_index(&self) -> usize {
        self.big_blind_index
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }

    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    pub fn raise_increment(&self) -> Chips {
        self.raise_increment
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    /// Play one full hand: blinds, deal, up to four betting rounds, showdown, settlement.
    ///
    /// A deck or evaluation fault aborts the hand and returns the error; no
    /// chips change hands in that case.
    pub fn play_hand(
        &mut self,
        actions: &mut dyn ActionProvider,
        observer: &mut dyn TableObserver,
    ) -> Result<HandSummary, TableError> {
        self.start_hand()?;
        observer.hand_started(
            self.hands_played,
            &self.players[self.small_blind_index],
            &self.players[self.big_blind_index],
        );
        let outcome = match self.run_streets(actions, observer) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("hand {} aborted during {:?}: {e}", self.hands_played, self.street);
                self.abort_hand();
                return Err(e);
            }
        };
        let summary = self.settle(outcome);
        observer.hand_settled(&summary);
        Ok(summary)
    }

    /// Between hands: drop `leaving` from the seating order, reset reloading
    /// players' stacks to the given amounts, then rotate the blinds so the old
    /// big blind (or the next remaining seat) becomes the small blind.
    pub fn prepare_next_hand(
        &mut self,
        leaving: &[&str],
        reloads: &[(&str, Chips)],
    ) -> Result<(), TableError> {
        for name in leaving.iter().chain(reloads.iter().map(|(name, _)| name)) {
            self.seat_of(name)?;
        }
        if let Some(&(_, amount)) = reloads.iter().find(|(_, amount)| !is_positive(*amount)) {
            return Err(TableError::NonPositiveReload(amount));
        }

        let keep: Vec<bool> =
            self.players.iter().map(|p| !leaving.contains(&p.name())).collect();
        let remaining = keep.iter().filter(|&&k| k).count();
        if remaining < 2 {
            return Err(TableError::NotEnoughPlayers(remaining));
        }
        let n = self.players.len();
        let old_index = (0..n)
            .map(|k| (self.big_blind_index + k) % n)
            .find(|&i| keep[i])
            .unwrap_or(0);
        let new_small_blind = keep[..old_index].iter().filter(|&&k| k).count();

        for name in leaving {
            log::info!("{name} leaves the table");
        }
        self.players = std::mem::take(&mut self.players)
            .into_iter()
            .zip(keep)
            .filter_map(|(p, k)| k.then_some(p))
            .collect();
        for &(name, amount) in reloads {
            let seat = self.seat_of(name)?;
            log::info!("{name} reloads to {amount}");
            self.players[seat].stack = amount;
        }

        self.small_blind_index = new_small_blind;
        if self.players[new_small_blind].stack <= 0.0 {
            self.small_blind_index = self.next_seat_after(new_small_blind, |p| p.stack > 0.0);
        }
        self.big_blind_index = self.next_seat_after(self.small_blind_index, |p| p.stack > 0.0);
        self.street = Street::PreFlop;
        Ok(())
    }

    fn seat_of(&self, name: &str) -> Result<usize, TableError> {
        self.players
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| TableError::UnknownPlayer(name.to_string()))
    }

    /// First seat after `from` (wrapping) whose player satisfies `pred`; `from` if none.
    fn next_seat_after(&self, from: usize, pred: impl Fn(&Player) -> bool) -> usize {
        let n = self.players.len();
        (1..=n).map(|k| (from + k) % n).find(|&i| pred(&self.players[i])).unwrap_or(from)
    }

    /// Every seat once, starting at `start`.
    fn order_from(&self, start: usize) -> Vec<usize> {
        let n = self.players.len();
        (0..n).map(|k| (start + k) % n).collect()
    }

    fn start_hand(&mut self) -> Result<(), TableError> {
        self.deck.shuffle_and_reset();
        self.community.clear();
        self.pot = 0.0;
        self.street = Street::PreFlop;
        self.raise_increment = self.big_blind;
        for p in &mut self.players {
            p.reset_for_hand();
        }
        let seated = self.players.iter().filter(|p| p.is_active()).count();
        if seated < 2 {
            return Err(TableError::NotEnoughPlayers(seated));
        }
        if !self.players[self.small_blind_index].is_active() {
            self.small_blind_index =
                self.next_seat_after(self.small_blind_index, Player::is_active);
        }
        self.big_blind_index = self.next_seat_after(self.small_blind_index, Player::is_active);

        self.hands_played += 1;
        let small = self.post_blind(self.small_blind_index, self.small_blind);
        let big = self.post_blind(self.big_blind_index, self.big_blind);
        self.current_bet = small.max(big);
        log::info!(
            "hand {}: {} posts {small}, {} posts {big}",
            self.hands_played,
            self.players[self.small_blind_index].name(),
            self.players[self.big_blind_index].name()
        );
        Ok(())
    }

    fn post_blind(&mut self, seat: usize, amount: Chips) -> Chips {
        let p = &mut self.players[seat];
        let paid = amount.min(p.stack);
        p.street_contribution = paid;
        paid
    }

    fn run_streets(
        &mut self,
        actions: &mut dyn ActionProvider,
        observer: &mut dyn TableObserver,
    ) -> Result<Outcome, TableError> {
        let first = self.next_seat_after(self.big_blind_index, Player::is_active);
        let preflop = self.order_from(first);
        for &seat in &preflop {
            if self.players[seat].is_active() {
                self.players[seat].hole = Some([self.deck.draw()?, self.deck.draw()?]);
            }
        }
        observer.street_dealt(Street::PreFlop, &self.community);
        if let RoundOutcome::SingleSurvivor(seat) =
            self.betting(Street::PreFlop, preflop, actions, observer)
        {
            return Ok(Outcome::uncontested(Street::PreFlop, seat));
        }

        for street in [Street::Flop, Street::Turn, Street::River] {
            self.deck.draw()?;
            let revealed = self.deck.draw_many(street.reveals())?;
            self.community.extend(revealed);
            self.street = street;
            self.current_bet = 0.0;
            log::info!("{}: {}", street.label(), cards_text(&self.community));
            observer.street_dealt(street, &self.community);

            let order = self.order_from(self.small_blind_index);
            let outcome = self.betting(street, order, actions, observer);
            if street == Street::Flop {
                self.raise_increment *= 2.0;
            }
            if let RoundOutcome::SingleSurvivor(seat) = outcome {
                return Ok(Outcome::uncontested(street, seat));
            }
        }

        self.street = Street::Showdown;
        let showdown = self.showdown()?;
        observer.showdown(&showdown);
        let winners = showdown_winners(&showdown).into_iter().map(|i| showdown[i].seat).collect();
        Ok(Outcome { last_street: Street::Showdown, winners, showdown })
    }

    fn betting(
        &mut self,
        street: Street,
        order: Vec<usize>,
        actions: &mut dyn ActionProvider,
        observer: &mut dyn TableObserver,
    ) -> RoundOutcome {
        let mut round = BettingRound::new(street, order, self.current_bet, self.raise_increment);
        let outcome = round.run(&mut self.players, &self.community, self.pot, actions, observer);
        self.current_bet = round.current_bet();
        let swept: Chips = self.players.iter_mut().map(Player::sweep).sum();
        self.pot += swept;
        log::debug!("{street:?}: swept {swept} into the pot, now {}", self.pot);
        outcome
    }

    /// Evaluate every active player, in post-flop order from the small blind.
    fn showdown(&self) -> Result<Vec<ShowdownEntry>, TableError> {
        let mut entries = Vec::new();
        for seat in self.order_from(self.small_blind_index) {
            let p = &self.players[seat];
            if !p.is_active() {
                continue;
            }
            let hole = p.hole.ok_or(EvalError::InvalidHandSize(self.community.len()))?;
            let mut cards = hole.to_vec();
            cards.extend_from_slice(&self.community);
            let evaluation = evaluate(&cards)?;
            log::info!("{} shows {} for {evaluation}", p.name(), cards_text(&hole));
            entries.push(ShowdownEntry { seat, name: p.name().to_string(), hole, evaluation });
        }
        Ok(entries)
    }

    /// Deduct every contribution and split the pot evenly among `outcome.winners`.
    fn settle(&mut self, outcome: Outcome) -> HandSummary {
        debug_assert!(!outcome.winners.is_empty());
        let pot = self.pot;
        for p in &mut self.players {
            p.sweep();
            p.stack -= p.swept;
            p.swept = 0.0;
        }
        let share = pot / outcome.winners.len().max(1) as Chips;
        for &seat in &outcome.winners {
            self.players[seat].stack += share;
        }
        self.pot = 0.0;
        self.current_bet = 0.0;

        let winners: Vec<String> =
            outcome.winners.iter().map(|&seat| self.players[seat].name().to_string()).collect();
        log::info!(
            "hand {}: {} take {share} each from a pot of {pot}",
            self.hands_played,
            winners.join(", ")
        );
        HandSummary {
            hand: self.hands_played,
            last_street: outcome.last_street,
            community: self.community.clone(),
            pot,
            winners,
            share,
            showdown: outcome.showdown,
        }
    }

    fn abort_hand(&mut self) {
        for p in &mut self.players {
            p.street_contribution = 0.0;
            p.swept = 0.0;
            p.hole = None;
            p.active = false;
        }
        self.pot = 0.0;
        self.current_bet = 0.0;
        self.community.clear();
    }
}

fn cards_text(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{PassiveAgent, ScriptedAgent};
    use crate::betting::Action;
    use crate::cards::parse_cards;
    use crate::observer::{EventLog, Silent};

    fn table(names: &[&str], first_small_blind: &str) -> Table {
        let config = TableConfig::new(names.iter().copied(), 100.0, 1.0, 2.0)
            .with_small_blind(first_small_blind)
            .with_seed(5);
        Table::new(config).unwrap()
    }

    fn hole(s: &str) -> Option<[Card; 2]> {
        let cards = parse_cards(s).unwrap();
        Some([cards[0], cards[1]])
    }

    #[test]
    fn designated_small_blind_and_next_seat_big_blind() {
        let t = table(&["A", "B", "C"], "C");
        assert_eq!(t.small_blind_index(), 2);
        assert_eq!(t.big_blind_index(), 0);
    }

    #[test]
    fn random_small_blind_is_reproducible_by_seed() {
        let mk = || {
            let config = TableConfig::new(["A", "B", "C", "D"], 10.0, 1.0, 2.0).with_seed(99);
            Table::new(config).unwrap()
        };
        assert_eq!(mk().small_blind_index(), mk().small_blind_index());
    }

    #[test]
    fn blinds_are_posted_at_hand_start() {
        let mut t = table(&["A", "B", "C"], "A");
        t.start_hand().unwrap();
        assert_eq!(t.players[0].street_contribution(), 1.0);
        assert_eq!(t.players[1].street_contribution(), 2.0);
        assert_eq!(t.players[2].street_contribution(), 0.0);
        assert_eq!(t.current_bet(), 2.0);
        assert_eq!(t.deck.len(), 52);
    }

    #[test]
    fn uncontested_preflop_pays_big_blind() {
        let mut t = table(&["A", "B", "C"], "A");
        let mut script = ScriptedAgent::new().with("C", [Action::Fold]).with("A", [Action::Fold]);
        let summary = t.play_hand(&mut script, &mut Silent).unwrap();
        assert_eq!(summary.last_street, Street::PreFlop);
        assert_eq!(summary.winners, vec!["B".to_string()]);
        assert!(summary.community.is_empty());
        assert_eq!(t.players[0].stack(), 99.0);
        assert_eq!(t.players[1].stack(), 101.0);
        assert_eq!(t.players[2].stack(), 100.0);
        assert_eq!(t.pot(), 0.0);
    }

    #[test]
    fn passive_hand_reaches_showdown_with_full_board() {
        let mut t = table(&["A", "B", "C"], "A");
        let mut log = EventLog::new();
        let summary = t.play_hand(&mut PassiveAgent, &mut log).unwrap();
        assert_eq!(summary.last_street, Street::Showdown);
        assert_eq!(summary.community.len(), 5);
        assert_eq!(summary.showdown.len(), 3);
        assert_eq!(summary.pot, 6.0);
        assert_eq!(log.streets(), vec![Street::PreFlop, Street::Flop, Street::Turn, Street::River]);
        // 3 hole pairs, 3 burns, 5 community
        assert_eq!(t.deck.len(), 52 - 6 - 3 - 5);
        let total: Chips = t.players.iter().map(Player::stack).sum();
        assert_eq!(total, 300.0);
    }

    #[test]
    fn raise_increment_doubles_after_the_flop() {
        let mut t = table(&["A", "B"], "A");
        t.play_hand(&mut PassiveAgent, &mut Silent).unwrap();
        assert_eq!(t.raise_increment(), 4.0);
        t.prepare_next_hand(&[], &[]).unwrap();
        t.start_hand().unwrap();
        assert_eq!(t.raise_increment(), 2.0);
    }

    #[test]
    fn tied_showdown_splits_pot_without_rounding() {
        let mut t = table(&["A", "B", "C"], "A");
        t.start_hand().unwrap();
        t.community = parse_cards("As Ks Qd Jh 9c").unwrap();
        t.players[0].hole = hole("2c 3d");
        t.players[1].hole = hole("2d 3h");
        t.players[2].hole = hole("4c 5c");
        for p in &mut t.players {
            p.street_contribution = 1.0;
            p.sweep();
        }
        t.pot = 3.0;
        t.players[2].fold();

        let showdown = t.showdown().unwrap();
        let winners: Vec<usize> =
            showdown_winners(&showdown).into_iter().map(|i| showdown[i].seat).collect();
        assert_eq!(winners, vec![0, 1]);

        let summary = t.settle(Outcome { last_street: Street::Showdown, winners, showdown });
        assert!(summary.is_split());
        assert_eq!(summary.share, 1.5);
        assert_eq!(t.players[0].stack(), 100.5);
        assert_eq!(t.players[1].stack(), 100.5);
        assert_eq!(t.players[2].stack(), 99.0);
    }

    #[test]
    fn deck_fault_aborts_without_moving_chips() {
        let mut t = table(&["A", "B", "C"], "A");
        t.start_hand().unwrap();
        t.deck.draw_many(50).unwrap();
        let err = t.run_streets(&mut PassiveAgent, &mut Silent).err();
        assert_eq!(err, Some(TableError::Deck(DeckError::Exhausted)));
        t.abort_hand();
        assert!(t.players.iter().all(|p| p.stack() == 100.0));
        assert_eq!(t.pot(), 0.0);
    }

    #[test]
    fn missing_hole_cards_fail_evaluation() {
        let mut t = table(&["A", "B"], "A");
        t.start_hand().unwrap();
        t.community = parse_cards("As Ks Qd Jh 9c").unwrap();
        t.players[1].hole = hole("2c 3d");
        assert_eq!(t.showdown().err(), Some(TableError::Evaluation(EvalError::InvalidHandSize(5))));
    }

    #[test]
    fn seats_are_found_by_name() {
        let t = table(&["A", "B", "C"], "A");
        assert_eq!(t.seat_of("C"), Ok(2));
        assert_eq!(t.seat_of("Z"), Err(TableError::UnknownPlayer("Z".into())));
    }

    #[test]
    fn busted_player_is_skipped_for_blinds() {
        let mut t = table(&["A", "B", "C"], "A");
        t.players[0].stack = 0.0;
        t.start_hand().unwrap();
        assert_eq!(t.small_blind_index(), 1);
        assert_eq!(t.big_blind_index(), 2);
        assert!(t.players[0].hole_cards().is_none());
    }

    #[test]
    fn start_fails_with_one_funded_player() {
        let mut t = table(&["A", "B"], "A");
        t.players[1].stack = 0.0;
        assert_eq!(
            t.play_hand(&mut PassiveAgent, &mut Silent).err(),
            Some(TableError::NotEnoughPlayers(1))
        );
    }
}
