//! Per-street action collection.
//!
//! A [`BettingRound`] walks the seats in turn order, asks an [`ActionProvider`]
//! for each active seat's action, and repeats full passes until every active
//! contribution is equal or a single player is left.

use crate::cards::Card;
use crate::observer::TableObserver;
use crate::player::Player;
use crate::table::Street;
use crate::Chips;

/// A seat's decision. `Call` is a check when nothing is owed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Call,
    /// Raise by this much over the current bet.
    Raise(Chips),
    Fold,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Call => "Call",
            Action::Raise(_) => "Raise",
            Action::Fold => "Fold",
        }
    }
}

/// Why an action was refused. The seat is asked again; this never leaves the round.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("raise too small: min {min}, got {got}")]
    RaiseTooSmall { min: Chips, got: Chips },
    /// There is a single pot, so a player already all-in can only check or fold
    /// once someone else bets.
    #[error("not enough chips: street total {needed} exceeds available {available}")]
    InsufficientChips { needed: Chips, available: Chips },
    #[error("raise amount must be a finite number")]
    NotFinite,
}

/// What a seat is shown when asked to act.
#[derive(Debug, Clone, Copy)]
pub struct SeatView<'a> {
    pub seat: usize,
    pub player: &'a Player,
    pub street: Street,
    pub community: &'a [Card],
    pub pot: Chips,
    pub current_bet: Chips,
    pub raise_increment: Chips,
}

impl SeatView<'_> {
    /// Chips this seat must add to match the current bet.
    pub fn to_call(&self) -> Chips {
        (self.current_bet - self.player.street_contribution()).max(0.0)
    }

    /// A check is always possible; a call needs the chips behind it.
    pub fn can_call(&self) -> bool {
        self.to_call() <= 0.0 || self.current_bet <= self.player.available()
    }

    pub fn can_raise(&self, amount: Chips) -> bool {
        self.current_bet + amount <= self.player.available()
    }
}

/// The external decision maker for every seat (console, bot, script).
pub trait ActionProvider {
    fn act(&mut self, view: &SeatView<'_>) -> Action;

    /// Called when the last action was refused, before the seat is asked again.
    fn rejected(&mut self, _view: &SeatView<'_>, _error: &ActionError) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Every active player committed the same amount.
    Converged,
    /// Everyone else folded; the seat wins without further streets.
    SingleSurvivor(usize),
}

/// One street of betting over a fixed seat order.
#[derive(Debug, Clone)]
pub struct BettingRound {
    street: Street,
    order: Vec<usize>,
    current_bet: Chips,
    raise_increment: Chips,
}

impl BettingRound {
    pub fn new(
        street: Street,
        order: Vec<usize>,
        current_bet: Chips,
        raise_increment: Chips,
    ) -> Self {
        Self { street, order, current_bet, raise_increment }
    }

    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    /// Collect actions until the round converges or one player remains.
    ///
    /// Each pass either converges, removes a player, or leaves someone short of
    /// a bet that only rises by at least the raise increment and never past a
    /// stack, so the loop terminates for any provider that eventually returns a
    /// valid action.
    pub fn run(
        &mut self,
        players: &mut [Player],
        community: &[Card],
        pot: Chips,
        actions: &mut dyn ActionProvider,
        observer: &mut dyn TableObserver,
    ) -> RoundOutcome {
        let mut pass = 0u32;
        loop {
            pass += 1;
            for i in 0..self.order.len() {
                let seat = self.order[i];
                if !players[seat].active {
                    continue;
                }
                if let Some(last) = sole_survivor(players) {
                    return RoundOutcome::SingleSurvivor(last);
                }
                let action = self.query(seat, players, community, pot, actions);
                self.apply(&mut players[seat], action);
                log::debug!(
                    "{:?} pass {pass}: {} {:?} (street total {}, bet {})",
                    self.street,
                    players[seat].name,
                    action,
                    players[seat].street_contribution,
                    self.current_bet
                );
                observer.action_taken(self.street, &players[seat], action);
            }
            if let Some(last) = sole_survivor(players) {
                return RoundOutcome::SingleSurvivor(last);
            }
            if contributions_equal(players) {
                return RoundOutcome::Converged;
            }
            log::debug!("{:?}: contributions differ after pass {pass}, polling again", self.street);
        }
    }

    fn query(
        &self,
        seat: usize,
        players: &[Player],
        community: &[Card],
        pot: Chips,
        actions: &mut dyn ActionProvider,
    ) -> Action {
        let view = SeatView {
            seat,
            player: &players[seat],
            street: self.street,
            community,
            pot,
            current_bet: self.current_bet,
            raise_increment: self.raise_increment,
        };
        loop {
            let action = actions.act(&view);
            match self.validate(view.player, action) {
                Ok(()) => return action,
                Err(e) => {
                    log::debug!("rejected {:?} from {}: {e}", action, view.player.name);
                    actions.rejected(&view, &e);
                }
            }
        }
    }

    fn validate(&self, player: &Player, action: Action) -> Result<(), ActionError> {
        let target = match action {
            Action::Fold => return Ok(()),
            Action::Call => self.current_bet,
            Action::Raise(amount) => {
                if !amount.is_finite() {
                    return Err(ActionError::NotFinite);
                }
                if amount < self.raise_increment {
                    return Err(ActionError::RaiseTooSmall {
                        min: self.raise_increment,
                        got: amount,
                    });
                }
                self.current_bet + amount
            }
        };
        // Checking is always allowed, even for a short blind.
        if target > player.street_contribution && target > player.available() {
            return Err(ActionError::InsufficientChips {
                needed: target,
                available: player.available(),
            });
        }
        Ok(())
    }

    fn apply(&mut self, player: &mut Player, action: Action) {
        match action {
            Action::Call => {
                player.street_contribution = player.street_contribution.max(self.current_bet);
            }
            Action::Raise(amount) => {
                self.current_bet += amount;
                player.street_contribution = self.current_bet;
            }
            Action::Fold => player.fold(),
        }
    }
}

fn sole_survivor(players: &[Player]) -> Option<usize> {
    let mut active = players.iter().enumerate().filter(|(_, p)| p.active).map(|(i, _)| i);
    match (active.next(), active.next()) {
        (Some(i), None) => Some(i),
        _ => None,
    }
}

fn contributions_equal(players: &[Player]) -> bool {
    let mut amounts = players.iter().filter(|p| p.active).map(|p| p.street_contribution);
    match amounts.next() {
        Some(first) => amounts.all(|a| a == first),
        None => true,
    }
}
