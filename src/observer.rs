//! Notifications out of the table. Rendering is left to the implementor.

use crate::betting::Action;
use crate::cards::Card;
use crate::player::Player;
use crate::table::{HandSummary, ShowdownEntry, Street};

/// Receives table events as they happen. Every method defaults to a no-op.
pub trait TableObserver {
    fn hand_started(&mut self, _hand: u64, _small_blind: &Player, _big_blind: &Player) {}
    /// After hole cards (`PreFlop`, empty board) or community cards are dealt.
    fn street_dealt(&mut self, _street: Street, _community: &[Card]) {}
    fn action_taken(&mut self, _street: Street, _player: &Player, _action: Action) {}
    /// Evaluated hands of every player still in at showdown, in showdown order.
    fn showdown(&mut self, _entries: &[ShowdownEntry]) {}
    fn hand_settled(&mut self, _summary: &HandSummary) {}
}

/// Ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl TableObserver for Silent {}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Event {
    HandStarted { hand: u64, small_blind: String, big_blind: String },
    StreetDealt { street: Street, community: Vec<Card> },
    ActionTaken { street: Street, player: String, action: Action },
    Showdown { players: Vec<String> },
    HandSettled { winners: Vec<String> },
}

/// Records every event in order; handy for tests and replays.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Streets that had cards dealt, in order.
    pub fn streets(&self) -> Vec<Street> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::StreetDealt { street, .. } => Some(*street),
                _ => None,
            })
            .collect()
    }

    /// Names of the players asked to act on `street`, in order.
    pub fn actors(&self, on: Street) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::ActionTaken { street, player, .. } if *street == on => Some(player.clone()),
                _ => None,
            })
            .collect()
    }
}

impl TableObserver for EventLog {
    fn hand_started(&mut self, hand: u64, small_blind: &Player, big_blind: &Player) {
        self.events.push(Event::HandStarted {
            hand,
            small_blind: small_blind.name().to_string(),
            big_blind: big_blind.name().to_string(),
        });
    }

    fn street_dealt(&mut self, street: Street, community: &[Card]) {
        self.events.push(Event::StreetDealt { street, community: community.to_vec() });
    }

    fn action_taken(&mut self, street: Street, player: &Player, action: Action) {
        self.events.push(Event::ActionTaken { street, player: player.name().to_string(), action });
    }

    fn showdown(&mut self, entries: &[ShowdownEntry]) {
        let players = entries.iter().map(|e| e.name.clone()).collect();
        self.events.push(Event::Showdown { players });
    }

    fn hand_settled(&mut self, summary: &HandSummary) {
        self.events.push(Event::HandSettled { winners: summary.winners.clone() });
    }
}
