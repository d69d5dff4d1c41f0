use crate::cards::Card;
use crate::Chips;

/// One seat's state. Created once per session; stack carries across hands.
///
/// Chips committed during a hand stay in the stack until settlement:
/// `street_contribution` is what this street has committed so far and
/// `swept` is what earlier streets of the same hand already moved to the pot.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) stack: Chips,
    pub(crate) hole: Option<[Card; 2]>,
    pub(crate) street_contribution: Chips,
    pub(crate) swept: Chips,
    pub(crate) active: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: Chips) -> Self {
        Self {
            name: name.into(),
            stack,
            hole: None,
            street_contribution: 0.0,
            swept: 0.0,
            active: false,
        }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chips owned before this hand settles.
    pub fn stack(&self) -> Chips {
        self.stack
    }

    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole
    }

    /// Chips committed in the current street.
    pub fn street_contribution(&self) -> Chips {
        self.street_contribution
    }

    /// Chips committed this hand, including the current street.
    pub fn hand_contribution(&self) -> Chips {
        self.swept + self.street_contribution
    }

    /// What the player could still commit this hand.
    pub fn available(&self) -> Chips {
        self.stack - self.swept
    }

    /// Still contesting the current hand.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn reset_for_hand(&mut self) {
        self.hole = None;
        self.street_contribution = 0.0;
        self.swept = 0.0;
        self.active = self.stack > 0.0;
    }

    pub(crate) fn fold(&mut self) {
        self.active = false;
        self.hole = None;
    }

    /// Move this street's contribution into the hand total; returns the amount moved.
    pub(crate) fn sweep(&mut self) -> Chips {
        let moved = self.street_contribution;
        self.swept += moved;
        self.street_contribution = 0.0;
        moved
    }
}
