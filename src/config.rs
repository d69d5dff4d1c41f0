use crate::Chips;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error(
        "a table seats {min} to {max} players, got {0}",
        min = TableConfig::MIN_PLAYERS,
        max = TableConfig::MAX_PLAYERS
    )]
    PlayerCount(usize),
    #[error("player names must not be empty")]
    EmptyName,
    #[error("duplicate player name: '{0}'")]
    DuplicateName(String),
    #[error("starting stack must be positive, got {0}")]
    NonPositiveStack(Chips),
    #[error("blinds must be positive, got small {small} / big {big}")]
    NonPositiveBlind { small: Chips, big: Chips },
    #[error("designated small blind '{0}' is not seated")]
    UnknownSmallBlind(String),
}

/// Session setup: who sits down, with how much, and at what blinds.
///
/// ```
/// use holdem_table::config::{ConfigError, TableConfig};
///
/// let ok = TableConfig::new(["Henry", "Ahmad"], 20.0, 0.1, 0.25);
/// assert!(ok.validate().is_ok());
///
/// let lonely = TableConfig::new(["Henry"], 20.0, 0.1, 0.25);
/// assert_eq!(lonely.validate(), Err(ConfigError::PlayerCount(1)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct TableConfig {
    /// Seating order, fixed for the session.
    pub players: Vec<String>,
    pub starting_stack: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Seat of the first small blind; random when `None`.
    pub first_small_blind: Option<String>,
    /// Seed for every random choice the table makes; entropy when `None`.
    pub seed: Option<u64>,
}

impl TableConfig {
    pub const MIN_PLAYERS: usize = 2;
    pub const MAX_PLAYERS: usize = 9;

    pub fn new<I, S>(
        players: I,
        starting_stack: Chips,
        small_blind: Chips,
        big_blind: Chips,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            starting_stack,
            small_blind,
            big_blind,
            first_small_blind: None,
            seed: None,
        }
    }

    pub fn with_small_blind(mut self, name: impl Into<String>) -> Self {
        self.first_small_blind = Some(name.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = self.players.len();
        if !(Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&n) {
            return Err(ConfigError::PlayerCount(n));
        }
        let mut seen = HashSet::new();
        for name in &self.players {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateName(name.clone()));
            }
        }
        if !is_positive(self.starting_stack) {
            return Err(ConfigError::NonPositiveStack(self.starting_stack));
        }
        if !is_positive(self.small_blind) || !is_positive(self.big_blind) {
            return Err(ConfigError::NonPositiveBlind {
                small: self.small_blind,
                big: self.big_blind,
            });
        }
        if let Some(name) = &self.first_small_blind {
            if !seen.contains(name.as_str()) {
                return Err(ConfigError::UnknownSmallBlind(name.clone()));
            }
        }
        Ok(())
    }
}

pub(crate) fn is_positive(x: Chips) -> bool {
    x.is_finite() && x > 0.0
}
