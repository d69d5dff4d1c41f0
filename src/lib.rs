//! holdem-table: a multi-player Texas Hold'em table engine
//!
//! Two pieces live here:
//! - a 7-card hand evaluator mapping cards to a category and a tie-break key
//! - a turn-based table that deals streets, collects actions, and settles the pot
//!
//! Everything a human sees or types sits behind the [`betting::ActionProvider`]
//! and [`observer::TableObserver`] traits, so the core stays deterministic for a
//! given deck seed.
//!
//! ## Quick start: evaluate seven cards
//! ```
//! use holdem_table::cards::parse_cards;
//! use holdem_table::evaluator::{evaluate, Category};
//!
//! let cards = parse_cards("9h 10h Jh Qh Kh 2c 3d").unwrap();
//! let eval = evaluate(&cards).unwrap();
//! assert_eq!(eval.category, Category::StraightFlush);
//! ```
//!
//! ## Quick start: play one hand
//! ```
//! use holdem_table::agents::PassiveAgent;
//! use holdem_table::config::TableConfig;
//! use holdem_table::observer::Silent;
//! use holdem_table::table::Table;
//!
//! let config = TableConfig::new(["Henry", "Ahmad"], 20.0, 0.1, 0.25).with_seed(7);
//! let mut table = Table::new(config).unwrap();
//! let summary = table.play_hand(&mut PassiveAgent, &mut Silent).unwrap();
//! assert!(!summary.winners.is_empty());
//! ```

pub mod agents;
pub mod betting;
pub mod cards;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod observer;
pub mod player;
pub mod table;

/// Chip amounts. Fractional so an uneven split stays unrounded.
pub type Chips = f64;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
