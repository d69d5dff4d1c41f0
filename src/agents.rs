//! Ready-made [`ActionProvider`]s: a passive caller, a scripted replayer for
//! tests, a seeded bot, and [`SeatAgents`] to give each seat its own provider.

use crate::betting::{Action, ActionError, ActionProvider, SeatView};
use crate::cards::Card;
use crate::evaluator::{evaluate, HAND_SIZE};
use crate::table::Street;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, VecDeque};
use std::fmt;

/// Checks or calls whenever it can, folds otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassiveAgent;

impl ActionProvider for PassiveAgent {
    fn act(&mut self, view: &SeatView<'_>) -> Action {
        if view.can_call() {
            Action::Call
        } else {
            Action::Fold
        }
    }
}

/// Replays queued actions per player name, then plays passively.
///
/// Keeps a record of who was asked on which street and what got refused.
#[derive(Debug, Default, Clone)]
pub struct ScriptedAgent {
    scripts: HashMap<String, VecDeque<Action>>,
    pub asked: Vec<(String, Street)>,
    pub rejections: Vec<(String, ActionError)>,
}

impl ScriptedAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, actions: impl IntoIterator<Item = Action>) -> Self {
        self.scripts.entry(name.to_string()).or_default().extend(actions);
        self
    }

    pub fn push(&mut self, name: &str, action: Action) {
        self.scripts.entry(name.to_string()).or_default().push_back(action);
    }

    /// Queued actions not yet played for `name`.
    pub fn remaining(&self, name: &str) -> usize {
        self.scripts.get(name).map_or(0, VecDeque::len)
    }
}

impl ActionProvider for ScriptedAgent {
    fn act(&mut self, view: &SeatView<'_>) -> Action {
        let name = view.player.name();
        self.asked.push((name.to_string(), view.street));
        match self.scripts.get_mut(name).and_then(VecDeque::pop_front) {
            Some(action) => action,
            None => PassiveAgent.act(view),
        }
    }

    fn rejected(&mut self, view: &SeatView<'_>, error: &ActionError) {
        self.rejections.push((view.player.name().to_string(), error.clone()));
    }
}

/// Play style knobs for [`BotAgent`], all in `0.0..=1.0`.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct BotProfile {
    /// Higher folds more marginal hands.
    pub tightness: f64,
    /// Higher raises more often and bigger.
    pub aggression: f64,
    /// Random spread applied to the hand strength estimate.
    pub noise: f64,
    pub rng_seed: Option<u64>,
}

impl BotProfile {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for BotProfile {
    fn default() -> Self {
        Self { tightness: 0.5, aggression: 0.35, noise: 0.14, rng_seed: None }
    }
}

/// A simple computer player driven by a hand strength estimate.
///
/// Only ever returns actions that pass validation, so a round never stalls on it.
#[derive(Debug)]
pub struct BotAgent {
    profile: BotProfile,
    rng: StdRng,
}

impl BotAgent {
    pub fn new(profile: BotProfile) -> Self {
        let rng = match profile.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { profile, rng }
    }
}

impl Default for BotAgent {
    fn default() -> Self {
        Self::new(BotProfile::default())
    }
}

impl ActionProvider for BotAgent {
    fn act(&mut self, view: &SeatView<'_>) -> Action {
        let Some(hole) = view.player.hole_cards() else {
            return PassiveAgent.act(view);
        };
        let noise = self.rng.random_range(-1.0..=1.0) * self.profile.noise;
        let strength = (estimate_strength(&hole, view.community) + noise).clamp(0.0, 1.0);

        let to_call = view.to_call();
        let pot_odds = if to_call > 0.0 { to_call / (view.pot + to_call) } else { 0.0 };
        let fold_threshold =
            (0.25 + self.profile.tightness * 0.3 - pot_odds * 0.25).clamp(0.1, 0.9);
        let raise_threshold = (0.75 - self.profile.aggression * 0.25).clamp(0.15, 0.95);

        if to_call > 0.0 && strength < fold_threshold {
            return Action::Fold;
        }
        if strength > raise_threshold && self.rng.random::<f64>() < self.profile.aggression {
            let multiple = if strength > 0.85 { 2.0 } else { 1.0 };
            for amount in [view.raise_increment * multiple, view.raise_increment] {
                if view.can_raise(amount) {
                    return Action::Raise(amount);
                }
            }
        }
        PassiveAgent.act(view)
    }
}

/// Rough `0.0..=1.0` strength of a hole pair against the visible board.
fn estimate_strength(hole: &[Card; 2], community: &[Card]) -> f64 {
    if community.len() + 2 == HAND_SIZE {
        let mut cards = hole.to_vec();
        cards.extend_from_slice(community);
        if let Ok(eval) = evaluate(&cards) {
            let high = eval.tie_break.as_slice().first().map_or(0, |r| r.strength());
            return eval.category.ordinal() as f64 / 8.0 * 0.85 + high as f64 / 14.0 * 0.15;
        }
    }
    let (a, b) = (hole[0].rank().strength() as f64, hole[1].rank().strength() as f64);
    let mut strength = if a == b { 0.5 + a / 28.0 } else { (a + b) / 28.0 * 0.6 };
    if hole[0].suit() == hole[1].suit() {
        strength += 0.05;
    }
    let matches = community.iter().filter(|c| hole.iter().any(|h| h.rank() == c.rank())).count();
    (strength + matches as f64 * 0.2).min(1.0)
}

/// Routes each seat to the provider registered under its player's name.
///
/// Seats without one fall back to the default provider.
pub struct SeatAgents {
    seats: HashMap<String, Box<dyn ActionProvider>>,
    fallback: Box<dyn ActionProvider>,
}

impl fmt::Debug for SeatAgents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.seats.keys().map(String::as_str).collect();
        names.sort_unstable();
        write!(f, "SeatAgents({})", names.join(","))
    }
}

impl SeatAgents {
    pub fn new(fallback: Box<dyn ActionProvider>) -> Self {
        Self { seats: HashMap::new(), fallback }
    }

    pub fn assign(&mut self, name: &str, agent: Box<dyn ActionProvider>) {
        self.seats.insert(name.to_string(), agent);
    }

    pub fn has_agent(&self, name: &str) -> bool {
        self.seats.contains_key(name)
    }

    fn agent_for(&mut self, name: &str) -> &mut dyn ActionProvider {
        match self.seats.get_mut(name) {
            Some(agent) => agent.as_mut(),
            None => self.fallback.as_mut(),
        }
    }
}

impl ActionProvider for SeatAgents {
    fn act(&mut self, view: &SeatView<'_>) -> Action {
        self.agent_for(view.player.name()).act(view)
    }

    fn rejected(&mut self, view: &SeatView<'_>, error: &ActionError) {
        self.agent_for(view.player.name()).rejected(view, error);
    }
}
