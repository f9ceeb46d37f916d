//! Computer move selection.
//!
//! Strategies are pure over the board: they pick a cell and never
//! mutate anything but their own random number generator.

use super::rules::near_wins;
use super::{Board, Player, Position};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Anything that can choose the next cell for a player.
pub trait Strategy {
    /// Picks an empty cell for `me`, or `None` when the board is full.
    fn choose(&mut self, board: &Board, me: Player) -> Option<Position>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}

/// Which rule of the heuristic produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Layer {
    /// Completes one of our own lines.
    Win,
    /// Fills the cell that would complete the opponent's line.
    Block,
    /// Takes the center.
    Center,
    /// Uniform pick among the empty cells.
    Random,
}

/// Cell that would complete a line for `player`, if any.
///
/// When several lines are one move from completion the lowest
/// cell index wins, so the choice is deterministic.
#[instrument(skip(board))]
pub fn completing_cell(board: &Board, player: Player) -> Option<Position> {
    near_wins()
        .filter(|nw| nw.pair.iter().all(|&pos| board.owner(pos) == Some(player)))
        .map(|nw| nw.completion)
        .filter(|&pos| board.is_empty(pos))
        .min()
}

/// Uniform pick among the empty cells.
pub fn random_empty<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_positions().choose(rng).copied()
}

/// Picks a uniformly random empty cell.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    /// Creates a random strategy drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStrategy<StdRng> {
    /// Creates a reproducible random strategy.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a random strategy seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn choose(&mut self, board: &Board, _me: Player) -> Option<Position> {
        random_empty(board, &mut self.rng)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Layered heuristic: win, then block, then center, then random.
#[derive(Debug, Clone)]
pub struct HeuristicStrategy<R = StdRng> {
    rng: R,
}

impl<R: Rng> HeuristicStrategy<R> {
    /// Creates a heuristic strategy whose random fallback draws from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks a cell for `me` and reports which rule chose it.
    #[instrument(skip(self, board))]
    pub fn decide(&mut self, board: &Board, me: Player) -> Option<(Position, Layer)> {
        let decision = if let Some(pos) = completing_cell(board, me) {
            Some((pos, Layer::Win))
        } else if let Some(pos) = completing_cell(board, me.opponent()) {
            Some((pos, Layer::Block))
        } else if board.is_empty(Position::Center) {
            Some((Position::Center, Layer::Center))
        } else {
            random_empty(board, &mut self.rng).map(|pos| (pos, Layer::Random))
        };

        if let Some((pos, layer)) = decision {
            debug!(position = %pos, %layer, "Heuristic chose move");
        }
        decision
    }
}

impl HeuristicStrategy<StdRng> {
    /// Creates a reproducible heuristic strategy.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a heuristic strategy seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Strategy for HeuristicStrategy<R> {
    fn choose(&mut self, board: &Board, me: Player) -> Option<Position> {
        self.decide(board, me).map(|(pos, _)| pos)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

/// Strategy selectable from configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrategyKind {
    /// [`HeuristicStrategy`].
    #[default]
    Heuristic,
    /// [`RandomStrategy`].
    Random,
}

impl StrategyKind {
    /// Builds the strategy, seeded when `seed` is given.
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy + Send> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        match self {
            StrategyKind::Heuristic => Box::new(HeuristicStrategy::new(rng)),
            StrategyKind::Random => Box::new(RandomStrategy::new(rng)),
        }
    }
}
