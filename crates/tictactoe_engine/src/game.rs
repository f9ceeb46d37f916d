//! Turn-based game engine for a human playing the computer.
//!
//! The engine is a small state machine: `InProgress` until a move wins
//! or fills the board, then `Won(player)` or `Draw` until restarted.
//! Human moves and computer turns are separate calls, which leaves the
//! caller free to pause between them.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::position::Position;
use super::strategy::Strategy;
use super::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What a successful move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game goes on with the other player to move.
    Continue,
    /// The mover completed a line.
    Won(Player),
    /// The board filled up without a winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Continue => write!(f, "Game continues"),
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Deserializing replays the recorded history, so a loaded game is
/// always one the engine could have reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) status: GameStatus,
    pub(crate) to_move: Player,
    pub(crate) first_mover: Player,
    pub(crate) history: Vec<Move>,
}

/// Unchecked game state read from serialized data.
#[derive(Deserialize)]
struct GameRecord {
    board: Board,
    status: GameStatus,
    to_move: Player,
    first_mover: Player,
    history: Vec<Move>,
}

impl TryFrom<GameRecord> for Game {
    type Error = MoveError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let mut replayed = Game::with_first_mover(record.first_mover);
        for mov in &record.history {
            replayed.try_place(*mov)?;
        }

        let game = Game {
            board: record.board,
            status: record.status,
            to_move: record.to_move,
            first_mover: record.first_mover,
            history: record.history,
        };
        if game != replayed {
            warn!(recorded = ?game.status, replayed = ?replayed.status, "Rejecting game record");
            return Err(MoveError::InvariantViolation(format!(
                "recorded state differs from replaying its {} moves",
                game.history.len()
            )));
        }
        Ok(game)
    }
}

impl Game {
    /// Creates a new game with the human moving first.
    pub fn new() -> Self {
        Self::with_first_mover(Player::Human)
    }

    /// Creates a new game where `first` makes the opening move.
    #[instrument]
    pub fn with_first_mover(first: Player) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            to_move: first,
            first_mover: first,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the player who opened the current game.
    pub fn first_mover(&self) -> Player {
        self.first_mover
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Applies a move, reporting why it was rejected.
    ///
    /// A rejected move leaves the game untouched.
    ///
    /// # Errors
    ///
    /// Returns `MoveError` if the game is over, the square is taken,
    /// or it's not the mover's turn.
    #[instrument(skip(self))]
    pub fn try_place(&mut self, mov: Move) -> Result<Outcome, MoveError> {
        MoveContract::pre(self, &mov)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.place(mov)?;
        self.history.push(mov);

        let outcome = if self.board.has_win(mov.player) {
            self.status = GameStatus::Won(mov.player);
            Outcome::Won(mov.player)
        } else if self.board.is_draw() {
            self.status = GameStatus::Draw;
            Outcome::Draw
        } else {
            self.to_move = mov.player.opponent();
            Outcome::Continue
        };

        #[cfg(debug_assertions)]
        self.check_post(before)?;

        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game over");
        }
        Ok(outcome)
    }

    /// Verifies the move contract, restoring `before` if it fails.
    #[cfg(debug_assertions)]
    fn check_post(&mut self, before: Game) -> Result<(), MoveError> {
        MoveContract::post(&before, self).inspect_err(|e| {
            warn!(error = %e, "Rolling back move");
            *self = before;
        })
    }

    /// Plays the human's move at cell `index` (0-8).
    ///
    /// Returns `None` when the move is ignored: out-of-range index,
    /// occupied cell, computer's turn, or a finished game.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, index: usize) -> Option<Outcome> {
        let placed = Move::at_index(Player::Human, index).and_then(|mov| self.try_place(mov));

        match placed {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                debug!(error = %e, "Ignoring human move");
                None
            }
        }
    }

    /// Lets `strategy` pick the computer's move and plays it.
    ///
    /// Returns the chosen cell with the resulting outcome, or `None`
    /// when it isn't the computer's turn or the game is over.
    #[instrument(skip(self, strategy), fields(strategy = strategy.name()))]
    pub fn computer_turn<S>(&mut self, strategy: &mut S) -> Option<(Position, Outcome)>
    where
        S: Strategy + ?Sized,
    {
        if self.is_over() || self.to_move != Player::Computer {
            debug!(status = ?self.status, to_move = %self.to_move, "Ignoring computer turn");
            return None;
        }

        let pos = strategy.choose(&self.board, Player::Computer)?;
        match self.try_place(Move::new(Player::Computer, pos)) {
            Ok(outcome) => Some((pos, outcome)),
            Err(e) => {
                warn!(error = %e, position = %pos, "Strategy chose an illegal move");
                None
            }
        }
    }

    /// Clears the board and starts a new game.
    ///
    /// The opening move alternates between players on every restart.
    /// Returns the player who moves first in the new game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Player {
        let first = self.first_mover.opponent();
        self.board.clear();
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.first_mover = first;
        self.to_move = first;
        info!(first = %first, "Game restarted");
        first
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
