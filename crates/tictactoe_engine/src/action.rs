//! Moves and the reasons a move can be refused.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// One mark: who placed it and on which cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player placing the mark.
    pub player: Player,
    /// The cell the mark goes on.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Creates a move for `player` on cell `index` (0-8).
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfBounds` for an index past the last cell.
    pub fn at_index(player: Player, index: usize) -> Result<Self, MoveError> {
        Position::from_index(index)
            .map(|position| Self::new(player, position))
            .ok_or(MoveError::OutOfBounds(index))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.player, self.position.label())
    }
}

/// Reason a move was refused.
///
/// `Game::try_place` hands these back. The forgiving calls log them
/// and leave the game alone.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("{} is taken", _0)]
    SquareOccupied(Position),

    /// The cell index is past the last cell.
    #[display("Cell {} is off the board (cells are 0-8)", _0)]
    OutOfBounds(usize),

    /// The game was already won or drawn.
    #[display("The game has ended")]
    GameOver,

    /// The mover is not the player to move.
    #[display("{} is not the player to move", _0)]
    WrongPlayer(Player),

    /// A state broke a game invariant, after a move or when loaded.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
