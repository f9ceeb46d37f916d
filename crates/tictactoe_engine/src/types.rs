//! Core domain types for tic-tac-toe.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Participant in a solo game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// The person at the keyboard.
    Human,
    /// The built-in opponent.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Mark drawn for this player on the text board.
    pub fn mark(self) -> char {
        match self {
            Player::Human => 'O',
            Player::Computer => 'X',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Each slot is empty or holds the one [`Move`] made there. A filled
/// slot's move always carries the slot's own position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardSlots")]
pub struct Board {
    /// Slots in row-major order (0-8).
    slots: [Option<Move>; 9],
}

/// Unchecked slots read from serialized data.
#[derive(Deserialize)]
struct BoardSlots {
    slots: [Option<Move>; 9],
}

impl TryFrom<BoardSlots> for Board {
    type Error = MoveError;

    fn try_from(raw: BoardSlots) -> Result<Self, Self::Error> {
        let misfiled = raw
            .slots
            .iter()
            .enumerate()
            .find_map(|(index, slot)| {
                slot.filter(|m| m.position.to_index() != index)
                    .map(|m| (index, m))
            });
        if let Some((index, mov)) = misfiled {
            return Err(MoveError::InvariantViolation(format!(
                "slot {index} holds the move {mov}"
            )));
        }
        Ok(Self { slots: raw.slots })
    }
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the move at the given position, if any.
    pub fn get(&self, pos: Position) -> Option<Move> {
        self.slots[pos.to_index()]
    }

    /// Returns the player holding the given position.
    pub fn owner(&self, pos: Position) -> Option<Player> {
        self.get(pos).map(|m| m.player)
    }

    /// True iff slot `index` holds a move.
    ///
    /// Indices outside 0-8 never hold a move.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(Option::is_some)
    }

    /// Checks if a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// True iff the board is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self)
    }

    /// True iff `player` holds every cell of some win pattern.
    pub fn has_win(&self, player: Player) -> bool {
        rules::has_win(self, player)
    }

    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Records a move in its slot.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::SquareOccupied` if the slot is already taken.
    #[instrument(skip(self))]
    pub(crate) fn place(&mut self, mov: Move) -> Result<(), MoveError> {
        let slot = &mut self.slots[mov.position.to_index()];
        if slot.is_some() {
            return Err(MoveError::SquareOccupied(mov.position));
        }
        *slot = Some(mov);
        Ok(())
    }

    /// Overwrites a slot without any checks.
    #[cfg(test)]
    pub(crate) fn force(&mut self, pos: Position, slot: Option<Move>) {
        self.slots[pos.to_index()] = slot;
    }

    /// Empties every slot.
    pub(crate) fn clear(&mut self) {
        self.slots = [None; 9];
    }

    /// Returns all slots.
    pub fn slots(&self) -> &[Option<Move>; 9] {
        &self.slots
    }

    /// Iterates over the moves on the board in slot order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Number of filled slots.
    pub fn filled_count(&self) -> usize {
        self.moves().count()
    }

    /// Positions held by `player`, in slot order.
    pub fn cells_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.moves()
            .filter(move |m| m.player == player)
            .map(|m| m.position)
    }

    /// Empty positions, in slot order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show the 1-based number a human types to play there.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.slots[pos] {
                    Some(m) => result.push(m.player.mark()),
                    None => result.push_str(&(pos + 1).to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
