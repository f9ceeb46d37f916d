//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The eight lines that win the game.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Two cells of a win pattern together with the cell that completes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearWin {
    /// The two cells a player must already hold.
    pub pair: [Position; 2],
    /// The remaining cell of the line.
    pub completion: Position,
}

/// All 24 near-win patterns, three per win pattern.
pub fn near_wins() -> impl Iterator<Item = NearWin> {
    WIN_PATTERNS.into_iter().flat_map(|[a, b, c]| {
        [
            NearWin { pair: [a, b], completion: c },
            NearWin { pair: [a, c], completion: b },
            NearWin { pair: [b, c], completion: a },
        ]
    })
}

/// True iff `player` holds all three cells of at least one win pattern.
#[instrument(skip(board))]
pub fn has_win(board: &Board, player: Player) -> bool {
    WIN_PATTERNS
        .iter()
        .any(|line| line.iter().all(|&pos| board.owner(pos) == Some(player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|&player| has_win(board, player))
}
