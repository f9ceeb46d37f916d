//! Single winner invariant: both players can never hold a line.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: at most one player has three in a row.
pub struct SingleWinnerInvariant;

impl Invariant<Game> for SingleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        !(board.has_win(Player::Human) && board.has_win(Player::Computer))
    }

    fn description() -> &'static str {
        "At most one player has a winning line"
    }
}
