//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.slots().iter().all(Option::is_some)
}

/// Checks if the game is drawn: a full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Move, Player, Position};
    use super::*;

    fn board_from(marks: [Player; 9]) -> Board {
        let mut board = Board::new();
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.force(pos, Some(Move::new(player, pos)));
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.force(
            Position::Center,
            Some(Move::new(Player::Human, Position::Center)),
        );
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{Computer as X, Human as O};
        // O X O / O X X / X O O
        let board = board_from([O, X, O, O, X, X, X, O, O]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{Computer as X, Human as O};
        // Last mark completes the bottom row for O on a full board.
        let board = board_from([X, O, X, X, O, X, O, O, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
