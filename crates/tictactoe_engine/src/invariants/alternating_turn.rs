//! Alternating turn invariant: players take turns, starting with the first mover.

use super::super::Game;
use super::Invariant;

/// Invariant: the history starts with the first mover and alternates.
///
/// While the game is in progress, the player to move is the one
/// who did not make the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let mut expected = game.first_mover();
        for mov in history {
            if mov.player != expected {
                return false;
            }
            expected = expected.opponent();
        }

        game.is_over() || game.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first mover"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_alternating_moves_hold() {
        let mut game = Game::new();
        game.try_place(Move::new(Player::Human, Position::TopLeft))
            .expect("legal move");
        game.try_place(Move::new(Player::Computer, Position::Center))
            .expect("legal move");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Player::Human);
    }

    #[test]
    fn test_double_move_violates() {
        let mut game = Game::new();
        game.try_place(Move::new(Player::Human, Position::TopLeft))
            .expect("legal move");
        game.history.push(Move::new(Player::Human, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
