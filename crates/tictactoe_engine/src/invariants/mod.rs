//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !<$inv as Invariant<S>>::holds(state) {
                        violations.push(InvariantViolation::new(<$inv as Invariant<S>>::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod monotonic_board;
pub mod single_winner;
pub mod slots_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use slots_consistent::SlotsConsistentInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    MonotonicBoardInvariant,
    SlotsConsistentInvariant,
    AlternatingTurnInvariant,
    SingleWinnerInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Move, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new();
        for (player, pos) in [
            (Player::Human, Position::TopLeft),
            (Player::Computer, Position::Center),
            (Player::Human, Position::TopRight),
        ] {
            game.try_place(Move::new(player, pos)).expect("legal move");
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::new();
        game.try_place(Move::new(Player::Human, Position::Center))
            .expect("legal move");

        // Corrupt the board behind the history's back
        game.board.force(
            Position::TopLeft,
            Some(Move::new(Player::Computer, Position::TopLeft)),
        );

        let violations = GameInvariants::check_all(&game).expect_err("corrupted board");
        assert!(
            violations
                .iter()
                .any(|v| v.description == MonotonicBoardInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();
        type TwoInvariants = (MonotonicBoardInvariant, SingleWinnerInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
