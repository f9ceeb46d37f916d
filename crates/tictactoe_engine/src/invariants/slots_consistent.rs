//! Slot consistency invariant: a slot's move names that slot.

use super::super::Game;
use super::Invariant;

/// Invariant: every filled slot holds a move whose position is the slot itself.
pub struct SlotsConsistentInvariant;

impl Invariant<Game> for SlotsConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.board()
            .slots()
            .iter()
            .enumerate()
            .all(|(i, slot)| slot.is_none_or(|m| m.position.to_index() == i))
    }

    fn description() -> &'static str {
        "Each filled slot holds the move made at that slot"
    }
}
