//! Pure tic-tac-toe game logic for a human playing against the computer.
//!
//! # Architecture
//!
//! - **Board**: nine slots, each empty or holding one [`Move`]
//! - **Rules**: win and draw detection over a board
//! - **Strategy**: the computer's move selection (win, block, center, random)
//! - **Game**: the turn state machine with restart and alternating openings
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, HeuristicStrategy, Outcome, Position};
//!
//! let mut game = Game::new();
//! let mut strategy = HeuristicStrategy::from_seed(42);
//!
//! assert_eq!(game.apply_human_move(0), Some(Outcome::Continue));
//! let (pos, outcome) = game.computer_turn(&mut strategy).unwrap();
//! assert_eq!(pos, Position::Center);
//! assert_eq!(outcome, Outcome::Continue);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use game::{Game, Outcome};
pub use position::Position;
pub use strategy::{
    HeuristicStrategy, Layer, RandomStrategy, Strategy, StrategyKind, completing_cell,
    random_empty,
};
pub use types::{Board, GameStatus, Player};
