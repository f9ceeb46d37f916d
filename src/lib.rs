//! Tic-tac-toe against the computer, in the terminal.
//!
//! The game rules and the computer's strategy live in [`tictactoe_engine`].
//! This crate adds what a front end needs around them:
//!
//! - **Session**: human moves, delayed computer replies, restarts, totals
//! - **Config**: TOML file plus command-line overrides
//! - **Events**: what to show the player, as text or JSON lines

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod event;
mod session;

pub use cli::Cli;
pub use command::{HELP, PlayerCommand};
pub use config::{ConfigError, GameConfig};
pub use event::{EventSink, GameEvent};
pub use session::{GameSession, Tally};
