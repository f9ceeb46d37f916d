//! Events reported to the player while a session runs.

use crate::command::HELP;
use serde::Serialize;
use tictactoe_engine::{Board, Outcome, Player, Position};

/// Something the front end should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new game began.
    Started {
        /// Player making the opening move.
        first: Player,
    },
    /// The computer is thinking.
    Thinking,
    /// A mark was placed.
    MoveMade {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
        /// Cell number as shown on the board (1-9).
        cell: usize,
    },
    /// A move or command was ignored.
    Ignored {
        /// Why.
        reason: String,
    },
    /// The game ended.
    GameOver {
        /// Winner, or `None` for a draw.
        winner: Option<Player>,
    },
    /// Command summary, shown on request.
    Help {
        /// Usage text, one command per line.
        text: String,
    },
    /// Running totals across games.
    Tally {
        /// Games the human won.
        human_wins: u32,
        /// Games the computer won.
        computer_wins: u32,
        /// Drawn games.
        draws: u32,
    },
}

impl GameEvent {
    /// Event for a placed mark.
    pub fn move_made(player: Player, position: Position) -> Self {
        GameEvent::MoveMade {
            player,
            position,
            cell: position.to_index() + 1,
        }
    }

    /// Event carrying the command summary.
    pub fn help() -> Self {
        GameEvent::Help {
            text: HELP.to_string(),
        }
    }

    /// Event for a finished game, if `outcome` finished it.
    pub fn game_over(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::Continue => None,
            Outcome::Won(player) => Some(GameEvent::GameOver {
                winner: Some(player),
            }),
            Outcome::Draw => Some(GameEvent::GameOver { winner: None }),
        }
    }

    /// Text shown for this event in plain terminal mode.
    pub fn message(&self) -> String {
        match self {
            GameEvent::Started { first: Player::Human } => "New game. You go first.".to_string(),
            GameEvent::Started {
                first: Player::Computer,
            } => "New game. The computer goes first.".to_string(),
            GameEvent::Thinking => "Computer is thinking...".to_string(),
            GameEvent::MoveMade {
                player, position, ..
            } => format!("{} played {}", player, position),
            GameEvent::Ignored { reason } => format!("Ignored: {}", reason),
            GameEvent::GameOver {
                winner: Some(Player::Human),
            } => "You won!".to_string(),
            GameEvent::GameOver {
                winner: Some(Player::Computer),
            } => "You lost!".to_string(),
            GameEvent::GameOver { winner: None } => "Draw".to_string(),
            GameEvent::Help { text } => text.clone(),
            GameEvent::Tally {
                human_wins,
                computer_wins,
                draws,
            } => format!(
                "You {} - Computer {} - Draws {}",
                human_wins, computer_wins, draws
            ),
        }
    }
}

/// Writes events to stdout as text or JSON lines.
#[derive(Debug, Clone, Copy)]
pub struct EventSink {
    json: bool,
}

impl EventSink {
    /// Creates a sink; `json` selects one JSON object per line.
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// True when writing JSON lines.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Renders an event, followed by the board when it changed.
    pub fn render(&self, event: &GameEvent, board: &Board) -> String {
        if self.json {
            return serde_json::json!({ "payload": event, "board": board.display() }).to_string();
        }
        match event {
            GameEvent::Started { .. } | GameEvent::MoveMade { .. } => {
                format!("{}\n{}\n", event.message(), board.display())
            }
            _ => event.message(),
        }
    }

    /// Prints an event to stdout.
    pub fn emit(&self, event: &GameEvent, board: &Board) {
        println!("{}", self.render(event, board));
    }
}
