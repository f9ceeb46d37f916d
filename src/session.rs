//! Solo game session: one human, one computer, any number of games.

use crate::config::GameConfig;
use crate::event::GameEvent;
use serde::Serialize;
use std::time::Duration;
use tictactoe_engine::{Game, Move, MoveError, Outcome, Player, Position, Strategy};
use tracing::{debug, info, instrument};

/// Results across the games of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games the human won.
    pub human_wins: u32,
    /// Games the computer won.
    pub computer_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts a finished game; `Continue` is ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Continue => {}
            Outcome::Won(Player::Human) => self.human_wins += 1,
            Outcome::Won(Player::Computer) => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }

    /// Event reporting these totals.
    pub fn event(&self) -> GameEvent {
        GameEvent::Tally {
            human_wins: self.human_wins,
            computer_wins: self.computer_wins,
            draws: self.draws,
        }
    }
}

/// Drives a [`Game`] for a front end.
///
/// Human moves apply immediately. The computer's reply waits out the
/// thinking delay first; callers read no input while it is pending.
pub struct GameSession {
    game: Game,
    strategy: Box<dyn Strategy + Send>,
    think_delay: Duration,
    tally: Tally,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("game", &self.game)
            .field("strategy", &self.strategy.name())
            .field("think_delay", &self.think_delay)
            .field("tally", &self.tally)
            .finish()
    }
}

impl GameSession {
    /// Creates a session from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_strategy(
            config.strategy().build(*config.seed()),
            config.think_delay(),
            config.first_mover(),
        )
    }

    /// Creates a session with an explicit strategy.
    pub fn with_strategy(
        strategy: Box<dyn Strategy + Send>,
        think_delay: Duration,
        first: Player,
    ) -> Self {
        info!(strategy = strategy.name(), ?think_delay, %first, "Creating game session");
        Self {
            game: Game::with_first_mover(first),
            strategy,
            think_delay,
            tally: Tally::default(),
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the running totals.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// True when the next move belongs to the computer.
    pub fn awaiting_computer(&self) -> bool {
        !self.game.is_over() && self.game.to_move() == Player::Computer
    }

    /// Plays the human's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns the reason the move was ignored; the game is unchanged.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        let outcome = self.game.try_place(Move::new(Player::Human, pos))?;
        self.tally.record(outcome);
        Ok(outcome)
    }

    /// Waits out the thinking delay, then plays the computer's move.
    ///
    /// Returns `None` without waiting when it isn't the computer's turn.
    #[instrument(skip(self))]
    pub async fn computer_reply(&mut self) -> Option<(Position, Outcome)> {
        if !self.awaiting_computer() {
            debug!("No computer turn pending");
            return None;
        }

        tokio::time::sleep(self.think_delay).await;

        let (pos, outcome) = self.game.computer_turn(self.strategy.as_mut())?;
        self.tally.record(outcome);
        Some((pos, outcome))
    }

    /// Abandons or closes the current game and starts the next one.
    ///
    /// Returns the player who opens it.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Player {
        self.game.restart()
    }
}
