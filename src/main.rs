//! Tic-tac-toe against the computer.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_engine::Player;
use tictactoe_solo::{Cli, EventSink, GameEvent, GameSession, HELP, PlayerCommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr and stay quiet by default so they don't break up the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.game_config()?;
    info!(?config, "Starting tictactoe_solo");

    let mut session = GameSession::new(&config);
    let sink = EventSink::new(cli.json);
    play(&mut session, sink).await
}

/// Reads commands from stdin until quit or end of input.
async fn play(session: &mut GameSession, sink: EventSink) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !sink.is_json() {
        println!("{}\n", HELP);
    }
    start_game(session, sink).await;

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        if line.trim().is_empty() {
            continue;
        }

        match PlayerCommand::parse(&line) {
            Some(PlayerCommand::Quit) => break,
            Some(PlayerCommand::Help) => sink.emit(&GameEvent::help(), session.game().board()),
            Some(PlayerCommand::Restart) => {
                session.restart();
                start_game(session, sink).await;
            }
            Some(PlayerCommand::Play(pos)) => match session.human_move(pos) {
                Ok(outcome) => {
                    let board = session.game().board();
                    sink.emit(&GameEvent::move_made(Player::Human, pos), board);
                    match GameEvent::game_over(outcome) {
                        Some(event) => sink.emit(&event, board),
                        None => computer_turn(session, sink).await,
                    }
                }
                Err(e) => {
                    debug!(error = %e, "Move ignored");
                    let reason = if session.game().is_over() {
                        format!("{}. Type `restart` to play again", e)
                    } else {
                        e.to_string()
                    };
                    sink.emit(&GameEvent::Ignored { reason }, session.game().board());
                }
            },
            None => sink.emit(
                &GameEvent::Ignored {
                    reason: format!("Unrecognized input `{}`, type `help`", line.trim()),
                },
                session.game().board(),
            ),
        }
    }

    sink.emit(&session.tally().event(), session.game().board());
    info!(games = session.tally().games(), "Session finished");
    Ok(())
}

/// Announces a new game and lets the computer open if it is first.
async fn start_game(session: &mut GameSession, sink: EventSink) {
    let first = session.game().to_move();
    sink.emit(&GameEvent::Started { first }, session.game().board());
    computer_turn(session, sink).await;
}

/// Plays the computer's reply if one is due.
async fn computer_turn(session: &mut GameSession, sink: EventSink) {
    if !session.awaiting_computer() {
        return;
    }
    sink.emit(&GameEvent::Thinking, session.game().board());

    if let Some((pos, outcome)) = session.computer_reply().await {
        let board = session.game().board();
        sink.emit(&GameEvent::move_made(Player::Computer, pos), board);
        if let Some(event) = GameEvent::game_over(outcome) {
            sink.emit(&event, board);
        }
    }
}
