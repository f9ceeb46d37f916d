//! Parsing of the lines a player types.

use tictactoe_engine::Position;

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Place a mark.
    Play(Position),
    /// Start a new game.
    Restart,
    /// Print the help text.
    Help,
    /// Leave the program.
    Quit,
}

/// Help text listing the accepted input.
pub const HELP: &str = "\
Type a cell number (1-9) or a name like `center` or `top left` to play.
  restart, r   start a new game
  help, ?      show this message
  quit, q      leave";

impl PlayerCommand {
    /// Parses a line, or `None` if it means nothing.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(PlayerCommand::Quit),
            "r" | "restart" | "again" | "play again" => Some(PlayerCommand::Restart),
            "?" | "h" | "help" => Some(PlayerCommand::Help),
            other => Position::from_label_or_number(other).map(PlayerCommand::Play),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_commands() {
        assert_eq!(PlayerCommand::parse(" Q "), Some(PlayerCommand::Quit));
        assert_eq!(PlayerCommand::parse("play again"), Some(PlayerCommand::Restart));
        assert_eq!(PlayerCommand::parse("?"), Some(PlayerCommand::Help));
    }

    #[test]
    fn test_parses_cells() {
        assert_eq!(
            PlayerCommand::parse("5"),
            Some(PlayerCommand::Play(Position::Center))
        );
        assert_eq!(
            PlayerCommand::parse("Bottom left"),
            Some(PlayerCommand::Play(Position::BottomLeft))
        );
        assert_eq!(PlayerCommand::parse("0"), None);
        assert_eq!(PlayerCommand::parse("banana"), None);
    }
}
