//! End-to-end tests for the human vs. computer turn cycle.

use tictactoe_engine::{
    Board, Game, GameStatus, HeuristicStrategy, Outcome, Player, Position, Strategy,
};

/// Plays a fixed list of cells, in order.
struct Scripted {
    cells: Vec<usize>,
}

impl Strategy for Scripted {
    fn choose(&mut self, _board: &Board, _me: Player) -> Option<Position> {
        let index = self.cells.remove(0);
        Position::from_index(index)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[test]
fn test_heuristic_blocks_top_row() {
    let mut game = Game::new();
    let mut strategy = HeuristicStrategy::from_seed(11);

    assert_eq!(game.apply_human_move(0), Some(Outcome::Continue));
    assert_eq!(
        game.computer_turn(&mut strategy),
        Some((Position::Center, Outcome::Continue))
    );

    assert_eq!(game.apply_human_move(1), Some(Outcome::Continue));
    assert_eq!(
        game.computer_turn(&mut strategy),
        Some((Position::TopRight, Outcome::Continue))
    );

    // Cell 2 now belongs to the computer, so the human cannot complete the row.
    assert_eq!(game.apply_human_move(2), None);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.board().owner(Position::TopRight), Some(Player::Computer));
}

#[test]
fn test_human_wins_exactly_on_third_mark() {
    let mut game = Game::new();
    let mut computer = Scripted { cells: vec![3, 4] };

    assert_eq!(game.apply_human_move(0), Some(Outcome::Continue));
    assert_eq!(game.computer_turn(&mut computer).map(|(_, o)| o), Some(Outcome::Continue));
    assert_eq!(game.apply_human_move(1), Some(Outcome::Continue));
    assert_eq!(game.computer_turn(&mut computer).map(|(_, o)| o), Some(Outcome::Continue));
    assert!(!game.is_over());

    assert_eq!(game.apply_human_move(2), Some(Outcome::Won(Player::Human)));
    assert_eq!(game.status(), GameStatus::Won(Player::Human));
    let human: Vec<_> = game.board().cells_of(Player::Human).collect();
    assert_eq!(
        human,
        vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
}

#[test]
fn test_computer_win_ends_game() {
    let mut game = Game::with_first_mover(Player::Computer);
    let mut computer = Scripted { cells: vec![0, 1, 2] };

    game.computer_turn(&mut computer).expect("computer opens");
    game.apply_human_move(3).expect("empty cell");
    game.computer_turn(&mut computer).expect("computer's turn");
    game.apply_human_move(4).expect("empty cell");

    assert_eq!(
        game.computer_turn(&mut computer),
        Some((Position::TopRight, Outcome::Won(Player::Computer)))
    );
    assert_eq!(game.status(), GameStatus::Won(Player::Computer));
    assert!(!game.board().has_win(Player::Human));
}

#[test]
fn test_terminal_game_ignores_moves() {
    let mut game = Game::new();
    let mut computer = Scripted { cells: vec![3, 4] };
    game.apply_human_move(0);
    game.computer_turn(&mut computer);
    game.apply_human_move(1);
    game.computer_turn(&mut computer);
    game.apply_human_move(2);
    let finished = game.clone();

    assert_eq!(game.apply_human_move(8), None);
    assert_eq!(game.computer_turn(&mut HeuristicStrategy::from_seed(0)), None);
    assert_eq!(game, finished);
}

#[test]
fn test_restart_from_any_terminal_state() {
    let mut game = Game::new();
    let mut computer = Scripted { cells: vec![3, 4] };
    game.apply_human_move(0);
    game.computer_turn(&mut computer);
    game.apply_human_move(1);
    game.computer_turn(&mut computer);
    game.apply_human_move(2);
    assert!(game.is_over());

    let first = game.restart();
    assert_eq!(first, Player::Computer);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.status(), GameStatus::InProgress);

    let mut strategy = HeuristicStrategy::from_seed(3);
    assert_eq!(
        game.computer_turn(&mut strategy),
        Some((Position::Center, Outcome::Continue))
    );
}

#[test]
fn test_draw_reported_on_full_board() {
    // O X O / O X X / X O O, human opens.
    let mut game = Game::new();
    let mut computer = Scripted { cells: vec![4, 1, 5, 6] };
    for (human, expect_done) in [(0, false), (3, false), (7, false), (2, false), (8, true)] {
        let outcome = game.apply_human_move(human).expect("legal move");
        if expect_done {
            assert_eq!(outcome, Outcome::Draw);
        } else {
            assert_eq!(outcome, Outcome::Continue);
            assert_eq!(
                game.computer_turn(&mut computer).map(|(_, o)| o),
                Some(Outcome::Continue)
            );
        }
    }
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.board().is_draw());

    assert_eq!(game.restart(), Player::Computer);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.history().is_empty());
    assert_eq!(game.to_move(), Player::Computer);
}
