//! Properties checked over every board reachable through the game.

use std::collections::HashSet;
use tictactoe_engine::rules::{WIN_PATTERNS, is_full};
use tictactoe_engine::{
    Game, GameStatus, HeuristicStrategy, Layer, Move, Outcome, Player, Position, completing_cell,
};

/// Visits every distinct game state reachable from both openings.
fn for_each_reachable(mut visit: impl FnMut(&Game)) {
    let mut seen = HashSet::new();
    let mut stack = vec![
        Game::with_first_mover(Player::Human),
        Game::with_first_mover(Player::Computer),
    ];

    while let Some(game) = stack.pop() {
        if !seen.insert((game.board().clone(), game.to_move(), game.status())) {
            continue;
        }
        visit(&game);
        if game.is_over() {
            continue;
        }
        for pos in game.board().empty_positions() {
            let mut next = game.clone();
            next.try_place(Move::new(game.to_move(), pos))
                .expect("empty cell on the mover's turn");
            stack.push(next);
        }
    }
}

fn holds_line(game: &Game, player: Player) -> bool {
    WIN_PATTERNS
        .iter()
        .any(|line| line.iter().all(|&pos| game.board().owner(pos) == Some(player)))
}

#[test]
fn test_has_win_matches_win_patterns() {
    let mut count = 0;
    for_each_reachable(|game| {
        count += 1;
        for player in [Player::Human, Player::Computer] {
            assert_eq!(game.board().has_win(player), holds_line(game, player));
        }
        assert!(
            !(game.board().has_win(Player::Human) && game.board().has_win(Player::Computer)),
            "both players won:\n{}",
            game.board().display()
        );
    });
    assert!(count > 5000, "only {count} states visited");
}

#[test]
fn test_draw_means_full_and_no_winner() {
    for_each_reachable(|game| {
        let board = game.board();
        if board.is_draw() {
            assert!(is_full(board));
            assert_eq!(board.filled_count(), 9);
            assert!(!board.has_win(Player::Human));
            assert!(!board.has_win(Player::Computer));
            assert_eq!(game.status(), GameStatus::Draw);
        }
    });
}

#[test]
fn test_status_matches_board() {
    for_each_reachable(|game| {
        let expected = match game.board().winner() {
            Some(player) => GameStatus::Won(player),
            None if is_full(game.board()) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
        assert_eq!(game.status(), expected, "\n{}", game.board().display());
    });
}

#[test]
fn test_heuristic_priorities_on_every_computer_turn() {
    let mut strategy = HeuristicStrategy::from_seed(2024);
    for_each_reachable(|game| {
        if game.is_over() || game.to_move() != Player::Computer {
            return;
        }
        let board = game.board();
        let (pos, layer) = strategy
            .decide(board, Player::Computer)
            .expect("open board has a move");

        assert!(board.is_empty(pos));
        match layer {
            Layer::Win => assert_eq!(Some(pos), completing_cell(board, Player::Computer)),
            Layer::Block => {
                assert_eq!(completing_cell(board, Player::Computer), None);
                assert_eq!(Some(pos), completing_cell(board, Player::Human));
            }
            Layer::Center => {
                assert_eq!(completing_cell(board, Player::Computer), None);
                assert_eq!(completing_cell(board, Player::Human), None);
                assert_eq!(pos, Position::Center);
            }
            Layer::Random => {
                assert_eq!(completing_cell(board, Player::Computer), None);
                assert_eq!(completing_cell(board, Player::Human), None);
                assert!(!board.is_empty(Position::Center));
            }
        }

        let mut next = game.clone();
        let outcome = next
            .computer_turn(&mut HeuristicStrategy::from_seed(2024))
            .map(|(_, outcome)| outcome)
            .expect("computer's turn");
        if layer == Layer::Win {
            assert_eq!(outcome, Outcome::Won(Player::Computer));
        }
    });
}
