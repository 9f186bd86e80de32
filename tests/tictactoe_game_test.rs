//! Tests for the tic-tac-toe history engine.

use strictly_state::{Board, Game, GameStatus, Player, Position, Square};

fn play(game: &mut Game, indices: &[usize]) {
    for &index in indices {
        assert!(game.select_index(index), "Move {} rejected", index);
    }
}

#[test]
fn test_new_game_status() {
    let game = Game::new();
    assert_eq!(game.status(), GameStatus::Next(Player::X));
    assert_eq!(game.status().to_string(), "Next player: X");
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.step(), 0);
    assert_eq!(game.current(), &Board::new());
}

#[test]
fn test_players_alternate() {
    let mut game = Game::new();
    game.select_square(Position::Center);
    assert_eq!(game.current().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(game.next_player(), Player::O);

    game.select_square(Position::TopLeft);
    assert_eq!(game.current().get(Position::TopLeft), Square::Occupied(Player::O));
    assert_eq!(game.status(), GameStatus::Next(Player::X));
}

#[test]
fn test_top_row_win_blocks_further_moves() {
    let mut game = Game::new();
    // X: 0, 1, 2  O: 3, 4
    play(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");

    let before = game.clone();
    assert!(!game.select_square(Position::BottomRight));
    assert_eq!(game, before);
}

#[test]
fn test_left_column_win_snapshot() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 3, 4, 6]);

    assert_eq!(game.step(), 5);
    let board = &game.history()[5];
    for pos in [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft] {
        assert_eq!(board.get(pos), Square::Occupied(Player::X));
    }
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut game = Game::new();
    game.select_square(Position::Center);

    assert!(!game.select_square(Position::Center));
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.next_player(), Player::O);
}

#[test]
fn test_out_of_range_index_is_ignored() {
    let mut game = Game::new();
    assert!(!game.select_index(9));
    assert_eq!(game, Game::new());
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = Game::new();
    // X O X / X O O / O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "Scratch: Cat's game");
}

#[test]
fn test_winning_last_move_is_not_a_draw() {
    let mut game = Game::new();
    // X completes the 0-4-8 diagonal with the ninth mark.
    play(&mut game, &[0, 2, 1, 5, 3, 6, 4, 7, 8]);

    assert_eq!(game.current().occupied_count(), 9);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_jump_to_start_keeps_history() {
    let mut game = Game::new();
    play(&mut game, &[4, 0, 8]);

    assert!(game.jump_to(0));
    assert_eq!(game.current(), &Board::new());
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.status(), GameStatus::Next(Player::X));
}

#[test]
fn test_move_after_jump_truncates_history() {
    let mut game = Game::new();
    play(&mut game, &[4, 0, 8]);
    game.jump_to(0);

    assert!(game.select_square(Position::TopRight));
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.step(), 1);
    assert_eq!(game.current().get(Position::TopRight), Square::Occupied(Player::X));
    assert_eq!(game.current().get(Position::Center), Square::Empty);
}

#[test]
fn test_jump_back_into_finished_game_allows_play() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(game.status(), GameStatus::Won(Player::X));

    game.jump_to(4);
    assert!(game.select_square(Position::BottomRight));
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_jump_past_end_is_ignored() {
    let mut game = Game::new();
    play(&mut game, &[4]);

    assert!(!game.jump_to(2));
    assert_eq!(game.step(), 1);
}

#[test]
fn test_restart() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    game.restart();
    assert_eq!(game, Game::new());
    assert_eq!(game.status(), GameStatus::Next(Player::X));
}

#[test]
fn test_move_list_labels() {
    let mut game = Game::new();
    play(&mut game, &[4, 0]);
    game.jump_to(1);

    let labels: Vec<String> = game.moves().iter().map(ToString::to_string).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start".to_string(),
            "Go to move #1 (current)".to_string(),
            "Go to move #2".to_string(),
        ]
    );
}

#[test]
fn test_from_parts_rejects_inconsistent_history() {
    assert!(Game::from_parts(Vec::new(), 0).is_err());
    assert!(Game::from_parts(vec![Board::new()], 1).is_err());

    let mut game = Game::new();
    play(&mut game, &[4, 0]);
    let rebuilt = Game::from_parts(game.history().to_vec(), 1).expect("Valid parts");
    assert_eq!(rebuilt.step(), 1);
    assert_eq!(rebuilt.next_player(), Player::O);
}

fn board_with(marks: &[(Position, Player)]) -> Board {
    let mut board = Board::new();
    for &(pos, player) in marks {
        board.set(pos, Square::Occupied(player));
    }
    board
}

#[test]
fn test_from_parts_rejects_o_moving_first() {
    let history = vec![Board::new(), board_with(&[(Position::Center, Player::O)])];

    let violations = Game::from_parts(history, 1).unwrap_err();
    assert_eq!(violations.len(), 1);
}

#[test]
fn test_from_parts_rejects_overwritten_mark() {
    let history = vec![
        Board::new(),
        board_with(&[(Position::Center, Player::X)]),
        board_with(&[(Position::TopLeft, Player::O)]),
    ];

    assert!(Game::from_parts(history, 2).is_err());
}

#[test]
fn test_from_parts_rejects_move_after_win() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let mut history = game.history().to_vec();
    let mut next = game.current().clone();
    next.set(Position::BottomRight, Square::Occupied(Player::O));
    history.push(next);

    assert!(Game::from_parts(history, 5).is_err());
}
