use connect_four::{BoardError, Game, GameConfig, GameStatus, Player, StarterSeed, CONNECT_LENGTH};

/// Column sequence, Red first, that fills a 6x7 board without four in a row.
const DRAW_SEQUENCE: [usize; 42] = [
    5, 4, 5, 0, 6, 2, 4, 5, 5, 0, 4, 1, 1, 0, 4, 5, 6, 5, 3, 1, 1, 2, 2, 6, 2, 6, 6, 3, 6, 2, 0,
    3, 0, 3, 3, 4, 3, 1, 4, 2, 1, 0,
];

#[test]
fn test_derived_totals() {
    let game = Game::new(&GameConfig::default()).unwrap();
    assert_eq!(game.connect_length(), CONNECT_LENGTH);
    assert_eq!(game.min_moves_to_win(), 7);
    assert_eq!(game.moves_done(), 0);
    assert_eq!(game.board().empty_cells(), 42);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_invalid_config() {
    assert_eq!(
        Game::new(&GameConfig::new(1, 7)).unwrap_err(),
        BoardError::InvalidDimensions { rows: 1, columns: 7 }
    );
}

#[test]
fn test_failed_drop_does_not_count() {
    let mut game = Game::new(&GameConfig::new(2, 2)).unwrap();
    game.drop(0, Player::Red).unwrap();
    game.drop(0, Player::Black).unwrap();
    assert_eq!(game.drop(0, Player::Red).unwrap_err(), BoardError::ColumnFull(0));
    assert_eq!(game.drop(5, Player::Red).unwrap_err(), BoardError::InvalidColumn(5));
    assert_eq!(game.moves_done(), 2);
}

#[test]
fn test_alternating_win() {
    let mut game = Game::new(&GameConfig::default()).unwrap();
    let moves = [0, 0, 1, 1, 2, 2];
    let mut player = Player::Red;
    for col in moves {
        assert_eq!(game.drop(col, player).unwrap(), GameStatus::InProgress);
        player = player.other();
    }
    assert_eq!(game.drop(3, Player::Red).unwrap(), GameStatus::Won(Player::Red));
    assert_eq!(game.moves_done(), game.min_moves_to_win());
    assert!(game.status().is_terminal());
}

#[test]
fn test_full_board_is_draw() {
    let mut game = Game::new(&GameConfig::default()).unwrap();
    let mut player = Player::Red;
    let mut status = GameStatus::InProgress;
    for col in DRAW_SEQUENCE {
        assert_eq!(status, GameStatus::InProgress);
        status = game.drop(col, player).unwrap();
        player = player.other();
    }
    assert_eq!(status, GameStatus::Draw);
    assert!(game.board().is_full());
}

#[test]
fn test_win_beats_full_board() {
    // the final drop fills the board and completes the top row
    let mut game = Game::new(&GameConfig::new(2, 4)).unwrap();
    for (col, player) in [
        (0, Player::Black),
        (0, Player::Red),
        (1, Player::Black),
        (1, Player::Red),
        (2, Player::Black),
        (2, Player::Red),
        (3, Player::Red),
    ] {
        assert_eq!(game.drop(col, player).unwrap(), GameStatus::InProgress);
    }
    assert_eq!(game.drop(3, Player::Red).unwrap(), GameStatus::Won(Player::Red));
    assert!(game.board().is_full());
}

#[test]
fn test_starter_choices() {
    assert_eq!(StarterSeed::Fixed(Player::Black).choose(), Player::Black);
    assert_eq!(StarterSeed::Seeded(7).choose(), StarterSeed::Seeded(7).choose());
    assert_eq!(connect_four::core::starter::from_parity(10), Player::Red);
    assert_eq!(connect_four::core::starter::from_parity(11), Player::Black);
    let _ = StarterSeed::ClockParity.choose();
}
