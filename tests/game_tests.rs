//! Game-level scoring through the public API

use tennis_scorer::core::Game;
use tennis_scorer::types::{Player, PointLabel};

fn play(game: &mut Game, points: &str) {
    for c in points.chars() {
        match c {
            '1' => game.add_point_to_player1(),
            '2' => game.add_point_to_player2(),
            _ => panic!("bad point {c}"),
        }
    }
}

fn labels(game: &Game) -> (String, String) {
    (game.player1_score().to_string(), game.player2_score().to_string())
}

#[test]
fn test_four_straight_points_win_the_game() {
    let mut game = Game::new();
    play(&mut game, "1111");
    assert!(game.player1_won());
    assert!(!game.player2_won());
    assert!(game.complete());
    assert_eq!(game.winner(), Some(Player::One));
}

#[test]
fn test_score_progression() {
    let mut game = Game::new();
    assert_eq!(labels(&game), ("0".into(), "0".into()));
    play(&mut game, "1");
    assert_eq!(labels(&game), ("15".into(), "0".into()));
    play(&mut game, "2");
    assert_eq!(labels(&game), ("15".into(), "15".into()));
    play(&mut game, "11");
    assert_eq!(labels(&game), ("40".into(), "15".into()));
}

#[test]
fn test_deuce_advantage_and_back() {
    let mut game = Game::new();
    play(&mut game, "111222");
    assert_eq!(labels(&game), ("40".into(), "40".into()));

    play(&mut game, "1");
    assert_eq!(game.player1_score(), PointLabel::Advantage);
    assert_eq!(game.player2_score(), PointLabel::Forty);
    assert_eq!(labels(&game), ("A".into(), "40".into()));

    // Advantage lost: deuce again, counts do not grow.
    play(&mut game, "2");
    assert_eq!(labels(&game), ("40".into(), "40".into()));
    assert_eq!(game.points(Player::One), 3);
    assert_eq!(game.points(Player::Two), 3);

    play(&mut game, "22");
    assert!(game.player2_won());
}

#[test]
fn test_long_deuce_never_runs_away() {
    let mut game = Game::new();
    play(&mut game, "111222");
    for _ in 0..50 {
        play(&mut game, "12");
    }
    assert!(!game.complete());
    assert!(game.points(Player::One) <= 4);
    assert!(game.points(Player::Two) <= 4);
}

#[test]
fn test_completed_game_ignores_points_and_blanks_labels() {
    let mut game = Game::new();
    play(&mut game, "2222");
    let before = game;
    play(&mut game, "1111");
    assert_eq!(game, before);
    assert_eq!(labels(&game), (String::new(), String::new()));
}

#[test]
fn test_game_points_to_save() {
    let mut game = Game::new();
    play(&mut game, "111");
    assert_eq!(game.game_points_for_player1(), 3);
    assert_eq!(game.game_points_for_player2(), 0);

    play(&mut game, "2");
    assert_eq!(game.game_points_for_player1(), 2);

    play(&mut game, "22");
    assert_eq!(game.game_points_for_player1(), 0);

    play(&mut game, "2");
    assert_eq!(game.game_points_for_player2(), 1);
}
