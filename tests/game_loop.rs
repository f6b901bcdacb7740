//! Headless session tests: drive the state machine through the public API
//! and check the invariants that must hold on every tick.

use std::collections::HashSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use term_snake::game::{Command, Game, StepResult};
use term_snake::snake::Direction;

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn assert_tick_invariants(game: &Game) {
    let body: Vec<_> = game.snake().body().iter().copied().collect();
    let unique: HashSet<_> = body.iter().copied().collect();
    assert_eq!(unique.len(), body.len(), "body overlaps itself");

    assert!(!game.snake().contains(game.food()), "food placed on the body");
    assert_eq!(game.score() % 10, 0);

    let delay = game.tick_delay();
    assert!(delay >= Duration::from_millis(40));
    assert!(delay <= Duration::from_millis(120));
}

#[test]
fn random_sessions_hold_invariants_until_game_over() {
    for seed in 0..20 {
        let mut game = Game::new(12, 8, StdRng::seed_from_u64(seed));
        let mut driver = StdRng::seed_from_u64(seed ^ 0xDEAD);
        let mut last_delay = game.tick_delay();

        assert_tick_invariants(&game);

        for _ in 0..500 {
            if driver.gen_bool(0.3) {
                game.apply(Command::Turn(DIRECTIONS[driver.gen_range(0..4)]));
            }

            let result = game.advance();
            if game.is_over() {
                assert!(matches!(result, StepResult::Crashed | StepResult::Won));
                break;
            }

            assert_tick_invariants(&game);
            assert!(game.tick_delay() <= last_delay, "delay increased");
            last_delay = game.tick_delay();
        }
    }
}

#[test]
fn quitting_mid_session_is_game_over() {
    let mut game = Game::new(12, 8, StdRng::seed_from_u64(1));
    game.apply(Command::Turn(Direction::Down));
    game.apply(Command::Quit);
    assert!(game.is_over());
    assert!(!game.is_won());
    assert_eq!(game.score(), 0);
}

#[test]
fn driving_into_the_wall_ends_the_session() {
    let mut game = Game::new(8, 8, StdRng::seed_from_u64(2));

    // Heading right from the center, the wall is a handful of ticks away.
    let mut ticks = 0;
    while !game.is_over() {
        game.advance();
        ticks += 1;
        assert!(ticks <= 8, "snake should have hit the right wall");
    }
    assert!(!game.is_won());
}

#[test]
fn frame_geometry_matches_the_field() {
    let game = Game::new(10, 6, StdRng::seed_from_u64(3));
    let rows = game.render_rows();

    assert_eq!(rows.len(), 6 + 4);
    for row in &rows[..8] {
        assert_eq!(row.chars().count(), 12);
    }
    assert!(rows[0].chars().all(|c| c == '#'));
    assert!(rows[7].chars().all(|c| c == '#'));

    let field: String = rows[1..7].concat();
    assert_eq!(field.matches('@').count(), 1);
    assert_eq!(field.matches('O').count(), 1);
    assert_eq!(field.matches('o').count(), 2);

    assert_eq!(rows[8], "Score: 0");
    assert!(rows[9].contains("W A S D"));
}
