use std::thread::sleep;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::{Command, Game, FIELD_HEIGHT, FIELD_WIDTH};
use crate::snake::Direction;
use crate::term::TermManager;

pub enum SessionEnd {
    Replay,
    Quit,
}

/// Runs one game to completion, shows the end screen, and asks about a
/// rematch. Every tick goes render, poll one key, advance, sleep.
pub fn run_session(term: &mut TermManager) -> Result<SessionEnd> {
    let mut game = Game::new(FIELD_WIDTH, FIELD_HEIGHT, StdRng::from_entropy());
    info!("session started on a {}x{} field", FIELD_WIDTH, FIELD_HEIGHT);

    term.clear()?;

    while !game.is_over() {
        term.draw_frame(&game.render_rows())?;

        if let Some(ev) = term.poll_key()? {
            if is_ctrl_c(&ev) {
                info!("interrupted, score {}", game.score());
                return Ok(SessionEnd::Quit);
            }
            if let Some(cmd) = map_key(&ev) {
                game.apply(cmd);
            }
        }

        // A quit key must not be followed by one more move.
        if game.is_over() {
            break;
        }

        game.advance();
        sleep(game.tick_delay());
    }

    info!(
        "game over: score {}, length {}, won: {}",
        game.score(),
        game.snake().len(),
        game.is_won()
    );

    show_end_screen(term, &game)?;

    let key = term.read_key_blocking()?;
    Ok(match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => SessionEnd::Replay,
        _ => SessionEnd::Quit,
    })
}

/// Movement on WASD and arrows, quit on q. Anything else is dropped.
pub fn map_key(ev: &KeyEvent) -> Option<Command> {
    match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            Some(Command::Turn(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            Some(Command::Turn(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            Some(Command::Turn(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            Some(Command::Turn(Direction::Right))
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(
        ev,
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }
    )
}

fn show_end_screen(term: &mut TermManager, game: &Game) -> Result<()> {
    let headline = if game.is_won() { "You won!" } else { "Game Over!" };

    term.clear()?;
    term.draw_frame(&[
        headline.to_string(),
        format!("Final Score: {}", game.score()),
        String::new(),
        "Play again? (y/n)".to_string(),
    ])?;
    Ok(())
}
