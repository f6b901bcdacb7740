use std::fs::File;

use anyhow::Result;
use simplelog::{Config, LevelFilter, WriteLogger};

use term_snake::session::{run_session, SessionEnd};
use term_snake::term::TermManager;

const LOG_FILE: &str = "term-snake.log";

fn main() -> Result<()> {
    init_logging();

    let mut term = TermManager::new();
    term.setup()?;

    let result = play(&mut term);

    // Always put the terminal back before touching the normal screen.
    let _ = term.restore();
    result?;

    println!("Thanks for playing!");
    Ok(())
}

fn play(term: &mut TermManager) -> Result<()> {
    loop {
        if let SessionEnd::Quit = run_session(term)? {
            return Ok(());
        }
    }
}

fn init_logging() {
    // Stdout belongs to the game screen, so logs go to a file. Running
    // unlogged is fine when the file cannot be created.
    if let Ok(file) = File::create(LOG_FILE) {
        let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
    }
}
