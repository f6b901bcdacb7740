use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, Result};

/// Owns the terminal for the duration of the program: alternate screen,
/// raw unbuffered input, hidden cursor. Everything it touches is undone by
/// `restore`, or by `Drop` if the program unwinds first.
pub struct TermManager {
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), active: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()?;
        self.active = true;
        Ok(())
    }

    /// Safe to call more than once; later calls are no-ops.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    /// Redraws the whole frame from the top-left corner, one row per line.
    pub fn draw_frame(&mut self, rows: &[String]) -> Result<()> {
        for (y, row) in rows.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16), style::Print(row))?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    /// Consumes at most one pending key; `None` when no input is waiting.
    /// Non-key events (resize, mouse) are discarded.
    pub fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                return Ok(Some(ev));
            }
        }
        Ok(None)
    }

    pub fn read_key_blocking(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        // Best-effort restore; Drop cannot propagate errors.
        let _ = self.restore();
    }
}
