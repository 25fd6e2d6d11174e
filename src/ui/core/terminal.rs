//! Terminal capability.
//!
//! A [`Console`] hands out [`Screen`]s. A screen is one live grab of the
//! terminal (raw mode and alternate screen); at most one exists at a time and
//! it must be released before the terminal is given to another process.

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};

/// A live terminal grab.
pub trait Screen {
    fn draw(&mut self, render: &mut dyn FnMut(&mut Frame<'_>)) -> io::Result<()>;

    /// Block until the next input event. `None` means "redraw only" (resize
    /// or an event the UI does not handle).
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>>;

    /// Wipe the screen so the next draw repaints every cell
    fn clear(&mut self) -> io::Result<()>;

    /// Give the terminal back to the shell
    fn release(self: Box<Self>) -> io::Result<()>;
}

/// Source of terminal grabs.
pub trait Console {
    fn acquire(&mut self) -> io::Result<Box<dyn Screen>>;
}

/// Console backed by the process's stdout through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermConsole;

impl CrosstermConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for CrosstermConsole {
    fn acquire(&mut self) -> io::Result<Box<dyn Screen>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                restore_terminal();
                return Err(err);
            }
        };

        // From here on, dropping the screen restores the terminal
        let mut screen = CrosstermScreen {
            terminal,
            released: false,
        };
        screen.terminal.hide_cursor()?;
        screen.terminal.clear()?;

        log::debug!("Terminal acquired");
        Ok(Box::new(screen))
    }
}

pub struct CrosstermScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    released: bool,
}

impl Screen for CrosstermScreen {
    fn draw(&mut self, render: &mut dyn FnMut(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(|f| render(f))?;
        Ok(())
    }

    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }

    fn release(mut self: Box<Self>) -> io::Result<()> {
        self.terminal.show_cursor()?;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.released = true;
        log::debug!("Terminal released");
        Ok(())
    }
}

impl Drop for CrosstermScreen {
    fn drop(&mut self) {
        if !self.released {
            let _ = self.terminal.show_cursor();
            restore_terminal();
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
