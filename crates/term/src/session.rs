//! Raw-mode / alternate-screen session guard.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::ResetColor,
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::frame::Viewport;
use crate::types::{DEFAULT_COLS, DEFAULT_ROWS};

/// Owns the terminal for the life of the process.
///
/// `enter` detects the terminal size, switches to raw mode and the alternate
/// screen, hides the cursor, and clears. The guard restores everything on
/// [`leave`](Session::leave) or on drop, whichever comes first; the restore
/// runs at most once.
pub struct Session {
    cols: u16,
    rows: u16,
    restored: bool,
}

impl Session {
    pub fn enter() -> Result<Self> {
        let (cols, rows) = terminal::size().unwrap_or((DEFAULT_COLS, DEFAULT_ROWS));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.queue(terminal::EnterAlternateScreen)?;
        stdout.queue(cursor::Hide)?;
        stdout.queue(terminal::Clear(ClearType::All))?;
        stdout.flush()?;

        log::debug!("terminal session acquired at {}x{}", cols, rows);
        Ok(Self {
            cols,
            rows,
            restored: false,
        })
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.cols, self.rows)
    }

    /// Best-effort restore of the original terminal state.
    ///
    /// Failures are ignored, nothing is retried. Returns whether this call
    /// performed the restore (false if it already ran).
    pub fn leave(&mut self) -> bool {
        if self.restored {
            return false;
        }
        self.restored = true;
        restore_terminal();
        log::debug!("terminal session released");
        true
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.leave();
    }
}

/// Emit the restore sequence unconditionally.
///
/// Shared between the session guard and the panic hook, which cannot reach
/// the guard.
fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = stdout.queue(ResetColor);
    let _ = stdout.queue(cursor::Show);
    let _ = stdout.queue(terminal::LeaveAlternateScreen);
    let _ = stdout.flush();
    let _ = terminal::disable_raw_mode();
}

/// Restore the terminal before the default panic output.
///
/// Without this a panic inside the frame loop leaves the shell in raw mode
/// with the alternate screen active, eating the panic message.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
        log::error!("panic: {}", panic_info);
    }));
}
