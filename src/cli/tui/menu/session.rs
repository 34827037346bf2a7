use ratatui::DefaultTerminal;
use tracing::error;

use crate::error::{ChooserError, Result};

/// Raw-mode, alternate-screen terminal owned for the lifetime of the menu.
///
/// The terminal is restored exactly once, when the session is dropped,
/// whichever way the caller leaves.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn acquire() -> Result<Self> {
        let terminal =
            ratatui::try_init().map_err(|e| ChooserError::TerminalInit(e.to_string()))?;
        let mut session = Self { terminal };
        session.terminal.clear()?;
        Ok(session)
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = ratatui::try_restore() {
            error!("Failed to restore terminal: {}", e);
        }
    }
}
