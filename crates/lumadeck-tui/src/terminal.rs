//! Terminal setup and restoration

use lumadeck_core::prelude::*;
use ratatui::DefaultTerminal;

/// Owns the terminal for the lifetime of the TUI.
///
/// Dropping the session restores the terminal, so early returns from the
/// event loop leave the shell usable. A panic hook does the same on panic.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen
    pub fn enter() -> Result<Self> {
        let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
        install_panic_hook();
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        previous(info);
    }));
}
