/// Interactive image menu implementation
pub mod app;
pub mod events;
pub mod screen;
pub mod session;
pub mod state;
pub mod theme;

use crate::catalog::{ChoiceList, ImageRecord};
use crate::Result;

use app::Menu;
use events::TerminalEvents;
use session::TerminalSession;
use theme::{ColorSupport, Theme};

/// Entry point for the menu
pub fn run(choices: &ChoiceList, title: &str) -> Result<ImageRecord> {
    let theme = Theme::subiquity(ColorSupport::detect()?);

    let mut session = TerminalSession::acquire()?;
    let menu = Menu::new(choices, title, &theme);
    menu.run(session.terminal(), &mut TerminalEvents)
}
