/// Terminal User Interface module for interactive commands
pub mod menu;

use crate::catalog::{ChoiceList, ImageRecord};
use crate::Result;

/// Show the image menu and return the confirmed entry
pub fn choose_image(choices: &ChoiceList, title: &str) -> Result<ImageRecord> {
    menu::run(choices, title)
}
