use tracing::info;

use super::CommandHandler;
use crate::catalog::ChoiceList;
use crate::cli::tui;
use crate::config::ChooserConfig;
use crate::output;
use crate::Result;

/// Resolve the catalogs, ask the user, write the answer
pub struct ChooseCommand {
    pub config: ChooserConfig,
}

impl CommandHandler for ChooseCommand {
    fn execute(&self) -> Result<()> {
        let config = &self.config;

        // Everything that can fail on input data fails here, before the
        // terminal is touched.
        let choices = ChoiceList::build(&config.inputs, &config.arch, config.mirror.as_deref())?;

        let selected = tui::choose_image(&choices, &config.title)?;
        info!("Selected {}", selected.label);

        output::write(&config.output, &selected)
    }

    fn name(&self) -> &'static str {
        "choose"
    }
}

impl ChooseCommand {
    pub fn new(config: ChooserConfig) -> Self {
        Self { config }
    }
}
