use super::{CommandDefinition, CommandResult};
use crate::config::Theme;
use crate::errors::CommandError;

pub const DARK_USAGE: &str = "setDarkTheme: Switches to the dark colour theme.\nExample: setDarkTheme";
pub const LIGHT_USAGE: &str = "setLightTheme: Switches to the light colour theme.\nExample: setLightTheme";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("setDarkTheme", "Use the dark theme", DARK_USAGE),
        CommandDefinition::new("setLightTheme", "Use the light theme", LIGHT_USAGE),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetThemeCommand {
    theme: Theme,
}

impl SetThemeCommand {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn execute(&self) -> Result<CommandResult, CommandError> {
        let message = match self.theme {
            Theme::Dark => "Changed to dark theme",
            Theme::Light => "Changed to light theme",
        };
        Ok(CommandResult::new(message).with_theme(self.theme))
    }
}
