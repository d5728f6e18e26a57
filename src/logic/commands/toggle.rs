//! Showing and hiding the side panels.

use std::fmt;

use super::{CommandDefinition, CommandResult, PanelName};
use crate::errors::CommandError;

pub const TOGGLE_USAGE: &str = "toggle: Shows or hides a side panel.\n\
Parameters: PANEL (wishes, budgets or statistics)\n\
Example: toggle wishes";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "toggle",
        "Show or hide a side panel",
        TOGGLE_USAGE,
    )]
}

/// Panels that can be hidden. The entry panel is always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidePanel {
    Wishes,
    Budgets,
    Statistics,
}

impl SidePanel {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Panel should be one of: wishes, budgets, statistics";

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "wishes" | "wish" | "wishlist" => Some(SidePanel::Wishes),
            "budgets" | "budget" => Some(SidePanel::Budgets),
            "statistics" | "stats" => Some(SidePanel::Statistics),
            _ => None,
        }
    }

    pub fn word(&self) -> &'static str {
        match self {
            SidePanel::Wishes => "wishes",
            SidePanel::Budgets => "budgets",
            SidePanel::Statistics => "statistics",
        }
    }

    /// The side panel a front-end panel belongs to, if any.
    pub fn of(panel: PanelName) -> Option<Self> {
        match panel {
            PanelName::Entries => None,
            PanelName::Wishes => Some(SidePanel::Wishes),
            PanelName::Budgets => Some(SidePanel::Budgets),
            PanelName::StatisticsTable | PanelName::StatisticsBarChart => {
                Some(SidePanel::Statistics)
            }
        }
    }
}

impl fmt::Display for SidePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// Which side panels the front end currently shows. All start visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelVisibility {
    wishes: bool,
    budgets: bool,
    statistics: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            wishes: true,
            budgets: true,
            statistics: true,
        }
    }
}

impl PanelVisibility {
    fn slot(&mut self, panel: SidePanel) -> &mut bool {
        match panel {
            SidePanel::Wishes => &mut self.wishes,
            SidePanel::Budgets => &mut self.budgets,
            SidePanel::Statistics => &mut self.statistics,
        }
    }

    /// Flips `panel` and returns whether it is now shown.
    pub fn toggle(&mut self, panel: SidePanel) -> bool {
        let shown = self.slot(panel);
        *shown = !*shown;
        *shown
    }

    pub fn is_visible(&self, panel: SidePanel) -> bool {
        match panel {
            SidePanel::Wishes => self.wishes,
            SidePanel::Budgets => self.budgets,
            SidePanel::Statistics => self.statistics,
        }
    }

    pub fn shows(&self, panel: PanelName) -> bool {
        SidePanel::of(panel).map_or(true, |side| self.is_visible(side))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleCommand {
    panel: SidePanel,
}

impl ToggleCommand {
    pub fn new(panel: SidePanel) -> Self {
        Self { panel }
    }

    pub fn execute(&self) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::new(format!("Toggled {} panel", self.panel)).with_toggle(self.panel))
    }
}
