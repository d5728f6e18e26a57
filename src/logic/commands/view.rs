use tracing::debug;

use super::{CommandDefinition, CommandResult, PanelName};
use crate::errors::CommandError;
use crate::model::{Model, Period};

pub const VIEW_ENTRY_USAGE: &str = "viewEntry: Switches back to the entry panel.\nExample: viewEntry";
pub const VIEW_TABLE_USAGE: &str = "viewTable: Shows per-category totals for a period as a table.\n\
Parameters: [p/MONTH] or [p/START,END] (YYYY-MM or MM/YYYY, defaults to the current month)\n\
Example: viewTable p/2019-09,2019-11";
pub const VIEW_BAR_CHART_USAGE: &str = "viewBarChart: Shows per-category totals for a period as a bar chart.\n\
Parameters: [p/MONTH] or [p/START,END] (YYYY-MM or MM/YYYY, defaults to the current month)\n\
Example: viewBarChart p/10/2019";

pub const MESSAGE_SWITCHED_TO_ENTRIES: &str = "Switched to Panel.";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("viewEntry", "Switch to the entry panel", VIEW_ENTRY_USAGE),
        CommandDefinition::new("viewTable", "Show statistics for a period as a table", VIEW_TABLE_USAGE),
        CommandDefinition::new(
            "viewBarChart",
            "Show statistics for a period as a bar chart",
            VIEW_BAR_CHART_USAGE,
        ),
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewEntryCommand;

impl ViewEntryCommand {
    pub fn execute(&self) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::new(MESSAGE_SWITCHED_TO_ENTRIES).with_panel(PanelName::Entries))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsStyle {
    Table,
    BarChart,
}

impl StatisticsStyle {
    pub fn usage(&self) -> &'static str {
        match self {
            StatisticsStyle::Table => VIEW_TABLE_USAGE,
            StatisticsStyle::BarChart => VIEW_BAR_CHART_USAGE,
        }
    }

    fn panel(&self) -> PanelName {
        match self {
            StatisticsStyle::Table => PanelName::StatisticsTable,
            StatisticsStyle::BarChart => PanelName::StatisticsBarChart,
        }
    }
}

/// Computes statistics over a period; `None` means the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStatisticsCommand {
    style: StatisticsStyle,
    period: Option<Period>,
}

impl ViewStatisticsCommand {
    pub fn new(style: StatisticsStyle, period: Option<Period>) -> Self {
        Self { style, period }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let period = self.period.unwrap_or_else(Period::current);
        debug!(%period, "computing statistics");
        model.update_statistics(period);
        Ok(
            CommandResult::new(format!("Showing statistics for {period}"))
                .with_panel(self.style.panel()),
        )
    }
}
