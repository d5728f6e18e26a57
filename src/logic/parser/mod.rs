//! Turns one line of user input into a [`Command`].

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod parser_util;
pub mod sort;
pub mod syntax;
pub mod toggle;
pub mod tokenizer;
pub mod view;

use tracing::debug;

use crate::config::Theme;
use crate::errors::ParseError;
use crate::logic::commands::{
    all_definitions, find_definition, Command, ExitCommand, HelpCommand, HistoryCommand,
    ListCommand, RedoCommand, SetThemeCommand, StatisticsStyle, UndoCommand, ViewEntryCommand,
};
use crate::model::ListKind;

/// Largest edit distance for which an unknown word gets a suggestion.
const SUGGESTION_DISTANCE: usize = 3;

pub struct GuiltTripParser;

impl GuiltTripParser {
    pub fn parse_command(input: &str) -> Result<Command, ParseError> {
        let input = input.trim();
        let (word, args) = match input.find(char::is_whitespace) {
            Some(split) => input.split_at(split),
            None => (input, ""),
        };
        if word.is_empty() {
            return Err(ParseError::InvalidFormat {
                usage: crate::logic::commands::help::HELP_USAGE,
            });
        }

        let Some(definition) = find_definition(word) else {
            return Err(ParseError::UnknownCommand {
                word: word.to_string(),
                suggestion: suggest(word),
            });
        };
        debug!(word = definition.word, "parsing command");

        let parsed = match definition.word {
            "add" => add::parse_add(args),
            "addCategory" => add::parse_add_category(args),
            "edit" => edit::parse_edit(ListKind::Entries, args),
            "editIncome" => edit::parse_edit(ListKind::Incomes, args),
            "editExpense" => edit::parse_edit(ListKind::Expenses, args),
            "editWish" => edit::parse_edit(ListKind::Wishes, args),
            "editBudget" => edit::parse_edit(ListKind::Budgets, args),
            "delete" => delete::parse_delete(ListKind::Entries, args),
            "deleteWish" => delete::parse_delete(ListKind::Wishes, args),
            "deleteBudget" => delete::parse_delete(ListKind::Budgets, args),
            "find" => find::parse_find(args),
            "sort" => sort::parse_sort(args),
            "viewTable" => view::parse_view_statistics(StatisticsStyle::Table, args),
            "viewBarChart" => view::parse_view_statistics(StatisticsStyle::BarChart, args),
            "toggle" => toggle::parse_toggle(args),
            "help" => {
                let word = args.trim();
                Ok(Command::Help(HelpCommand::new(
                    (!word.is_empty()).then(|| word.to_string()),
                )))
            }
            bare => {
                no_arguments(definition.usage, args)?;
                bare_command(bare).ok_or(ParseError::InvalidFormat {
                    usage: definition.usage,
                })
            }
        };
        parsed.map_err(|err| err.with_usage(definition.usage))
    }
}

fn bare_command(word: &str) -> Option<Command> {
    let command = match word {
        "list" => Command::List(ListCommand::new(ListKind::Entries)),
        "listWish" => Command::List(ListCommand::new(ListKind::Wishes)),
        "listBudget" => Command::List(ListCommand::new(ListKind::Budgets)),
        "viewEntry" => Command::ViewEntry(ViewEntryCommand),
        "setDarkTheme" => Command::SetTheme(SetThemeCommand::new(Theme::Dark)),
        "setLightTheme" => Command::SetTheme(SetThemeCommand::new(Theme::Light)),
        "undo" => Command::Undo(UndoCommand),
        "redo" => Command::Redo(RedoCommand),
        "history" => Command::History(HistoryCommand),
        "exit" => Command::Exit(ExitCommand),
        _ => return None,
    };
    Some(command)
}

fn no_arguments(usage: &'static str, args: &str) -> Result<(), ParseError> {
    let args = args.trim();
    if args.is_empty() {
        Ok(())
    } else {
        Err(ParseError::RedundantPreamble {
            preamble: args.to_string(),
            usage,
        })
    }
}

/// Closest known command word, if it is close enough to be a likely typo.
pub fn suggest(word: &str) -> Option<&'static str> {
    let lowered = word.to_ascii_lowercase();
    all_definitions()
        .into_iter()
        .map(|definition| {
            let distance = strsim::levenshtein(&lowered, &definition.word.to_ascii_lowercase());
            (distance, definition.word)
        })
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, word)| word)
}
