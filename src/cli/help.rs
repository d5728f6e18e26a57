use crate::cli::output;
use crate::logic::commands::CommandDefinition;

pub fn print_overview(definitions: &[CommandDefinition]) {
    output::section("Available commands");
    for definition in definitions {
        output::info(format!("  {:<14} {}", definition.word, definition.description));
    }
    output::info("Use `help <command>` for details.");
}
