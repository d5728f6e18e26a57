use crate::errors::ParseError;
use crate::logic::commands::toggle::TOGGLE_USAGE;
use crate::logic::commands::{Command, SidePanel, ToggleCommand};

pub fn parse_toggle(args: &str) -> Result<Command, ParseError> {
    let raw = args.trim();
    if raw.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: TOGGLE_USAGE,
        });
    }
    let panel = SidePanel::parse(raw).ok_or_else(|| ParseError::InvalidArgument {
        message: SidePanel::MESSAGE_CONSTRAINTS.to_string(),
        usage: TOGGLE_USAGE,
    })?;
    Ok(Command::Toggle(ToggleCommand::new(panel)))
}
