use super::parser_util::parse_period;
use super::syntax::PREFIX_PERIOD;
use super::tokenizer::ArgumentTokenizer;
use crate::errors::ParseError;
use crate::logic::commands::{Command, StatisticsStyle, ViewStatisticsCommand};

/// `viewTable` / `viewBarChart` with an optional `p/MONTH` or `p/START,END`.
pub fn parse_view_statistics(style: StatisticsStyle, args: &str) -> Result<Command, ParseError> {
    let map = ArgumentTokenizer::tokenize(args, &[PREFIX_PERIOD]);
    if !map.preamble().is_empty() {
        return Err(ParseError::RedundantPreamble {
            preamble: map.preamble().to_string(),
            usage: style.usage(),
        });
    }
    let period = map.value(PREFIX_PERIOD).map(parse_period).transpose()?;
    Ok(Command::ViewStatistics(ViewStatisticsCommand::new(style, period)))
}
