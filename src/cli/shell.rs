use std::{
    borrow::Cow,
    io::{self, BufRead},
};

use dialoguer::{theme::ColorfulTheme, Confirm};
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};
use tracing::{info, warn};

use crate::cli::{help, output, render};
use crate::config::{Config, ConfigManager};
use crate::errors::CliError;
use crate::logic::commands::{
    all_definitions, CommandResult, PanelName, PanelVisibility, SidePanel,
};
use crate::logic::LogicManager;
use crate::model::ListKind;

const PROMPT: &str = "guilttrip> ";
pub const SCRIPT_ENV: &str = "GUILTTRIP_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut session = Session::new(mode, ConfigManager::new()?)?;
    match mode {
        CliMode::Interactive => run_interactive(&mut session),
        CliMode::Script => run_script(&mut session),
    }
}

struct Session {
    mode: CliMode,
    logic: LogicManager,
    config_manager: ConfigManager,
    config: Config,
    panels: PanelVisibility,
}

impl Session {
    fn new(mode: CliMode, config_manager: ConfigManager) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::set_preferences((&config).into());
        info!(?mode, theme = ?config.theme, "session started");
        Ok(Self {
            mode,
            logic: LogicManager::default(),
            config_manager,
            config,
            panels: PanelVisibility::default(),
        })
    }

    fn handle_line(&mut self, line: &str) -> LoopControl {
        if line.trim().is_empty() {
            return LoopControl::Continue;
        }
        match self.logic.execute(line) {
            Ok(result) => self.apply(result),
            Err(err) => {
                output::error(&err);
                LoopControl::Continue
            }
        }
    }

    fn apply(&mut self, result: CommandResult) -> LoopControl {
        output::success(&result.feedback);

        if let Some(theme) = result.theme {
            self.config.theme = theme;
            output::set_preferences((&self.config).into());
            if let Err(err) = self.config_manager.save(&self.config) {
                warn!(error = %err, "could not persist theme");
                output::warning(format!("Theme not saved: {err}"));
            }
        }
        if let Some(side) = result.toggle {
            self.toggle_panel(side);
        }
        if let Some(panel) = result.panel {
            self.render_panel(panel);
        }
        if result.show_help {
            help::print_overview(&all_definitions());
        }
        if result.exit {
            LoopControl::Exit
        } else {
            LoopControl::Continue
        }
    }

    fn toggle_panel(&mut self, side: SidePanel) {
        let shown = self.panels.toggle(side);
        info!(panel = %side, shown, "toggled panel");
        if shown {
            output::info(format!("The {side} panel is now shown."));
        } else {
            output::info(format!("The {side} panel is now hidden."));
        }
    }

    fn render_panel(&self, panel: PanelName) {
        if !self.panels.shows(panel) {
            if let Some(side) = SidePanel::of(panel) {
                output::info(format!(
                    "The {side} panel is hidden. Use `toggle {side}` to show it."
                ));
            }
            return;
        }
        let plain = output::preferences().screen_reader_mode;
        let width = render::terminal_width();
        let text = match panel {
            PanelName::Entries => {
                render::entry_table(&self.logic.displayed(ListKind::Entries), width, plain)
            }
            PanelName::Wishes => {
                render::entry_table(&self.logic.displayed(ListKind::Wishes), width, plain)
            }
            PanelName::Budgets => {
                render::entry_table(&self.logic.displayed(ListKind::Budgets), width, plain)
            }
            PanelName::StatisticsTable => match self.logic.statistics() {
                Some(statistics) => render::statistics_table(statistics, plain),
                None => return,
            },
            PanelName::StatisticsBarChart => match self.logic.statistics() {
                Some(statistics) => render::bar_chart(statistics, width),
                None => return,
            },
        };
        output::block(&text);
    }

    fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Exit guiltTrip?")
            .default(false)
            .interact()?)
    }
}

fn run_interactive(session: &mut Session) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new()));
    output::info("Welcome to guiltTrip. Type `help` to see the commands.");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if session.handle_line(trimmed) == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if session.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting guiltTrip.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn run_script(session: &mut Session) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if session.handle_line(&line?) == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

/// Completes the command word only; arguments are left to the user.
struct CommandHelper {
    words: Vec<&'static str>,
}

impl CommandHelper {
    fn new() -> Self {
        let mut words: Vec<&'static str> = all_definitions()
            .into_iter()
            .map(|definition| definition.word)
            .collect();
        words.sort_unstable();
        Self { words }
    }

    fn candidates(&self, needle: &str) -> Vec<Pair> {
        let needle = needle.to_ascii_lowercase();
        self.words
            .iter()
            .filter(|word| word.to_ascii_lowercase().starts_with(&needle))
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect()
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();
        if prefix[start..].contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        Ok((start, self.candidates(&prefix[start..])))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}
