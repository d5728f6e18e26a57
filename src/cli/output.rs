use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::config::{Config, Theme};

/// Message categories used by the output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub theme: Theme,
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
    pub quiet_mode: bool,
}

impl From<&Config> for OutputPreferences {
    fn from(config: &Config) -> Self {
        Self {
            theme: config.theme,
            screen_reader_mode: config.screen_reader_mode,
            high_contrast_mode: config.high_contrast_mode,
            quiet_mode: config.quiet_mode,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "",
        MessageKind::Success => "[ok]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Section => "",
    }
}

/// Formats `message` for `kind` under `prefs`, without printing it.
pub fn format_message(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();
    let base = match (kind, label(kind)) {
        (MessageKind::Section, _) => format!("=== {} ===", text.trim()),
        (_, "") => text,
        (_, tag) => format!("{tag} {text}"),
    };

    if prefs.screen_reader_mode {
        return base;
    }
    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Info => base,
            _ => base.bold().to_string(),
        };
    }

    match (prefs.theme, kind) {
        (_, MessageKind::Info) => base,
        (_, MessageKind::Section) => base.bold().to_string(),
        (Theme::Light, MessageKind::Success) => base.green().to_string(),
        (Theme::Light, MessageKind::Warning) => base.yellow().to_string(),
        (Theme::Light, MessageKind::Error) => base.red().to_string(),
        (Theme::Dark, MessageKind::Success) => base.bright_green().to_string(),
        (Theme::Dark, MessageKind::Warning) => base.bright_yellow().to_string(),
        (Theme::Dark, MessageKind::Error) => base.bright_red().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    // Quiet mode keeps errors and warnings.
    if prefs.quiet_mode && matches!(kind, MessageKind::Info | MessageKind::Section) {
        return;
    }
    let formatted = format_message(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{formatted}"),
        _ => println!("{formatted}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Multi-line blocks such as tables; dropped in quiet mode.
pub fn block(text: &str) {
    if !preferences().quiet_mode && !text.is_empty() {
        println!("{text}");
    }
}
