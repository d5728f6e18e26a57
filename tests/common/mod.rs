#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use guilttrip::logic::LogicManager;
use guilttrip::model::ListKind;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Three entries, one wish and one budget, all in October 2019.
pub const TYPICAL_COMMANDS: &[&str] = &[
    "add t/expense c/Food d/Lunch a/5.60 date/2019-10-10 tag/work",
    "add t/expense c/Travel d/Taxi home a/12 date/2019-10-11",
    "add t/income c/Salary d/October pay a/3000 date/2019-10-01",
    "add t/wish c/Shopping d/Phone a/900 date/2019-10-05",
    "add t/budget c/Food d/Food budget a/300 date/2019-10-01",
];

pub fn logic_with(commands: &[&str]) -> LogicManager {
    let mut logic = LogicManager::default();
    for command in commands {
        logic
            .execute(command)
            .unwrap_or_else(|err| panic!("`{command}` failed: {err}"));
    }
    logic
}

pub fn typical_logic() -> LogicManager {
    logic_with(TYPICAL_COMMANDS)
}

pub fn descriptions(logic: &LogicManager, list: ListKind) -> Vec<String> {
    logic
        .displayed(list)
        .iter()
        .map(|entry| entry.description().to_string())
        .collect()
}

/// Fresh directory that outlives the calling test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}
