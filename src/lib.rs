#![doc(test(attr(deny(warnings))))]

//! guiltTrip keeps track of expenses, income, wishes and budgets through a
//! small command language, with undo/redo and monthly statistics.

pub mod cli;
pub mod config;
pub mod errors;
pub mod logic;
pub mod model;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing once per process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("guilttrip tracing initialized");
    });
}
