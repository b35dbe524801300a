#![doc(test(attr(deny(warnings))))]

//! Expense Ledger keeps an in-memory, ordered list of expenses for a single
//! session, validates new entries, totals them and renders the result through
//! a pluggable presentation surface. The bundled CLI is one such surface.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Expense Ledger tracing initialized.");
    });
}
