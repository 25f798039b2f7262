//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::item::DraftEntry;
use crate::core::state::App;

/// Creates a test App with default preferences.
pub fn test_app() -> App {
    App::new()
}

/// Shorthand for building a draft from four literals.
pub fn draft(name: &str, category: &str, quantity: &str, comments: &str) -> DraftEntry {
    DraftEntry::new(name, category, quantity, comments)
}

/// Creates a test App that already holds the given `(name, category, quantity, comments)` rows.
pub fn app_with_items(rows: &[(&str, &str, &str, &str)]) -> App {
    let mut app = test_app();
    for (name, category, quantity, comments) in rows {
        app.store
            .add(&draft(name, category, quantity, comments))
            .unwrap();
    }
    app
}

/// Flattens a TestBackend buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
