//! # Application State
//!
//! Core session state for Packlist. This module contains domain state only,
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: PackingListStore        // validated items, insertion order
//! ├── navigation: NavigationState    // which screen is visible
//! ├── status_message: String         // title bar text
//! ├── show_comments: bool            // list view preference
//! └── show_totals: bool              // list view preference
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::core::navigation::NavigationState;
use crate::core::store::PackingListStore;

pub const WELCOME_MESSAGE: &str = "Welcome to Packlist!";

pub struct App {
    pub store: PackingListStore,
    pub navigation: NavigationState,
    pub status_message: String,
    pub show_comments: bool,
    pub show_totals: bool,
}

impl App {
    pub fn new() -> Self {
        Self::from_config(&ResolvedConfig::default())
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            store: PackingListStore::new(),
            navigation: NavigationState::new(),
            status_message: String::from(WELCOME_MESSAGE),
            show_comments: config.show_comments,
            show_totals: config.show_totals,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
