//! # Core Application Logic
//!
//! This module contains Packlist's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Store (items)        │
//!                    │  • Navigation (screen)  │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `DraftEntry`, `PackingItem` and `ValidationError`
//! - [`store`]: `PackingListStore`, the append-only validated list
//! - [`navigation`]: `NavigationState`, the two-screen state machine
//! - [`state`]: The `App` struct that owns one store and one navigation state
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Config file, env and CLI resolution (the only module doing I/O)

pub mod action;
pub mod config;
pub mod item;
pub mod navigation;
pub mod state;
pub mod store;

pub use item::{AddOutcome, DraftEntry, DraftField, PackingItem, ValidationError};
pub use navigation::{NavigationState, Screen};
pub use store::PackingListStore;
