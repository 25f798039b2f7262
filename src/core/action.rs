//! # Actions
//!
//! Everything that can happen to Packlist's core state becomes an `Action`.
//! User presses Enter in the add dialog? That's `Action::SubmitDraft(draft)`.
//! User asks for the list? That's `Action::Navigate(Screen::ListView)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what to do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::item::{DraftEntry, ValidationError};
use crate::core::navigation::Screen;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Validate the draft and append it to the list.
    SubmitDraft(DraftEntry),
    /// Switch to the given screen.
    Navigate(Screen),
    /// Back to the previous screen.
    Back,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Item was stored. Clear the form and close the dialog.
    DraftAccepted,
    /// Item was refused. Keep the form open and point at the bad field.
    DraftRejected(ValidationError),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SubmitDraft(draft) => match app.store.add(&draft) {
            Ok(()) => {
                let count = app.store.len();
                info!("Added item #{} ({} total)", count, app.store.total_quantity());
                let count_text = match count {
                    1 => "1 item".to_string(),
                    n => format!("{n} items"),
                };
                app.status_message = format!("Added {} ({count_text})", draft.name.trim());
                Effect::DraftAccepted
            }
            Err(e) => {
                info!("Rejected draft: {}", e);
                app.status_message = format!("Not added: {e}");
                Effect::DraftRejected(e)
            }
        },
        Action::Navigate(screen) => {
            app.navigation.go(screen);
            Effect::None
        }
        Action::Back => {
            app.navigation.go_back();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
