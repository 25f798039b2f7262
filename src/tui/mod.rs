//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! TuiEvent ─┬─ Ctrl+C ───────────────────────────► Action::Quit
//!           ├─ Entry + dialog open ─► EntryForm ──► Action::SubmitDraft
//!           ├─ Entry ───────────────► EntryScreen ► Action::Navigate(ListView)
//!           └─ ListView ────────────► ItemList ───► Action::Back
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after it has handled at least
//! one event (including terminal resize).

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    EntryEvent, EntryFormState, EntryScreenState, FormEvent, ItemListEvent, ItemListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub entry: EntryScreenState,
    /// Draft being typed. Kept across dismissals, cleared on successful add.
    pub form: EntryFormState,
    pub form_open: bool,
    pub item_list: ItemListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            entry: EntryScreenState::new(),
            form: EntryFormState::new(),
            form_open: false,
            item_list: ItemListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock, // Non-blinking cursor in the form fields
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(&mut app, &mut tui, event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    info!(
        "Session ended with {} items ({} total)",
        app.store.len(),
        app.store.total_quantity()
    );
    ratatui::restore();
    result
}

/// Route one terminal event to the component that owns it and apply the
/// resulting action. Returns the effect of the last `update()` call.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        // Resize just needs a redraw (already flagged by the caller)
        TuiEvent::Resize => return Effect::None,
        // Ctrl+C always quits regardless of screen
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        _ => {}
    }

    match app.navigation.current() {
        Screen::Entry if tui.form_open => {
            let Some(form_event) = tui.form.handle_event(&event) else {
                return Effect::None;
            };
            match form_event {
                FormEvent::Submit(draft) => {
                    let effect = update(app, Action::SubmitDraft(draft));
                    match effect {
                        Effect::DraftAccepted => {
                            tui.form.reset();
                            tui.form_open = false;
                        }
                        Effect::DraftRejected(e) => tui.form.reject(e),
                        _ => {}
                    }
                    effect
                }
                FormEvent::Dismiss => {
                    debug!("Add dialog dismissed");
                    tui.form_open = false;
                    Effect::None
                }
                FormEvent::Changed => Effect::None,
            }
        }
        Screen::Entry => match tui.entry.handle_event(&event) {
            Some(EntryEvent::OpenForm) => {
                debug!("Add dialog opened");
                tui.form_open = true;
                Effect::None
            }
            Some(EntryEvent::ViewList) => update(app, Action::Navigate(Screen::ListView)),
            Some(EntryEvent::Quit) => update(app, Action::Quit),
            None => Effect::None,
        },
        Screen::ListView => {
            tui.item_list.set_len(app.store.len());
            match tui.item_list.handle_event(&event) {
                Some(ItemListEvent::Back) => update(app, Action::Back),
                Some(ItemListEvent::Quit) => update(app, Action::Quit),
                None => Effect::None,
            }
        }
    }
}
