//! # EntryForm Component
//!
//! Modal "Add to Packing List" dialog with four single-line fields.
//!
//! ## Responsibilities
//!
//! - Capture raw text for name, category, quantity and comments
//! - Move focus between fields (Tab / Shift+Tab, Up / Down)
//! - Emit the draft on Enter, dismiss on Esc
//! - Show which field a rejected draft failed on
//!
//! ## State Management
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EntryFormState` lives in `TuiState` and survives dismissal, so a
//!   dismissed dialog reopens with the values the user had typed
//! - `EntryForm` is created each frame with borrowed state
//!
//! The form never validates. It hands a plain `DraftEntry` to the core and
//! reacts to the verdict through `reset()` or `reject()`.

mod text_field;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

use crate::core::item::{DraftEntry, DraftField, ValidationError};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

use text_field::TextField;

const DIALOG_WIDTH: u16 = 60;
/// Four 3-row fields, one error row, two border rows.
const DIALOG_HEIGHT: u16 = 4 * 3 + 1 + 2;

/// High-level events emitted by the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// User pressed Enter. Carries a copy of the current field values.
    Submit(DraftEntry),
    /// User pressed Esc.
    Dismiss,
    /// Text, cursor or focus changed.
    Changed,
}

/// Persistent state for the add dialog.
pub struct EntryFormState {
    fields: [TextField; 4],
    pub focus: DraftField,
    pub error: Option<ValidationError>,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryFormState {
    pub fn new() -> Self {
        Self {
            fields: Default::default(),
            focus: DraftField::Name,
            error: None,
        }
    }

    pub fn field(&self, field: DraftField) -> &TextField {
        &self.fields[field as usize]
    }

    fn field_mut(&mut self, field: DraftField) -> &mut TextField {
        &mut self.fields[field as usize]
    }

    /// Snapshot the fields as a draft for submission.
    pub fn draft(&self) -> DraftEntry {
        let mut draft = DraftEntry::default();
        for field in DraftField::ALL {
            draft.field_mut(field).push_str(self.field(field).text());
        }
        draft
    }

    /// Clear everything after a successful add.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focus = DraftField::Name;
        self.error = None;
    }

    /// Show a rejection and jump to the field that caused it.
    pub fn reject(&mut self, error: ValidationError) {
        self.focus = error.field();
        self.error = Some(error);
    }
}

impl EventHandler for EntryFormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::Escape => Some(FormEvent::Dismiss),
            TuiEvent::Submit => Some(FormEvent::Submit(self.draft())),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                Some(FormEvent::Changed)
            }
            TuiEvent::PreviousField | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                Some(FormEvent::Changed)
            }
            _ => {
                let focus = self.focus;
                if !self.field_mut(focus).handle_event(event) {
                    return None;
                }
                // Editing the offending field dismisses its error
                if self.error.is_some_and(|e| e.field() == focus) {
                    self.error = None;
                }
                Some(FormEvent::Changed)
            }
        }
    }
}

/// Transient render wrapper for the add dialog.
pub struct EntryForm<'a> {
    state: &'a mut EntryFormState,
}

impl<'a> EntryForm<'a> {
    pub fn new(state: &'a mut EntryFormState) -> Self {
        Self { state }
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: DraftField) {
        let focused = self.state.focus == field;
        let errored = self.state.error.is_some_and(|e| e.field() == field);

        let border_style = if errored {
            Style::default().fg(Color::Red)
        } else if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(field.label());

        let inner_width = area.width.saturating_sub(2);
        let (visible, cursor_col) = self.state.field(field).viewport(inner_width);

        let text_style = if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(visible).style(text_style).block(block), area);

        if focused && inner_width > 0 {
            frame.set_cursor_position((area.x + 1 + cursor_col, area.y + 1));
        }
    }
}

impl Component for EntryForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Add to Packing List ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Tab Next  Enter Add  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

        for (row, field) in rows.iter().zip(DraftField::ALL) {
            self.render_field(frame, *row, field);
        }

        if let Some(error) = self.state.error {
            let message = Paragraph::new(format!("{}: {}", error.field().label(), error)).style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            );
            frame.render_widget(message, rows[4]);
        }
    }
}
