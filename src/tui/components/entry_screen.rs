//! # Entry Screen Component
//!
//! The start screen: two buttons, "Add to packing list" and "View packing
//! list", plus a count of what has been packed so far.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EntryScreenState` (button selection) lives in `TuiState`
//! - `EntryScreen` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryButton {
    #[default]
    Add,
    View,
}

impl EntryButton {
    fn label(&self) -> &'static str {
        match self {
            EntryButton::Add => "Add to packing list",
            EntryButton::View => "View packing list",
        }
    }

    fn toggled(&self) -> Self {
        match self {
            EntryButton::Add => EntryButton::View,
            EntryButton::View => EntryButton::Add,
        }
    }
}

/// Events emitted by the entry screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryEvent {
    OpenForm,
    ViewList,
    Quit,
}

#[derive(Debug, Default)]
pub struct EntryScreenState {
    pub selected: EntryButton,
}

impl EntryScreenState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for EntryScreenState {
    type Event = EntryEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<EntryEvent> {
        match event {
            TuiEvent::CursorLeft
            | TuiEvent::CursorRight
            | TuiEvent::NextField
            | TuiEvent::PreviousField => {
                self.selected = self.selected.toggled();
                None
            }
            TuiEvent::Submit => Some(match self.selected {
                EntryButton::Add => EntryEvent::OpenForm,
                EntryButton::View => EntryEvent::ViewList,
            }),
            TuiEvent::InputChar('a') => Some(EntryEvent::OpenForm),
            TuiEvent::InputChar('v') => Some(EntryEvent::ViewList),
            TuiEvent::InputChar('q') => Some(EntryEvent::Quit),
            _ => None,
        }
    }
}

/// Transient render wrapper for the entry screen.
pub struct EntryScreen<'a> {
    state: &'a EntryScreenState,
    item_count: usize,
}

impl<'a> EntryScreen<'a> {
    pub fn new(state: &'a EntryScreenState, item_count: usize) -> Self {
        Self { state, item_count }
    }

    fn button(&self, button: EntryButton, shortcut: char) -> Span<'static> {
        let style = if self.state.selected == button {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(format!(" [{}] {} ", shortcut, button.label()), style)
    }
}

impl Component for EntryScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let packed = match self.item_count {
            0 => "Nothing packed yet".to_string(),
            1 => "1 item packed".to_string(),
            n => format!("{n} items packed"),
        };

        let lines = vec![
            Line::from(Span::styled(
                "Packing List",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(packed, Style::default().fg(Color::DarkGray))),
            Line::default(),
            Line::from(vec![
                self.button(EntryButton::Add, 'a'),
                Span::raw("   "),
                self.button(EntryButton::View, 'v'),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "←/→ Select  Enter Open  q Quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [content] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_enter_activates_selected_button() {
        let mut state = EntryScreenState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(EntryEvent::OpenForm));

        assert_eq!(state.handle_event(&TuiEvent::CursorRight), None);
        assert_eq!(state.selected, EntryButton::View);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(EntryEvent::ViewList));
    }

    #[test]
    fn test_shortcuts() {
        let mut state = EntryScreenState::new();
        assert_eq!(state.handle_event(&TuiEvent::InputChar('a')), Some(EntryEvent::OpenForm));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('v')), Some(EntryEvent::ViewList));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('q')), Some(EntryEvent::Quit));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_render_shows_buttons_and_count() {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = EntryScreenState::new();

        terminal
            .draw(|f| {
                EntryScreen::new(&state, 3).render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Add to packing list"));
        assert!(text.contains("View packing list"));
        assert!(text.contains("3 items packed"));
    }
}
