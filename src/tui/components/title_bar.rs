//! # TitleBar Component
//!
//! Top status bar: app name, current screen, last status message.
//!
//! Stateless. It receives all data as props and renders a single line:
//!
//! 1. **Status message**: `"Packlist | Packing List | Added Tent (1 item)"`
//! 2. **Default**: `"Packlist | Packing List"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
///
/// # Props
///
/// - `screen_title`: Title of the visible screen (from `Screen::title`)
/// - `status_message`: Transient status (e.g. "Not added: category must not be empty")
pub struct TitleBar {
    pub screen_title: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_title: impl Into<String>, status_message: impl Into<String>) -> Self {
        Self {
            screen_title: screen_title.into(),
            status_message: status_message.into(),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "Packlist",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | {}", self.screen_title)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
