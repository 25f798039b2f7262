//! # Item List Component
//!
//! The "View packing list" screen. One entry per stored item:
//!
//! ```text
//! Tent - Shelter (x1)
//!     Keep dry
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ItemListState` (highlight) lives in `TuiState`
//! - `ItemList` is created each frame with borrowed state and the store's items

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::item::PackingItem;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const COMMENT_INDENT: &str = "    ";

/// Events emitted by the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemListEvent {
    Back,
    Quit,
}

/// Persistent state for the list screen.
#[derive(Debug, Default)]
pub struct ItemListState {
    pub selected: usize,
    pub list_state: ListState,
    /// Number of items in the store, as of the last `set_len`.
    len: usize,
}

impl ItemListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the store's item count and keep the highlight inside `0..len`.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.selected = index.min(self.len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

impl EventHandler for ItemListState {
    type Event = ItemListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ItemListEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::InputChar('b') => {
                Some(ItemListEvent::Back)
            }
            TuiEvent::InputChar('q') => Some(ItemListEvent::Quit),
            TuiEvent::CursorUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select(self.selected + 1);
                None
            }
            TuiEvent::CursorHome => {
                self.select(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.select(usize::MAX);
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the list screen.
pub struct ItemList<'a> {
    state: &'a mut ItemListState,
    items: &'a [PackingItem],
    total_quantity: i64,
    show_comments: bool,
    show_totals: bool,
    can_go_back: bool,
}

impl<'a> ItemList<'a> {
    pub fn new(state: &'a mut ItemListState, items: &'a [PackingItem], total_quantity: i64) -> Self {
        Self {
            state,
            items,
            total_quantity,
            show_comments: true,
            show_totals: true,
            can_go_back: true,
        }
    }

    /// Whether to advertise Esc in the help line.
    pub fn can_go_back(mut self, can_go_back: bool) -> Self {
        self.can_go_back = can_go_back;
        self
    }

    pub fn show_comments(mut self, show: bool) -> Self {
        self.show_comments = show;
        self
    }

    pub fn show_totals(mut self, show: bool) -> Self {
        self.show_totals = show;
        self
    }

    fn list_item(&self, index: usize, item: &PackingItem, width: usize) -> ListItem<'static> {
        let style = if index == self.state.selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut lines = vec![Line::from(Span::styled(
            truncate_str(&item.to_string(), width),
            style,
        ))];

        if self.show_comments && !item.comments().is_empty() {
            let wrap_width = width.saturating_sub(COMMENT_INDENT.len()).max(1);
            for line in textwrap::wrap(item.comments(), wrap_width) {
                lines.push(Line::from(Span::styled(
                    format!("{COMMENT_INDENT}{line}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        ListItem::new(Text::from(lines))
    }
}

impl Component for ItemList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.set_len(self.items.len());

        let help = if self.can_go_back {
            " Esc Back  ↑/↓ Move  q Quit "
        } else {
            " ↑/↓ Move  q Quit "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Packing List ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [list_area, footer_area] = if self.show_totals {
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner)
        } else {
            Layout::vertical([Constraint::Min(0), Constraint::Length(0)]).areas(inner)
        };

        if self.items.is_empty() {
            let empty = Paragraph::new("Nothing packed yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, list_area);
        } else {
            let width = list_area.width as usize;
            let items: Vec<ListItem> = self
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| self.list_item(i, item, width))
                .collect();

            frame.render_stateful_widget(List::new(items), list_area, &mut self.state.list_state);
        }

        if self.show_totals {
            let count = match self.items.len() {
                1 => "1 item".to_string(),
                n => format!("{n} items"),
            };
            let footer = Paragraph::new(format!("{count}, {} total", self.total_quantity))
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Right);
            frame.render_widget(footer, footer_area);
        }
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{app_with_items, buffer_text};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(
        items: &[PackingItem],
        total: i64,
        show_comments: bool,
        show_totals: bool,
    ) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ItemListState::new();

        terminal
            .draw(|f| {
                ItemList::new(&mut state, items, total)
                    .show_comments(show_comments)
                    .show_totals(show_totals)
                    .render(f, f.area());
            })
            .unwrap();

        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_back_keys() {
        let mut state = ItemListState::new();
        for event in [
            TuiEvent::Escape,
            TuiEvent::Backspace,
            TuiEvent::InputChar('b'),
        ] {
            assert_eq!(state.handle_event(&event), Some(ItemListEvent::Back));
        }
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('q')),
            Some(ItemListEvent::Quit)
        );
    }

    #[test]
    fn test_selection_clamped() {
        let mut state = ItemListState::new();
        state.set_len(3);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);

        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, 2);

        state.handle_event(&TuiEvent::CursorHome);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_selection_ignored_when_empty() {
        let mut state = ItemListState::new();
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(state.selected, 0);
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_shrinking_len_pulls_selection_back() {
        let mut state = ItemListState::new();
        state.set_len(5);
        state.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(state.selected, 4);

        state.set_len(2);
        assert_eq!(state.selected, 1);
        assert_eq!(state.list_state.selected(), Some(1));

        state.set_len(0);
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_back_hint_follows_can_go_back() {
        let render_help = |can_go_back: bool| {
            let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
            let mut state = ItemListState::new();
            terminal
                .draw(|f| {
                    ItemList::new(&mut state, &[], 0)
                        .can_go_back(can_go_back)
                        .render(f, f.area());
                })
                .unwrap();
            buffer_text(terminal.backend().buffer())
        };

        assert!(render_help(true).contains("Esc Back"));
        let text = render_help(false);
        assert!(!text.contains("Esc Back"));
        assert!(text.contains("q Quit"));
    }

    #[test]
    fn test_render_empty() {
        let text = render(&[], 0, true, true);
        assert!(text.contains("Nothing packed yet."));
        assert!(text.contains("0 items, 0 total"));
    }

    #[test]
    fn test_render_items_in_order_with_comments() {
        let app = app_with_items(&[
            ("Tent", "Shelter", "1", "Keep dry"),
            ("Socks", "Clothes", "4", ""),
        ]);
        let text = render(app.store.items(), app.store.total_quantity(), true, true);

        let tent = text.find("Tent - Shelter (x1)").unwrap();
        let comment = text.find("Keep dry").unwrap();
        let socks = text.find("Socks - Clothes (x4)").unwrap();
        assert!(tent < comment && comment < socks);
        assert!(text.contains("2 items, 5 total"));
    }

    #[test]
    fn test_render_hides_comments_and_totals() {
        let app = app_with_items(&[("Tent", "Shelter", "1", "Keep dry")]);
        let text = render(app.store.items(), app.store.total_quantity(), false, false);

        assert!(text.contains("Tent - Shelter (x1)"));
        assert!(!text.contains("Keep dry"));
        assert!(!text.contains("total"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("sleeping bag", 8), "sleep...");
        assert_eq!(truncate_str("abc", 2), "..");
    }
}
