//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing the current screen and status
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it each
//! frame to render:
//! - `EntryScreenState` / `EntryScreen`: start screen with the two buttons
//! - `EntryFormState` / `EntryForm`: modal "Add to Packing List" dialog
//! - `ItemListState` / `ItemList`: the packing list view
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! ItemList::new(&mut tui.item_list, app.store.items(), app.store.total_quantity())
//!
//! // Bad: Hidden dependency on global state
//! ItemList::new(&mut tui.item_list) // reads from App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── entry_screen.rs  (Start screen buttons)
//! ├── entry_form/      (Add dialog + single-line text fields)
//! └── item_list.rs     (Packing list view)
//! ```

use ratatui::layout::{Constraint, Flex, Layout, Rect};

mod title_bar;
pub use title_bar::TitleBar;

pub mod entry_form;
pub mod entry_screen;
pub mod item_list;
pub use entry_form::{EntryForm, EntryFormState, FormEvent};
pub use entry_screen::{EntryEvent, EntryScreen, EntryScreenState};
pub use item_list::{ItemList, ItemListEvent, ItemListState};

/// Center a `width` x `height` rect inside `outer`, shrinking to fit.
pub(crate) fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [center_v] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let outer = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 10, outer);
        assert_eq!(rect, Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn test_centered_rect_shrinks_to_fit() {
        let outer = Rect::new(0, 0, 30, 8);
        let rect = centered_rect(60, 15, outer);
        assert_eq!(rect, outer);
    }
}
