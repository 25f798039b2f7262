//! # Navigation
//!
//! Two-screen state machine. Holds the visible screen plus the single
//! previous screen needed for Back.
//!
//! ```text
//!          go(ListView)
//!   Entry ─────────────► ListView
//!     ▲                     │
//!     └─────────────────────┘
//!            go_back()
//! ```
//!
//! `go()` to the current screen and `go_back()` at `Entry` are no-ops.

use log::debug;

/// Screen tokens. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Main screen with the add/view buttons.
    #[default]
    Entry,
    /// The accumulated packing list.
    ListView,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Entry => "Add Items",
            Screen::ListView => "Packing List",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    current: Screen,
    previous: Option<Screen>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Switch to `target`. Staying on the same screen keeps the history as is.
    pub fn go(&mut self, target: Screen) {
        if self.current == target {
            return;
        }
        debug!("Navigate {:?} -> {:?}", self.current, target);
        self.previous = Some(self.current);
        self.current = target;
    }

    /// Return to the previous screen. `Entry` is the root, so nothing happens there.
    pub fn go_back(&mut self) {
        if self.current == Screen::Entry {
            return;
        }
        let target = self.previous.take().unwrap_or(Screen::Entry);
        debug!("Navigate back {:?} -> {:?}", self.current, target);
        self.current = target;
    }

    pub fn can_go_back(&self) -> bool {
        self.current != Screen::Entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_entry() {
        let nav = NavigationState::new();
        assert_eq!(nav.current(), Screen::Entry);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_go_and_back() {
        let mut nav = NavigationState::new();
        nav.go(Screen::ListView);
        assert_eq!(nav.current(), Screen::ListView);
        assert!(nav.can_go_back());

        nav.go_back();
        assert_eq!(nav.current(), Screen::Entry);
    }

    #[test]
    fn test_back_at_entry_is_noop() {
        let mut nav = NavigationState::new();
        nav.go_back();
        nav.go_back();
        assert_eq!(nav.current(), Screen::Entry);
    }

    #[test]
    fn test_go_is_idempotent() {
        let mut nav = NavigationState::new();
        nav.go(Screen::ListView);
        nav.go(Screen::ListView);
        assert_eq!(nav.current(), Screen::ListView);

        // One back is enough even after repeated go()
        nav.go_back();
        assert_eq!(nav.current(), Screen::Entry);
    }

    #[test]
    fn test_explicit_go_entry_then_back_stays_at_entry() {
        let mut nav = NavigationState::new();
        nav.go(Screen::ListView);
        nav.go(Screen::Entry);
        nav.go_back();
        assert_eq!(nav.current(), Screen::Entry);
    }
}
