use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{EntryForm, EntryScreen, ItemList, TitleBar};

/// Render the visible screen. Pure function of `App` + `TuiState`.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let screen = app.navigation.current();
    TitleBar::new(screen.title(), app.status_message.as_str()).render(frame, title_area);

    match screen {
        Screen::Entry => {
            EntryScreen::new(&tui.entry, app.store.len()).render(frame, main_area);
            if tui.form_open {
                EntryForm::new(&mut tui.form).render(frame, main_area);
            }
        }
        Screen::ListView => {
            ItemList::new(
                &mut tui.item_list,
                app.store.items(),
                app.store.total_quantity(),
            )
            .show_comments(app.show_comments)
            .show_totals(app.show_totals)
            .can_go_back(app.navigation.can_go_back())
            .render(frame, main_area);
        }
    }
}
