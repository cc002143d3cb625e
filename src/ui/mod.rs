//! UI module for rendering the TUI

mod contact;
mod layout;
pub mod navbar;
pub mod page;
mod splash;

use crate::app::App;
use crate::state::View;
use ratatui::{widgets::Paragraph, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.state.current_view {
        View::Splash => {
            if let Some(splash_state) = &app.splash_state {
                splash::draw(frame, area, splash_state);
            }
        }
        View::Landing => {
            let (nav_area, page_area, status_area) = layout::page_areas(area);

            let document = page::compose(&app.state);
            let body = Paragraph::new(document.lines)
                .scroll((app.state.scroll.offset_rows(), 0));
            frame.render_widget(body, page_area);

            navbar::draw(frame, nav_area, &app.state);

            // The dropdown overlays the page, so it renders last
            if app.state.nav.menu_open && navbar::is_collapsed(area.width) {
                navbar::draw_menu(frame, area, &app.state.nav);
            }

            layout::draw_status_bar(frame, status_area, app);
        }
    }
}
