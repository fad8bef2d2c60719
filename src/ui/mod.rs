//! UI module for rendering the TUI

mod about;
mod forms;
mod layout;
mod statistics;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (tabs_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_tabs(frame, tabs_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Register => forms::draw(frame, main_area, app),
        View::Statistics => statistics::draw(frame, main_area, app),
        View::About => about::draw(frame, main_area),
    }

    layout::draw_status_bar(frame, status_area, app);
}
