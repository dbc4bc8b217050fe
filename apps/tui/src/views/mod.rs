//! Screen rendering.

pub mod layout;
pub mod request_panel;
pub mod result_panel;

pub use layout::GlobalLayout;
pub use request_panel::render_request_panel;
pub use result_panel::render_result_panel;

use ratatui::prelude::*;

use crate::app::App;
use crate::components::{render_status_footer, render_title_bar};

/// Renders the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let [title_area, main_area, footer_area] = GlobalLayout::create(frame.area());
    let [left, right] = GlobalLayout::split_main_horizontal(main_area);

    render_title_bar(frame, title_area, app);
    render_request_panel(frame, left, app);
    render_result_panel(frame, right, app);
    render_status_footer(frame, footer_area, app);
}
