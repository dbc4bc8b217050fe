//! Global layout structure for the TUI application.
//!
//! - Title bar (fixed, height 2): name and request status, then a rule
//! - Main area (flexible): request editor | result
//! - Footer (fixed, height 1): key hints

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Global layout structure for the TUI
pub struct GlobalLayout;

impl GlobalLayout {
    /// Creates the base three-tier vertical layout
    pub fn create(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }

    /// Splits the main area into the editor (left) and result (right) panels
    pub fn split_main_horizontal(main_area: Rect) -> [Rect; 2] {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Fill(1)])
            .split(main_area);
        [chunks[0], chunks[1]]
    }

    /// Splits a panel body into content and a status block of `status_height` lines
    pub fn split_status(area: Rect, status_height: u16) -> [Rect; 2] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(status_height)])
            .split(area);
        [chunks[0], chunks[1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reserves_title_and_footer() {
        let [title, main, footer] = GlobalLayout::create(Rect::new(0, 0, 100, 30));
        assert_eq!(title.height, 2);
        assert_eq!(footer.height, 1);
        assert_eq!(main.height, 27);
    }

    #[test]
    fn test_split_main_halves() {
        let [left, right] = GlobalLayout::split_main_horizontal(Rect::new(0, 0, 100, 20));
        assert_eq!(left.width, 50);
        assert_eq!(right.x, 50);
    }
}
