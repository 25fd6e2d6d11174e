//! Layout management and calculations

use crate::constants::{INPUT_POPUP_HEIGHT, MESSAGE_POPUP_HEIGHT, MESSAGE_POPUP_WIDTH_PERCENT};
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Manages layout calculations and constraints for the UI.
///
/// The message popup and the input popup are drawn after the active view and
/// own disjoint regions, so drawing one never overwrites the other.
pub struct LayoutManager;

impl LayoutManager {
    /// Split a view's area into content and a one-line footer
    #[must_use]
    pub fn view_layout(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// Bottom strip reserved for the input popup
    #[must_use]
    pub fn input_popup_area(area: Rect) -> Rect {
        let height = INPUT_POPUP_HEIGHT.min(area.height);
        Rect::new(area.x, area.y + area.height - height, area.width, height)
    }

    /// Centered box above the input popup strip
    #[must_use]
    pub fn message_popup_area(area: Rect) -> Rect {
        let upper_height = area.height.saturating_sub(INPUT_POPUP_HEIGHT);
        let upper = Rect::new(area.x, area.y, area.width, upper_height);
        Self::centered_rect(MESSAGE_POPUP_WIDTH_PERCENT, MESSAGE_POPUP_HEIGHT, upper)
    }

    /// Rect of `percent_x` width and fixed `height`, centered in `area`
    #[must_use]
    pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [rect] = Layout::horizontal([Constraint::Percentage(percent_x)])
            .flex(Flex::Center)
            .areas(row);
        rect
    }
}
