use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::state::{Dimensions, Phase, ViewState};
use crate::tui::component::Component;
use crate::tui::components::{ErrorLine, HelpBar, MessageBox};
use crate::tui::theme::Theme;

/// Columns the box gives up on the right of the terminal.
const BOX_WIDTH_MARGIN: u16 = 1;
/// Rows below the box: a blank spacer, the help hint and one spare.
const BOX_HEIGHT_MARGIN: u16 = 3;

/// Draws the whole screen. Output depends only on `state`, `theme` and the
/// frame size.
pub fn draw_ui(frame: &mut Frame, state: &ViewState, theme: &Theme) {
    let area = frame.area();

    let body = match state.phase() {
        Phase::Errored => {
            let reason = state.failure_reason().unwrap_or_default();
            ErrorLine::new(reason, theme.error_style).render(frame, area);
            return;
        }
        Phase::Loading => None,
        Phase::Loaded => Some(state.body()),
    };

    let (box_area, help_area) = layout(area, state.dimensions);
    MessageBox::new(body, theme).render(frame, box_area);
    HelpBar::new(theme.help_style).render(frame, help_area);
}

/// Splits `area` into the message box and the help line.
///
/// The box is sized from the last known terminal dimensions, or from the
/// frame itself before any size event arrived. Both rects are clamped to
/// `area`, so a tiny terminal gets empty rects instead of a panic.
pub fn layout(area: Rect, dimensions: Option<Dimensions>) -> (Rect, Rect) {
    let (width, height) = match dimensions {
        Some(d) => (
            d.width.saturating_sub(BOX_WIDTH_MARGIN),
            d.height.saturating_sub(BOX_HEIGHT_MARGIN),
        ),
        None => (area.width, area.height.saturating_sub(BOX_HEIGHT_MARGIN)),
    };

    let box_area = Rect::new(area.x, area.y, width, height).intersection(area);
    let help_y = box_area.bottom().saturating_add(1);
    let help_area = Rect::new(area.x, help_y, area.width, 1).intersection(area);
    (box_area, help_area)
}
