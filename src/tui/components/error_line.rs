use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::tui::component::Component;

/// Single line reporting why the fetch failed. Replaces the whole screen.
pub struct ErrorLine<'a> {
    pub reason: &'a str,
    pub style: Style,
}

impl<'a> ErrorLine<'a> {
    pub fn new(reason: &'a str, style: Style) -> Self {
        Self { reason, style }
    }
}

impl Component for ErrorLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line_area = Rect { height: area.height.min(1), ..area };
        frame.render_widget(Span::styled(format!("Error: {}", self.reason), self.style), line_area);
    }
}
