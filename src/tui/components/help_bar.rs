use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::tui::component::Component;

pub const HELP_TEXT: &str = "  q: Quit • esc: Quit • ctrl+c: Quit";

/// One-line key hint rendered below the message box.
pub struct HelpBar {
    pub style: Style,
}

impl HelpBar {
    pub fn new(style: Style) -> Self {
        Self { style }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::styled(HELP_TEXT, self.style), area);
    }
}
