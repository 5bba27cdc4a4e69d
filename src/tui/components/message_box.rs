//! # MessageBox Component
//!
//! Bordered box holding the server message. While the fetch is still in
//! flight it shows a dimmed placeholder after the label.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const MESSAGE_LABEL: &str = "Message: ";
pub const LOADING_PLACEHOLDER: &str = "waiting for server...";

pub struct MessageBox<'a> {
    /// `None` while loading.
    pub body: Option<&'a str>,
    pub theme: &'a Theme,
}

impl<'a> MessageBox<'a> {
    pub fn new(body: Option<&'a str>, theme: &'a Theme) -> Self {
        Self { body, theme }
    }

    fn content(&self) -> Text<'a> {
        match self.body {
            // Body may span several lines; the label only prefixes the first.
            Some(body) => Text::raw(format!("{MESSAGE_LABEL}{body}")),
            None => Text::from(Line::from(vec![
                Span::raw(MESSAGE_LABEL),
                Span::styled(
                    LOADING_PLACEHOLDER,
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ])),
        }
    }
}

impl Component for MessageBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(self.theme.border_type)
            .border_style(self.theme.border_style)
            .padding(Padding::horizontal(self.theme.padding));

        let paragraph = Paragraph::new(self.content())
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, row_text};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(body: Option<&str>, width: u16, height: u16) -> ratatui::buffer::Buffer {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| MessageBox::new(body, &theme).render(f, f.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_message_box_shows_label_and_body() {
        let buffer = draw(Some("hello"), 30, 3);
        assert_eq!(row_text(&buffer, 0), "╭────────────────────────────╮");
        assert_eq!(row_text(&buffer, 1), "│  Message: hello            │");
        assert_eq!(row_text(&buffer, 2), "╰────────────────────────────╯");
    }

    #[test]
    fn test_message_box_loading_placeholder() {
        let buffer = draw(None, 40, 3);
        let text = buffer_text(&buffer);
        assert!(text.contains("Message: waiting for server..."));
    }

    #[test]
    fn test_message_box_wraps_long_body() {
        let buffer = draw(Some("one two three four five six"), 16, 8);
        let text = buffer_text(&buffer);
        assert!(text.contains("Message:"));
        assert!(text.contains("six"));
    }

    #[test]
    fn test_message_box_multiline_body() {
        let buffer = draw(Some("first\nsecond"), 30, 4);
        assert_eq!(row_text(&buffer, 1), "│  Message: first            │");
        assert_eq!(row_text(&buffer, 2), "│  second                    │");
    }
}
