//! # StatusBar Component
//!
//! Bottom line: how many rows are visible, how many were deleted since the
//! fetch, the active sort and filter, and the latest status message. A fetch error replaces the status message in red.

use crate::core::view::SortMode;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub struct StatusBar<'a> {
    pub shown: usize,
    pub total: usize,
    /// Records deleted since the fetch or the last reset.
    pub deleted: usize,
    pub sort_mode: SortMode,
    pub filter_text: Option<&'a str>,
    pub status_message: &'a str,
    pub error: Option<&'a str>,
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let mut spans = vec![
            Span::raw(format!("{}/{} users", self.shown, self.total)),
        ];
        if self.deleted > 0 {
            spans.push(Span::styled(format!(" ({} deleted)", self.deleted), dim));
        }
        spans.push(Span::styled(" | ", dim));
        spans.push(Span::raw(format!("sort: {}", self.sort_mode.label())));
        if let Some(filter) = self.filter_text {
            spans.push(Span::styled(" | ", dim));
            spans.push(Span::raw(format!("country: \"{filter}\"")));
        }
        spans.push(Span::styled(" | ", dim));
        match self.error {
            Some(error) => spans.push(Span::styled(
                format!("Error: {error}"),
                Style::default().fg(Color::Red),
            )),
            None => spans.push(Span::raw(self.status_message)),
        }
        frame.render_widget(Line::from(spans), area);
    }
}
