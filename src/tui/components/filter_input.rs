//! # FilterInput Component
//!
//! Single-line text field for the country filter.
//!
//! The buffer is internal state; every edit emits `FilterEvent::Changed`
//! with the full text so the filter applies while typing. `focused` is a
//! prop owned by the parent's focus mode.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Filter by country";

#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    /// Buffer changed; carries the new text.
    Changed(String),
    /// Enter or Esc: hand focus back to the table.
    Done,
}

pub struct FilterInput {
    pub buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    cursor: usize,
    pub focused: bool,
}

impl Default for FilterInput {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            focused: false,
        }
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map_or(self.cursor, |c| self.cursor + c.len_utf8())
    }

    fn changed(&self) -> Option<FilterEvent> {
        Some(FilterEvent::Changed(self.buffer.clone()))
    }
}

impl Component for FilterInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Country");

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str()).style(Style::default().fg(Color::Green))
        };

        // Keep the cursor visible when the text outgrows the box
        let inner_width = area.width.saturating_sub(2);
        let cursor_col = self.buffer[..self.cursor].width() as u16;
        let scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));

        frame.render_widget(paragraph.block(block).scroll((0, scroll)), area);

        if self.focused {
            frame.set_cursor_position((area.x + 1 + cursor_col - scroll, area.y + 1));
        }
    }
}

impl EventHandler for FilterInput {
    type Event = FilterEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines from the clipboard become spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit | TuiEvent::Escape => Some(FilterEvent::Done),
            _ => None,
        }
    }
}
