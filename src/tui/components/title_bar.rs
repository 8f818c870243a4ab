//! # TitleBar Component
//!
//! Top line of the screen: the app name followed by the control hints that
//! stand in for buttons (color rows, country sort toggle, restore, filter).
//!
//! Stateless: every field is a prop copied from `App` each frame. Hints whose
//! toggle is active are highlighted, and the country sort hint flips its label
//! ("Sort by country" / "Unsort by country") with the current sort mode.

use crate::core::view::SortMode;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub show_colors: bool,
    pub sort_mode: SortMode,
    /// Reset is meaningless until a snapshot exists.
    pub can_reset: bool,
}

impl TitleBar {
    pub fn new(show_colors: bool, sort_mode: SortMode, can_reset: bool) -> Self {
        Self {
            show_colors,
            sort_mode,
            can_reset,
        }
    }

    fn hint(key: &'static str, label: &'static str, active: bool, enabled: bool) -> Vec<Span<'static>> {
        let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let label_style = if !enabled {
            Style::default().fg(Color::DarkGray)
        } else if active {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        vec![
            Span::raw("  "),
            Span::styled(format!("[{key}]"), key_style),
            Span::raw(" "),
            Span::styled(label, label_style),
        ]
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let country_label = if self.sort_mode == SortMode::Country {
            "Unsort by country"
        } else {
            "Sort by country"
        };

        let mut spans = vec![Span::styled(
            "Roster",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        spans.extend(Self::hint("c", "Color rows", self.show_colors, true));
        spans.extend(Self::hint(
            "s",
            country_label,
            self.sort_mode == SortMode::Country,
            true,
        ));
        spans.extend(Self::hint("r", "Restore", false, self.can_reset));
        spans.extend(Self::hint("/", "Filter", false, true));
        spans.extend(Self::hint("q", "Quit", false, true));

        frame.render_widget(Line::from(spans), area);
    }
}
