//! # UserTable Component
//!
//! The projection as a table: one row per user, a header whose cells double
//! as sort buttons, a movable selection for deleting.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `UserTableState` lives in `TuiState` (selection, cached geometry)
//! - `UserTable` is created each frame with the current projection as props
//!
//! Geometry from the last render (header row, body area, column bounds) is
//! cached in the state so mouse clicks can be hit-tested without re-running
//! layout.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Cell, Row, Table, TableState};

use crate::core::view::SortMode;
use crate::source::User;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const COLUMN_SPACING: u16 = 1;

const WIDTHS: [Constraint; 7] = [
    Constraint::Length(4),
    Constraint::Fill(2),
    Constraint::Fill(2),
    Constraint::Fill(2),
    Constraint::Length(3),
    Constraint::Fill(2),
    Constraint::Fill(3),
];

/// Header label and the sort it selects when clicked.
const COLUMNS: [(&str, Option<SortMode>); 7] = [
    ("#", Some(SortMode::None)),
    ("Name", Some(SortMode::Name)),
    ("Last name", Some(SortMode::Last)),
    ("Country", Some(SortMode::Country)),
    ("Nat", None),
    ("City", None),
    ("Email", None),
];

const STRIPE_EVEN: Color = Color::Rgb(51, 51, 51);
const STRIPE_ODD: Color = Color::Rgb(85, 85, 85);

/// Events emitted by the table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// Delete the row at this index of the projection.
    Delete(usize),
    SortBy(SortMode),
}

/// Persistent state for the user table.
#[derive(Default)]
pub struct UserTableState {
    pub table_state: TableState,
    row_count: usize,
    page_size: usize,
    header_y: Option<u16>,
    body: Rect,
    columns: Vec<Rect>,
}

impl UserTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Keeps the selection inside `0..row_count` after the projection changed.
    pub fn clamp(&mut self, row_count: usize) {
        self.row_count = row_count;
        let selected = match self.table_state.selected() {
            _ if row_count == 0 => None,
            None => Some(0),
            Some(i) => Some(i.min(row_count - 1)),
        };
        self.table_state.select(selected);
    }

    fn move_by(&mut self, delta: isize) {
        if self.row_count == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let last = self.row_count as isize - 1;
        self.table_state
            .select(Some((current + delta).clamp(0, last) as usize));
    }

    fn page(&self) -> isize {
        self.page_size.max(1) as isize
    }

    fn column_at(&self, x: u16) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| x >= c.x && x < c.x + c.width)
    }

    fn click(&mut self, x: u16, y: u16) -> Option<TableEvent> {
        if self.header_y == Some(y) {
            let column = self.column_at(x)?;
            return COLUMNS[column].1.map(TableEvent::SortBy);
        }
        let body = self.body;
        if x >= body.x && x < body.x + body.width && y >= body.y && y < body.y + body.height {
            let index = self.table_state.offset() + (y - body.y) as usize;
            if index < self.row_count {
                self.table_state.select(Some(index));
            }
        }
        None
    }
}

impl EventHandler for UserTableState {
    type Event = TableEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.move_by(-1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.move_by(1),
            TuiEvent::PageUp => self.move_by(-self.page()),
            TuiEvent::PageDown => self.move_by(self.page()),
            TuiEvent::Home => self.move_by(isize::MIN / 2),
            TuiEvent::End => self.move_by(isize::MAX / 2),
            TuiEvent::InputChar('d') | TuiEvent::Delete => {
                return self.selected().map(TableEvent::Delete);
            }
            TuiEvent::InputChar('0') => return Some(TableEvent::SortBy(SortMode::None)),
            TuiEvent::InputChar('1') => return Some(TableEvent::SortBy(SortMode::Name)),
            TuiEvent::InputChar('2') => return Some(TableEvent::SortBy(SortMode::Last)),
            TuiEvent::InputChar('3') => return Some(TableEvent::SortBy(SortMode::Country)),
            TuiEvent::MouseClick(x, y) => return self.click(*x, *y),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the user table.
pub struct UserTable<'a> {
    state: &'a mut UserTableState,
    users: &'a [&'a User],
    show_colors: bool,
    sort_mode: SortMode,
}

impl<'a> UserTable<'a> {
    pub fn new(
        state: &'a mut UserTableState,
        users: &'a [&'a User],
        show_colors: bool,
        sort_mode: SortMode,
    ) -> Self {
        Self {
            state,
            users,
            show_colors,
            sort_mode,
        }
    }

    fn header(&self) -> Row<'static> {
        let style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        Row::new(COLUMNS.iter().map(|(label, sort)| {
            if self.sort_mode != SortMode::None && *sort == Some(self.sort_mode) {
                Cell::from(format!("{label} ▲"))
            } else {
                Cell::from(*label)
            }
        }))
        .style(style)
    }

    fn row(&self, index: usize, user: &User) -> Row<'static> {
        let row = Row::new(vec![
            Cell::from(format!("{}", index + 1)),
            Cell::from(user.name.first.clone()),
            Cell::from(user.name.last.clone()),
            Cell::from(user.location.country.clone()),
            Cell::from(user.field("nat").unwrap_or_default().to_string()),
            Cell::from(user.location.field("city").unwrap_or_default().to_string()),
            Cell::from(user.email.clone()),
        ]);
        if !self.show_colors {
            return row;
        }
        let bg = if index % 2 == 0 { STRIPE_EVEN } else { STRIPE_ODD };
        row.style(Style::default().fg(Color::White).bg(bg))
    }
}

impl Component for UserTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::from(format!(" Users ({}) ", self.users.len())));

        let inner = block.inner(area);
        self.state.header_y = (inner.height > 0).then_some(inner.y);
        self.state.body = Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        };
        self.state.page_size = self.state.body.height as usize;
        self.state.columns = Layout::horizontal(WIDTHS)
            .spacing(COLUMN_SPACING)
            .split(inner)
            .to_vec();
        self.state.clamp(self.users.len());

        let rows: Vec<Row> = self
            .users
            .iter()
            .enumerate()
            .map(|(i, user)| self.row(i, user))
            .collect();

        let table = Table::new(rows, WIDTHS)
            .header(self.header())
            .block(block)
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD));

        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}
