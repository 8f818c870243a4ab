use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{StatusBar, TitleBar, UserTable};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1)]);
    let [title_area, filter_area, main_area, status_area] = layout.areas(frame.area());

    TitleBar::new(app.show_colors, app.sort_mode, app.snapshot.is_some())
        .render(frame, title_area);

    tui.filter.focused = tui.focus == Focus::Filter;
    tui.filter.render(frame, filter_area);

    let view = app.view();

    if app.snapshot.is_some() {
        UserTable::new(&mut tui.table, &view, app.show_colors, app.sort_mode)
            .render(frame, main_area);
        if view.is_empty() {
            let message = match app.filter_text {
                Some(ref filter) => format!("No users from a country matching \"{filter}\""),
                None => "No users left. Press r to restore.".to_string(),
            };
            draw_notice(frame, inset(main_area), &message, Color::DarkGray);
        }
    } else if app.is_loading {
        let spinner = SPINNER[spinner_frame % SPINNER.len()];
        draw_notice(frame, main_area, &format!("{spinner} Loading users..."), Color::Yellow);
    } else if let Some(ref error) = app.error {
        draw_error_view(frame, main_area, error);
    } else {
        draw_notice(frame, main_area, "No users loaded.", Color::DarkGray);
    }

    StatusBar {
        shown: view.len(),
        total: app.records.len(),
        deleted: app.snapshot_len().saturating_sub(app.records.len()),
        sort_mode: app.sort_mode,
        filter_text: app.filter_text.as_deref(),
        status_message: &app.status_message,
        error: app.error.as_deref(),
    }
    .render(frame, status_area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red))
                .title("ERROR"),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

fn draw_notice(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let [_, line, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, line);
}

/// The area inside the table's border, below its header row.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(2),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(3),
    }
}
