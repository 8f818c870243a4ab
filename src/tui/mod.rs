//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, terminal resize,
//!   or an action arriving from the fetch task.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::source::{RandomUserSource, UserSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{FilterEvent, FilterInput, TableEvent, UserTableState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which component receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Keys drive the table and the header shortcuts.
    Table,
    /// Keys edit the country filter.
    Filter,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub table: UserTableState,
    pub filter: FilterInput,
    pub focus: Focus,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            table: UserTableState::new(),
            filter: FilterInput::new(),
            focus: Focus::Table,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Build the user source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn UserSource> {
    Arc::new(
        RandomUserSource::new(config.base_url.clone(), config.results)
            .with_seed(config.seed.clone())
            .with_nationalities(config.nationalities.clone())
            .with_timeout(Duration::from_secs(config.timeout_secs)),
    )
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from the fetch task
    let (tx, rx) = mpsc::channel();

    if update(&mut app, Action::Load) == Effect::SpawnFetch {
        spawn_fetch(&app, tx.clone());
    }

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(&mut app, &mut tui, event) == Effect::Quit {
                break 'main;
            }
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            match action {
                Action::UsersLoaded(ref users) => {
                    debug!("Event loop received UsersLoaded ({} users)", users.len())
                }
                ref other => debug!("Event loop received: {:?}", other),
            }
            if update(&mut app, action) == Effect::Quit {
                break 'main;
            }
            tui.table.clamp(app.view().len());
        }
    }

    info!("Roster shutting down");
    ratatui::restore();
    Ok(())
}

/// Routes one terminal event to the focused component and applies the
/// resulting actions.
///
/// Events are drained in bursts between frames, so the table is re-clamped
/// to the new projection after each one instead of waiting for the render.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let effect = route(app, tui, event);
    tui.table.clamp(app.view().len());
    effect
}

fn route(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::Resize => return Effect::None,
        // Mouse always goes to the table, whatever has focus
        TuiEvent::MouseClick(..) | TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            return table_event(app, tui, &event);
        }
        _ => {}
    }

    match tui.focus {
        Focus::Filter => match tui.filter.handle_event(&event) {
            Some(FilterEvent::Changed(text)) => update(app, Action::SetFilter(Some(text))),
            Some(FilterEvent::Done) => {
                tui.focus = Focus::Table;
                Effect::None
            }
            None => Effect::None,
        },
        Focus::Table => match event {
            TuiEvent::InputChar('q') => update(app, Action::Quit),
            TuiEvent::Escape if app.filter_text.is_some() => {
                tui.filter = FilterInput::new();
                update(app, Action::SetFilter(None))
            }
            TuiEvent::Escape => update(app, Action::Quit),
            TuiEvent::InputChar('c') => update(app, Action::ToggleColors),
            TuiEvent::InputChar('s') => update(app, Action::ToggleCountrySort),
            TuiEvent::InputChar('r') => update(app, Action::Reset),
            TuiEvent::InputChar('/') => {
                tui.focus = Focus::Filter;
                Effect::None
            }
            _ => table_event(app, tui, &event),
        },
    }
}

fn table_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match tui.table.handle_event(event) {
        Some(TableEvent::Delete(index)) => {
            let email = app.view().get(index).map(|u| u.email.clone());
            match email {
                Some(email) => update(app, Action::DeleteUser(email)),
                None => {
                    warn!("Delete requested for row {} outside the view", index);
                    Effect::None
                }
            }
        }
        Some(TableEvent::SortBy(mode)) => update(app, Action::SetSortMode(mode)),
        None => Effect::None,
    }
}

/// Runs the one fetch of the session on the tokio runtime and reports the
/// outcome back to the event loop as an `Action`.
fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) {
    let source = app.source.clone();
    info!("Spawning fetch from {}", source.name());

    tokio::spawn(async move {
        let action = match source.fetch_users().await {
            Ok(users) => Action::UsersLoaded(users),
            Err(e) => {
                warn!("Fetch from {} failed: {}", source.name(), e);
                Action::FetchFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
}
