//! # Application State
//!
//! Core business state for Roster. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn UserSource>   // where the records come from
//! ├── records: Vec<User>            // current rows (delete/reset only)
//! ├── snapshot: Option<Vec<User>>   // first fetch, set once, reset target
//! ├── show_colors: bool             // alternate row colors
//! ├── sort_mode: SortMode           // projection order
//! ├── filter_text: Option<String>   // country substring
//! ├── status_message: String        // status bar text
//! ├── is_loading: bool              // fetch in flight
//! ├── error: Option<String>         // last fetch failure
//! └── loaded_at: Option<DateTime>   // when the fetch resolved
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::core::config::ResolvedConfig;
use crate::core::view::{SortMode, derive_view};
use crate::source::{User, UserSource};

pub struct App {
    pub source: Arc<dyn UserSource>,
    pub records: Vec<User>,
    /// Populated by the first successful fetch and never touched again.
    pub snapshot: Option<Vec<User>>,
    pub show_colors: bool,
    pub sort_mode: SortMode,
    /// `None` and `Some("")` never coexist: empty input is stored as `None`.
    pub filter_text: Option<String>,
    pub status_message: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub loaded_at: Option<DateTime<Local>>,
}

impl App {
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        Self {
            source,
            records: Vec::new(),
            snapshot: None,
            show_colors: false,
            sort_mode: SortMode::default(),
            filter_text: None,
            status_message: String::from("Welcome to Roster!"),
            is_loading: false,
            error: None,
            loaded_at: None,
        }
    }

    pub fn from_config(source: Arc<dyn UserSource>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(source);
        app.show_colors = config.show_colors;
        app
    }

    /// The rows the table should show right now.
    pub fn view(&self) -> Vec<&User> {
        derive_view(&self.records, self.filter_text.as_deref(), self.sort_mode)
    }

    /// Number of records in the snapshot, 0 before the first fetch.
    pub fn snapshot_len(&self) -> usize {
        self.snapshot.as_ref().map_or(0, Vec::len)
    }
}
