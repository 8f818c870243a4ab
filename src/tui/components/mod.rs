//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name and control hints
//! - `StatusBar`: counts, sort, filter, status message
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `FilterInput`: country filter text field
//! - `UserTable`: the projection, with selection and clickable headers
//!
//! Components receive external data as props, not by reaching into `App`.
//! Each file holds the component's state types, event types, rendering, event
//! handling and tests.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top line: control hints)
//! ├── filter_input.rs  (country filter)
//! ├── user_table.rs    (the table)
//! └── status_bar.rs    (bottom line)
//! ```

pub mod filter_input;
pub mod status_bar;
mod title_bar;
pub mod user_table;

pub use filter_input::{FilterEvent, FilterInput};
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
pub use user_table::{TableEvent, UserTable, UserTableState};
