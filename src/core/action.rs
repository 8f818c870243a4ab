//! # Actions
//!
//! Everything that can happen in Roster becomes an `Action`.
//! User presses `c`? That's `Action::ToggleColors`.
//! The fetch resolves? That's `Action::UsersLoaded(users)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any I/O the
//! adapter should perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::Local;
use log::{debug, info, warn};

use crate::core::state::App;
use crate::core::view::SortMode;
use crate::source::User;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Start the one and only fetch of the session.
    Load,
    UsersLoaded(Vec<User>),
    FetchFailed(String),
    ToggleColors,
    ToggleCountrySort,
    SetSortMode(SortMode),
    /// Empty text is treated like `None`.
    SetFilter(Option<String>),
    /// Delete by email.
    DeleteUser(String),
    Reset,
    Quit,
}

/// I/O the adapter must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Load => {
            if app.is_loading || app.snapshot.is_some() {
                debug!("Load ignored: fetch already started or done");
                return Effect::None;
            }
            app.is_loading = true;
            app.status_message = format!("Loading users from {}...", app.source.name());
            Effect::SpawnFetch
        }
        Action::UsersLoaded(users) => {
            app.is_loading = false;
            app.error = None;
            if app.snapshot.is_some() {
                warn!("Ignoring second batch of {} users: snapshot already taken", users.len());
                return Effect::None;
            }
            info!("Loaded {} users", users.len());
            let loaded_at = Local::now();
            app.status_message = format!(
                "Loaded {} users at {}",
                users.len(),
                loaded_at.format("%H:%M:%S")
            );
            app.snapshot = Some(users.clone());
            app.records = users;
            app.loaded_at = Some(loaded_at);
            Effect::None
        }
        Action::FetchFailed(message) => {
            warn!("Fetch failed: {}", message);
            app.is_loading = false;
            app.status_message = "Could not load users (see roster.log)".to_string();
            app.error = Some(message);
            Effect::None
        }
        Action::ToggleColors => {
            app.show_colors = !app.show_colors;
            Effect::None
        }
        Action::ToggleCountrySort => {
            app.sort_mode = app.sort_mode.toggle_country();
            app.status_message = format!("Sort: {}", app.sort_mode.label());
            Effect::None
        }
        Action::SetSortMode(mode) => {
            app.sort_mode = mode;
            app.status_message = format!("Sort: {}", mode.label());
            Effect::None
        }
        Action::SetFilter(text) => {
            app.filter_text = text.filter(|t| !t.is_empty());
            Effect::None
        }
        Action::DeleteUser(email) => {
            match app.records.iter().position(|u| u.email == email) {
                Some(idx) => {
                    let removed = app.records.remove(idx);
                    debug!("Deleted {} at index {}", removed.email, idx);
                    app.status_message = format!("Deleted {}", removed.full_name());
                }
                None => debug!("Delete ignored: no user with email {}", email),
            }
            Effect::None
        }
        Action::Reset => {
            match app.snapshot {
                Some(ref snapshot) => {
                    app.records = snapshot.clone();
                    app.status_message = format!("Restored {} users", app.records.len());
                }
                None => debug!("Reset ignored: nothing fetched yet"),
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{loaded_app, scenario_users, test_app, user};

    fn view_emails(app: &App) -> Vec<String> {
        app.view().iter().map(|u| u.email.clone()).collect()
    }

    #[test]
    fn test_load_spawns_fetch_once() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Load), Effect::SpawnFetch);
        assert!(app.is_loading);
        assert_eq!(update(&mut app, Action::Load), Effect::None);

        update(&mut app, Action::UsersLoaded(scenario_users()));
        assert!(!app.is_loading);
        assert_eq!(update(&mut app, Action::Load), Effect::None);
    }

    #[test]
    fn test_users_loaded_sets_records_and_snapshot() {
        let mut app = test_app();
        update(&mut app, Action::UsersLoaded(scenario_users()));
        assert_eq!(app.records, scenario_users());
        assert_eq!(app.snapshot.as_deref(), Some(scenario_users().as_slice()));
        assert!(app.loaded_at.is_some());
        assert!(app.status_message.starts_with("Loaded 2 users"));
    }

    #[test]
    fn test_snapshot_is_set_only_once() {
        let mut app = loaded_app();
        update(&mut app, Action::UsersLoaded(vec![user("z@x", "Zed", "Z", "Peru")]));
        assert_eq!(app.snapshot_len(), 2);
        assert_eq!(app.records.len(), 2);
    }

    #[test]
    fn test_fetch_failure_leaves_state_empty() {
        let mut app = test_app();
        update(&mut app, Action::Load);
        update(&mut app, Action::FetchFailed("network error: refused".to_string()));
        assert!(!app.is_loading);
        assert!(app.records.is_empty());
        assert!(app.snapshot.is_none());
        assert_eq!(app.error.as_deref(), Some("network error: refused"));
    }

    #[test]
    fn test_toggle_colors_flips_only_colors() {
        let mut app = loaded_app();
        update(&mut app, Action::ToggleColors);
        assert!(app.show_colors);
        assert_eq!(app.sort_mode, SortMode::None);
        update(&mut app, Action::ToggleColors);
        assert!(!app.show_colors);
    }

    #[test]
    fn test_toggle_country_sort_twice_returns_to_none() {
        let mut app = loaded_app();
        update(&mut app, Action::ToggleCountrySort);
        assert_eq!(app.sort_mode, SortMode::Country);
        update(&mut app, Action::ToggleCountrySort);
        assert_eq!(app.sort_mode, SortMode::None);
    }

    #[test]
    fn test_toggle_country_sort_from_name_lands_on_country() {
        let mut app = loaded_app();
        update(&mut app, Action::SetSortMode(SortMode::Name));
        update(&mut app, Action::ToggleCountrySort);
        assert_eq!(app.sort_mode, SortMode::Country);
    }

    #[test]
    fn test_set_filter_empty_is_none() {
        let mut app = loaded_app();
        update(&mut app, Action::SetFilter(Some("ital".to_string())));
        assert_eq!(app.filter_text.as_deref(), Some("ital"));
        update(&mut app, Action::SetFilter(Some(String::new())));
        assert!(app.filter_text.is_none());
    }

    #[test]
    fn test_delete_is_idempotent_and_keeps_snapshot() {
        let mut app = loaded_app();
        update(&mut app, Action::DeleteUser("a@x".to_string()));
        assert_eq!(view_emails(&app), vec!["b@x"]);
        update(&mut app, Action::DeleteUser("a@x".to_string()));
        assert_eq!(view_emails(&app), vec!["b@x"]);
        assert_eq!(app.snapshot_len(), 2);
    }

    #[test]
    fn test_delete_removes_first_match_only() {
        let mut app = test_app();
        update(
            &mut app,
            Action::UsersLoaded(vec![
                user("dup@x", "One", "A", "Chile"),
                user("dup@x", "Two", "B", "Chile"),
            ]),
        );
        update(&mut app, Action::DeleteUser("dup@x".to_string()));
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.records[0].name.first, "Two");
    }

    #[test]
    fn test_reset_restores_original_order() {
        let mut app = test_app();
        let users = vec![
            user("1@x", "C", "C", "Chile"),
            user("2@x", "A", "A", "Peru"),
            user("3@x", "B", "B", "Cuba"),
        ];
        update(&mut app, Action::UsersLoaded(users.clone()));
        update(&mut app, Action::DeleteUser("2@x".to_string()));
        update(&mut app, Action::DeleteUser("1@x".to_string()));
        update(&mut app, Action::Reset);
        assert_eq!(app.records, users);
    }

    #[test]
    fn test_reset_before_fetch_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Reset), Effect::None);
        assert!(app.records.is_empty());
        assert!(app.snapshot.is_none());
    }

    #[test]
    fn test_scenario() {
        let mut app = loaded_app();

        update(&mut app, Action::SetFilter(Some("ital".to_string())));
        assert_eq!(view_emails(&app), vec!["b@x"]);

        update(&mut app, Action::SetFilter(None));
        update(&mut app, Action::SetSortMode(SortMode::Name));
        assert_eq!(view_emails(&app), vec!["b@x", "a@x"]);

        update(&mut app, Action::SetSortMode(SortMode::None));
        update(&mut app, Action::DeleteUser("a@x".to_string()));
        update(&mut app, Action::Reset);
        assert_eq!(view_emails(&app), vec!["a@x", "b@x"]);
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
