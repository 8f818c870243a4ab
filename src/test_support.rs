//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::action::{Action, update};
use crate::source::{Location, Name, SourceError, User, UserSource};

/// A source that hands back a fixed batch without touching the network.
pub struct StaticSource {
    users: Vec<User>,
}

#[async_trait]
impl UserSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_users(&self) -> Result<Vec<User>, SourceError> {
        Ok(self.users.clone())
    }
}

pub fn static_source(users: Vec<User>) -> Arc<dyn UserSource> {
    Arc::new(StaticSource { users })
}

/// Builds a minimal user record.
pub fn user(email: &str, first: &str, last: &str, country: &str) -> User {
    User {
        email: email.to_string(),
        name: Name {
            title: String::new(),
            first: first.to_string(),
            last: last.to_string(),
        },
        location: Location {
            country: country.to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Zoe Ann from Spain, then Amy Zed from Italy.
pub fn scenario_users() -> Vec<User> {
    vec![
        user("a@x", "Zoe", "Ann", "Spain"),
        user("b@x", "Amy", "Zed", "Italy"),
    ]
}

/// Creates a test App with an empty StaticSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(static_source(Vec::new()))
}

/// A test App that has already received `scenario_users()`.
pub fn loaded_app() -> crate::core::state::App {
    let mut app = test_app();
    update(&mut app, Action::UsersLoaded(scenario_users()));
    app
}
