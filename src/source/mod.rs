pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{SourceError, UserSource};
pub use providers::RandomUserSource;
pub use types::{Location, Name, User, UsersResponse};
