use serde::Deserialize;
use serde_json::{Map, Value};

/// A person's name as returned by the user API.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Name {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

/// Where a user lives. Only `country` matters to the table; everything else
/// (street, city, coordinates, ...) rides along untouched.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub country: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Location {
    /// Looks up a string-valued passthrough field such as `city`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

/// One user record. `email` is the delete key.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct User {
    pub email: String,
    pub name: Name,
    pub location: Location,
    /// Remaining payload fields (phone, nat, picture, login, dob, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Looks up a string-valued passthrough field such as `phone` or `nat`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    /// "First Last", as displayed in the status bar after a delete.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}

/// Response envelope from `GET /api/?results=N`.
#[derive(Deserialize, Debug)]
pub struct UsersResponse {
    pub results: Vec<User>,
    #[serde(default)]
    pub info: Option<ResponseInfo>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseInfo {
    pub seed: Option<String>,
    pub results: Option<usize>,
    pub page: Option<usize>,
    pub version: Option<String>,
}
