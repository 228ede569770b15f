//! User entity and creation payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted user
///
/// `id` and `created_at` are assigned by the repository on create and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request body for user creation
///
/// Any `id`, `active` or `created_at` sent by the client is ignored; new
/// users are always stored as active. Missing text fields decode as empty
/// strings so they are reported by validation rather than as a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
