use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row, including the password hash. Never serialized to clients.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}

/// Public view of a user, safe for API responses
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterPayload {
    /// Returns every violated constraint, not just the first
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.name.as_deref().map_or(true, |name| name.trim().len() < 2) {
            errors.push("Name must be at least 2 characters".to_string());
        }
        if self.email.as_deref().map_or(true, |email| !email.contains('@')) {
            errors.push("Valid email is required".to_string());
        }
        if self.password.as_deref().map_or(true, |password| password.len() < 6) {
            errors.push("Password must be at least 6 characters".to_string());
        }

        errors
    }
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Emails are trimmed and lower-cased before storage and lookup, so
/// uniqueness is case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
