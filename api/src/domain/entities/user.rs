//! User domain entity
//!
//! The admin who logs in to manage portfolio content. In practice there is
//! exactly one, seeded at startup, but nothing here assumes that.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An admin user account
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    /// bcrypt hash, never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public view of the account, safe to return in API responses
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

/// The fields of a user that responses and token claims may carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Data needed to create a user account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serialization_skips_password_hash() {
        let user = User {
            id: UserId::new(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            role: "admin".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn user_profile_carries_public_fields() {
        let user = User {
            id: UserId(Uuid::nil()),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            password_hash: "hash".to_string(),
            role: "admin".to_string(),
            created_at: Utc::now(),
        };
        let profile = user.profile();
        assert_eq!(profile.email, "admin@example.com");
        assert_eq!(profile.role, "admin");
        assert_eq!(profile.id, UserId(Uuid::nil()));
    }

    #[test]
    fn user_id_display() {
        let id = UserId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
