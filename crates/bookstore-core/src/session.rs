//! # Session Types
//!
//! Shapes for a session layer that sits in front of the service. Nothing in
//! this workspace issues, validates or expires sessions; `login_user` only
//! returns the matching [`User`]. These types fix the contract an auth layer
//! is expected to fill in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{EntityId, Role, User};

/// A login session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user_id: EntityId,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Claims carried inside an auth token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthTokenPayload {
    pub user_id: EntityId,
    pub session_id: Uuid,
    pub username: String,
    pub role: Role,
}

/// Public view of a user, without the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginUser {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

impl From<&User> for LoginUser {
    fn from(user: &User) -> Self {
        LoginUser {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
        }
    }
}

/// Token part of a [`LoginResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Envelope returned to a client after a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: LoginUser,
    pub session: SessionToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_user_omits_password() {
        let user = User {
            id: EntityId::new(3),
            username: "testUser".to_string(),
            password: "12345678".to_string(),
            email: "test@example.com".to_string(),
            full_name: "Test User".to_string(),
            address: "123 Test St".to_string(),
            phone: "555-1234".to_string(),
            role: Role::User,
        };

        let view = LoginUser::from(&user);
        assert_eq!(view.id, user.id);
        assert_eq!(view.username, "testUser");

        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("12345678"));
    }
}
