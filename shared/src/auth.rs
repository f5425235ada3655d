//! Auth and user account DTOs
//!
//! Request/response types for the auth endpoints. Role is the platform's
//! only authorization axis.

use crate::validate::{require, FieldError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role. `Admin` manages user accounts; `Editor` manages content;
/// `User` is a registered account with no console privileges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A console user account.
///
/// The API is inconsistent about the id field name across endpoints, so both
/// `_id` and `id` are accepted on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Login request. The session itself comes back as an httpOnly cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response body. Deliberately thin: the cookie carries the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
}

/// Registration request (admin-only operation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterRequest {
    /// Field-level checks mirrored from the server's constraints; blocks
    /// submission locally so invalid payloads never reach the network.
    pub fn validate(&self) -> Result<(), FieldError> {
        require("name", &self.name)?;
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(FieldError::new("email", "must be a valid email address"));
        }
        if self.password.len() < 8 {
            return Err(FieldError::new("password", "must be at least 8 characters"));
        }
        Ok(())
    }
}

/// Registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: User,
    pub token: String,
}

/// Partial user update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserUpdate {
    pub fn validate(&self) -> Result<(), FieldError> {
        if let Some(name) = &self.name {
            require("name", name)?;
        }
        if let Some(email) = &self.email
            && (email.trim().is_empty() || !email.contains('@'))
        {
            return Err(FieldError::new("email", "must be a valid email address"));
        }
        if let Some(password) = &self.password
            && password.len() < 8
        {
            return Err(FieldError::new("password", "must be at least 8 characters"));
        }
        Ok(())
    }
}
