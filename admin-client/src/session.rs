//! Local session mirror
//!
//! A denormalized copy of the signed-in user kept on disk so the console can
//! make synchronous UI decisions (sidebar, menu gating) between launches
//! without waiting on the network. The httpOnly session cookie held by the
//! server stays the source of truth for authorization; this mirror is
//! advisory only and is always re-validated by the route guard.

use crate::error::ClientResult;
use serde::{Deserialize, Serialize};
use shared::{Role, User};
use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FILE: &str = "session_user.json";

/// The slice of the user profile worth mirroring locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// File-backed store for the session mirror.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at `base_dir`. Nothing is touched on disk until
    /// the first write.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: base_dir.into().join(SESSION_FILE),
        }
    }

    /// Persist the mirror.
    pub fn set_user(&self, user: &SessionUser) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Read the mirror. Absence and corruption both come back as `None`;
    /// this is a hint, not a failure path.
    pub fn get_user(&self) -> Option<SessionUser> {
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Drop the mirror. Safe to call any number of times.
    pub fn clear(&self) {
        if self.path.exists()
            && let Err(e) = fs::remove_file(&self.path)
        {
            tracing::warn!("failed to clear session mirror: {e}");
        }
    }

    /// Whether a mirrored user is present (advisory only).
    pub fn is_logged_in(&self) -> bool {
        self.get_user().is_some()
    }

    /// Path of the mirror file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
