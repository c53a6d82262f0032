//! Session credential store.
//!
//! The credential lives in a small YAML file named `api_token` inside the
//! config directory. It is created by `login`, read by every authenticated
//! command and deleted by `logout`. No expiry logic is handled client-side.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SESSION_FILE: &str = "api_token";

/// Credential issued by the backend at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub role: String,
}

impl Session {
    pub fn file(dir: &Path) -> PathBuf {
        dir.join(SESSION_FILE)
    }

    /// Read the stored session, `None` when no credential exists.
    /// Absence is the expected pre-authentication state, not an error.
    pub fn load(dir: &Path) -> AppResult<Option<Session>> {
        let path = Self::file(dir);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let session: Session = serde_yaml::from_str(&content)?;
        Ok(Some(session))
    }

    /// Session guard: every authenticated command calls this before doing
    /// anything else. The NotLoggedIn message points the user at `login`,
    /// the CLI counterpart of a redirect to the login view.
    pub fn require(dir: &Path) -> AppResult<Session> {
        Self::load(dir)?.ok_or(AppError::NotLoggedIn)
    }

    pub fn save(&self, dir: &Path) -> AppResult<()> {
        fs::create_dir_all(dir)?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::file(dir), yaml)?;
        Ok(())
    }

    /// Delete the stored credential. Returns whether one existed.
    pub fn clear(dir: &Path) -> AppResult<bool> {
        let path = Self::file(dir);
        if path.exists() {
            fs::remove_file(&path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
