//! Session storage
//!
//! Tokens issued by the user service, read from `session.json` in the data directory.

use crate::storage::{get_data_dir, read_json, StorageError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The signed-in user's tokens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token: Some(refresh_token.into()),
            signed_in_at: Some(Utc::now()),
        }
    }

    /// Value for the `Authorization` header
    pub fn authorization(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.authorization().is_some()
    }
}

fn get_session_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("session.json"))
}

/// Load the stored session, signed out if none can be read
pub fn load_session() -> Session {
    match get_session_path().and_then(|path| load_session_from(&path)) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!("Failed to load session: {}", e);
            Session::default()
        }
    }
}

pub fn load_session_from(path: &Path) -> Result<Session, StorageError> {
    Ok(read_json(path)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::write_json;

    #[test]
    fn test_default_is_signed_out() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.authorization(), None);
    }

    #[test]
    fn test_blank_token_is_not_authenticated() {
        let session = Session {
            access_token: Some("   ".to_string()),
            ..Session::default()
        };
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_new_session() {
        let session = Session::new("access", "refresh");
        assert!(session.is_authenticated());
        assert_eq!(session.authorization(), Some("access"));
        assert!(session.signed_in_at.is_some());
    }

    #[test]
    fn test_session_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let session = Session::new("a", "r");

        write_json(&path, &session).unwrap();
        assert_eq!(load_session_from(&path).unwrap(), session);
    }

    #[test]
    fn test_missing_session_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let session = load_session_from(&dir.path().join("session.json")).unwrap();
        assert_eq!(session, Session::default());
    }
}
