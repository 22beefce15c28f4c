use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::domain::models::session::Session;
use crate::domain::ports::SessionStore;
use crate::error::AppError;

/// File-backed session store. The whole session is written as one JSON
/// record so the token and profile can never go out of sync on disk.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::Session(e.to_string())),
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // A half-written or stale file means logged out, not broken.
                warn!("Discarding unreadable session file: {}", e);
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        let raw = serde_json::to_string(session).map_err(|e| AppError::Session(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| AppError::Session(e.to_string()))
    }

    fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Session(e.to_string())),
        }
    }
}
