//! Saved session storage
//!
//! Stores keep a single JSON document. Reading never fails upward: a missing,
//! unreadable or malformed document is logged and treated as "no session".

use super::SessionKey;
use crate::core::Attempt;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, warn};

/// Everything needed to resume a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub attempts: Vec<Attempt>,
    pub session_key: SessionKey,
}

/// Errors writing or clearing a session
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw document storage plus the JSON encoding shared by every store
pub trait SessionStore {
    /// Read the stored document, `None` when nothing was saved
    ///
    /// # Errors
    /// Returns `StoreError` when the backing storage cannot be read.
    fn read(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored document
    ///
    /// # Errors
    /// Returns `StoreError` when the backing storage cannot be written.
    fn write(&mut self, contents: &str) -> Result<(), StoreError>;

    /// Remove the stored document
    ///
    /// # Errors
    /// Returns `StoreError` when the backing storage cannot be modified.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Load the saved session, if a readable one exists
    fn load(&self) -> Option<SessionState> {
        let contents = match self.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => return None,
            Err(err) => {
                warn!(%err, "could not read saved session");
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!(%err, "discarding malformed saved session");
                None
            }
        }
    }

    /// Save `state`, replacing any previous session
    ///
    /// # Errors
    /// Returns `StoreError` if encoding or writing fails.
    fn save(&mut self, state: &SessionState) -> Result<(), StoreError> {
        let contents = serde_json::to_string(state)?;
        self.write(&contents)?;
        debug!(key = %state.session_key, attempts = state.attempts.len(), "session saved");
        Ok(())
    }
}

/// Session stored as a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

/// In-memory store; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-encoded contents, valid or not
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(contents.into()))),
        }
    }

    /// The raw stored document
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(contents.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::evaluate_word;

    fn sample_state() -> SessionState {
        let answer = Word::new("ghast").unwrap();
        let scored = evaluate_word(&answer, &Word::new("ghost").unwrap()).unwrap();
        SessionState {
            attempts: vec![scored, Attempt::new(5)],
            session_key: SessionKey::new("2026-10-19"),
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.load().is_none());

        let state = sample_state();
        store.save(&state).unwrap();
        assert_eq!(store.load(), Some(state));

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn json_shape_uses_session_key_field() {
        let mut store = MemoryStore::new();
        store.save(&sample_state()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&store.contents().unwrap()).unwrap();

        assert_eq!(json["sessionKey"], "2026-10-19");
        assert_eq!(json["attempts"][0][0]["letter"], "G");
        assert_eq!(json["attempts"][0][0]["status"], "correct");
        assert_eq!(json["attempts"][1][0]["status"], "unset");
    }

    #[test]
    fn malformed_contents_load_as_none() {
        assert!(MemoryStore::with_contents("not json").load().is_none());
        assert!(MemoryStore::with_contents("{}").load().is_none());
        assert!(
            MemoryStore::with_contents(r#"{"attempts":[[]],"sessionKey":"2026-10-19"}"#)
                .load()
                .is_none()
        );
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("session.json"));
        assert!(store.load().is_none());

        let state = sample_state();
        store.save(&state).unwrap();
        assert_eq!(store.load(), Some(state));

        store.clear().unwrap();
        assert!(store.load().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn file_store_corrupt_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{\"attempts\": [").unwrap();
        assert!(FileStore::new(path).load().is_none());
    }
}
