//! Session persistence
//!
//! A game is saved after every accepted input and resumed on startup when the
//! stored session belongs to the current day and still fits the current
//! answer. Anything else starts a fresh game.

mod key;
mod store;

pub use key::SessionKey;
pub use store::{FileStore, MemoryStore, SessionState, SessionStore, StoreError};

use crate::core::Word;
use crate::game::{Game, Observer, Snapshot};
use tracing::{info, warn};

/// Resume today's game from `store`, or start a new one
///
/// A stale key, an unreadable document, or attempts that do not fit `answer`
/// all lead to a fresh, empty game.
pub fn resume(
    store: &impl SessionStore,
    key: &SessionKey,
    answer: Word,
    max_attempts: usize,
) -> Game {
    let Some(saved) = store.load() else {
        info!(%key, "no saved session, starting a new game");
        return Game::new(answer, max_attempts);
    };

    if saved.session_key != *key {
        info!(saved = %saved.session_key, %key, "saved session is stale, starting a new game");
        return Game::new(answer, max_attempts);
    }

    match Game::restore(answer.clone(), max_attempts, saved.attempts) {
        Ok(game) => {
            info!(%key, attempts = game.attempts().len(), "resumed saved session");
            game
        }
        Err(err) => {
            warn!(%err, "saved session does not fit the current game, starting a new one");
            Game::new(answer, max_attempts)
        }
    }
}

/// Observer that writes every published snapshot to a store
pub struct AutoSave<S> {
    store: S,
    key: SessionKey,
}

impl<S: SessionStore> AutoSave<S> {
    pub fn new(store: S, key: SessionKey) -> Self {
        Self { store, key }
    }
}

impl<S: SessionStore> Observer for AutoSave<S> {
    fn on_update(&mut self, snapshot: &Snapshot) {
        let state = SessionState {
            attempts: snapshot.attempts.clone(),
            session_key: self.key.clone(),
        };
        if let Err(err) = self.store.save(&state) {
            warn!(%err, "failed to save session");
        }
    }
}
