//! File-backed storage for the session state store.

mod json_file;

pub use json_file::JsonFileStorage;

use std::fs;
use std::sync::Arc;

use clarity_core::error::Result;
use clarity_core::state::StateStorage;

use crate::paths::ClarityPaths;

/// Session id used when none is configured.
pub const DEFAULT_SESSION_ID: &str = "default";

/// Opens both storage scopes for `session_id`.
pub fn open_state_storage(paths: &ClarityPaths, session_id: &str) -> Result<StateStorage> {
    let session_file = paths.session_file(session_id)?;
    tracing::debug!(session = session_id, path = %session_file.display(), "opening state storage");

    Ok(StateStorage {
        session: Arc::new(JsonFileStorage::new(session_file)),
        persistent: Arc::new(JsonFileStorage::new(paths.state_file())),
    })
}

/// Deletes everything stored for `session_id`. Persistent state is kept.
///
/// Returns `false` when the session had nothing stored.
pub fn end_session(paths: &ClarityPaths, session_id: &str) -> Result<bool> {
    let session_file = paths.session_file(session_id)?;
    if !session_file.exists() {
        return Ok(false);
    }
    fs::remove_file(&session_file)?;
    tracing::info!(session = session_id, "session state removed");
    Ok(true)
}
