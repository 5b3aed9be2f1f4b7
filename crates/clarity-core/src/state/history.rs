//! Analysis history cell.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::clock::Clock;
use super::storage::{HISTORY_KEY, KeyValueStorage, log_write_failure, read_or_none};
use crate::analysis::model::Analysis;
use crate::error::Result;

/// One successful analysis, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryItem {
    pub id: String,
    pub text: String,
    pub analysis: Analysis,
    pub timestamp: DateTime<Utc>,
}

/// Session history, newest first.
///
/// Items are never edited or removed individually; [`HistoryCell::clear`]
/// drops all of them and deletes the storage key.
pub struct HistoryCell {
    storage: Arc<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
    items: Vec<ChatHistoryItem>,
}

impl HistoryCell {
    /// Loads stored history. Unparseable data is discarded in favor of an
    /// empty history.
    pub fn load(storage: Arc<dyn KeyValueStorage>, clock: Arc<dyn Clock>) -> Self {
        let items = read_or_none(storage.as_ref(), HISTORY_KEY)
            .and_then(|json| match serde_json::from_str::<Vec<ChatHistoryItem>>(&json) {
                Ok(items) => Some(items),
                Err(e) => {
                    tracing::debug!(error = %e, "discarding malformed history");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            storage,
            clock,
            items,
        }
    }

    pub fn items(&self) -> &[ChatHistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ChatHistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Records a new analysis at the front and persists the whole list.
    pub fn add(&mut self, text: &str, analysis: Analysis) -> Result<ChatHistoryItem> {
        let item = ChatHistoryItem {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            analysis,
            timestamp: self.clock.now_utc(),
        };
        self.items.insert(0, item.clone());

        let json = serde_json::to_string(&self.items)?;
        log_write_failure(HISTORY_KEY, self.storage.set(HISTORY_KEY, &json))?;

        tracing::debug!(id = %item.id, total = self.items.len(), "added history item");
        Ok(item)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        log_write_failure(HISTORY_KEY, self.storage.remove(HISTORY_KEY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::clock::SystemClock;
    use crate::state::storage::MemoryStorage;

    fn analysis(tone: &str) -> Analysis {
        Analysis {
            overall_tone: tone.to_string(),
            summary: format!("{tone} summary"),
            ..Default::default()
        }
    }

    fn load(storage: Arc<MemoryStorage>) -> HistoryCell {
        HistoryCell::load(storage, Arc::new(SystemClock))
    }

    #[test]
    fn test_add_is_newest_first_with_distinct_ids() {
        let storage = Arc::new(MemoryStorage::new());
        let mut history = load(storage.clone());

        let a = history.add("x", analysis("calm")).unwrap();
        let b = history.add("y", analysis("sarcastic")).unwrap();

        assert_eq!(history.items(), &[b.clone(), a.clone()]);
        assert_ne!(a.id, b.id);
        assert_eq!(history.get(&a.id).map(|item| item.text.as_str()), Some("x"));
    }

    #[test]
    fn test_history_survives_reload() {
        let storage = Arc::new(MemoryStorage::new());
        let mut history = load(storage.clone());
        let item = history.add("hello", analysis("warm")).unwrap();

        let reloaded = load(storage);
        assert_eq!(reloaded.items(), &[item]);
    }

    #[test]
    fn test_clear_removes_key_and_reload_is_empty() {
        let storage = Arc::new(MemoryStorage::new());
        let mut history = load(storage.clone());
        history.add("x", analysis("calm")).unwrap();

        history.clear().unwrap();
        assert!(history.is_empty());
        assert!(!storage.contains(HISTORY_KEY).unwrap());

        let reloaded = load(storage);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_malformed_history_resets_to_empty() {
        let storage = Arc::new(MemoryStorage::with_entries([(HISTORY_KEY, "[{not json")]));
        assert!(load(storage).is_empty());
    }

    #[test]
    fn test_timestamp_is_rfc3339_on_disk() {
        let storage = Arc::new(MemoryStorage::new());
        let mut history = load(storage.clone());
        let item = history.add("x", analysis("calm")).unwrap();

        let raw = storage.get(HISTORY_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let stamp = json[0]["timestamp"].as_str().unwrap();
        let parsed: DateTime<Utc> = stamp.parse().unwrap();
        assert_eq!(parsed, item.timestamp);
    }
}
