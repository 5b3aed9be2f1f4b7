//! Personalization cell (display name and greeting).

use std::sync::Arc;

use super::clock::Clock;
use super::storage::{KeyValueStorage, USER_NAME_KEY, log_write_failure, read_or_none};
use crate::error::Result;

/// The user's display name. An empty name means "not set"; the storage key
/// is removed rather than written empty.
pub struct PersonalizationCell {
    storage: Arc<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
    name: String,
}

impl PersonalizationCell {
    pub fn load(storage: Arc<dyn KeyValueStorage>, clock: Arc<dyn Clock>) -> Self {
        let name = read_or_none(storage.as_ref(), USER_NAME_KEY)
            .map(|value| value.trim().to_string())
            .unwrap_or_default();

        Self {
            storage,
            clock,
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Stores the trimmed `name`; a blank name clears the cell.
    pub fn update(&mut self, name: &str) -> Result<()> {
        self.name = name.trim().to_string();
        let result = if self.name.is_empty() {
            self.storage.remove(USER_NAME_KEY)
        } else {
            self.storage.set(USER_NAME_KEY, &self.name)
        };
        log_write_failure(USER_NAME_KEY, result)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.name.clear();
        log_write_failure(USER_NAME_KEY, self.storage.remove(USER_NAME_KEY))
    }

    /// Greeting for the current local hour, or `None` without a name.
    pub fn greeting(&self) -> Option<String> {
        self.greeting_at(self.clock.local_hour())
    }

    pub fn greeting_at(&self, hour: u32) -> Option<String> {
        if self.name.is_empty() {
            return None;
        }
        Some(format!("{}, {}!", salutation(hour), self.name))
    }
}

fn salutation(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::clock::FixedClock;
    use crate::state::storage::MemoryStorage;

    fn cell(hour: u32) -> (PersonalizationCell, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let cell = PersonalizationCell::load(storage.clone(), Arc::new(FixedClock::at_hour(hour)));
        (cell, storage)
    }

    #[test]
    fn test_greetings_by_hour() {
        let (mut cell, _) = cell(9);
        cell.update("Sam").unwrap();
        assert_eq!(cell.greeting().as_deref(), Some("Good morning, Sam!"));
        assert_eq!(cell.greeting_at(12).as_deref(), Some("Good afternoon, Sam!"));
        assert_eq!(cell.greeting_at(16).as_deref(), Some("Good afternoon, Sam!"));
        assert_eq!(cell.greeting_at(17).as_deref(), Some("Good evening, Sam!"));
        assert_eq!(cell.greeting_at(20).as_deref(), Some("Good evening, Sam!"));
    }

    #[test]
    fn test_no_greeting_without_name() {
        let (cell, _) = cell(9);
        assert!(!cell.has_name());
        assert_eq!(cell.greeting(), None);
    }

    #[test]
    fn test_update_trims_and_persists() {
        let (mut cell, storage) = cell(9);
        cell.update("  Alex \n").unwrap();
        assert_eq!(cell.name(), "Alex");
        assert_eq!(storage.get(USER_NAME_KEY).unwrap().as_deref(), Some("Alex"));
    }

    #[test]
    fn test_blank_update_removes_key() {
        let (mut cell, storage) = cell(9);
        cell.update("Alex").unwrap();
        cell.update("   ").unwrap();
        assert!(!cell.has_name());
        assert!(!storage.contains(USER_NAME_KEY).unwrap());
    }

    #[test]
    fn test_load_existing_name() {
        let storage = Arc::new(MemoryStorage::with_entries([(USER_NAME_KEY, "Robin")]));
        let cell = PersonalizationCell::load(storage, Arc::new(FixedClock::at_hour(20)));
        assert_eq!(cell.greeting().as_deref(), Some("Good evening, Robin!"));
    }
}
