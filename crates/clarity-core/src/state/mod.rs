//! Session state store.
//!
//! Four independent cells, each with its own storage key, default and load
//! validation. Cells receive their storage explicitly; nothing here reads
//! ambient global state.

pub mod clock;
pub mod font_size;
pub mod history;
pub mod personalization;
pub mod storage;
pub mod theme;

use std::sync::Arc;

pub use clock::{Clock, FixedClock, SystemClock};
pub use font_size::{DEFAULT_FONT_SIZE, FONT_SIZE_STEP, FontSizeCell, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use history::{ChatHistoryItem, HistoryCell};
pub use personalization::PersonalizationCell;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use theme::{ColorSchemePreference, StaticPreference, Theme, ThemeCell};

/// The storage handles a [`SessionState`] is built from.
///
/// `session` lives for one browsing session; `persistent` outlives it and
/// only holds the theme.
#[derive(Clone)]
pub struct StateStorage {
    pub session: Arc<dyn KeyValueStorage>,
    pub persistent: Arc<dyn KeyValueStorage>,
}

impl StateStorage {
    /// Both scopes in memory.
    pub fn in_memory() -> Self {
        Self {
            session: Arc::new(MemoryStorage::new()),
            persistent: Arc::new(MemoryStorage::new()),
        }
    }
}

/// All four state cells, loaded together and handed to whoever needs them.
pub struct SessionState {
    pub theme: ThemeCell,
    pub font_size: FontSizeCell,
    pub personalization: PersonalizationCell,
    pub history: HistoryCell,
}

impl SessionState {
    pub fn load(
        storage: &StateStorage,
        preference: &dyn ColorSchemePreference,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            theme: ThemeCell::load(storage.persistent.clone(), preference),
            font_size: FontSizeCell::load(storage.session.clone()),
            personalization: PersonalizationCell::load(storage.session.clone(), clock.clone()),
            history: HistoryCell::load(storage.session.clone(), clock),
        }
    }
}
