pub mod color_scheme;
pub mod config_storage;
pub mod paths;
pub mod storage;

pub use crate::color_scheme::EnvColorScheme;
pub use crate::config_storage::ConfigStorage;
pub use crate::paths::ClarityPaths;
pub use crate::storage::{DEFAULT_SESSION_ID, JsonFileStorage, end_session, open_state_storage};
