//! Font size cell.

use std::sync::Arc;

use super::storage::{FONT_SIZE_KEY, KeyValueStorage, log_write_failure, read_or_none};
use crate::error::Result;

pub const MIN_FONT_SIZE: u8 = 14;
pub const MAX_FONT_SIZE: u8 = 24;
pub const DEFAULT_FONT_SIZE: u8 = 16;
pub const FONT_SIZE_STEP: u8 = 2;

/// Base font size in pixels, clamped to `MIN_FONT_SIZE..=MAX_FONT_SIZE`.
pub struct FontSizeCell {
    storage: Arc<dyn KeyValueStorage>,
    size: u8,
}

impl FontSizeCell {
    /// Loads the stored size; non-numeric or out-of-range values are ignored.
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let size = read_or_none(storage.as_ref(), FONT_SIZE_KEY)
            .and_then(|value| value.trim().parse::<u8>().ok())
            .filter(|size| (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(size))
            .unwrap_or(DEFAULT_FONT_SIZE);

        Self { storage, size }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn can_increase(&self) -> bool {
        self.size < MAX_FONT_SIZE
    }

    pub fn can_decrease(&self) -> bool {
        self.size > MIN_FONT_SIZE
    }

    pub fn increase(&mut self) -> Result<u8> {
        self.write(self.size.saturating_add(FONT_SIZE_STEP).min(MAX_FONT_SIZE))
    }

    pub fn decrease(&mut self) -> Result<u8> {
        self.write(self.size.saturating_sub(FONT_SIZE_STEP).max(MIN_FONT_SIZE))
    }

    pub fn reset(&mut self) -> Result<u8> {
        self.write(DEFAULT_FONT_SIZE)
    }

    fn write(&mut self, size: u8) -> Result<u8> {
        self.size = size;
        log_write_failure(
            FONT_SIZE_KEY,
            self.storage.set(FONT_SIZE_KEY, &size.to_string()),
        )?;
        Ok(size)
    }
}
