//! Analysis service trait.
//!
//! Defines the single request/response boundary to the hosted model.

use async_trait::async_trait;

use super::model::Analysis;
use crate::error::{ClarityError, Result};

/// Message shown when the user submits nothing but whitespace.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter or record some text first.";

/// Remote analysis of free text.
///
/// One attempt per call; implementations never retry and never return a
/// partial analysis.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Analyzes `text`, which callers have already validated.
    async fn analyze(&self, text: &str) -> Result<Analysis>;
}

/// Trims `text` and rejects it when nothing is left.
pub fn validate_input(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ClarityError::validation(EMPTY_INPUT_MESSAGE));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_trims() {
        assert_eq!(validate_input("  hello \n").unwrap(), "hello");
    }

    #[test]
    fn test_validate_input_rejects_blank() {
        let err = validate_input(" \t\n").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.user_message(), EMPTY_INPUT_MESSAGE);
    }
}
