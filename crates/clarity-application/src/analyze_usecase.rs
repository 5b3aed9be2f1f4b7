//! Analyze use case.
//!
//! Coordinates one submission: input validation, the single outstanding
//! service request, and recording the result in history.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clarity_core::analysis::{AnalysisService, validate_input};
use clarity_core::error::{ClarityError, Result};
use clarity_core::practice::find_example;
use clarity_core::state::{ChatHistoryItem, HistoryCell};
use tokio::sync::Mutex;

/// Use case for submitting text to the analysis service.
///
/// At most one request is outstanding per instance. A submission made while
/// another one is in flight fails with [`ClarityError::Busy`] and touches
/// nothing.
pub struct AnalyzeUseCase {
    service: Arc<dyn AnalysisService>,
    history: Arc<Mutex<HistoryCell>>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when dropped, on success, error or cancellation.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| ClarityError::Busy)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AnalyzeUseCase {
    pub fn new(service: Arc<dyn AnalysisService>, history: Arc<Mutex<HistoryCell>>) -> Self {
        Self {
            service,
            history,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Shared handle to the history this use case records into.
    pub fn history(&self) -> Arc<Mutex<HistoryCell>> {
        Arc::clone(&self.history)
    }

    /// Whether a request is currently outstanding.
    pub fn is_analyzing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Analyzes `text` and records it in history.
    ///
    /// Empty or whitespace-only input is rejected before any network call.
    /// On failure the history is left unchanged.
    pub async fn submit(&self, text: &str) -> Result<ChatHistoryItem> {
        let text = validate_input(text)?;
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        tracing::debug!(chars = text.chars().count(), "submitting text for analysis");
        let analysis = match self.service.analyze(text).await {
            Ok(analysis) => analysis,
            Err(err) => {
                tracing::warn!(error = %err, "analysis failed");
                return Err(err);
            }
        };

        let item = self.history.lock().await.add(text, analysis)?;
        tracing::info!(id = %item.id, "analysis recorded in history");
        Ok(item)
    }

    /// Submits the text of the practice example with the given id.
    pub async fn submit_example(&self, example_id: &str) -> Result<ChatHistoryItem> {
        let example = find_example(example_id)
            .ok_or_else(|| ClarityError::not_found("PracticeExample", example_id))?;
        self.submit(example.text).await
    }
}
