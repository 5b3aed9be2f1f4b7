//! Wire format of the analysis service.
//!
//! The service contract evolved: older replies carry `hasMetaphors` /
//! `metaphorInstances`, newer ones `hasFigurativeLanguage` /
//! `figurativeLanguageInstances`, and the proxy sends both. Replies are
//! parsed into [`AnalysisPayload`] and normalized exactly once into
//! [`Analysis`].

use serde::{Deserialize, Serialize};

use super::model::{Analysis, FigurativeInstance};
use crate::error::{ClarityError, Result};

/// Raw analysis object as produced by the model or the proxy.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    #[serde(default)]
    pub overall_tone: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub simplified_explanation: Option<String>,
    #[serde(default)]
    pub has_sarcasm: bool,
    #[serde(default)]
    pub has_figurative_language: Option<bool>,
    #[serde(default)]
    pub has_metaphors: Option<bool>,
    #[serde(default)]
    pub sarcasm_instances: Vec<FigurativeInstance>,
    #[serde(default)]
    pub figurative_language_instances: Option<Vec<FigurativeInstance>>,
    #[serde(default)]
    pub figurative_instances: Option<Vec<FigurativeInstance>>,
    #[serde(default)]
    pub metaphor_instances: Option<Vec<FigurativeInstance>>,
}

impl AnalysisPayload {
    /// Collapses current and legacy field names into the internal model.
    ///
    /// Current names win over legacy ones; blank simplified explanations are
    /// dropped.
    pub fn normalize(self) -> Analysis {
        let figurative_instances = self
            .figurative_language_instances
            .or(self.figurative_instances)
            .or(self.metaphor_instances)
            .unwrap_or_default();

        let has_figurative_language = self
            .has_figurative_language
            .or(self.has_metaphors)
            .unwrap_or(!figurative_instances.is_empty());

        let simplified_explanation = self
            .simplified_explanation
            .filter(|text| !text.trim().is_empty());

        Analysis {
            overall_tone: self.overall_tone,
            summary: self.summary,
            simplified_explanation,
            has_sarcasm: self.has_sarcasm,
            has_figurative_language,
            sarcasm_instances: self.sarcasm_instances,
            figurative_instances,
        }
    }
}

impl From<AnalysisPayload> for Analysis {
    fn from(payload: AnalysisPayload) -> Self {
        payload.normalize()
    }
}

/// Parses a JSON analysis object (e.g. tool-call arguments) into the model.
pub fn parse_analysis(json: &str) -> Result<Analysis> {
    let payload: AnalysisPayload = serde_json::from_str(json)?;
    Ok(payload.normalize())
}

/// Request body sent to the analysis proxy.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

/// Reply body of the analysis proxy: either an analysis or an error message.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeReply {
    #[serde(default)]
    pub analysis: Option<AnalysisPayload>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AnalyzeReply {
    /// Turns the reply into an analysis, surfacing `error` verbatim.
    pub fn into_result(self) -> Result<Analysis> {
        if let Some(message) = self.error {
            return Err(ClarityError::service(message));
        }
        self.analysis
            .map(AnalysisPayload::normalize)
            .ok_or_else(|| ClarityError::service("Invalid response from AI"))
    }
}
