//! Analysis domain models.
//!
//! These are the normalized shapes the rest of the application works with.
//! Wire-format quirks (legacy field names) are handled in
//! [`crate::analysis::wire`] and never leak past it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Ordinal confidence label attached to a detected instance.
///
/// Not a probability; [`Confidence::display_value`] is only used for meters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter,
)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Fixed value used to draw confidence meters.
    pub fn display_value(self) -> u8 {
        match self {
            Confidence::High => 90,
            Confidence::Medium => 60,
            Confidence::Low => 30,
        }
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Confidence::Medium
    }
}

impl TryFrom<String> for Confidence {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

/// Kind of figurative language reported by the service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter,
)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(try_from = "String", into = "&'static str")]
pub enum FigureType {
    Metaphor,
    Simile,
    Personification,
    Hyperbole,
    Idiom,
    Symbolism,
    Imagery,
}

impl TryFrom<String> for FigureType {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

/// A single sarcastic or figurative phrase detected in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigurativeInstance {
    /// Substring expected (not guaranteed) to occur in the original text.
    pub phrase: String,
    #[serde(
        default,
        rename = "type",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_figure_type"
    )]
    pub kind: Option<FigureType>,
    #[serde(default)]
    pub literal_meaning: String,
    #[serde(default)]
    pub intended_meaning: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, deserialize_with = "lenient_confidence")]
    pub confidence: Confidence,
}

/// Reads an optional label; an unknown or non-string label yields `None`
/// instead of failing the enclosing analysis.
fn lenient_label<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<String>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let parsed = value
        .as_str()
        .and_then(|label| T::try_from(label.to_string()).ok());
    if parsed.is_none() {
        tracing::debug!(label = %value, "ignoring unrecognized label");
    }
    Ok(parsed)
}

fn lenient_figure_type<'de, D>(deserializer: D) -> Result<Option<FigureType>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_label(deserializer)
}

fn lenient_confidence<'de, D>(deserializer: D) -> Result<Confidence, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_label(deserializer)?.unwrap_or_default())
}

impl FigurativeInstance {
    /// Type used for display; untagged instances count as metaphors.
    pub fn figure_type(&self) -> FigureType {
        self.kind.unwrap_or(FigureType::Metaphor)
    }
}

/// Structured analysis of one submitted text.
///
/// Immutable once produced. Serialized in camelCase, which is also the
/// on-disk layout of stored history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub overall_tone: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplified_explanation: Option<String>,
    #[serde(default)]
    pub has_sarcasm: bool,
    #[serde(default)]
    pub has_figurative_language: bool,
    #[serde(default)]
    pub sarcasm_instances: Vec<FigurativeInstance>,
    #[serde(default)]
    pub figurative_instances: Vec<FigurativeInstance>,
}

impl Analysis {
    /// True when the service found nothing non-literal.
    pub fn is_literal(&self) -> bool {
        !self.has_sarcasm
            && !self.has_figurative_language
            && self.sarcasm_instances.is_empty()
            && self.figurative_instances.is_empty()
    }
}
