//! Locates model-reported phrases inside the original text.

use serde::Serialize;
use strum::{Display, IntoStaticStr};

use crate::analysis::model::{FigurativeInstance, FigureType};

/// Which instance list a span came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HighlightKind {
    Sarcasm,
    Figurative,
}

/// A located phrase: `text[start..end]` is exactly `phrase`.
///
/// Offsets are UTF-8 byte offsets and always fall on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSpan {
    /// The original-case substring of the text, not the model's spelling.
    pub phrase: String,
    #[serde(rename = "type")]
    pub kind: HighlightKind,
    /// Set for figurative spans only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure_type: Option<FigureType>,
    pub literal_meaning: String,
    pub intended_meaning: String,
    pub explanation: String,
    pub start: usize,
    pub end: usize,
}

impl HighlightSpan {
    /// True when the two spans share at least one byte.
    pub fn overlaps(&self, other: &HighlightSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Finds the first case-insensitive occurrence of `phrase` in `text`.
///
/// Returns byte bounds in `text`. Comparison lowercases char by char, so a
/// match always covers whole chars of the original text. An empty phrase
/// never matches.
pub fn find_case_insensitive(text: &str, phrase: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = phrase.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }

    for (start, _) in text.char_indices() {
        let mut matched = 0;
        for (offset, ch) in text[start..].char_indices() {
            let mut consistent = true;
            for lower in ch.to_lowercase() {
                if matched < needle.len() && needle[matched] == lower {
                    matched += 1;
                } else {
                    consistent = false;
                    break;
                }
            }
            if !consistent {
                break;
            }
            if matched == needle.len() {
                return Some((start, start + offset + ch.len_utf8()));
            }
        }
    }

    None
}

fn locate_one(
    text: &str,
    instance: &FigurativeInstance,
    kind: HighlightKind,
) -> Option<HighlightSpan> {
    let (start, end) = find_case_insensitive(text, &instance.phrase)?;
    let figure_type = match kind {
        HighlightKind::Sarcasm => None,
        HighlightKind::Figurative => Some(instance.figure_type()),
    };

    Some(HighlightSpan {
        phrase: text[start..end].to_string(),
        kind,
        figure_type,
        literal_meaning: instance.literal_meaning.clone(),
        intended_meaning: instance.intended_meaning.clone(),
        explanation: instance.explanation.clone(),
        start,
        end,
    })
}

/// Locates every instance in `text` and returns the spans sorted by start.
///
/// Only the first occurrence of each phrase is located. Phrases that do not
/// occur in the text are dropped without error. Sarcasm spans are collected
/// before figurative ones and the sort is stable, so ties keep that order.
/// Overlapping spans are kept as-is.
pub fn locate_phrases(
    text: &str,
    sarcasm_instances: &[FigurativeInstance],
    figurative_instances: &[FigurativeInstance],
) -> Vec<HighlightSpan> {
    let sarcasm = sarcasm_instances
        .iter()
        .filter_map(|instance| locate_one(text, instance, HighlightKind::Sarcasm));
    let figurative = figurative_instances
        .iter()
        .filter_map(|instance| locate_one(text, instance, HighlightKind::Figurative));

    let mut spans: Vec<HighlightSpan> = sarcasm.chain(figurative).collect();
    let dropped = sarcasm_instances.len() + figurative_instances.len() - spans.len();
    if dropped > 0 {
        tracing::debug!(dropped, "phrases not found in text");
    }

    spans.sort_by_key(|span| span.start);
    spans
}
