//! Tone spectrum estimation.
//!
//! Places the service's free-text tone label on two axes for display. The
//! first matching keyword group wins on each axis.

/// Position of a tone label on the emotional and formality axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToneSpectrum {
    /// -1.0 (negative) to 1.0 (positive)
    pub emotional: f32,
    /// -1.0 (casual) to 1.0 (formal)
    pub formality: f32,
}

const EMOTIONAL_SCALE: &[(&[&str], f32)] = &[
    (
        &["positive", "friendly", "happy", "cheerful", "enthusiastic"],
        0.7,
    ),
    (&["encouraging", "warm", "supportive"], 0.5),
    (&["neutral", "matter-of-fact", "objective"], 0.0),
    (&["serious", "concerned", "cautious"], -0.3),
    (&["negative", "critical", "frustrated", "angry"], -0.7),
    (&["sarcastic", "ironic"], -0.4),
];

const FORMALITY_SCALE: &[(&[&str], f32)] = &[
    (&["formal", "professional", "academic"], 0.7),
    (&["polite", "respectful"], 0.4),
    (&["casual", "informal", "conversational"], -0.5),
    (&["playful", "humorous", "slangy"], -0.7),
];

impl ToneSpectrum {
    pub fn from_tone(tone: &str) -> Self {
        let lower = tone.to_lowercase();
        Self {
            emotional: score(&lower, EMOTIONAL_SCALE),
            formality: score(&lower, FORMALITY_SCALE),
        }
    }

    /// Short label for the emotional axis.
    pub fn mood_label(&self) -> &'static str {
        if self.emotional > 0.3 {
            "positive"
        } else if self.emotional < -0.3 {
            "negative"
        } else {
            "neutral"
        }
    }
}

fn score(lower: &str, scale: &[(&[&str], f32)]) -> f32 {
    scale
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, value)| *value)
        .unwrap_or(0.0)
}
