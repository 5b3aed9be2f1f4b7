//! Inline phrase highlighting.
//!
//! [`locate_phrases`] maps the service's phrases back onto the submitted
//! text; [`segment`] turns the located spans into the run sequence a
//! renderer draws. Both are pure.

mod locator;

pub use locator::{HighlightKind, HighlightSpan, find_case_insensitive, locate_phrases};

use crate::analysis::model::Analysis;

/// One piece of renderable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextRun<'a> {
    /// Unannotated text between (or around) highlights.
    Plain(&'a str),
    /// A located phrase with its explanation.
    Highlight(HighlightSpan),
}

impl TextRun<'_> {
    /// The text this run displays.
    pub fn text(&self) -> &str {
        match self {
            TextRun::Plain(text) => text,
            TextRun::Highlight(span) => &span.phrase,
        }
    }

    pub fn span(&self) -> Option<&HighlightSpan> {
        match self {
            TextRun::Plain(_) => None,
            TextRun::Highlight(span) => Some(span),
        }
    }
}

/// Interleaves plain runs with sorted `spans`.
///
/// A plain run is emitted for each gap before a span, and one for any text
/// after the last span. Overlapping spans are emitted as they are, so their
/// runs may repeat text; only non-overlapping spans guarantee that the runs
/// concatenate back to `text`.
pub fn segment(text: &str, spans: Vec<HighlightSpan>) -> Vec<TextRun<'_>> {
    if spans.is_empty() {
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![TextRun::Plain(text)]
        };
    }

    let mut runs = Vec::with_capacity(spans.len() * 2 + 1);
    let mut last_index = 0;

    for span in spans {
        if span.start > last_index {
            runs.push(TextRun::Plain(&text[last_index..span.start]));
        }
        last_index = span.end;
        runs.push(TextRun::Highlight(span));
    }

    if last_index < text.len() {
        runs.push(TextRun::Plain(&text[last_index..]));
    }

    runs
}

/// Locates every instance of `analysis` in `text` and segments the result.
pub fn highlight<'a>(text: &'a str, analysis: &Analysis) -> Vec<TextRun<'a>> {
    let spans = locate_phrases(
        text,
        &analysis.sarcasm_instances,
        &analysis.figurative_instances,
    );
    segment(text, spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::model::{Confidence, FigurativeInstance, FigureType};

    fn instance(phrase: &str, kind: Option<FigureType>) -> FigurativeInstance {
        FigurativeInstance {
            phrase: phrase.to_string(),
            kind,
            literal_meaning: String::new(),
            intended_meaning: String::new(),
            explanation: String::new(),
            confidence: Confidence::High,
        }
    }

    fn joined(runs: &[TextRun<'_>]) -> String {
        runs.iter().map(TextRun::text).collect()
    }

    const MEETING: &str = "Oh great, another meeting that could have been an email.";

    #[test]
    fn test_meeting_example_offsets() {
        let analysis = Analysis {
            sarcasm_instances: vec![instance("great", None)],
            figurative_instances: vec![instance("another meeting", Some(FigureType::Idiom))],
            ..Default::default()
        };

        let runs = highlight(MEETING, &analysis);

        assert_eq!(runs.len(), 5);
        assert_eq!(runs[0], TextRun::Plain("Oh "));
        let great = runs[1].span().unwrap();
        assert_eq!((great.start, great.end), (3, 8));
        assert_eq!(runs[2], TextRun::Plain(", "));
        let meeting = runs[3].span().unwrap();
        assert_eq!((meeting.start, meeting.end), (10, 25));
        assert_eq!(meeting.phrase, "another meeting");
        assert_eq!(runs[4], TextRun::Plain(" that could have been an email."));
        assert_eq!(joined(&runs), MEETING);
    }

    #[test]
    fn test_runs_concatenate_when_all_phrases_match() {
        let text = "My legs felt like jelly and the bag weighs a ton.";
        let analysis = Analysis {
            figurative_instances: vec![
                instance("WEIGHS A TON", Some(FigureType::Hyperbole)),
                instance("felt like jelly", Some(FigureType::Simile)),
            ],
            ..Default::default()
        };

        let runs = highlight(text, &analysis);
        assert_eq!(joined(&runs), text);
        assert_eq!(runs.iter().filter(|run| run.span().is_some()).count(), 2);
    }

    #[test]
    fn test_unmatched_phrase_contributes_nothing() {
        let text = "Under the weather today.";
        let analysis = Analysis {
            sarcasm_instances: vec![instance("over the moon", None)],
            figurative_instances: vec![instance("under the weather", Some(FigureType::Idiom))],
            ..Default::default()
        };

        let runs = highlight(text, &analysis);
        assert_eq!(joined(&runs), text);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text(), "Under the weather");
    }

    #[test]
    fn test_no_spans_is_single_plain_run() {
        let runs = segment("nothing to see", Vec::new());
        assert_eq!(runs, vec![TextRun::Plain("nothing to see")]);
        assert!(segment("", Vec::new()).is_empty());
    }

    #[test]
    fn test_phrase_equal_to_text() {
        let text = "Break a leg!";
        let analysis = Analysis {
            figurative_instances: vec![instance("break a leg!", Some(FigureType::Idiom))],
            ..Default::default()
        };
        let runs = highlight(text, &analysis);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text(), text);
    }

    #[test]
    fn test_overlapping_spans_are_not_merged() {
        let text = "What a wonderful heart of gold you have";
        let analysis = Analysis {
            sarcasm_instances: vec![instance("wonderful heart of gold", None)],
            figurative_instances: vec![instance("heart of gold", Some(FigureType::Metaphor))],
            ..Default::default()
        };

        let runs = highlight(text, &analysis);
        let spans: Vec<&HighlightSpan> = runs.iter().filter_map(TextRun::span).collect();
        assert_eq!(spans.len(), 2);
        assert!(spans[0].overlaps(spans[1]));
        // trailing text resumes at the end of the last emitted span
        assert_eq!(runs.last().unwrap().text(), " you have");
    }

    #[test]
    fn test_deterministic() {
        let analysis = Analysis {
            sarcasm_instances: vec![instance("great", None)],
            ..Default::default()
        };
        assert_eq!(highlight(MEETING, &analysis), highlight(MEETING, &analysis));
    }
}
