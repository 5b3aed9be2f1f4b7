//! Terminal rendering of analyses.

use std::fmt::Write;

use chrono::Local;
use clarity_core::analysis::{Analysis, FigurativeInstance, ToneSpectrum};
use clarity_core::highlight::{HighlightKind, TextRun, highlight};
use clarity_core::state::{ChatHistoryItem, Theme};
use colored::{ColoredString, Colorize};

const SPECTRUM_WIDTH: usize = 21;
const PREVIEW_CHARS: usize = 60;

/// How output is drawn: colors follow the theme, `plain` drops them and marks
/// sarcasm as `[phrase]` and figurative language as `{phrase}`.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub theme: Theme,
    pub plain: bool,
}

impl Style {
    pub fn new(theme: Theme, plain: bool) -> Self {
        Self { theme, plain }
    }

    fn mark(&self, text: &str, kind: HighlightKind) -> String {
        if self.plain {
            return match kind {
                HighlightKind::Sarcasm => format!("[{}]", text),
                HighlightKind::Figurative => format!("{{{}}}", text),
            };
        }

        let colored: ColoredString = match (self.theme, kind) {
            (Theme::HighContrast, HighlightKind::Sarcasm) => {
                text.black().on_bright_yellow().bold()
            }
            (Theme::HighContrast, HighlightKind::Figurative) => {
                text.black().on_bright_white().bold().underline()
            }
            (Theme::Dark, HighlightKind::Sarcasm) => text.bright_yellow().underline(),
            (Theme::Dark, HighlightKind::Figurative) => text.bright_cyan().underline(),
            (Theme::Light, HighlightKind::Sarcasm) => text.yellow().bold().underline(),
            (Theme::Light, HighlightKind::Figurative) => text.blue().underline(),
        };
        colored.to_string()
    }

    fn heading(&self, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else if self.theme == Theme::HighContrast {
            text.bold().underline().to_string()
        } else {
            text.bold().to_string()
        }
    }

    fn muted(&self, text: &str) -> String {
        if self.plain || self.theme == Theme::HighContrast {
            text.to_string()
        } else {
            text.dimmed().to_string()
        }
    }
}

/// The text with every located phrase marked in place.
pub fn highlighted_text(text: &str, analysis: &Analysis, style: Style) -> String {
    highlight(text, analysis)
        .iter()
        .map(|run| match run {
            TextRun::Plain(plain) => (*plain).to_string(),
            TextRun::Highlight(span) => style.mark(run.text(), span.kind),
        })
        .collect()
}

/// Position marker on a `-1.0..=1.0` axis drawn `width` cells wide.
pub fn spectrum_bar(value: f32, width: usize) -> String {
    let width = width.max(2);
    let position = ((value.clamp(-1.0, 1.0) + 1.0) / 2.0 * (width - 1) as f32).round() as usize;
    (0..width)
        .map(|cell| if cell == position { '●' } else { '-' })
        .collect()
}

/// Full report for one analysis: tone, summary, instance cards and the
/// highlighted text.
pub fn analysis_report(text: &str, analysis: &Analysis, style: Style) -> String {
    let mut out = String::new();
    let spectrum = ToneSpectrum::from_tone(&analysis.overall_tone);

    let _ = writeln!(
        out,
        "{} {} ({})",
        style.heading("Tone:"),
        analysis.overall_tone,
        spectrum.mood_label()
    );
    let _ = writeln!(
        out,
        "  emotional  negative [{}] positive",
        spectrum_bar(spectrum.emotional, SPECTRUM_WIDTH)
    );
    let _ = writeln!(
        out,
        "  formality  casual   [{}] formal",
        spectrum_bar(spectrum.formality, SPECTRUM_WIDTH)
    );

    if !analysis.summary.is_empty() {
        let _ = writeln!(out, "\n{}\n  {}", style.heading("Summary"), analysis.summary);
    }
    if let Some(simplified) = &analysis.simplified_explanation {
        let _ = writeln!(out, "\n{}\n  {}", style.heading("In plain words"), simplified);
    }

    if analysis.is_literal() {
        let _ = writeln!(
            out,
            "\nNo sarcasm or figurative language found. This text says what it means."
        );
    }

    write_cards(
        &mut out,
        "Sarcasm",
        &analysis.sarcasm_instances,
        HighlightKind::Sarcasm,
        style,
    );
    write_cards(
        &mut out,
        "Figurative language",
        &analysis.figurative_instances,
        HighlightKind::Figurative,
        style,
    );

    let _ = writeln!(
        out,
        "\n{}\n  {}",
        style.heading("Text"),
        highlighted_text(text, analysis, style)
    );
    if !analysis.is_literal() {
        let _ = writeln!(
            out,
            "  {} {} {}",
            style.muted("legend:"),
            style.mark("sarcasm", HighlightKind::Sarcasm),
            style.mark("figurative", HighlightKind::Figurative)
        );
    }

    out
}

fn write_cards(
    out: &mut String,
    title: &str,
    instances: &[FigurativeInstance],
    kind: HighlightKind,
    style: Style,
) {
    if instances.is_empty() {
        return;
    }

    let _ = writeln!(out, "\n{}", style.heading(&format!("{} ({})", title, instances.len())));
    for instance in instances {
        let label = match kind {
            HighlightKind::Sarcasm => String::new(),
            HighlightKind::Figurative => format!(" {}", instance.figure_type()),
        };
        let _ = writeln!(
            out,
            "  \"{}\"{}  {}",
            style.mark(&instance.phrase, kind),
            label,
            style.muted(&format!(
                "confidence {}%",
                instance.confidence.display_value()
            ))
        );
        write_field(out, "Literal", &instance.literal_meaning);
        write_field(out, "Intended", &instance.intended_meaning);
        write_field(out, "Why", &instance.explanation);
    }
}

fn write_field(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        let _ = writeln!(out, "    {:<9} {}", format!("{}:", label), value);
    }
}

/// One line of `history list`.
pub fn history_line(item: &ChatHistoryItem, style: Style) -> String {
    let when = item.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M");
    format!(
        "{}  {}  {}  {}",
        style.muted(&item.id),
        when,
        preview(&item.text, PREVIEW_CHARS),
        style.muted(&format!("({})", item.analysis.overall_tone))
    )
}

fn preview(text: &str, max_chars: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let truncated: String = single_line.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", truncated.trim_end())
}
