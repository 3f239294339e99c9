//! Terminal presentation of an analysis report.
//!
//! The only place `**…**` emphasis markers are interpreted; everything
//! upstream carries them verbatim.

use std::fmt::Write as _;

use lumira_core::{AnalysisResult, Score, ScoreCategory};

const BAR_WIDTH: usize = 20;
const NAME_WIDTH: usize = 16;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// A piece of solution text: plain, or an emphasized span.
#[derive(Debug, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Emphasis(&'a str),
}

/// Split text on paired `**` markers.
///
/// An unterminated marker is not a span boundary; the remainder renders
/// literally.
pub fn emphasis_spans(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("**") {
        match rest[start + 2..].find("**") {
            Some(len) => {
                if start > 0 {
                    spans.push(Span::Plain(&rest[..start]));
                }
                spans.push(Span::Emphasis(&rest[start + 2..start + 2 + len]));
                rest = &rest[start + 2 + len + 2..];
            }
            None => break,
        }
    }

    if !rest.is_empty() {
        spans.push(Span::Plain(rest));
    }
    spans
}

/// Render emphasis spans for the terminal: ANSI bold, or bare text when
/// styling is off.
fn styled(text: &str, color: bool) -> String {
    emphasis_spans(text)
        .iter()
        .map(|span| match span {
            Span::Plain(s) => (*s).to_string(),
            Span::Emphasis(s) => {
                if color {
                    format!("{BOLD}{s}{RESET}")
                } else {
                    (*s).to_string()
                }
            }
        })
        .collect()
}

/// Band label for an overall score (thresholds at 85 and 60).
fn score_band(score: u8) -> &'static str {
    if score >= 85 {
        "excellent"
    } else if score >= 60 {
        "good"
    } else {
        "needs attention"
    }
}

/// Fixed-width `█░` bar scaled to 0–100.
fn score_bar(value: u8, width: usize) -> String {
    let filled = (value.min(100) as usize * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn score_row(score: &Score) -> String {
    format!(
        "  {:<NAME_WIDTH$} {} {:>3}\n",
        score.name,
        score_bar(score.value, BAR_WIDTH),
        score.value
    )
}

/// Render the full report: overview, category-grouped scores, then the
/// personalized plan.
pub fn render_report(result: &AnalysisResult, color: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Overall score: {}/100 ({})",
        result.overall_score,
        score_band(result.overall_score)
    );
    let _ = writeln!(out, "{}", result.summary);
    let _ = writeln!(out);

    // Same grouping as the score charts: harmony scores on their own,
    // everything else together.
    let (harmony, other): (Vec<&Score>, Vec<&Score>) = result
        .scores
        .iter()
        .partition(|s| s.category == ScoreCategory::SymmetryHarmony);

    let _ = writeln!(out, "Symmetry & Harmony");
    for score in &harmony {
        out.push_str(&score_row(score));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Skin Health & Key Features");
    for score in &other {
        out.push_str(&score_row(score));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Personalized plan");
    for enhancement in &result.enhancements {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", enhancement.area);
        let _ = writeln!(out, "  {}", enhancement.problem);
        for solution in &enhancement.solutions {
            let _ = writeln!(out, "    - {}: {}", solution.title, styled(&solution.description, color));
        }
    }

    out
}
