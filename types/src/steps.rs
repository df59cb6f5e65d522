//! Parser for the service's delimiter-annotated explanation text.
//!
//! The remote service returns one explanation string per result, with `➡`
//! separating segments and `◆`/`▶` marking primary and sub steps inside a
//! segment. Parsing is a two-stage textual transform (normalize delimiters,
//! then classify lines), not a structural parse. It is pure: the same input
//! always yields the same step sequence.

use serde::{Deserialize, Serialize};

/// Delimiter between explanation segments on the wire.
const SEGMENT_DELIMITER: char = '➡';
/// Inline marker for a primary step.
const PRIMARY_MARKER: char = '◆';
/// Inline marker for a sub step.
const SUB_MARKER: char = '▶';

/// Visual weight of one explanation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    /// Marked with `◆`: a top-level step of the derivation.
    Primary,
    /// Marked with `▶`: detail nested under the preceding primary step.
    Sub,
    /// No marker: plain commentary.
    Plain,
}

/// One classified line of a result's explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    text: String,
    kind: StepKind,
}

impl Step {
    #[must_use]
    pub fn new(text: impl Into<String>, kind: StepKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn kind(&self) -> StepKind {
        self.kind
    }
}

/// Parse an explanation string into an ordered list of classified steps.
///
/// Stage one splits on `➡`, trims each segment, and rejoins with newlines,
/// so explanations that arrive already newline-delimited pass through
/// unchanged. Stage two drops blank lines, classifies each remaining line by
/// its marker (`◆` wins over `▶`), and strips both markers from the display
/// text. An empty explanation yields an empty sequence; an explanation with
/// no markers yields all-`Plain` steps.
#[must_use]
pub fn parse_explanation(explanation: &str) -> Vec<Step> {
    let normalized = explanation
        .split(SEGMENT_DELIMITER)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");

    normalized
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let kind = if line.contains(PRIMARY_MARKER) {
                StepKind::Primary
            } else if line.contains(SUB_MARKER) {
                StepKind::Sub
            } else {
                StepKind::Plain
            };
            let text: String = line
                .chars()
                .filter(|c| *c != PRIMARY_MARKER && *c != SUB_MARKER)
                .collect();
            Step::new(text.trim(), kind)
        })
        .collect()
}
