//! Feedback response parsing.
//!
//! Splits the model's response text into the two display sections using the
//! fixed heading markers. The fallback for marker-less responses is an
//! explicit branch, not an implicit failed match.

use serde::{Deserialize, Serialize};

/// Heading that opens the positive-feedback section.
pub const WELL_DONE_MARKER: &str = "### Well Done";

/// Heading that opens the improvement section.
pub const IMPROVEMENT_MARKER: &str = "### Areas for Improvement";

/// Outcome of scanning a response for the two section markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedFeedback<'a> {
    /// The improvement marker was found; the response has structure.
    Sections {
        /// Text strictly between the well-done marker and the improvement
        /// marker, if the well-done marker came first.
        well_done: Option<&'a str>,
        /// Everything after the improvement marker, to the end of the text.
        areas_for_improvement: &'a str,
    },
    /// No improvement marker anywhere; the whole response is shown as-is.
    Unstructured(&'a str),
}

/// Split a response into its sections.
///
/// Markers only count at the start of a line. A well-done marker without a
/// following improvement marker does not make the response structured.
pub fn split_feedback(text: &str) -> ParsedFeedback<'_> {
    let Some((improvement_start, improvement_end)) = find_marker_line(text, IMPROVEMENT_MARKER)
    else {
        return ParsedFeedback::Unstructured(text);
    };

    let well_done = find_marker_line(text, WELL_DONE_MARKER)
        .filter(|&(start, _)| start < improvement_start)
        .map(|(_, end)| text[end..improvement_start].trim());

    ParsedFeedback::Sections {
        well_done,
        areas_for_improvement: text[improvement_end..].trim(),
    }
}

/// Find the first line beginning with `marker`.
///
/// Returns the byte offsets of the line start and of the end of the marker
/// token itself.
fn find_marker_line(text: &str, marker: &str) -> Option<(usize, usize)> {
    let mut pos = 0;
    for line in text.split_inclusive('\n') {
        if line.starts_with(marker) {
            return Some((pos, pos + marker.len()));
        }
        pos += line.len();
    }
    None
}

/// Structured feedback handed back to the caller for display.
///
/// `raw_text` always carries the full response, so falling back to it never
/// drops content. The structured fields are either both meaningful
/// (`areas_for_improvement` set, `well_done` set when present in the
/// response) or both absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub well_done: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub raw_text: String,
}

impl FeedbackResult {
    /// Parse a raw model response into a result.
    pub fn from_raw(raw: &str) -> Self {
        match split_feedback(raw) {
            ParsedFeedback::Sections {
                well_done,
                areas_for_improvement,
            } => Self {
                well_done: well_done.map(str::to_string),
                areas_for_improvement: Some(areas_for_improvement.to_string()),
                raw_text: raw.to_string(),
            },
            ParsedFeedback::Unstructured(_) => Self {
                well_done: None,
                areas_for_improvement: None,
                raw_text: raw.to_string(),
            },
        }
    }

    /// Whether the response carried the section markers. Callers render the
    /// sections when this is true and `raw_text` otherwise.
    pub fn is_structured(&self) -> bool {
        self.areas_for_improvement.is_some()
    }
}
