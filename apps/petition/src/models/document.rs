//! Output document model — paragraphs of styled runs, independent of the DOCX backend.

use serde::{Deserialize, Serialize};

/// A span of visible text with its inline formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    pub text: String,
    pub bold: bool,
    pub highlight: bool,
}

/// Paragraph-level layout. Exactly one applies per paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphDirective {
    /// Justified with a first-line indent.
    #[default]
    JustifiedIndented,
    /// Justified, first line flush with the margin.
    JustifiedNoIndent,
    /// Whole paragraph indented from the left margin (quotations).
    FullBlockIndent,
    Centered,
    /// Empty spacer paragraph; carries no runs.
    BlankSpacer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub directive: ParagraphDirective,
    pub runs: Vec<StyledRun>,
}

impl Paragraph {
    pub fn blank() -> Self {
        Self {
            directive: ParagraphDirective::BlankSpacer,
            runs: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Paragraph {
    /// Concatenated visible text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}
