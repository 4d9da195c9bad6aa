//! Bracket-tag markup — turns tagged fragment text into paragraphs of styled runs.
//!
//! # Paragraph tags
//! Presence anywhere in the paragraph selects the directive:
//! `[PARAGRAFO]` → blank spacer (nothing else is read), otherwise
//! `[CENTRALIZADO]` > `[RECUO_COMPLETO]` > `[SEM_RECUO]` > justified-indented.
//!
//! # Inline tags
//! `[NEGRITO]…[/NEGRITO]` (bold) and `[LARANJA]…[/LARANJA]` (highlight), scanned
//! in a single pass. Highlight spans are scoped to the bold or plain region they
//! start in. Malformed markup is tolerated:
//! - an open tag without its close runs to the end of the enclosing region
//! - re-opening an open tag starts a new span of the same kind
//! - a close tag with nothing open stays in the text as written

use crate::models::document::{Paragraph, ParagraphDirective, StyledRun};

/// Fragments are joined, and paragraphs split, on a blank line.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

const PARAGRAPH_BREAK: &str = "[PARAGRAFO]";
const CENTERED: &str = "[CENTRALIZADO]";
const FULL_INDENT: &str = "[RECUO_COMPLETO]";
const NO_INDENT: &str = "[SEM_RECUO]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineTag {
    BoldOpen,
    BoldClose,
    HighlightOpen,
    HighlightClose,
}

const INLINE_TAGS: [InlineTag; 4] = [
    InlineTag::BoldOpen,
    InlineTag::BoldClose,
    InlineTag::HighlightOpen,
    InlineTag::HighlightClose,
];

impl InlineTag {
    fn literal(self) -> &'static str {
        match self {
            InlineTag::BoldOpen => "[NEGRITO]",
            InlineTag::BoldClose => "[/NEGRITO]",
            InlineTag::HighlightOpen => "[LARANJA]",
            InlineTag::HighlightClose => "[/LARANJA]",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Tag(InlineTag),
}

/// Splits the assembled text into paragraphs and parses each one.
/// Whitespace-only paragraphs are skipped.
pub fn parse_document(text: &str) -> Vec<Paragraph> {
    text.split(PARAGRAPH_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
        .map(parse)
        .collect()
}

/// Parses one paragraph into its directive and runs.
pub fn parse(paragraph: &str) -> Paragraph {
    if paragraph.contains(PARAGRAPH_BREAK) {
        return Paragraph::blank();
    }

    let directive = if paragraph.contains(CENTERED) {
        ParagraphDirective::Centered
    } else if paragraph.contains(FULL_INDENT) {
        ParagraphDirective::FullBlockIndent
    } else if paragraph.contains(NO_INDENT) {
        ParagraphDirective::JustifiedNoIndent
    } else {
        ParagraphDirective::JustifiedIndented
    };

    let text = paragraph
        .replace(CENTERED, "")
        .replace(FULL_INDENT, "")
        .replace(NO_INDENT, "");

    Paragraph {
        directive,
        runs: scan_runs(&text),
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = text;

    while let Some((at, tag)) = INLINE_TAGS
        .iter()
        .filter_map(|&tag| rest.find(tag.literal()).map(|at| (at, tag)))
        .min_by_key(|&(at, _)| at)
    {
        if at > 0 {
            tokens.push(Token::Text(&rest[..at]));
        }
        tokens.push(Token::Tag(tag));
        rest = &rest[at + tag.literal().len()..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }
    tokens
}

/// Accumulates text under the current style and cuts a run at every style change.
#[derive(Default)]
struct RunBuilder {
    runs: Vec<StyledRun>,
    pending: String,
    bold: bool,
    highlight: bool,
}

impl RunBuilder {
    fn flush(&mut self) {
        if !self.pending.is_empty() {
            self.runs.push(StyledRun {
                text: std::mem::take(&mut self.pending),
                bold: self.bold,
                highlight: self.highlight,
            });
        }
    }

    fn restyle(&mut self, bold: bool, highlight: bool) {
        self.flush();
        self.bold = bold;
        self.highlight = highlight;
    }
}

fn scan_runs(text: &str) -> Vec<StyledRun> {
    let mut builder = RunBuilder::default();

    for token in tokenize(text) {
        match token {
            Token::Text(t) => builder.pending.push_str(t),
            // A new bold or plain region resets highlighting.
            Token::Tag(InlineTag::BoldOpen) => builder.restyle(true, false),
            Token::Tag(InlineTag::BoldClose) if builder.bold => builder.restyle(false, false),
            Token::Tag(InlineTag::HighlightOpen) => builder.restyle(builder.bold, true),
            Token::Tag(InlineTag::HighlightClose) if builder.highlight => {
                builder.restyle(builder.bold, false)
            }
            Token::Tag(stray) => builder.pending.push_str(stray.literal()),
        }
    }

    builder.flush();
    builder.runs
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
