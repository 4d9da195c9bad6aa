//! Page style — document-wide font, spacing and geometry of a petition.

use serde::{Deserialize, Serialize};

/// Twentieths of a point per centimetre (1 in = 1440 twips = 2.54 cm).
const TWIPS_PER_CM: f32 = 1440.0 / 2.54;

/// Global style applied to every petition.
///
/// Lengths are in centimetres and converted to the units Word expects
/// (twips for geometry, half-points for font size, 240ths of a line for spacing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageStyle {
    pub font_family: String,
    pub font_size_pt: f32,
    /// Multiple of single line spacing.
    pub line_spacing: f32,
    /// Same margin on all four sides.
    pub margin_cm: f32,
    /// First-line indent of ordinary justified paragraphs.
    pub first_line_indent_cm: f32,
    /// Left indent of full-block (quotation) paragraphs.
    pub block_indent_cm: f32,
    /// Word highlight colour name used for `[LARANJA]` spans.
    pub highlight_color: String,
}

/// Returns the petition house style.
///
/// Calibri 11.5pt, 1.15 line spacing, 2.5 cm margins, 4 cm indents and the
/// `red` highlight (Word highlight index 6).
pub fn default_page_style() -> PageStyle {
    PageStyle {
        font_family: "Calibri".to_string(),
        font_size_pt: 11.5,
        line_spacing: 1.15,
        margin_cm: 2.5,
        first_line_indent_cm: 4.0,
        block_indent_cm: 4.0,
        highlight_color: "red".to_string(),
    }
}

impl Default for PageStyle {
    fn default() -> Self {
        default_page_style()
    }
}

impl PageStyle {
    pub fn margin_twips(&self) -> i32 {
        cm_to_twips(self.margin_cm)
    }

    pub fn first_line_indent_twips(&self) -> i32 {
        cm_to_twips(self.first_line_indent_cm)
    }

    pub fn block_indent_twips(&self) -> i32 {
        cm_to_twips(self.block_indent_cm)
    }

    pub fn font_size_half_points(&self) -> usize {
        (self.font_size_pt * 2.0).round() as usize
    }

    /// Line spacing in 240ths of a line (`w:spacing w:line` with auto rule).
    pub fn line_spacing_240ths(&self) -> i32 {
        (self.line_spacing * 240.0).round() as i32
    }
}

pub fn cm_to_twips(cm: f32) -> i32 {
    (cm * TWIPS_PER_CM).round() as i32
}
