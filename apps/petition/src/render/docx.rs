//! DOCX renderer — maps parsed paragraphs onto WordprocessingML via `docx-rs`.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, LineSpacing, PageMargin, Paragraph as DocxParagraph, Run,
    RunFonts, SpecialIndentType,
};

use crate::errors::AppError;
use crate::layout::PageStyle;
use crate::models::document::{Paragraph, ParagraphDirective, StyledRun};

/// MIME type of the generated document.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Builds the document: global font and margins, then one DOCX paragraph per parsed paragraph.
pub fn render(paragraphs: &[Paragraph], style: &PageStyle) -> Docx {
    let margin = style.margin_twips();
    let fonts = RunFonts::new()
        .ascii(&style.font_family)
        .hi_ansi(&style.font_family)
        .east_asia(&style.font_family)
        .cs(&style.font_family);

    paragraphs.iter().fold(
        Docx::new()
            .default_fonts(fonts)
            .default_size(style.font_size_half_points())
            .page_margin(
                PageMargin::new()
                    .top(margin)
                    .bottom(margin)
                    .left(margin)
                    .right(margin),
            ),
        |docx, paragraph| docx.add_paragraph(render_paragraph(paragraph, style)),
    )
}

/// Packs the document into `.docx` bytes.
pub fn to_bytes(docx: Docx) -> Result<Vec<u8>, AppError> {
    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| AppError::Render(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn render_paragraph(paragraph: &Paragraph, style: &PageStyle) -> DocxParagraph {
    if paragraph.directive == ParagraphDirective::BlankSpacer {
        return DocxParagraph::new();
    }

    let base = DocxParagraph::new()
        .line_spacing(LineSpacing::new().line(style.line_spacing_240ths()));

    let base = match paragraph.directive {
        ParagraphDirective::Centered => base.align(AlignmentType::Center),
        ParagraphDirective::FullBlockIndent => base.align(AlignmentType::Both).indent(
            Some(style.block_indent_twips()),
            Some(SpecialIndentType::FirstLine(0)),
            None,
            None,
        ),
        ParagraphDirective::JustifiedNoIndent => base.align(AlignmentType::Both).indent(
            None,
            Some(SpecialIndentType::FirstLine(0)),
            None,
            None,
        ),
        ParagraphDirective::JustifiedIndented | ParagraphDirective::BlankSpacer => {
            base.align(AlignmentType::Both).indent(
                None,
                Some(SpecialIndentType::FirstLine(style.first_line_indent_twips())),
                None,
                None,
            )
        }
    };

    paragraph
        .runs
        .iter()
        .fold(base, |p, run| p.add_run(render_run(run, style)))
}

/// Newlines inside a run become line breaks and tabs become tab stops.
fn render_run(styled: &StyledRun, style: &PageStyle) -> Run {
    let mut run = Run::new();

    for (i, line) in styled.text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        for (j, piece) in line.split('\t').enumerate() {
            if j > 0 {
                run = run.add_tab();
            }
            if !piece.is_empty() {
                run = run.add_text(piece);
            }
        }
    }

    if styled.bold {
        run = run.bold();
    }
    if styled.highlight {
        run = run.highlight(&style.highlight_color);
    }
    run
}
