//! Petition assembly — orchestrates the full generation pipeline.
//!
//! Flow: select → fetch + substitute → join → parse markup → render DOCX.
//!
//! Synchronous and self-contained per request: the only shared resource is the
//! read-only `BlockStore`. Writing the result is left to the caller (see
//! `render::persist`), so previews and downloads share the same path.

use tracing::{debug, info};

use crate::assembly::placeholder::substitute;
use crate::assembly::selector::select;
use crate::assembly::store::{BlockKey, BlockStore};
use crate::errors::AppError;
use crate::layout::{parse_document, PageStyle, PARAGRAPH_SEPARATOR};
use crate::models::case::CaseInput;
use crate::models::document::Paragraph;
use crate::render::{output_file_name, render, to_bytes};

/// Marked-up petition text before interpretation.
#[derive(Debug, Clone)]
pub struct Assembly {
    /// Fragments used, in document order.
    pub keys: Vec<BlockKey>,
    pub text: String,
}

/// A rendered petition, ready to be streamed or written.
#[derive(Debug, Clone)]
pub struct Petition {
    pub file_name: String,
    pub paragraphs: Vec<Paragraph>,
    pub bytes: Vec<u8>,
}

/// Fetches the selected fragments, substitutes their placeholders and joins them
/// with blank lines.
pub fn assemble(case: &CaseInput, store: &dyn BlockStore) -> Result<Assembly, AppError> {
    let requests = select(case);
    debug!(
        "Selected fragments: {:?}",
        requests.iter().map(|r| r.key.as_str()).collect::<Vec<_>>()
    );

    let mut fragments = Vec::with_capacity(requests.len());
    for request in &requests {
        let fragment = store.fetch(&request.key)?;
        fragments.push(substitute(&fragment, &request.replacements));
    }

    Ok(Assembly {
        keys: requests.into_iter().map(|r| r.key).collect(),
        text: fragments.join(PARAGRAPH_SEPARATOR),
    })
}

/// Runs the whole pipeline and returns the DOCX bytes.
pub fn generate_petition(
    case: &CaseInput,
    store: &dyn BlockStore,
    style: &PageStyle,
) -> Result<Petition, AppError> {
    let assembly = assemble(case, store)?;
    let paragraphs = parse_document(&assembly.text);
    let bytes = to_bytes(render(&paragraphs, style))?;
    let file_name = output_file_name(case);

    info!(
        "Generated {} ({} fragments, {} paragraphs, {} bytes)",
        file_name,
        assembly.keys.len(),
        paragraphs.len(),
        bytes.len()
    );

    Ok(Petition {
        file_name,
        paragraphs,
        bytes,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
