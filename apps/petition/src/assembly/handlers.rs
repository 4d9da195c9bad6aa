//! Axum route handlers for the Petition API.

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Serialize;

use crate::assembly::assembler::{assemble, generate_petition};
use crate::errors::AppError;
use crate::layout::parse_document;
use crate::models::case::{
    CaseForm, DemandType, DenialType, FreeJustice, HealthPlan, Priority, RequestType, UrgencyType,
};
use crate::models::document::Paragraph;
use crate::render::{ascii_file_name, output_file_name, persist, DOCX_MIME};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub options: BTreeMap<&'static str, Vec<&'static str>>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub file_name: String,
    pub fragments: Vec<String>,
    pub assembled_text: String,
    pub paragraphs: Vec<Paragraph>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/options
///
/// Closed vocabulary of every categorical form field.
pub async fn handle_options() -> Json<OptionsResponse> {
    let options = BTreeMap::from([
        (HealthPlan::FIELD, HealthPlan::vocabulary()),
        (Priority::FIELD, Priority::vocabulary()),
        (FreeJustice::FIELD, FreeJustice::vocabulary()),
        (DenialType::FIELD, DenialType::vocabulary()),
        (DemandType::FIELD, DemandType::vocabulary()),
        (UrgencyType::FIELD, UrgencyType::vocabulary()),
        (RequestType::FIELD, RequestType::vocabulary()),
    ]);

    Json(OptionsResponse { options })
}

/// POST /api/v1/petitions
///
/// Validates the form, generates the petition, writes it to the output
/// directory and streams it back as a download.
pub async fn handle_generate(
    State(state): State<AppState>,
    form: Result<Form<CaseForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    let case = form.into_case()?;

    let petition = tokio::task::spawn_blocking(move || {
        let petition = generate_petition(&case, state.store.as_ref(), &state.page_style)?;
        persist(&petition.bytes, &petition.file_name, state.destination.as_ref())?;
        Ok::<_, AppError>(petition)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        ascii_file_name(&petition.file_name)
    ))
    .map_err(|e| AppError::Internal(e.into()))?;

    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static(DOCX_MIME)),
        (header::CONTENT_DISPOSITION, disposition),
    ];

    Ok((headers, petition.bytes).into_response())
}

/// POST /api/v1/petitions/preview
///
/// Same pipeline up to markup interpretation; nothing is rendered or written.
pub async fn handle_preview(
    State(state): State<AppState>,
    form: Result<Form<CaseForm>, FormRejection>,
) -> Result<Json<PreviewResponse>, AppError> {
    let Form(form) = form?;
    let case = form.into_case()?;

    let response = tokio::task::spawn_blocking(move || {
        let assembly = assemble(&case, state.store.as_ref())?;
        let paragraphs = parse_document(&assembly.text);
        Ok::<_, AppError>(PreviewResponse {
            file_name: output_file_name(&case),
            fragments: assembly.keys.iter().map(|k| k.to_string()).collect(),
            assembled_text: assembly.text,
            paragraphs,
        })
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    Ok(Json(response))
}
