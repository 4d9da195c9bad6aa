use std::sync::Arc;

use crate::assembly::store::BlockStore;
use crate::layout::PageStyle;
use crate::render::DestinationResolver;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only fragment source shared by every request.
    pub store: Arc<dyn BlockStore>,
    /// Where generated petitions are written (primary, then fallback).
    pub destination: Arc<dyn DestinationResolver>,
    pub page_style: PageStyle,
}
