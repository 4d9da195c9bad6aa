//! Output destination — where generated petitions are written.
//!
//! The renderer never decides directory layout itself; it asks a
//! `DestinationResolver`. A write failure in the primary directory is retried
//! once in the fallback directory before it becomes an error.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::case::CaseInput;

/// Longest claimant or venue component kept in a file name, in characters.
const MAX_NAME_COMPONENT: usize = 60;

/// Resolves the directories a petition may be written to.
pub trait DestinationResolver: Send + Sync {
    fn primary_dir(&self) -> PathBuf;
    fn fallback_dir(&self) -> PathBuf;
}

/// Configured output directory, falling back to the current working directory.
#[derive(Debug, Clone)]
pub struct OutputDirs {
    primary: PathBuf,
    fallback: PathBuf,
}

impl OutputDirs {
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            fallback: PathBuf::from("."),
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<PathBuf>) -> Self {
        self.fallback = fallback.into();
        self
    }
}

impl DestinationResolver for OutputDirs {
    fn primary_dir(&self) -> PathBuf {
        self.primary.clone()
    }

    fn fallback_dir(&self) -> PathBuf {
        self.fallback.clone()
    }
}

/// Writes `bytes` as `file_name`, returning the path actually written.
pub fn persist(
    bytes: &[u8],
    file_name: &str,
    resolver: &dyn DestinationResolver,
) -> Result<PathBuf, AppError> {
    let primary = resolver.primary_dir().join(file_name);
    match write_file(&primary, bytes) {
        Ok(()) => {
            info!("Petition written to {}", primary.display());
            Ok(primary)
        }
        Err(e) => {
            let fallback = resolver.fallback_dir().join(file_name);
            warn!(
                "Could not write {} ({e}); falling back to {}",
                primary.display(),
                fallback.display()
            );
            write_file(&fallback, bytes)?;
            info!("Petition written to {}", fallback.display());
            Ok(fallback)
        }
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)
}

/// `Peticao_{claimant}_{venue}.docx`, safe to use as a file name.
pub fn output_file_name(case: &CaseInput) -> String {
    format!(
        "Peticao_{}_{}.docx",
        sanitize_component(&case.claimant),
        sanitize_component(&case.venue)
    )
}

/// Whitespace runs become `_`; separators, reserved and control characters are dropped.
fn sanitize_component(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .filter(|c| !c.is_control())
        .take(MAX_NAME_COMPONENT)
        .collect()
}

/// ASCII-only variant for HTTP headers: non-ASCII characters become `_`.
pub fn ascii_file_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::case::CaseForm;

    fn make_case(claimant: &str, venue: &str) -> CaseInput {
        CaseForm {
            comarca: Some(venue.to_string()),
            requerente: Some(claimant.to_string()),
            plano: Some("amil".to_string()),
            doenca: Some("asma".to_string()),
            tipo_demanda: Some("outros".to_string()),
            pedido: Some("clinica".to_string()),
            ..CaseForm::default()
        }
        .into_case()
        .unwrap()
    }

    #[test]
    fn test_file_name_from_claimant_and_venue() {
        let case = make_case("JOÃO  SILVA", "São Paulo");
        assert_eq!(output_file_name(&case), "Peticao_JOÃO_SILVA_São_Paulo.docx");
    }

    #[test]
    fn test_file_name_strips_path_separators() {
        let case = make_case("A/B\\C: \"D\"", "x|y?");
        let name = output_file_name(&case);
        assert_eq!(name, "Peticao_ABC_D_xy.docx");
        assert!(!name.contains('/'));
    }

    #[test]
    fn test_file_name_components_truncated() {
        let long = "N".repeat(200);
        let case = make_case(&long, "Rio");
        let name = output_file_name(&case);
        assert_eq!(name, format!("Peticao_{}_Rio.docx", "N".repeat(MAX_NAME_COMPONENT)));
    }

    #[test]
    fn test_ascii_file_name() {
        assert_eq!(ascii_file_name("Peticao_JOÃO.docx"), "Peticao_JO_O.docx");
    }

    #[test]
    fn test_persist_to_primary_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = OutputDirs::new(dir.path().join("saidas"))
            .with_fallback(dir.path().join("fallback"));

        let path = persist(b"docx", "Peticao.docx", &resolver).unwrap();
        assert_eq!(path, dir.path().join("saidas").join("Peticao.docx"));
        assert_eq!(std::fs::read(&path).unwrap(), b"docx");
    }

    #[test]
    fn test_persist_falls_back_when_primary_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the primary directory should be.
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, b"").unwrap();
        let fallback = dir.path().join("fallback");
        let resolver = OutputDirs::new(blocked.join("saidas")).with_fallback(&fallback);

        let path = persist(b"docx", "Peticao.docx", &resolver).unwrap();
        assert_eq!(path, fallback.join("Peticao.docx"));
        assert_eq!(std::fs::read(&path).unwrap(), b"docx");
    }

    #[test]
    fn test_persist_fails_when_both_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, b"").unwrap();
        let resolver = OutputDirs::new(blocked.join("a")).with_fallback(blocked.join("b"));

        let result = persist(b"docx", "Peticao.docx", &resolver);
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
