//! Text blocks — loads the `blocoN_*.txt` fragments a petition is built from.
//!
//! A missing fragment never aborts assembly: `fetch` substitutes a visible
//! sentinel so the gap shows up in the generated document. Any other read
//! failure (permissions, invalid UTF-8) is a real I/O error.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::warn;

use crate::errors::AppError;

/// Identifier of a fragment, e.g. `bloco3_plano_unimed.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockKey(String);

impl BlockKey {
    /// Builds `bloco{number}_{slot}[_{suffix}].txt`.
    pub fn new(number: u8, slot: &str, suffix: Option<&str>) -> Self {
        match suffix {
            Some(suffix) => BlockKey(format!("bloco{number}_{slot}_{suffix}.txt")),
            None => BlockKey(format!("bloco{number}_{slot}.txt")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visible text standing in for a fragment that does not exist.
pub fn missing_sentinel(key: &BlockKey) -> String {
    format!("⚠️ [Arquivo ausente: {key}]")
}

/// Source of fragment text. Implementations are read-only and shared across requests.
pub trait BlockStore: Send + Sync {
    /// Returns the fragment content, or `None` when no fragment exists under `key`.
    fn load(&self, key: &BlockKey) -> Result<Option<String>, AppError>;

    /// Returns the fragment content, or the missing-fragment sentinel.
    fn fetch(&self, key: &BlockKey) -> Result<String, AppError> {
        match self.load(key)? {
            Some(text) => Ok(text),
            None => {
                warn!("Fragment not found: {key}");
                Ok(missing_sentinel(key))
            }
        }
    }
}

/// Fragments stored as one UTF-8 text file per key in a directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl BlockStore for DirectoryStore {
    fn load(&self, key: &BlockKey) -> Result<Option<String>, AppError> {
        let path = self.root.join(key.as_str());
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(normalize(&text))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

/// Fragment text as stored: CRLF folded to LF, surrounding whitespace trimmed.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").trim().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory store for tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub use memory::MemoryStore;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_key_format() {
        assert_eq!(BlockKey::new(1, "comarca", None).as_str(), "bloco1_comarca.txt");
        assert_eq!(
            BlockKey::new(10, "urgencia", Some("clinica")).as_str(),
            "bloco10_urgencia_clinica.txt"
        );
    }

    #[test]
    fn test_directory_store_trims_content() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bloco8_cdc.txt"), "\n  Código de Defesa do Consumidor.\r\n\r\n").unwrap();

        let store = DirectoryStore::new(dir.path());
        let text = store.fetch(&BlockKey::new(8, "cdc", None)).unwrap();
        assert_eq!(text, "Código de Defesa do Consumidor.");
    }

    #[test]
    fn test_directory_store_folds_crlf() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bloco6_fatos.txt"), "Primeiro.\r\n\r\nSegundo.").unwrap();

        let store = DirectoryStore::new(dir.path());
        let text = store.fetch(&BlockKey::new(6, "fatos", None)).unwrap();
        assert_eq!(text, "Primeiro.\n\nSegundo.");
    }

    #[test]
    fn test_missing_fragment_yields_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        let key = BlockKey::new(3, "plano", Some("amil"));

        assert_eq!(store.load(&key).unwrap(), None);
        let text = store.fetch(&key).unwrap();
        assert_eq!(text, "⚠️ [Arquivo ausente: bloco3_plano_amil.txt]");
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bloco8_cdc.txt"), [0xff, 0xfe, 0x00]).unwrap();

        let store = DirectoryStore::new(dir.path());
        let result = store.fetch(&BlockKey::new(8, "cdc", None));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_memory_store_records_lookups() {
        let store = MemoryStore::default().with("bloco8_cdc.txt", "CDC");
        store.fetch(&BlockKey::new(8, "cdc", None)).unwrap();
        store.fetch(&BlockKey::new(6, "fatos", None)).unwrap();
        assert_eq!(store.lookups(), vec!["bloco8_cdc.txt", "bloco6_fatos.txt"]);
    }
}
