use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only a malformed `PORT` is an error.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the `blocoN_*.txt` fragment files.
    pub blocks_dir: PathBuf,
    /// Primary directory for generated documents.
    pub output_dir: PathBuf,
    /// Written to when the primary directory is not writable.
    pub fallback_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            blocks_dir: env_or("BLOCKS_DIR", "blocos").into(),
            output_dir: env_or("OUTPUT_DIR", "saidas").into(),
            fallback_dir: env_or("FALLBACK_DIR", ".").into(),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
