use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

/// Error type for data-directory I/O.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Shortest token the save form accepts.
pub const MIN_TOKEN_LEN: usize = 10;

/// The platform token plus when it was saved. Persisted as token.json.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredToken {
    pub token: String,
    pub added: DateTime<Utc>,
}

pub fn token_path(data_dir: &Path) -> PathBuf {
    data_dir.join("token.json")
}

/// Surface-level token check applied before saving.
pub fn token_is_valid(token: &str) -> bool {
    token.chars().count() >= MIN_TOKEN_LEN
}

/// Read the stored token. Missing or malformed files read as absent.
pub fn load_token(data_dir: &Path) -> Option<StoredToken> {
    let content = fs::read_to_string(token_path(data_dir)).ok()?;
    serde_json::from_str(&content).ok()
}

/// Persist the token, stamping it with the current time.
pub fn save_token(data_dir: &Path, token: &str) -> Result<StoredToken, StoreError> {
    fs::create_dir_all(data_dir)?;
    let stored = StoredToken {
        token: token.to_string(),
        added: Utc::now(),
    };
    let content = serde_json::to_string_pretty(&stored)?;
    atomic_write(&token_path(data_dir), content.as_bytes())?;
    Ok(stored)
}

/// Remove the stored token. Returns whether a file was actually deleted.
pub fn delete_token(data_dir: &Path) -> Result<bool, StoreError> {
    match fs::remove_file(token_path(data_dir)) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
