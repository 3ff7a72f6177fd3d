use std::fs;
use std::io;
use std::path::Path;

use crate::io::token_io::StoreError;
use crate::model::config::AppConfig;

/// Read config.toml from the data directory. A missing file yields the
/// default config; a present but unparseable file is an error.
pub fn load_config(data_dir: &Path) -> Result<AppConfig, StoreError> {
    let path = data_dir.join("config.toml");
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => return Err(StoreError::ReadError { path, source: e }),
    };
    Ok(toml::from_str(&text)?)
}
