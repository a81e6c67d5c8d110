use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "MARKETPLACE_DATA_DIR";

const CATALOG_FILE_NAME: &str = "catalog.jsonl";

/// Get the marketplace data directory ($MARKETPLACE_DATA_DIR, else ~/.marketplace)
pub fn get_data_dir() -> Result<PathBuf> {
    resolve_data_dir(env::var(DATA_DIR_ENV).ok().as_deref(), env::var("HOME").ok().as_deref())
}

/// Default catalog location inside the data directory
pub fn default_catalog_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(CATALOG_FILE_NAME))
}

pub(crate) fn resolve_data_dir(data_dir: Option<&str>, home: Option<&str>) -> Result<PathBuf> {
    if let Some(dir) = data_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = home.context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".marketplace"))
}
