use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::models::{AdminStats, MerchantStats};
use crate::utils::validate_file_size;

/// Load admin dashboard aggregates from a JSON document
pub fn load_admin_stats(path: &Path) -> Result<AdminStats> {
    load_stats(path, "admin")
}

/// Load merchant dashboard aggregates from a JSON document
pub fn load_merchant_stats(path: &Path) -> Result<MerchantStats> {
    load_stats(path, "merchant")
}

fn load_stats<T: DeserializeOwned>(path: &Path, kind: &str) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} stats file: {}", kind, path.display()))?;
    validate_file_size(&file, path)?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {} stats file: {}", kind, path.display()))
}
