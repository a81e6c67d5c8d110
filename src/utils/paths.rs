use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size for catalog and stats files: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Validates that a file is within size limits
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use marketplace_filter::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/.marketplace/catalog.jsonl");
/// // Returns "~/.marketplace/catalog.jsonl" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    if let Some(home) = home.filter(|h| !h.is_empty())
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_format_path_with_tilde() {
        let path = PathBuf::from("/Users/alice/.marketplace/catalog.jsonl");
        assert_eq!(
            format_path_with_tilde_internal(&path, Some("/Users/alice")),
            "~/.marketplace/catalog.jsonl"
        );
        assert_eq!(
            format_path_with_tilde_internal(&path, Some("/Users/bob")),
            "/Users/alice/.marketplace/catalog.jsonl"
        );
    }

    #[test]
    fn test_format_path_with_tilde_matches_whole_components() {
        let path = PathBuf::from("/Users/alice/.marketplace/catalog.jsonl");
        assert_eq!(
            format_path_with_tilde_internal(&path, Some("/Users/al")),
            "/Users/alice/.marketplace/catalog.jsonl"
        );
        assert_eq!(
            format_path_with_tilde_internal(&path, Some("/Users/alice/")),
            "~/.marketplace/catalog.jsonl"
        );
        assert_eq!(
            format_path_with_tilde_internal(Path::new("/Users/alice"), Some("/Users/alice")),
            "~"
        );
    }

    #[test]
    fn test_validate_small_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{}}").unwrap();
        let handle = File::open(file.path()).unwrap();
        assert!(validate_file_size(&handle, file.path()).is_ok());
    }

    #[test]
    fn test_validate_oversized_file() {
        let file = NamedTempFile::new().unwrap();
        file.as_file().set_len(MAX_FILE_SIZE_BYTES + 1).unwrap();
        let handle = File::open(file.path()).unwrap();
        let err = validate_file_size(&handle, file.path()).unwrap_err();
        assert!(err.to_string().contains("File too large"));
    }
}
