use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{info, warn};

use crate::models::Listing;
use crate::utils::validate_file_size;

const MAX_CONSECUTIVE_ERRORS: usize = 100;
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse a JSON Lines catalog file into listings, in file order
/// Gracefully handles malformed lines by logging and skipping them
/// Returns an error if more than 50% of lines fail to parse or >100 consecutive errors
pub fn parse_catalog_file(path: &Path) -> Result<Vec<Listing>> {
    // Open file and validate size to avoid TOCTOU race condition
    let file = File::open(path)
        .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    parse_catalog_reader(BufReader::new(file))
}

/// Parse catalog lines from any buffered reader
///
/// Lines are read as raw bytes: a line that is not valid UTF-8 counts as malformed
/// like any other. Only an I/O failure of the reader itself aborts. A leading UTF-8
/// byte order mark on the first line is ignored.
pub fn parse_catalog_reader<R: BufRead>(mut reader: R) -> Result<Vec<Listing>> {
    let mut listings = Vec::new();
    let mut tally = LineTally::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read =
            reader.read_until(b'\n', &mut buf).context("Failed to read from catalog file")?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let mut bytes = strip_line_ending(&buf);
        if line_no == 1 {
            bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        }

        let text = match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tally.reject(line_no, format_args!("invalid UTF-8 ({})", e))?;
                continue;
            }
        };

        if text.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Listing>(text) {
            Ok(listing) => {
                tally.accept();
                listings.push(listing);
            }
            Err(e) => tally.reject(line_no, e)?,
        }
    }

    tally.check_failure_rate()?;

    if tally.skipped > 0 {
        info!("Parsed catalog file: {} listings ({} skipped)", listings.len(), tally.skipped);
    }

    Ok(listings)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Running count of accepted and rejected non-blank lines
#[derive(Debug, Default)]
struct LineTally {
    total: usize,
    skipped: usize,
    consecutive_errors: usize,
}

impl LineTally {
    fn accept(&mut self) {
        self.total += 1;
        self.consecutive_errors = 0;
    }

    /// Log and count a malformed line, failing once the consecutive limit is hit
    fn reject(&mut self, line_no: usize, reason: impl fmt::Display) -> Result<()> {
        warn!("Failed to parse line {} in catalog file: {}", line_no, reason);
        self.total += 1;
        self.skipped += 1;
        self.consecutive_errors += 1;

        if self.consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
            bail!(
                "Too many consecutive parse errors ({}) in catalog file - file may be corrupted",
                self.consecutive_errors
            );
        }
        Ok(())
    }

    fn check_failure_rate(&self) -> Result<()> {
        if self.total == 0 {
            return Ok(());
        }
        let failure_rate = (self.skipped as f64) / (self.total as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many parse failures in catalog file: {} of {} lines failed ({:.1}%)",
                self.skipped,
                self.total,
                failure_rate * 100.0
            );
        }
        Ok(())
    }
}
