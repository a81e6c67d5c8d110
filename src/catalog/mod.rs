//! Listing retrieval for the marketplace screen
//!
//! # Error Handling Strategy
//!
//! Catalog loading follows a **graceful degradation** approach:
//!
//! - **Individual line failures**: Malformed JSON lines are logged as warnings and
//!   skipped, so one bad record does not hide the whole catalog. Lines that are not
//!   valid UTF-8 count as malformed; a leading byte order mark is ignored.
//!
//! - **Required fields**: A record missing `id` or `price` cannot become a
//!   [`Listing`] and is skipped at load, so it is absent from every filter result,
//!   including `all` with an empty search. Missing `name`, `storeName` or `category`
//!   still loads and only affects matching.
//!
//! - **Catastrophic failure detection**: If >50% of lines fail to parse, or if >100
//!   consecutive errors occur, loading fails. A mostly broken file is a fetch failure,
//!   not an empty catalog.
//!
//! - **Size guard**: Catalog files larger than 10MB are rejected before reading.
//!
//! The filter engine never sees a load error: callers get either a complete
//! [`CatalogSnapshot`] or an `anyhow::Error` describing the fetch failure.

pub mod parser;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::models::Listing;
pub use parser::{parse_catalog_file, parse_catalog_reader};

/// Immutable listing set produced by one load cycle
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub listings: Vec<Listing>,
    pub fetched_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings, fetched_at: Utc::now() }
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Anything that can deliver the full, ordered listing set for the current catalog view
pub trait ListingSource {
    fn fetch(&self) -> Result<CatalogSnapshot>;
}

/// JSON Lines catalog on disk, one listing object per line
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListingSource for CatalogFile {
    fn fetch(&self) -> Result<CatalogSnapshot> {
        let listings = parse_catalog_file(&self.path)?;
        Ok(CatalogSnapshot::new(listings))
    }
}

/// In-memory listings, handy for callers that already hold the data
impl ListingSource for Vec<Listing> {
    fn fetch(&self) -> Result<CatalogSnapshot> {
        Ok(CatalogSnapshot::new(self.clone()))
    }
}
