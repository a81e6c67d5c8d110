//! Marketplace Filter - Browse and filter a commerce catalog
//!
//! This library provides the data side of the marketplace and dashboard screens:
//!
//! - Filtering a listing snapshot by category and free-text search
//! - Loading listing snapshots from JSON Lines catalog files
//! - Loading admin/merchant dashboard statistics and deriving alert banners
//!
//! # Example
//!
//! ```no_run
//! use marketplace_filter::{CatalogFile, FilterCriteria, ListingSource, apply};
//!
//! let snapshot = CatalogFile::new("catalog.jsonl").fetch()?;
//! let criteria = FilterCriteria::new("clothing", "shirt");
//! let visible = apply(&snapshot.listings, &criteria)?;
//! println!("{} products available", visible.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod dashboard;
pub mod filters;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use catalog::{CatalogFile, CatalogSnapshot, ListingSource, parse_catalog_file};
pub use filters::{FilterCriteria, FilterError, apply};
pub use models::{Category, CategorySelection, Listing};
