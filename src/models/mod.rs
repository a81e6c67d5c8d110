//! Data models for the marketplace catalog and dashboards.
//!
//! - [`Listing`] - A single product listing as delivered by the catalog
//! - [`Category`] / [`CategorySelection`] - The closed category enumeration and
//!   the selector state built on top of it
//! - [`AdminStats`] / [`MerchantStats`] - Dashboard aggregates
//!
//! Listings and stats deserialize from the camelCase JSON the commerce API emits.

pub mod category;
pub mod listing;
pub mod stats;

pub use category::{Category, CategorySelection, UnknownCategory};
pub use listing::Listing;
pub use stats::{AdminStats, MerchantStats};
