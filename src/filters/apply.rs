use log::debug;

use super::criteria::FilterCriteria;
use super::error::FilterError;
use crate::models::{CategorySelection, Listing};

/// Derive the visible listings from the full snapshot and the current criteria
///
/// Filter logic:
/// - Category: `all` keeps everything, otherwise exact (case-sensitive) category match
/// - Search: trimmed, case-insensitive substring match on name OR store name;
///   blank search text skips this step
/// - Both steps must pass; input order is preserved
///
/// The category is validated before any listing is examined, so an unknown category
/// fails even when `listings` is empty.
pub fn apply(listings: &[Listing], criteria: &FilterCriteria) -> Result<Vec<Listing>, FilterError> {
    let selection = criteria.selection()?;
    let needle = criteria.search_needle();

    let filtered: Vec<Listing> = listings
        .iter()
        .filter(|listing| selection.matches(listing.category.as_deref()))
        .filter(|listing| needle.as_deref().is_none_or(|needle| matches_search(listing, needle)))
        .cloned()
        .collect();

    debug!(
        "Filtered {} listings to {} (category: {}, search: {:?})",
        listings.len(),
        filtered.len(),
        selection,
        needle.as_deref().unwrap_or("")
    );

    Ok(filtered)
}

/// Match an already lower-cased needle against name or store name
fn matches_search(listing: &Listing, needle: &str) -> bool {
    contains_folded(listing.name.as_deref(), needle)
        || contains_folded(listing.store_name.as_deref(), needle)
}

fn contains_folded(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}

/// Category-only pass, used when the caller needs per-category counts
pub fn count_in_category(listings: &[Listing], selection: CategorySelection) -> usize {
    listings.iter().filter(|listing| selection.matches(listing.category.as_deref())).count()
}
