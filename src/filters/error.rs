use thiserror::Error;

use crate::models::UnknownCategory;

/// Errors raised by the filter engine
///
/// Only the criteria can be invalid. Listing content never produces an error; records
/// with missing fields just fail to match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error(
        "Invalid filter criteria: unknown category '{category}' (valid categories: all, food, clothing, electronics, home, beauty)"
    )]
    InvalidCriteria { category: String },
}

impl From<UnknownCategory> for FilterError {
    fn from(err: UnknownCategory) -> Self {
        FilterError::InvalidCriteria { category: err.0 }
    }
}
