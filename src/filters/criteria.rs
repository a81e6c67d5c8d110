use super::error::FilterError;
use crate::models::CategorySelection;
use crate::models::category::ALL_SENTINEL;

/// Transient selector state owned by the browsing screen
///
/// The category is kept as the raw identifier delivered by the selector and only
/// validated when the criteria is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: String,
    pub search_text: String,
}

impl FilterCriteria {
    pub fn new(category: impl Into<String>, search_text: impl Into<String>) -> Self {
        Self { category: category.into(), search_text: search_text.into() }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    /// Validated category selection
    pub fn selection(&self) -> Result<CategorySelection, FilterError> {
        Ok(self.category.parse::<CategorySelection>()?)
    }

    /// Lower-cased, trimmed search text, `None` when the text step should be skipped
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() { None } else { Some(trimmed.to_lowercase()) }
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(ALL_SENTINEL, "")
    }
}
