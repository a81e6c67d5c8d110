use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel accepted by the category selector to disable category filtering
pub const ALL_SENTINEL: &str = "all";

/// Product categories supported by the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Clothing,
    Electronics,
    Home,
    Beauty,
}

impl Category {
    /// Every category, in selector order
    pub const ALL: [Category; 5] =
        [Category::Food, Category::Clothing, Category::Electronics, Category::Home, Category::Beauty];

    /// Identifier as it appears in listing data
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Clothing => "clothing",
            Category::Electronics => "electronics",
            Category::Home => "home",
            Category::Beauty => "beauty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

/// Exact, case-sensitive match against the category identifiers
impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Category selector state: everything, or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
}

impl CategorySelection {
    /// Selector entries, `All` first
    pub fn options() -> Vec<CategorySelection> {
        std::iter::once(CategorySelection::All)
            .chain(Category::ALL.into_iter().map(CategorySelection::Only))
            .collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategorySelection::All => ALL_SENTINEL,
            CategorySelection::Only(category) => category.as_str(),
        }
    }

    /// Whether a raw listing category passes this selection. Listings without a
    /// category only pass `All`.
    pub fn matches(&self, listing_category: Option<&str>) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(category) => listing_category == Some(category.as_str()),
        }
    }
}

impl FromStr for CategorySelection {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            return Ok(CategorySelection::All);
        }
        s.parse().map(CategorySelection::Only)
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
