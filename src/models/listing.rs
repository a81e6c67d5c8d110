use serde::{Deserialize, Serialize};

use super::category::Category;

/// Product listing snapshot. `name`, `category` and `store_name` are optional so that
/// partially populated records still load; they simply never match a filter that
/// needs the missing field. `id` and `price` are required; records without them are
/// rejected by the catalog parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Listing {
    /// Parsed category, `None` when absent or not part of the enumeration
    pub fn category(&self) -> Option<Category> {
        self.category.as_deref().and_then(|c| c.parse().ok())
    }

    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Price shown to the buyer: the sale price when one is set
    pub fn display_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
