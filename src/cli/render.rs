//! Plain-text rendering for the CLI
//!
//! Category labels and icons are presentation metadata and live here rather than on
//! the domain types.

use crate::models::{Category, CategorySelection, Listing};

const CURRENCY: &str = "SAR";

pub fn category_label(selection: CategorySelection) -> &'static str {
    match selection {
        CategorySelection::All => "All",
        CategorySelection::Only(Category::Food) => "Food",
        CategorySelection::Only(Category::Clothing) => "Clothing",
        CategorySelection::Only(Category::Electronics) => "Electronics",
        CategorySelection::Only(Category::Home) => "Home",
        CategorySelection::Only(Category::Beauty) => "Beauty",
    }
}

pub fn category_icon(selection: CategorySelection) -> &'static str {
    match selection {
        CategorySelection::All => "grid",
        CategorySelection::Only(Category::Food) => "fast-food",
        CategorySelection::Only(Category::Clothing) => "shirt",
        CategorySelection::Only(Category::Electronics) => "phone-portrait",
        CategorySelection::Only(Category::Home) => "home",
        CategorySelection::Only(Category::Beauty) => "flower",
    }
}

/// Whole amounts print without decimals
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0} {}", amount, CURRENCY)
    } else {
        format!("{:.2} {}", amount, CURRENCY)
    }
}

pub fn format_listing(listing: &Listing) -> String {
    let name = listing.name.as_deref().unwrap_or("(unnamed)");
    let store = listing.store_name.as_deref().unwrap_or("(unknown store)");

    let mut line = format!(
        "[{}] {} | {} | {}",
        listing.id,
        name,
        store,
        format_price(listing.display_price())
    );
    if listing.is_on_sale() {
        line.push_str(&format!(" (sale, was {})", format_price(listing.price)));
    }
    line
}

pub fn format_category_option(selection: CategorySelection, count: Option<usize>) -> String {
    let line = format!(
        "{:<12} {:<12} {}",
        selection.as_str(),
        category_label(selection),
        category_icon(selection)
    );
    match count {
        Some(count) => format!("{:<42} {}", line, count),
        None => line,
    }
}
