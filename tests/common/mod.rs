//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use marketplace_filter::Listing;
use serde_json::json;
use tempfile::TempDir;

pub const CATALOG_FILE: &str = "catalog.jsonl";

/// Builder for test marketplace data directories
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write catalog.jsonl with the given raw content
    pub fn with_catalog(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(CATALOG_FILE), content)
            .expect("Failed to write catalog.jsonl");
        self
    }

    /// Write catalog.jsonl from listing builders, one per line
    pub fn with_listings(self, listings: &[ListingBuilder]) -> Self {
        let content = listings.iter().map(|l| l.to_json()).collect::<Vec<_>>().join("\n");
        self.with_catalog(&content)
    }

    /// Write a stats JSON document under the given file name
    pub fn with_stats(self, file_name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(file_name), content)
            .expect("Failed to write stats file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn catalog_path(dir: &TempDir) -> PathBuf {
    dir.path().join(CATALOG_FILE)
}

/// Builder for catalog listings
#[derive(Clone)]
pub struct ListingBuilder {
    id: String,
    name: Option<String>,
    category: Option<String>,
    price: f64,
    sale_price: Option<f64>,
    store_name: Option<String>,
    images: Vec<String>,
}

impl ListingBuilder {
    /// Create a listing with default values
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: Some("Test product".to_string()),
            category: Some("home".to_string()),
            price: 100.0,
            sale_price: None,
            store_name: Some("Test Store".to_string()),
            images: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn uncategorized(mut self) -> Self {
        self.category = None;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn sale_price(mut self, sale_price: f64) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    pub fn store(mut self, store_name: &str) -> Self {
        self.store_name = Some(store_name.to_string());
        self
    }

    pub fn image(mut self, image: &str) -> Self {
        self.images.push(image.to_string());
        self
    }

    /// Build the in-memory listing
    pub fn build(&self) -> Listing {
        Listing {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price,
            sale_price: self.sale_price,
            store_name: self.store_name.clone(),
            images: self.images.clone(),
        }
    }

    /// Convert to a catalog line, omitting absent fields the way the API does
    pub fn to_json(&self) -> String {
        let mut value = json!({ "id": self.id, "price": self.price, "images": self.images });
        if let Some(name) = &self.name {
            value["name"] = json!(name);
        }
        if let Some(category) = &self.category {
            value["category"] = json!(category);
        }
        if let Some(sale_price) = self.sale_price {
            value["salePrice"] = json!(sale_price);
        }
        if let Some(store_name) = &self.store_name {
            value["storeName"] = json!(store_name);
        }
        value.to_string()
    }
}

/// The two-listing catalog used throughout the filter scenarios
pub fn lamp_and_shirt() -> Vec<ListingBuilder> {
    vec![
        ListingBuilder::new("1").name("Blue Lamp").category("home").store("HomeCo"),
        ListingBuilder::new("2").name("Red Shirt").category("clothing").store("Fashions"),
    ]
}

/// A mixed catalog covering every category plus an uncategorized listing
pub fn mixed_catalog() -> Vec<ListingBuilder> {
    vec![
        ListingBuilder::new("1").name("Blue Lamp").category("home").store("HomeCo"),
        ListingBuilder::new("2").name("Red Shirt").category("clothing").store("Fashions"),
        ListingBuilder::new("3").name("Dates Box").category("food").store("Red Sea Farms"),
        ListingBuilder::new("4").name("Phone Case").category("electronics").store("Gadgetry"),
        ListingBuilder::new("5").name("Rose Oil").category("beauty").store("Bloom"),
        ListingBuilder::new("6").name("red Scarf").category("clothing").store("Fashions"),
        ListingBuilder::new("7").name("Mystery Crate").uncategorized().store("Odds & Ends"),
        ListingBuilder::new("8").name("Desk Lamp").category("home").store("Lumen").sale_price(70.0),
    ]
}

pub fn build_all(builders: &[ListingBuilder]) -> Vec<Listing> {
    builders.iter().map(ListingBuilder::build).collect()
}
