//! A single menu entry as loaded from the catalog file.
//!
//! Records are created once when the catalog is parsed and never change
//! afterwards. The cart holds them behind an `Arc`, so the catalog and every
//! cart line share the same allocation.
//!
//! See [`parse`](crate::catalog::parse) for how rows map onto these fields.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for dishes (the catalog's item code).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DishId(pub String);

impl From<&str> for DishId {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for DishId {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the menu. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishRecord {
    pub id: DishId,
    pub category: String,
    pub name: String,
    pub description: String,
    /// Free-text dietary tags, e.g. `"vegetarian-friendly"`.
    pub dietary_tags: String,
    /// String-encoded integer; `"0"` means not spicy.
    pub spice_level: String,
    pub price: u32,
}

impl DishRecord {
    /// Creates a new DishRecord with empty description and tags, and no spice.
    ///
    /// # Arguments
    /// * `id` - Item code, unique across the catalog
    /// * `category` - Category the dish is listed under
    /// * `name` - Display name
    /// * `price` - Unit price in whole currency units
    pub fn new(
        id: impl Into<DishId>,
        category: impl Into<String>,
        name: impl Into<String>,
        price: u32,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            name: name.into(),
            description: String::new(),
            dietary_tags: String::new(),
            spice_level: "0".to_string(),
            price,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_dietary_tags(mut self, tags: impl Into<String>) -> Self {
        self.dietary_tags = tags.into();
        self
    }

    pub fn with_spice_level(mut self, level: impl Into<String>) -> Self {
        self.spice_level = level.into();
        self
    }

    /// Numeric spice level. Anything that is not a small integer reads as 0.
    pub fn spice_level(&self) -> u8 {
        self.spice_level.trim().parse().unwrap_or(0)
    }

    pub fn is_spicy(&self) -> bool {
        self.spice_level() > 0
    }
}
