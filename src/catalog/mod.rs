//! # Dish Catalog
//!
//! Loads the menu once at startup and answers read-only queries over it.
//!
//! ## Structure
//!
//! - [`parser`] - CSV text to [`DishRecord`]s
//! - [`query`] - category listing and filtering
//! - [`source`] - the [`CatalogSource`] fetch boundary
//! - [`error`] - [`CatalogError`]
//!
//! ## Failing soft
//!
//! A catalog that cannot be fetched is not an error for anyone downstream.
//! [`load_catalog`] logs the failure and hands back an empty [`Catalog`], which
//! still lists the synthetic vegetarian category:
//!
//! ```rust
//! use diner_order::catalog::{load_catalog, FileSource};
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = load_catalog(&FileSource::new("does/not/exist.csv")).await;
//!     assert!(catalog.is_empty());
//!     assert_eq!(catalog.categories().len(), 1);
//! }
//! ```

pub mod error;
pub mod parser;
pub mod query;
pub mod source;

pub use error::*;
pub use parser::parse;
pub use query::{by_category, categories_of, combo_meals, is_vegetarian};
pub use source::*;

use crate::model::{Category, DishId, DishRecord};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// The loaded menu. Cheap to clone; dishes are shared with the cart.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dishes: Vec<Arc<DishRecord>>,
}

impl Catalog {
    pub fn new(dishes: Vec<DishRecord>) -> Self {
        Self {
            dishes: dishes.into_iter().map(Arc::new).collect(),
        }
    }

    /// Parses catalog text directly.
    pub fn from_text(raw: &str) -> Self {
        Self::new(parse(raw))
    }

    pub fn dishes(&self) -> &[Arc<DishRecord>] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Looks a dish up by item code.
    pub fn get(&self, id: &DishId) -> Option<Arc<DishRecord>> {
        self.dishes.iter().find(|dish| dish.id == *id).cloned()
    }

    pub fn categories(&self) -> Vec<Category> {
        categories_of(self)
    }

    pub fn by_category(&self, name: &str) -> Vec<Arc<DishRecord>> {
        by_category(self, name)
    }
}

/// Fetches and parses the catalog, surfacing fetch failures.
pub async fn try_load_catalog(source: &dyn CatalogSource) -> Result<Catalog, CatalogError> {
    let text = source.fetch().await?;
    Ok(Catalog::from_text(&text))
}

/// Fetches and parses the catalog. Any failure yields an empty catalog.
#[instrument(skip(source))]
pub async fn load_catalog(source: &dyn CatalogSource) -> Catalog {
    match try_load_catalog(source).await {
        Ok(catalog) => {
            info!(dishes = catalog.len(), "Catalog loaded");
            catalog
        }
        Err(e) => {
            error!(error = %e, "Catalog load failed, continuing with an empty menu");
            Catalog::default()
        }
    }
}
