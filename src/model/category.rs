//! Menu categories, including the synthetic vegetarian and set-meal entries.
use serde::{Deserialize, Serialize};

/// Name of the synthetic category that collects meat-free dishes across the menu.
pub const VEGETARIAN_CATEGORY: &str = "vegetarian";

/// Name of the set-meal category. Set meals are not regular dishes, so filtering
/// the catalog by this name yields nothing.
pub const COMBO_CATEGORY: &str = "set meals";

/// A menu category as shown in the category bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub display_name: String,
}

impl Category {
    /// A category taken verbatim from the catalog data.
    pub fn from_data(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
        }
    }

    pub fn vegetarian() -> Self {
        Self {
            name: VEGETARIAN_CATEGORY.to_string(),
            display_name: "Vegetarian".to_string(),
        }
    }

    pub fn is_vegetarian(&self) -> bool {
        self.name == VEGETARIAN_CATEGORY
    }
}

/// A fixed set meal offered alongside the regular menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComboMeal {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}
