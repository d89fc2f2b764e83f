//! Read-only queries over a loaded [`Catalog`].

use super::Catalog;
use crate::model::{Category, ComboMeal, DishRecord, COMBO_CATEGORY, VEGETARIAN_CATEGORY};
use std::sync::Arc;

/// Any of these in a dish's dietary tags puts it in the vegetarian category.
/// The list overlaps on purpose; the match is a plain case-sensitive substring test.
pub const VEGETARIAN_MARKERS: [&str; 3] = ["vegetarian", "vegan", "veg"];

const COMBO_MEALS: [ComboMeal; 4] = [
    ComboMeal { id: "single", name: "Set for one", icon: "👤" },
    ComboMeal { id: "double", name: "Set for two", icon: "👥" },
    ComboMeal { id: "triple", name: "Set for three", icon: "👨‍👩‍👧" },
    ComboMeal { id: "quad", name: "Set for four", icon: "👨‍👩‍👧‍👦" },
];

/// Distinct categories in first-seen order, followed by the synthetic
/// vegetarian category. The vegetarian entry is present even for an empty catalog.
pub fn categories_of(catalog: &Catalog) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for dish in catalog.dishes() {
        if dish.category.is_empty() || categories.iter().any(|c| c.name == dish.category) {
            continue;
        }
        categories.push(Category::from_data(dish.category.clone()));
    }
    categories.push(Category::vegetarian());
    categories
}

/// Dishes listed under `name`.
///
/// The vegetarian category matches on dietary tags instead of the category
/// column, and the set-meal category never matches a regular dish.
pub fn by_category(catalog: &Catalog, name: &str) -> Vec<Arc<DishRecord>> {
    match name {
        COMBO_CATEGORY => Vec::new(),
        VEGETARIAN_CATEGORY => catalog
            .dishes()
            .iter()
            .filter(|dish| is_vegetarian(dish))
            .cloned()
            .collect(),
        _ => catalog
            .dishes()
            .iter()
            .filter(|dish| dish.category == name)
            .cloned()
            .collect(),
    }
}

pub fn is_vegetarian(dish: &DishRecord) -> bool {
    VEGETARIAN_MARKERS
        .iter()
        .any(|marker| dish.dietary_tags.contains(marker))
}

/// The fixed set-meal lineup.
pub fn combo_meals() -> &'static [ComboMeal] {
    &COMBO_MEALS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DishId;

    fn sample() -> Catalog {
        Catalog::new(vec![
            DishRecord::new("A1", "Mains", "Braised Pork Rice", 120).with_dietary_tags("meat"),
            DishRecord::new("B1", "Sides", "Tofu Salad", 80)
                .with_dietary_tags("vegetarian-friendly"),
            DishRecord::new("A2", "Mains", "Mushroom Noodles", 150).with_dietary_tags("vegan"),
            DishRecord::new("C1", "Drinks", "Black Tea", 40),
        ])
    }

    #[test]
    fn test_categories_first_seen_order_with_trailing_vegetarian() {
        let names: Vec<String> = categories_of(&sample())
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Mains", "Sides", "Drinks", VEGETARIAN_CATEGORY]);

        let flags: Vec<bool> = categories_of(&sample())
            .iter()
            .map(Category::is_vegetarian)
            .collect();
        assert_eq!(flags, vec![false, false, false, true]);
    }

    #[test]
    fn test_categories_of_empty_catalog() {
        assert_eq!(categories_of(&Catalog::default()), vec![Category::vegetarian()]);
    }

    #[test]
    fn test_by_category_exact_match() {
        let ids: Vec<DishId> = by_category(&sample(), "Mains")
            .iter()
            .map(|d| d.id.clone())
            .collect();
        assert_eq!(ids, vec![DishId::from("A1"), DishId::from("A2")]);
        assert!(by_category(&sample(), "mains").is_empty());
    }

    #[test]
    fn test_vegetarian_filter_uses_tags() {
        let catalog = Catalog::new(vec![
            DishRecord::new("V1", "Sides", "Greens", 60).with_dietary_tags("vegetarian-friendly"),
            DishRecord::new("M1", "Mains", "Steak", 400).with_dietary_tags("meat"),
        ]);
        let veg = by_category(&catalog, VEGETARIAN_CATEGORY);
        assert_eq!(veg.len(), 1);
        assert_eq!(veg[0].id, DishId::from("V1"));

        assert_eq!(by_category(&sample(), VEGETARIAN_CATEGORY).len(), 2);
    }

    #[test]
    fn test_combo_category_is_empty() {
        assert!(by_category(&sample(), COMBO_CATEGORY).is_empty());
        assert_eq!(combo_meals().len(), 4);
        assert_eq!(combo_meals()[0].id, "single");
    }
}
