//! Catalog lookup consulted when a meal is added by id
//!
//! The draft copies name and price out of the catalog at add time and never
//! looks them up again.

use parking_lot::RwLock;
use shared::CatalogMeal;
use std::collections::HashMap;

/// Source of current meal metadata
pub trait CatalogLookup: Send + Sync {
    fn meal(&self, meal_id: &str) -> Option<CatalogMeal>;
}

/// In-memory catalog, refreshed by the host when it fetches the menu
#[derive(Debug, Default)]
pub struct StaticCatalog {
    meals: RwLock<HashMap<String, CatalogMeal>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_meals(meals: impl IntoIterator<Item = CatalogMeal>) -> Self {
        let catalog = Self::new();
        catalog.replace_all(meals);
        catalog
    }

    /// Insert or replace one meal
    pub fn upsert(&self, meal: CatalogMeal) {
        self.meals.write().insert(meal.meal_id.clone(), meal);
    }

    /// Replace the whole menu
    pub fn replace_all(&self, meals: impl IntoIterator<Item = CatalogMeal>) {
        let fresh: HashMap<String, CatalogMeal> =
            meals.into_iter().map(|m| (m.meal_id.clone(), m)).collect();
        tracing::debug!(count = fresh.len(), "Catalog replaced");
        *self.meals.write() = fresh;
    }

    pub fn remove(&self, meal_id: &str) -> Option<CatalogMeal> {
        self.meals.write().remove(meal_id)
    }

    pub fn len(&self) -> usize {
        self.meals.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.read().is_empty()
    }
}

impl CatalogLookup for StaticCatalog {
    fn meal(&self, meal_id: &str) -> Option<CatalogMeal> {
        self.meals.read().get(meal_id).cloned()
    }
}
