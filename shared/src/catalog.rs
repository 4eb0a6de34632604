//! Catalog entry consulted when a meal is added to the draft

use serde::{Deserialize, Serialize};

/// Current catalog data for one meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogMeal {
    pub meal_id: String,
    pub name: String,
    /// Price per serving
    pub price: f64,
    /// Whether the meal can currently be ordered
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl CatalogMeal {
    pub fn new(meal_id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            meal_id: meal_id.into(),
            name: name.into(),
            price,
            is_available: true,
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }
}
