//! Core draft types shared between the store and its UI hosts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One (meal, delivery date) entry of the draft
///
/// `meal_name` and `unit_price` are copied from the catalog when the line is
/// first added and are never refreshed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Catalog meal identifier
    pub meal_id: String,
    /// Display name captured at add time
    pub meal_name: String,
    /// Delivery date (no time component)
    pub date: NaiveDate,
    /// Servings, always >= 1 once stored
    pub quantity: i32,
    /// Price per serving captured at add time
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(
        meal_id: impl Into<String>,
        meal_name: impl Into<String>,
        date: NaiveDate,
        quantity: i32,
        unit_price: f64,
    ) -> Self {
        Self {
            meal_id: meal_id.into(),
            meal_name: meal_name.into(),
            date,
            quantity,
            unit_price,
        }
    }

    /// Composite identity of this line
    pub fn key(&self) -> LineKey {
        LineKey::new(self.meal_id.clone(), self.date)
    }

    /// Whether this line belongs to `(meal_id, date)`
    pub fn matches(&self, meal_id: &str, date: NaiveDate) -> bool {
        self.meal_id == meal_id && self.date == date
    }
}

/// Composite key `(meal_id, date)`; unique within a draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineKey {
    pub meal_id: String,
    pub date: NaiveDate,
}

impl LineKey {
    pub fn new(meal_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            meal_id: meal_id.into(),
            date,
        }
    }
}

impl std::fmt::Display for LineKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.meal_id, self.date)
    }
}

/// Command response returned to the UI layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Error details if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String) -> Self {
        Self {
            command_id,
            success: true,
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            error: Some(error),
        }
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes (the UI is responsible for localization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    InvalidQuantity,
    InvalidPrice,
    InvalidItem,
    MealNotFound,
    MealUnavailable,
    PersistenceUnavailable,
    InternalError,
}
