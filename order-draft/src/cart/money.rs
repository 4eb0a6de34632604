//! Money calculation utilities using rust_decimal for precision
//!
//! Totals are computed with `Decimal`, then converted to `f64` for the
//! snapshot. Validation of line input lives here as well.

use super::traits::CartError;
use rust_decimal::prelude::*;
use shared::cart::{CartSnapshot, LineItem};

/// Monetary precision: prices are whole cents, totals are rounded half-up
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed price per serving
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed servings per line
pub const MAX_QUANTITY: i32 = 9999;

/// Validate a requested quantity (add or absolute update)
pub fn validate_quantity(quantity: i32) -> Result<(), CartError> {
    if quantity < 1 {
        return Err(CartError::InvalidQuantity(format!(
            "quantity must be at least 1, got {}",
            quantity
        )));
    }
    if quantity > MAX_QUANTITY {
        return Err(CartError::InvalidQuantity(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, quantity
        )));
    }
    Ok(())
}

/// Validate a line before it enters the draft
pub fn validate_line_item(item: &LineItem) -> Result<(), CartError> {
    if item.meal_id.trim().is_empty() {
        return Err(CartError::InvalidItem("meal_id must not be empty".to_string()));
    }

    validate_quantity(item.quantity)?;

    if !item.unit_price.is_finite() {
        return Err(CartError::InvalidPrice(format!(
            "unit_price must be a finite number, got {}",
            item.unit_price
        )));
    }
    if item.unit_price < 0.0 {
        return Err(CartError::InvalidPrice(format!(
            "unit_price must be non-negative, got {}",
            item.unit_price
        )));
    }
    if item.unit_price > MAX_PRICE {
        return Err(CartError::InvalidPrice(format!(
            "unit_price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, item.unit_price
        )));
    }
    if to_decimal(item.unit_price).normalize().scale() > DECIMAL_PLACES {
        return Err(CartError::InvalidPrice(format!(
            "unit_price must be in whole cents, got {}",
            item.unit_price
        )));
    }

    Ok(())
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// quantity * unit_price
pub fn calculate_line_total(item: &LineItem) -> Decimal {
    to_decimal(item.unit_price) * Decimal::from(item.quantity)
}

/// Recompute the derived totals of a snapshot from its lines
pub fn recalculate_totals(snapshot: &mut CartSnapshot) {
    let mut total_items: i64 = 0;
    let mut total_price = Decimal::ZERO;

    for item in &snapshot.items {
        total_items += i64::from(item.quantity);
        total_price += calculate_line_total(item);
    }

    snapshot.total_items = total_items;
    snapshot.total_price = to_f64(total_price);
}

/// Compare two monetary values within tolerance
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}
