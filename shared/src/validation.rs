//! Validation utilities for the Crop Profit Calculator
//!
//! The simulator trusts its inputs. Crop data is checked when a catalog is
//! loaded and scenarios are checked at the caller boundary.

use thiserror::Error;

use crate::engine::IRIDIUM_QUALITY_LEVEL;
use crate::models::{Crop, ProcessedProduct};

/// Scenario rejected at the boundary
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Invalid scenario: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

// ============================================================================
// Crop Data Validations
// ============================================================================

/// Validate a crop descriptor from the static dataset
pub fn validate_crop(crop: &Crop) -> Result<(), &'static str> {
    if crop.id.trim().is_empty() {
        return Err("Crop id must not be empty");
    }
    if crop.seasons.is_empty() {
        return Err("Crop must list at least one growing season");
    }
    if crop.growth_days == 0 {
        return Err("Growth time must be at least 1 day");
    }
    if crop.regrow_days == Some(0) {
        return Err("Regrowth time must be at least 1 day");
    }
    if crop.base_price < 0 {
        return Err("Base price cannot be negative");
    }
    if crop.seed_price.is_some_and(|price| price < 0) {
        return Err("Seed price cannot be negative");
    }
    if crop.yield_per_harvest == Some(0) {
        return Err("Yield per harvest must be at least 1");
    }
    for product in crop.processing.products() {
        validate_processed_product(product)?;
    }
    Ok(())
}

/// Validate an artisan good entry
pub fn validate_processed_product(product: &ProcessedProduct) -> Result<(), &'static str> {
    if product.price < 0 {
        return Err("Processed price cannot be negative");
    }
    if product.inputs_per_output == 0 {
        return Err("Processing must consume at least one crop");
    }
    if matches!(&product.product_name, Some(name) if name.trim().is_empty()) {
        return Err("Product name must not be blank");
    }
    Ok(())
}

// ============================================================================
// Quality Input Validations
// ============================================================================

/// Validate a fertilizer quality level (0-3)
pub fn validate_quality_level(level: u8) -> Result<(), &'static str> {
    if level > IRIDIUM_QUALITY_LEVEL {
        return Err("Fertilizer quality level must be between 0 and 3");
    }
    Ok(())
}

/// Validate a farming skill level
pub fn validate_farming_level(level: f64) -> Result<(), &'static str> {
    if !level.is_finite() {
        return Err("Farming level must be a number");
    }
    if level < 0.0 {
        return Err("Farming level cannot be negative");
    }
    Ok(())
}
