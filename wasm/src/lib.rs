//! WebAssembly module for the Crop Profit Calculator
//!
//! Provides client-side computation for:
//! - Quality distribution tables
//! - Single crop profit simulation
//! - Seasonal crop rankings
//! - Fertilizer comparisons

use std::sync::OnceLock;

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::{compare_fertilizers, compute_quality_distribution, effective_growth_days, simulate, CropCatalog};

fn parse_scenario(scenario_json: &str) -> Result<Scenario, String> {
    let scenario: Scenario = serde_json::from_str(scenario_json)
        .map_err(|e| format!("Invalid scenario JSON: {}", e))?;
    scenario.validated().map_err(|e| e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to serialize result: {}", e))
}

static BUILTIN_CATALOG: OnceLock<Result<CropCatalog, String>> = OnceLock::new();

/// Bundled dataset, parsed and validated on first use
fn builtin_catalog() -> Result<&'static CropCatalog, String> {
    BUILTIN_CATALOG
        .get_or_init(|| CropCatalog::builtin().map_err(|e| e.to_string()))
        .as_ref()
        .map_err(Clone::clone)
}

fn quality_distribution_json(level: u8, farming_level: f64) -> Result<String, String> {
    validate_quality_level(level)?;
    validate_farming_level(farming_level)?;
    to_json(&compute_quality_distribution(level, farming_level))
}

fn simulate_crop_json(crop_json: &str, scenario_json: &str) -> Result<String, String> {
    let crop: Crop = serde_json::from_str(crop_json).map_err(|e| format!("Invalid crop JSON: {}", e))?;
    validate_crop(&crop)?;
    let scenario = parse_scenario(scenario_json)?;
    to_json(&simulate(&crop, &scenario))
}

fn simulate_builtin_crop_json(crop_id: &str, scenario_json: &str) -> Result<String, String> {
    let scenario = parse_scenario(scenario_json)?;
    let catalog = builtin_catalog()?;
    let crop = catalog.require(crop_id).map_err(|e| e.to_string())?;
    to_json(&simulate(crop, &scenario))
}

fn rank_builtin_crops_json(scenario_json: &str) -> Result<String, String> {
    let scenario = parse_scenario(scenario_json)?;
    to_json(&builtin_catalog()?.rank(&scenario))
}

fn compare_builtin_fertilizers_json(crop_id: &str, scenario_json: &str) -> Result<String, String> {
    let scenario = parse_scenario(scenario_json)?;
    let catalog = builtin_catalog()?;
    let crop = catalog.require(crop_id).map_err(|e| e.to_string())?;
    to_json(&compare_fertilizers(crop, &scenario))
}

fn effective_growth_for(growth_days: u32, fertilizer: &str, agriculturist: bool) -> Result<u32, String> {
    if growth_days == 0 {
        return Err("Growth time must be at least 1 day".to_string());
    }
    let kind: FertilizerKind = serde_json::from_value(serde_json::Value::String(fertilizer.to_string()))
        .map_err(|_| format!("Unknown fertilizer: {}", fertilizer))?;
    Ok(effective_growth_days(growth_days, kind.descriptor(), agriculturist))
}

/// Quality tier probabilities for a fertilizer level and farming level
#[wasm_bindgen]
pub fn quality_distribution(level: u8, farming_level: f64) -> Result<String, JsValue> {
    quality_distribution_json(level, farming_level).map_err(|e| JsValue::from_str(&e))
}

/// Simulate a caller-supplied crop
#[wasm_bindgen]
pub fn simulate_crop(crop_json: &str, scenario_json: &str) -> Result<String, JsValue> {
    simulate_crop_json(crop_json, scenario_json).map_err(|e| JsValue::from_str(&e))
}

/// Simulate a crop from the bundled dataset
#[wasm_bindgen]
pub fn simulate_builtin_crop(crop_id: &str, scenario_json: &str) -> Result<String, JsValue> {
    simulate_builtin_crop_json(crop_id, scenario_json).map_err(|e| JsValue::from_str(&e))
}

/// Rank the bundled crops for a scenario
#[wasm_bindgen]
pub fn rank_builtin_crops(scenario_json: &str) -> Result<String, JsValue> {
    rank_builtin_crops_json(scenario_json).map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen]
pub fn compare_builtin_fertilizers(crop_id: &str, scenario_json: &str) -> Result<String, JsValue> {
    compare_builtin_fertilizers_json(crop_id, scenario_json).map_err(|e| JsValue::from_str(&e))
}

/// Growth days after fertilizer and profession bonuses
#[wasm_bindgen]
pub fn effective_growth(growth_days: u32, fertilizer: &str, agriculturist: bool) -> Result<u32, JsValue> {
    effective_growth_for(growth_days, fertilizer, agriculturist).map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRING: &str = r#"{"season":"spring","plots":10,"start_day":1}"#;

    #[test]
    fn test_quality_distribution_json() {
        let json = quality_distribution_json(3, 10.0).unwrap();
        let dist: QualityDistribution = serde_json::from_str(&json).unwrap();
        assert!((dist.sum() - 1.0).abs() < 1e-9);
        assert!(dist.iridium > 0.0);
    }

    #[test]
    fn test_quality_distribution_rejects_bad_level() {
        assert!(quality_distribution_json(4, 10.0).is_err());
        assert!(quality_distribution_json(0, -2.0).is_err());
    }

    #[test]
    fn test_simulate_builtin_parsnip() {
        let json = simulate_builtin_crop_json("parsnip", SPRING).unwrap();
        let report: serde_json::Value = serde_json::from_str(&json).unwrap();
        // Days 4, 8, ..., 28
        assert_eq!(report["harvests"], 7);
        assert_eq!(report["crop_id"], "parsnip");
    }

    #[test]
    fn test_simulate_rejects_invalid_scenario() {
        let bad_day = r#"{"season":"spring","plots":10,"start_day":29}"#;
        assert!(simulate_builtin_crop_json("parsnip", bad_day).is_err());
        let no_plots = r#"{"season":"spring","plots":0,"start_day":1}"#;
        assert!(rank_builtin_crops_json(no_plots).is_err());
        assert!(rank_builtin_crops_json("not json").is_err());
    }

    #[test]
    fn test_simulate_unknown_crop() {
        let err = simulate_builtin_crop_json("dragonfruit", SPRING).unwrap_err();
        assert!(err.contains("dragonfruit"));
    }

    #[test]
    fn test_simulate_custom_crop() {
        let crop = r#"{"id":"x","name":"X","seasons":["spring"],"growth_days":14,"base_price":100}"#;
        let json = simulate_crop_json(crop, SPRING).unwrap();
        let report: ProfitReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.harvests, 2);

        let invalid = r#"{"id":"x","name":"X","seasons":["spring"],"growth_days":0,"base_price":100}"#;
        assert!(simulate_crop_json(invalid, SPRING).is_err());
    }

    #[test]
    fn test_rank_builtin_crops_sorted() {
        let json = rank_builtin_crops_json(SPRING).unwrap();
        let ranked: Vec<ProfitReport> = serde_json::from_str(&json).unwrap();
        assert!(!ranked.is_empty());
        for pair in ranked.windows(2) {
            assert!(pair[0].profit_per_day >= pair[1].profit_per_day);
        }
    }

    #[test]
    fn test_compare_builtin_fertilizers() {
        let json = compare_builtin_fertilizers_json("cauliflower", SPRING).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.len(), FertilizerKind::ALL.len());
    }

    #[test]
    fn test_builtin_catalog_is_parsed_once() {
        let first = builtin_catalog().unwrap();
        let second = builtin_catalog().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(first.get("parsnip").is_some());
    }

    #[test]
    fn test_effective_growth() {
        assert_eq!(effective_growth_for(10, "none", false).unwrap(), 10);
        assert_eq!(effective_growth_for(10, "speed_gro", false).unwrap(), 9);
        assert_eq!(effective_growth_for(10, "hyper_speed_gro", true).unwrap(), 5);
        assert!(effective_growth_for(10, "magic", false).is_err());
        assert!(effective_growth_for(0, "none", false).is_err());
    }
}
