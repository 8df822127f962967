//! Simulation result models

use serde::{Deserialize, Serialize};

use super::ProcessingMethod;
use crate::types::Gold;

/// Yield, revenue, cost and profit breakdown of one crop under one scenario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfitReport {
    pub crop_id: String,
    pub crop_name: String,
    pub plots: u32,
    pub harvests: u32,
    pub total_yield: u64,
    /// Per-item price after quality, processing and profession modifiers, floored
    pub unit_price: Gold,
    pub gross_revenue: Gold,
    pub seed_cost: Gold,
    pub fertilizer_cost: Gold,
    pub total_cost: Gold,
    pub net_profit: Gold,
    pub profit_per_plot: f64,
    /// Net profit over the whole available window, not just the days used
    pub profit_per_day: f64,
    pub available_days: u32,
    pub effective_growth_days: u32,
    pub pricing: PricingSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing: Option<ProcessingInfo>,
    /// Set when not even one harvest fits in the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortfall: Option<DayShortfall>,
}

impl ProfitReport {
    pub fn is_productive(&self) -> bool {
        self.harvests > 0
    }

    /// Note explaining a processing fallback, if any
    pub fn fallback_note(&self) -> Option<&str> {
        match &self.pricing {
            PricingSource::FallbackToRaw { note, .. } => Some(note),
            _ => None,
        }
    }
}

/// Where the unit price came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PricingSource {
    /// Sold raw at the quality-weighted average price
    Raw,
    /// Sold as an artisan good
    Processed,
    /// Processing was requested but the crop has no product for it
    FallbackToRaw {
        requested: ProcessingMethod,
        note: String,
    },
    /// No harvest, nothing was priced
    Unpriced,
}

/// Artisan good details for processed pricing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessingInfo {
    pub method: ProcessingMethod,
    pub product_name: String,
    pub duration_days: u32,
    pub inputs_per_output: u32,
}

/// How far the first harvest overshoots the available window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayShortfall {
    pub first_harvest_day: i64,
    pub last_day: i64,
    pub days_short: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_source_tagging() {
        let json = serde_json::to_value(PricingSource::FallbackToRaw {
            requested: ProcessingMethod::Keg,
            note: "no keg product".into(),
        })
        .unwrap();
        assert_eq!(json["source"], "fallback_to_raw");
        assert_eq!(json["requested"], "keg");

        let raw = serde_json::to_value(PricingSource::Raw).unwrap();
        assert_eq!(raw["source"], "raw");
    }
}
