//! Crop ranking and fertilizer comparison

use serde::Serialize;

use super::simulator::simulate;
use crate::models::{Crop, FertilizerKind, ProfitReport, Scenario};

/// Simulate every crop under the same scenario and rank the productive ones
/// by profit per day, highest first. Ties keep input order.
pub fn rank_crops<'a, I>(crops: I, scenario: &Scenario) -> Vec<ProfitReport>
where
    I: IntoIterator<Item = &'a Crop>,
{
    let mut reports: Vec<ProfitReport> = crops
        .into_iter()
        .map(|crop| simulate(crop, scenario))
        .filter(|report| report.is_productive())
        .collect();

    reports.sort_by(|a, b| b.profit_per_day.total_cmp(&a.profit_per_day));
    reports
}

/// Most profitable crop per day, if any crop can be harvested
pub fn best_crop<'a, I>(crops: I, scenario: &Scenario) -> Option<ProfitReport>
where
    I: IntoIterator<Item = &'a Crop>,
{
    rank_crops(crops, scenario).into_iter().next()
}

/// One row of a fertilizer comparison table
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FertilizerComparison {
    pub fertilizer: FertilizerKind,
    pub report: ProfitReport,
}

/// Simulate one crop under every fertilizer in the catalog.
///
/// Keeps non-productive rows so the table has one entry per fertilizer.
/// Productive rows come first, each group sorted by profit per day, highest
/// first.
pub fn compare_fertilizers(crop: &Crop, scenario: &Scenario) -> Vec<FertilizerComparison> {
    let mut rows: Vec<FertilizerComparison> = FertilizerKind::ALL
        .iter()
        .map(|&fertilizer| {
            let scenario = Scenario {
                fertilizer,
                ..*scenario
            };
            FertilizerComparison {
                fertilizer,
                report: simulate(crop, &scenario),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.report
            .is_productive()
            .cmp(&a.report.is_productive())
            .then_with(|| b.report.profit_per_day.total_cmp(&a.report.profit_per_day))
    });
    rows
}
