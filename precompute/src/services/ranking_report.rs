//! Seasonal ranking report generation
//! Ranks every in-season crop for each season, fertilizer and sell method

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{
    CostInclusion, CropCatalog, FertilizerKind, GrowingSeason, ProfessionFlags, ProfitReport,
    Scenario, SellMethod,
};

use crate::config::ScenarioConfig;
use crate::error::{AppError, AppResult};

/// Scenario fields held constant across the whole report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDefaults {
    pub plots: u32,
    pub start_day: u32,
    pub costs: CostInclusion,
    pub professions: ProfessionFlags,
}

impl ScenarioDefaults {
    pub fn scenario(
        &self,
        season: GrowingSeason,
        fertilizer: FertilizerKind,
        sell_method: SellMethod,
    ) -> Scenario {
        Scenario {
            season,
            plots: self.plots,
            start_day: self.start_day,
            fertilizer,
            sell_method,
            costs: self.costs,
            professions: self.professions,
        }
    }
}

impl Default for ScenarioDefaults {
    fn default() -> Self {
        let scenario = Scenario::default();
        Self {
            plots: scenario.plots,
            start_day: scenario.start_day,
            costs: scenario.costs,
            professions: scenario.professions,
        }
    }
}

impl From<&ScenarioConfig> for ScenarioDefaults {
    fn from(config: &ScenarioConfig) -> Self {
        Self {
            plots: config.plots,
            start_day: config.start_day,
            costs: config.costs(),
            professions: config.professions(),
        }
    }
}

/// Full precomputed ranking table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub generated_at: DateTime<Utc>,
    pub scenario_defaults: ScenarioDefaults,
    pub entries: Vec<RankingEntry>,
}

/// Ranking for one season, fertilizer and sell method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingEntry {
    pub season: GrowingSeason,
    pub fertilizer: FertilizerKind,
    pub sell_method: SellMethod,
    pub ranked: Vec<RankedCrop>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedCrop {
    /// 1-based position in the ranking
    pub rank: usize,
    pub crop_id: String,
    pub profit_per_day: f64,
    pub net_profit: i64,
    pub harvests: u32,
}

impl RankedCrop {
    fn from_report(rank: usize, report: &ProfitReport) -> Self {
        Self {
            rank,
            crop_id: report.crop_id.clone(),
            profit_per_day: report.profit_per_day,
            net_profit: report.net_profit,
            harvests: report.harvests,
        }
    }
}

/// Ranking report service
pub struct RankingReportService {
    catalog: CropCatalog,
    defaults: ScenarioDefaults,
    top_n: usize,
}

impl RankingReportService {
    pub fn new(catalog: CropCatalog, defaults: ScenarioDefaults, top_n: usize) -> AppResult<Self> {
        if top_n == 0 {
            return Err(AppError::InvalidConfiguration(
                "output.top_n must be at least 1".to_string(),
            ));
        }
        // Reject bad plot counts or start days before running any simulation
        defaults
            .scenario(GrowingSeason::default(), FertilizerKind::None, SellMethod::Raw)
            .validated()?;
        Ok(Self {
            catalog,
            defaults,
            top_n,
        })
    }

    /// Load the crop dataset from a JSON file, or the bundled dataset
    pub fn load_catalog(path: Option<&Path>) -> AppResult<CropCatalog> {
        match path {
            Some(path) => {
                tracing::info!("Loading crop dataset from {}", path.display());
                let json = std::fs::read_to_string(path)?;
                Ok(CropCatalog::from_json(&json)?)
            }
            None => {
                tracing::info!("Using bundled crop dataset");
                Ok(CropCatalog::builtin()?)
            }
        }
    }

    /// Rank one season, fertilizer and sell method combination
    pub fn rank_entry(
        &self,
        season: GrowingSeason,
        fertilizer: FertilizerKind,
        sell_method: SellMethod,
    ) -> RankingEntry {
        let scenario = self.defaults.scenario(season, fertilizer, sell_method);
        let ranked = self
            .catalog
            .rank(&scenario)
            .iter()
            .take(self.top_n)
            .enumerate()
            .map(|(i, report)| RankedCrop::from_report(i + 1, report))
            .collect();

        RankingEntry {
            season,
            fertilizer,
            sell_method,
            ranked,
        }
    }

    /// Rank every combination in a fixed order: season, then fertilizer,
    /// then sell method
    pub fn generate(&self) -> RankingReport {
        let mut entries = Vec::new();

        for season in GrowingSeason::ALL {
            if self.catalog.in_season(season).is_empty() {
                tracing::warn!(%season, "No crops grow in this season");
            }

            let before = entries.len();
            for fertilizer in FertilizerKind::ALL {
                for sell_method in SellMethod::ALL {
                    let entry = self.rank_entry(season, fertilizer, sell_method);
                    if entry.ranked.is_empty() {
                        tracing::debug!(%season, %fertilizer, %sell_method, "Empty ranking");
                    }
                    entries.push(entry);
                }
            }

            let season_entries = &entries[before..];
            let empty = season_entries.iter().filter(|e| e.ranked.is_empty()).count();
            let best = season_entries
                .iter()
                .filter_map(|e| e.ranked.first())
                .max_by(|a, b| a.profit_per_day.total_cmp(&b.profit_per_day));
            match best {
                Some(best) => tracing::info!(
                    %season,
                    entries = season_entries.len(),
                    empty,
                    best_crop = %best.crop_id,
                    best_profit_per_day = best.profit_per_day,
                    "Season ranked"
                ),
                None => tracing::warn!(%season, "No crop can be harvested in this season"),
            }
        }

        RankingReport {
            generated_at: Utc::now(),
            scenario_defaults: self.defaults,
            entries,
        }
    }

    pub fn to_json(report: &RankingReport, pretty: bool) -> AppResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}
