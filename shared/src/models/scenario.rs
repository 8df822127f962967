//! Player scenario models

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{FertilizerKind, ProcessingMethod};
use crate::types::GrowingSeason;
use crate::validation::ScenarioError;

/// Tiller: raw crops sell for 10% more
pub const TILLER_PRICE_BONUS: f64 = 1.1;
/// Artisan: artisan goods sell for 40% more
pub const ARTISAN_PRICE_BONUS: f64 = 1.4;
/// Agriculturist: crops grow 10% faster, stacking with speed fertilizers
pub const AGRICULTURIST_SPEED_BONUS: f64 = 0.1;
/// Lowest growth time multiplier reachable with the agriculturist bonus
pub const MIN_GROWTH_MULTIPLIER: f64 = 0.1;

/// Upper bound on plots accepted from callers
pub const MAX_PLOTS: u32 = 10_000;

/// How the harvest is sold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SellMethod {
    #[default]
    Raw,
    Keg,
    PreservesJar,
}

impl SellMethod {
    pub const ALL: [SellMethod; 3] = [SellMethod::Raw, SellMethod::Keg, SellMethod::PreservesJar];

    pub fn processing_method(&self) -> Option<ProcessingMethod> {
        match self {
            SellMethod::Raw => None,
            SellMethod::Keg => Some(ProcessingMethod::Keg),
            SellMethod::PreservesJar => Some(ProcessingMethod::PreservesJar),
        }
    }
}

impl From<ProcessingMethod> for SellMethod {
    fn from(method: ProcessingMethod) -> Self {
        match method {
            ProcessingMethod::Keg => SellMethod::Keg,
            ProcessingMethod::PreservesJar => SellMethod::PreservesJar,
        }
    }
}

impl std::fmt::Display for SellMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.processing_method() {
            Some(method) => write!(f, "{}", method),
            None => write!(f, "Raw"),
        }
    }
}

/// Profession bonuses applied uniformly to every crop in a scenario
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ProfessionFlags {
    /// +10% raw crop price
    pub tiller: bool,
    /// +40% artisan good price
    pub artisan: bool,
    /// +10% growth speed
    pub agriculturist: bool,
}

/// Which costs are subtracted from revenue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CostInclusion {
    pub seeds: bool,
    pub fertilizer: bool,
}

impl Default for CostInclusion {
    fn default() -> Self {
        Self {
            seeds: true,
            fertilizer: true,
        }
    }
}

/// Player conditions a crop is simulated under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Validate)]
pub struct Scenario {
    #[serde(default)]
    pub season: GrowingSeason,
    #[validate(range(min = 1, max = 10000))]
    pub plots: u32,
    /// Day of the season the crop is planted (1-28)
    #[validate(range(min = 1, max = 28))]
    pub start_day: u32,
    #[serde(default)]
    pub fertilizer: FertilizerKind,
    #[serde(default)]
    pub sell_method: SellMethod,
    #[serde(default)]
    pub costs: CostInclusion,
    #[serde(default)]
    pub professions: ProfessionFlags,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            season: GrowingSeason::Spring,
            plots: 1,
            start_day: 1,
            fertilizer: FertilizerKind::None,
            sell_method: SellMethod::Raw,
            costs: CostInclusion::default(),
            professions: ProfessionFlags::default(),
        }
    }
}

impl Scenario {
    /// Validate caller input before it reaches the simulator
    pub fn validated(self) -> Result<Self, ScenarioError> {
        self.validate()?;
        Ok(self)
    }
}
