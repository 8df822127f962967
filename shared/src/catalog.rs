//! Static crop catalog
//!
//! Crop descriptors are loaded once, validated, and never mutated afterwards.

use std::collections::HashSet;

use thiserror::Error;

use crate::engine::rank_crops;
use crate::models::{Crop, ProfitReport, Scenario};
use crate::types::GrowingSeason;
use crate::validation::validate_crop;

static BUILTIN_CROPS_JSON: &str = include_str!("../data/crops.json");

/// Errors raised while loading crop data
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse crop data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid crop '{id}': {reason}")]
    InvalidCrop { id: String, reason: &'static str },

    #[error("Duplicate crop id: {0}")]
    DuplicateCrop(String),

    #[error("Unknown crop: {0}")]
    UnknownCrop(String),
}

/// Validated, read-only collection of crops in dataset order
#[derive(Debug, Clone, Default)]
pub struct CropCatalog {
    crops: Vec<Crop>,
}

impl CropCatalog {
    /// Parse a JSON array of crop descriptors
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let crops: Vec<Crop> = serde_json::from_str(json)?;
        Self::from_crops(crops)
    }

    pub fn from_crops(crops: Vec<Crop>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for crop in &crops {
            validate_crop(crop).map_err(|reason| CatalogError::InvalidCrop {
                id: crop.id.clone(),
                reason,
            })?;
            if !seen.insert(crop.id.as_str()) {
                return Err(CatalogError::DuplicateCrop(crop.id.clone()));
            }
        }
        tracing::debug!(crops = crops.len(), "loaded crop catalog");
        Ok(Self { crops })
    }

    /// The crop dataset bundled with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CROPS_JSON)
    }

    pub fn get(&self, id: &str) -> Option<&Crop> {
        self.crops.iter().find(|crop| crop.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&Crop, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownCrop(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Crop> {
        self.crops.iter()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    /// Crops that can be planted in the given context
    pub fn in_season(&self, season: GrowingSeason) -> Vec<&Crop> {
        self.crops.iter().filter(|crop| crop.grows_in(season)).collect()
    }

    /// Rank the crops that grow in the scenario's season
    pub fn rank(&self, scenario: &Scenario) -> Vec<ProfitReport> {
        rank_crops(self.in_season(scenario.season), scenario)
    }
}
