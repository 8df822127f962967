//! Crop descriptor models

use serde::{Deserialize, Serialize};

use crate::types::{Gold, GrowingSeason, Season};

/// A crop as described by the static crop dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Crop {
    pub id: String,
    pub name: String,
    pub seasons: Vec<Season>,
    /// Days from planting to the first harvest
    pub growth_days: u32,
    /// Days between harvests once mature. Present only for regrowing crops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regrow_days: Option<u32>,
    pub base_price: Gold,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_price: Option<Gold>,
    /// Items per harvest event (1 when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_per_harvest: Option<u32>,
    #[serde(default)]
    pub category: CropCategory,
    #[serde(default)]
    pub processing: ProcessingProfile,
}

impl Crop {
    pub fn regrows(&self) -> bool {
        self.regrow_days.is_some()
    }

    pub fn yield_per_harvest(&self) -> u32 {
        self.yield_per_harvest.unwrap_or(1)
    }

    /// Whether the crop can be planted in the given context.
    /// The greenhouse accepts every crop.
    pub fn grows_in(&self, season: GrowingSeason) -> bool {
        match season.season() {
            Some(outdoor) => self.seasons.contains(&outdoor),
            None => true,
        }
    }

    /// Display name of the artisan good this crop makes with `method`
    pub fn product_name(&self, method: ProcessingMethod) -> Option<String> {
        let product = self.processing.product(method)?;
        Some(match &product.product_name {
            Some(name) => name.clone(),
            None => format!("{} {}", self.name, method.product_label(self.category)),
        })
    }
}

/// Crop subcategory. Decides which artisan good a processing method yields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CropCategory {
    /// Kegs make wine, jars make jelly
    Fruit,
    /// Kegs make juice, jars make pickles
    Vegetable,
    Flower,
    #[default]
    Other,
}

/// Artisan equipment a harvest can be processed in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMethod {
    Keg,
    PreservesJar,
}

impl ProcessingMethod {
    pub const ALL: [ProcessingMethod; 2] = [ProcessingMethod::Keg, ProcessingMethod::PreservesJar];

    /// Generic product label for a crop category
    pub fn product_label(&self, category: CropCategory) -> &'static str {
        match (self, category) {
            (ProcessingMethod::Keg, CropCategory::Fruit) => "Wine",
            (ProcessingMethod::Keg, _) => "Juice",
            (ProcessingMethod::PreservesJar, CropCategory::Fruit) => "Jelly",
            (ProcessingMethod::PreservesJar, _) => "Pickles",
        }
    }
}

impl std::fmt::Display for ProcessingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingMethod::Keg => write!(f, "Keg"),
            ProcessingMethod::PreservesJar => write!(f, "Preserves Jar"),
        }
    }
}

/// Processed products a crop supports, one slot per processing method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProcessingProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keg: Option<ProcessedProduct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserves_jar: Option<ProcessedProduct>,
}

impl ProcessingProfile {
    pub fn product(&self, method: ProcessingMethod) -> Option<&ProcessedProduct> {
        match method {
            ProcessingMethod::Keg => self.keg.as_ref(),
            ProcessingMethod::PreservesJar => self.preserves_jar.as_ref(),
        }
    }

    pub fn products(&self) -> impl Iterator<Item = &ProcessedProduct> {
        self.keg.iter().chain(self.preserves_jar.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.keg.is_none() && self.preserves_jar.is_none()
    }
}

/// An artisan good made from a crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessedProduct {
    /// Sell price of one processed item
    pub price: Gold,
    pub duration_days: u32,
    /// Raw crops consumed per processed item (coffee takes 5 beans)
    #[serde(default = "default_inputs_per_output")]
    pub inputs_per_output: u32,
    /// Overrides the generic "<crop> Wine" style name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl ProcessedProduct {
    /// Processed value attributable to a single raw crop
    pub fn price_per_input(&self) -> f64 {
        self.price as f64 / f64::from(self.inputs_per_output.max(1))
    }
}

fn default_inputs_per_output() -> u32 {
    1
}
