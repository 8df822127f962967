//! Crop quality tiers

use serde::{Deserialize, Serialize};

/// Quality grade of a harvested crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Normal,
    Silver,
    Gold,
    Iridium,
}

impl QualityTier {
    pub const ALL: [QualityTier; 4] = [
        QualityTier::Normal,
        QualityTier::Silver,
        QualityTier::Gold,
        QualityTier::Iridium,
    ];

    /// Sell price multiplier over the crop's base price
    pub fn price_multiplier(&self) -> f64 {
        match self {
            QualityTier::Normal => 1.0,
            QualityTier::Silver => 1.25,
            QualityTier::Gold => 1.5,
            QualityTier::Iridium => 2.0,
        }
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityTier::Normal => write!(f, "Normal"),
            QualityTier::Silver => write!(f, "Silver"),
            QualityTier::Gold => write!(f, "Gold"),
            QualityTier::Iridium => write!(f, "Iridium"),
        }
    }
}

/// Probability of each quality tier for a single harvested item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct QualityDistribution {
    pub normal: f64,
    pub silver: f64,
    pub gold: f64,
    pub iridium: f64,
}

impl QualityDistribution {
    pub fn probability(&self, tier: QualityTier) -> f64 {
        match tier {
            QualityTier::Normal => self.normal,
            QualityTier::Silver => self.silver,
            QualityTier::Gold => self.gold,
            QualityTier::Iridium => self.iridium,
        }
    }

    pub fn sum(&self) -> f64 {
        self.normal + self.silver + self.gold + self.iridium
    }

    /// Expected price multiplier of one item
    pub fn average_multiplier(&self) -> f64 {
        QualityTier::ALL
            .iter()
            .map(|tier| self.probability(*tier) * tier.price_multiplier())
            .sum()
    }
}
