//! Fertilizer catalog

use serde::{Deserialize, Serialize};

use crate::types::Gold;

/// Fertilizers a scenario can select
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum FertilizerKind {
    #[default]
    None,
    Basic,
    Quality,
    Deluxe,
    SpeedGro,
    DeluxeSpeedGro,
    HyperSpeedGro,
}

/// Static fertilizer descriptor
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Fertilizer {
    pub kind: FertilizerKind,
    pub name: &'static str,
    /// Fraction of growth time removed (0.0 for quality fertilizers)
    pub growth_bonus: f64,
    /// Quality bonus level 0-3. Level 3 unlocks iridium quality.
    pub quality_level: u8,
    /// Purchase cost per plot
    pub cost: Gold,
}

static FERTILIZERS: [Fertilizer; 7] = [
    Fertilizer {
        kind: FertilizerKind::None,
        name: "None",
        growth_bonus: 0.0,
        quality_level: 0,
        cost: 0,
    },
    Fertilizer {
        kind: FertilizerKind::Basic,
        name: "Basic Fertilizer",
        growth_bonus: 0.0,
        quality_level: 1,
        cost: 100,
    },
    Fertilizer {
        kind: FertilizerKind::Quality,
        name: "Quality Fertilizer",
        growth_bonus: 0.0,
        quality_level: 2,
        cost: 150,
    },
    Fertilizer {
        kind: FertilizerKind::Deluxe,
        name: "Deluxe Fertilizer",
        growth_bonus: 0.0,
        quality_level: 3,
        cost: 200,
    },
    Fertilizer {
        kind: FertilizerKind::SpeedGro,
        name: "Speed-Gro",
        growth_bonus: 0.10,
        quality_level: 0,
        cost: 100,
    },
    Fertilizer {
        kind: FertilizerKind::DeluxeSpeedGro,
        name: "Deluxe Speed-Gro",
        growth_bonus: 0.25,
        quality_level: 0,
        cost: 150,
    },
    Fertilizer {
        kind: FertilizerKind::HyperSpeedGro,
        name: "Hyper Speed-Gro",
        growth_bonus: 0.33,
        quality_level: 0,
        cost: 300,
    },
];

impl FertilizerKind {
    pub const ALL: [FertilizerKind; 7] = [
        FertilizerKind::None,
        FertilizerKind::Basic,
        FertilizerKind::Quality,
        FertilizerKind::Deluxe,
        FertilizerKind::SpeedGro,
        FertilizerKind::DeluxeSpeedGro,
        FertilizerKind::HyperSpeedGro,
    ];

    pub fn descriptor(self) -> &'static Fertilizer {
        let index = match self {
            FertilizerKind::None => 0,
            FertilizerKind::Basic => 1,
            FertilizerKind::Quality => 2,
            FertilizerKind::Deluxe => 3,
            FertilizerKind::SpeedGro => 4,
            FertilizerKind::DeluxeSpeedGro => 5,
            FertilizerKind::HyperSpeedGro => 6,
        };
        &FERTILIZERS[index]
    }
}

impl std::fmt::Display for FertilizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.descriptor().name)
    }
}
