//! Quality distribution of harvested crops
//!
//! Each step consumes the already-clamped value of the step before it, so the
//! derivation order is part of the formula.

use crate::models::QualityDistribution;

/// Fertilizer quality level from which iridium quality can appear
pub const IRIDIUM_QUALITY_LEVEL: u8 = 3;

/// Probability of each quality tier for a fertilizer quality level and farming level.
///
/// Total over its inputs. All four tiers stay within [0, 1] and sum to 1.
pub fn compute_quality_distribution(fertilizer_level: u8, farming_level: f64) -> QualityDistribution {
    let level = f64::from(fertilizer_level);

    let gold_base =
        0.2 * (farming_level / 10.0) + 0.2 * level * ((farming_level + 2.0) / 12.0) + 0.01;

    let iridium = if fertilizer_level >= IRIDIUM_QUALITY_LEVEL {
        (gold_base / 2.0).clamp(0.0, 1.0)
    } else {
        0.0
    };

    // Gold excludes the iridium share and can never push the total past 1
    let gold = if gold_base > 0.0 {
        (gold_base * (1.0 - iridium / gold_base)).clamp(0.0, 1.0 - iridium)
    } else {
        0.0
    };

    let silver = (gold_base * 2.0).min(0.75).max(0.0) * (1.0 - gold - iridium);
    let silver = silver.max(0.0);

    let normal = (1.0 - silver - gold - iridium).max(0.0);

    QualityDistribution {
        normal,
        silver,
        gold,
        iridium,
    }
}
