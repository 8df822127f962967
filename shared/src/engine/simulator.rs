//! Crop profit simulation
//!
//! Simulates the harvest schedule of one crop over the available window,
//! prices the yield and subtracts seed and fertilizer costs. Pure: every call
//! builds a fresh report from its inputs.

use super::quality::compute_quality_distribution;
use crate::models::{
    Crop, DayShortfall, Fertilizer, PricingSource, ProcessingInfo, ProfitReport, Scenario,
    AGRICULTURIST_SPEED_BONUS, ARTISAN_PRICE_BONUS, MIN_GROWTH_MULTIPLIER, TILLER_PRICE_BONUS,
};
use crate::types::{Gold, GrowingSeason, REFERENCE_FARMING_LEVEL};

/// Harvest days of one planting within the available window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestSchedule {
    pub available_days: i64,
    pub last_day: i64,
    pub first_harvest_day: i64,
    pub harvest_days: Vec<i64>,
}

impl HarvestSchedule {
    pub fn harvests(&self) -> u32 {
        self.harvest_days.len() as u32
    }

    pub fn is_productive(&self) -> bool {
        !self.harvest_days.is_empty()
    }
}

/// Growth time after speed fertilizer and agriculturist bonuses, floored, at least 1 day
pub fn effective_growth_days(growth_days: u32, fertilizer: &Fertilizer, agriculturist: bool) -> u32 {
    let mut multiplier = if fertilizer.growth_bonus > 0.0 {
        1.0 - fertilizer.growth_bonus
    } else {
        1.0
    };
    if agriculturist {
        multiplier = (multiplier - AGRICULTURIST_SPEED_BONUS).max(MIN_GROWTH_MULTIPLIER);
    }

    let days = (f64::from(growth_days) * multiplier).floor();
    (days as u32).max(1)
}

/// Sequentially schedule harvests from `start_day` until the window closes.
///
/// Regrowing crops step by their regrow time after the first harvest. Other
/// crops are replanted and pay the full growth time for every harvest.
pub fn harvest_schedule(
    crop: &Crop,
    season: GrowingSeason,
    start_day: u32,
    effective_growth: u32,
) -> HarvestSchedule {
    let available_days = season.available_days(start_day);
    let start = i64::from(start_day);
    let last_day = start + available_days - 1;
    let first_harvest_day = start + i64::from(effective_growth) - 1;

    let mut harvest_days = Vec::new();
    if available_days > 0 && first_harvest_day <= last_day {
        let step = i64::from(crop.regrow_days.unwrap_or(effective_growth).max(1));
        let mut current = first_harvest_day;
        harvest_days.push(current);
        while current + step <= last_day {
            current += step;
            harvest_days.push(current);
        }
    }

    HarvestSchedule {
        available_days,
        last_day,
        first_harvest_day,
        harvest_days,
    }
}

/// Resolved unit price and where it came from
struct UnitPrice {
    price: Gold,
    source: PricingSource,
    processing: Option<ProcessingInfo>,
}

/// Quality-weighted average price of one raw crop
fn raw_average_price(crop: &Crop, fertilizer: &Fertilizer) -> f64 {
    let distribution = compute_quality_distribution(fertilizer.quality_level, REFERENCE_FARMING_LEVEL);
    crop.base_price as f64 * distribution.average_multiplier()
}

fn resolve_unit_price(crop: &Crop, scenario: &Scenario, fertilizer: &Fertilizer) -> UnitPrice {
    let raw_price = || {
        let price = raw_average_price(crop, fertilizer);
        if scenario.professions.tiller {
            price * TILLER_PRICE_BONUS
        } else {
            price
        }
    };

    let Some(method) = scenario.sell_method.processing_method() else {
        return UnitPrice {
            price: raw_price().floor() as Gold,
            source: PricingSource::Raw,
            processing: None,
        };
    };

    match crop.processing.product(method) {
        Some(product) => {
            let mut price = product.price_per_input();
            if scenario.professions.artisan {
                price *= ARTISAN_PRICE_BONUS;
            }
            let product_name = crop
                .product_name(method)
                .unwrap_or_else(|| format!("{} {}", crop.name, method));
            UnitPrice {
                price: price.floor() as Gold,
                source: PricingSource::Processed,
                processing: Some(ProcessingInfo {
                    method,
                    product_name,
                    duration_days: product.duration_days,
                    inputs_per_output: product.inputs_per_output,
                }),
            }
        }
        None => {
            tracing::debug!(crop = %crop.id, %method, "no processed product, pricing raw");
            UnitPrice {
                price: raw_price().floor() as Gold,
                source: PricingSource::FallbackToRaw {
                    requested: method,
                    note: format!(
                        "{} cannot be processed in a {}; sold raw instead",
                        crop.name, method
                    ),
                },
                processing: None,
            }
        }
    }
}

/// Simulate one crop under a scenario.
///
/// Never fails: a scenario where the first harvest falls after the window
/// closes yields a report with zero harvests, zero money and a shortfall.
pub fn simulate(crop: &Crop, scenario: &Scenario) -> ProfitReport {
    let fertilizer = scenario.fertilizer.descriptor();
    let growth = effective_growth_days(
        crop.growth_days,
        fertilizer,
        scenario.professions.agriculturist,
    );
    let schedule = harvest_schedule(crop, scenario.season, scenario.start_day, growth);
    let available_days = schedule.available_days.max(0) as u32;

    if !schedule.is_productive() {
        let shortfall = DayShortfall {
            first_harvest_day: schedule.first_harvest_day,
            last_day: schedule.last_day,
            days_short: schedule.first_harvest_day - schedule.last_day,
        };
        tracing::debug!(
            crop = %crop.id,
            first_harvest_day = shortfall.first_harvest_day,
            last_day = shortfall.last_day,
            "insufficient days for a harvest"
        );
        return ProfitReport {
            crop_id: crop.id.clone(),
            crop_name: crop.name.clone(),
            plots: scenario.plots,
            harvests: 0,
            total_yield: 0,
            unit_price: 0,
            gross_revenue: 0,
            seed_cost: 0,
            fertilizer_cost: 0,
            total_cost: 0,
            net_profit: 0,
            profit_per_plot: 0.0,
            profit_per_day: 0.0,
            available_days,
            effective_growth_days: growth,
            pricing: PricingSource::Unpriced,
            processing: None,
            shortfall: Some(shortfall),
        };
    }

    let harvests = schedule.harvests();
    let plots = u64::from(scenario.plots);
    let total_yield = plots * u64::from(harvests) * u64::from(crop.yield_per_harvest());

    let unit = resolve_unit_price(crop, scenario, fertilizer);
    let gross_revenue = total_yield as Gold * unit.price;

    let plantings = if crop.regrows() { 1 } else { Gold::from(harvests) };
    let seed_cost = if scenario.costs.seeds {
        crop.seed_price.unwrap_or(0) * plots as Gold * plantings
    } else {
        0
    };
    let fertilizer_cost = if scenario.costs.fertilizer {
        fertilizer.cost * plots as Gold
    } else {
        0
    };
    let total_cost = seed_cost + fertilizer_cost;
    let net_profit = gross_revenue - total_cost;

    let profit_per_plot = if plots > 0 {
        net_profit as f64 / plots as f64
    } else {
        0.0
    };
    let profit_per_day = net_profit as f64 / schedule.available_days as f64;

    tracing::trace!(
        crop = %crop.id,
        harvests,
        unit_price = unit.price,
        net_profit,
        "simulated crop"
    );

    ProfitReport {
        crop_id: crop.id.clone(),
        crop_name: crop.name.clone(),
        plots: scenario.plots,
        harvests,
        total_yield,
        unit_price: unit.price,
        gross_revenue,
        seed_cost,
        fertilizer_cost,
        total_cost,
        net_profit,
        profit_per_plot,
        profit_per_day,
        available_days,
        effective_growth_days: growth,
        pricing: unit.source,
        processing: unit.processing,
        shortfall: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CostInclusion, FertilizerKind, ProcessedProduct, ProcessingProfile, ProfessionFlags,
        SellMethod,
    };
    use crate::types::Season;

    fn crop(growth_days: u32, regrow_days: Option<u32>) -> Crop {
        Crop {
            id: "test_crop".into(),
            name: "Test Crop".into(),
            seasons: vec![Season::Spring],
            growth_days,
            regrow_days,
            base_price: 100,
            seed_price: Some(20),
            yield_per_harvest: None,
            category: Default::default(),
            processing: ProcessingProfile::default(),
        }
    }

    fn days(crop: &Crop, season: GrowingSeason, start_day: u32) -> Vec<i64> {
        harvest_schedule(crop, season, start_day, crop.growth_days).harvest_days
    }

    #[test]
    fn test_regrowing_crop_steps_by_regrow_time() {
        let crop = crop(10, Some(4));
        assert_eq!(days(&crop, GrowingSeason::Spring, 1), vec![10, 14, 18, 22, 26]);
    }

    #[test]
    fn test_single_harvest_crop_pays_full_growth_each_time() {
        let crop = crop(10, None);
        assert_eq!(days(&crop, GrowingSeason::Spring, 1), vec![10, 20]);
    }

    #[test]
    fn test_first_harvest_on_last_day_counts() {
        let full = crop(28, None);
        assert_eq!(days(&full, GrowingSeason::Spring, 1), vec![28]);

        let late = crop(1, None);
        assert_eq!(days(&late, GrowingSeason::Spring, 28), vec![28]);
    }

    #[test]
    fn test_step_landing_on_last_day_counts() {
        let replant = crop(14, None);
        assert_eq!(days(&replant, GrowingSeason::Spring, 1), vec![14, 28]);

        let regrow = crop(12, Some(8));
        assert_eq!(days(&regrow, GrowingSeason::Spring, 1), vec![12, 20, 28]);
    }

    #[test]
    fn test_first_harvest_one_day_late_is_empty() {
        let crop = crop(29, None);
        let schedule = harvest_schedule(&crop, GrowingSeason::Spring, 1, 29);
        assert!(!schedule.is_productive());
        assert_eq!(schedule.first_harvest_day, 29);
        assert_eq!(schedule.last_day, 28);
    }

    #[test]
    fn test_greenhouse_window() {
        let ancient = crop(28, Some(7));
        // 28, 35, ..., 112
        let harvests = days(&ancient, GrowingSeason::Greenhouse, 1);
        assert_eq!(harvests.len(), 13);
        assert_eq!(harvests.last(), Some(&112));

        let late_start = days(&ancient, GrowingSeason::Greenhouse, 10);
        assert_eq!(late_start.len(), 13);
        assert_eq!(late_start.last(), Some(&121));
    }

    #[test]
    fn test_start_past_season_end_is_empty() {
        let crop = crop(1, None);
        let schedule = harvest_schedule(&crop, GrowingSeason::Summer, 29, 1);
        assert_eq!(schedule.available_days, 0);
        assert!(!schedule.is_productive());
    }

    #[test]
    fn test_zero_regrow_time_terminates() {
        let crop = crop(10, Some(0));
        assert_eq!(days(&crop, GrowingSeason::Spring, 1).len(), 19);
    }

    #[test]
    fn test_effective_growth_days() {
        let growth = |kind: FertilizerKind, agriculturist| {
            effective_growth_days(10, kind.descriptor(), agriculturist)
        };
        assert_eq!(growth(FertilizerKind::None, false), 10);
        assert_eq!(growth(FertilizerKind::Deluxe, false), 10);
        assert_eq!(growth(FertilizerKind::None, true), 9);
        assert_eq!(growth(FertilizerKind::SpeedGro, false), 9);
        assert_eq!(growth(FertilizerKind::SpeedGro, true), 8);
        assert_eq!(growth(FertilizerKind::DeluxeSpeedGro, false), 7);
        assert_eq!(growth(FertilizerKind::HyperSpeedGro, false), 6);
        assert_eq!(growth(FertilizerKind::HyperSpeedGro, true), 5);
    }

    #[test]
    fn test_effective_growth_never_below_one_day() {
        assert_eq!(
            effective_growth_days(1, FertilizerKind::HyperSpeedGro.descriptor(), true),
            1
        );
    }

    #[test]
    fn test_agriculturist_multiplier_floor() {
        let fertilizer = Fertilizer {
            kind: FertilizerKind::HyperSpeedGro,
            name: "Test Speed",
            growth_bonus: 0.95,
            quality_level: 0,
            cost: 0,
        };
        assert_eq!(effective_growth_days(20, &fertilizer, true), 2);
    }

    #[test]
    fn test_raw_pricing_applies_quality_and_tiller() {
        let crop = crop(4, None);
        let mut scenario = Scenario::default();
        let report = simulate(&crop, &scenario);
        // 100 * 1.18795
        assert_eq!(report.unit_price, 118);
        assert_eq!(report.pricing, PricingSource::Raw);

        scenario.professions.tiller = true;
        let report = simulate(&crop, &scenario);
        // 118.795 * 1.1
        assert_eq!(report.unit_price, 130);
    }

    #[test]
    fn test_processed_pricing_with_input_ratio() {
        let mut coffee = crop(10, Some(2));
        coffee.yield_per_harvest = Some(4);
        coffee.processing.keg = Some(ProcessedProduct {
            price: 150,
            duration_days: 1,
            inputs_per_output: 5,
            product_name: Some("Coffee".into()),
        });
        let scenario = Scenario {
            sell_method: SellMethod::Keg,
            ..Scenario::default()
        };
        let report = simulate(&coffee, &scenario);
        assert_eq!(report.unit_price, 30);
        assert_eq!(report.pricing, PricingSource::Processed);
        let info = report.processing.unwrap();
        assert_eq!(info.product_name, "Coffee");
        assert_eq!(info.inputs_per_output, 5);
    }

    #[test]
    fn test_artisan_bonus_on_processed_price() {
        let mut crop = crop(4, None);
        crop.processing.preserves_jar = Some(ProcessedProduct {
            price: 100,
            duration_days: 3,
            inputs_per_output: 1,
            product_name: None,
        });
        let scenario = Scenario {
            sell_method: SellMethod::PreservesJar,
            professions: ProfessionFlags {
                artisan: true,
                ..ProfessionFlags::default()
            },
            ..Scenario::default()
        };
        let report = simulate(&crop, &scenario);
        assert_eq!(report.unit_price, 140);
        assert_eq!(
            report.processing.map(|p| p.product_name).as_deref(),
            Some("Test Crop Pickles")
        );
    }

    #[test]
    fn test_tiller_does_not_touch_processed_price() {
        let mut crop = crop(4, None);
        crop.processing.keg = Some(ProcessedProduct {
            price: 100,
            duration_days: 4,
            inputs_per_output: 1,
            product_name: None,
        });
        let scenario = Scenario {
            sell_method: SellMethod::Keg,
            professions: ProfessionFlags {
                tiller: true,
                ..ProfessionFlags::default()
            },
            ..Scenario::default()
        };
        assert_eq!(simulate(&crop, &scenario).unit_price, 100);
    }

    #[test]
    fn test_full_breakdown_for_single_harvest_crop() {
        let crop = crop(4, None);
        let scenario = Scenario {
            plots: 10,
            fertilizer: FertilizerKind::SpeedGro,
            ..Scenario::default()
        };
        let report = simulate(&crop, &scenario);
        // Speed-Gro: floor(4 * 0.9) = 3 days -> harvests on 3, 6, ..., 27
        assert_eq!(report.effective_growth_days, 3);
        assert_eq!(report.harvests, 9);
        assert_eq!(report.total_yield, 90);
        assert_eq!(report.unit_price, 118);
        assert_eq!(report.gross_revenue, 90 * 118);
        assert_eq!(report.seed_cost, 20 * 10 * 9);
        assert_eq!(report.fertilizer_cost, 100 * 10);
        assert_eq!(report.total_cost, 1800 + 1000);
        assert_eq!(report.net_profit, 10620 - 2800);
        assert_eq!(report.profit_per_plot, 782.0);
        assert!((report.profit_per_day - 7820.0 / 28.0).abs() < 1e-9);
        assert_eq!(report.available_days, 28);
    }

    #[test]
    fn test_regrowing_crop_buys_seeds_once() {
        let crop = crop(10, Some(4));
        let scenario = Scenario {
            plots: 5,
            ..Scenario::default()
        };
        let report = simulate(&crop, &scenario);
        assert_eq!(report.harvests, 5);
        assert_eq!(report.seed_cost, 20 * 5);
    }

    #[test]
    fn test_cost_toggles() {
        let crop = crop(4, None);
        let scenario = Scenario {
            plots: 3,
            fertilizer: FertilizerKind::Quality,
            costs: CostInclusion {
                seeds: false,
                fertilizer: false,
            },
            ..Scenario::default()
        };
        let report = simulate(&crop, &scenario);
        assert_eq!(report.seed_cost, 0);
        assert_eq!(report.fertilizer_cost, 0);
        assert_eq!(report.net_profit, report.gross_revenue);
    }

    #[test]
    fn test_insufficient_days_report() {
        let crop = crop(30, None);
        let scenario = Scenario {
            plots: 4,
            fertilizer: FertilizerKind::Deluxe,
            ..Scenario::default()
        };
        let report = simulate(&crop, &scenario);
        assert!(!report.is_productive());
        assert_eq!(report.harvests, 0);
        assert_eq!(report.total_yield, 0);
        assert_eq!(report.net_profit, 0);
        assert_eq!(report.fertilizer_cost, 0);
        assert_eq!(report.profit_per_day, 0.0);
        assert_eq!(report.pricing, PricingSource::Unpriced);
        assert_eq!(
            report.shortfall,
            Some(DayShortfall {
                first_harvest_day: 30,
                last_day: 28,
                days_short: 2,
            })
        );
    }

    #[test]
    fn test_unsupported_processing_falls_back_to_raw() {
        let crop = crop(4, None);
        let raw = simulate(&crop, &Scenario::default());
        let keg = simulate(
            &crop,
            &Scenario {
                sell_method: SellMethod::Keg,
                ..Scenario::default()
            },
        );
        assert_eq!(keg.unit_price, raw.unit_price);
        assert!(keg.processing.is_none());
        assert!(keg.fallback_note().is_some_and(|note| !note.is_empty()));
        assert!(raw.fallback_note().is_none());
    }
}
