//! Common types used across the engine

use serde::{Deserialize, Serialize};

/// Days in a single in-game season
pub const DAYS_PER_SEASON: u32 = 28;

/// Day window of the greenhouse (four full seasons)
pub const GREENHOUSE_DAYS: u32 = 4 * DAYS_PER_SEASON;

/// Farming level used when resolving the quality distribution of a harvest
pub const REFERENCE_FARMING_LEVEL: f64 = 10.0;

/// Amount of gold. Unit prices are floored to whole gold before revenue is computed.
pub type Gold = i64;

/// Outdoor growing seasons a crop can be planted in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "Spring"),
            Season::Summer => write!(f, "Summer"),
            Season::Fall => write!(f, "Fall"),
            Season::Winter => write!(f, "Winter"),
        }
    }
}

/// Where and when a scenario is evaluated
///
/// The greenhouse is a protected context: every crop grows there and the
/// evaluation window spans four seasons instead of one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GrowingSeason {
    #[default]
    Spring,
    Summer,
    Fall,
    Winter,
    Greenhouse,
}

impl GrowingSeason {
    pub const ALL: [GrowingSeason; 5] = [
        GrowingSeason::Spring,
        GrowingSeason::Summer,
        GrowingSeason::Fall,
        GrowingSeason::Winter,
        GrowingSeason::Greenhouse,
    ];

    /// The outdoor season, or `None` for the greenhouse
    pub fn season(&self) -> Option<Season> {
        match self {
            GrowingSeason::Spring => Some(Season::Spring),
            GrowingSeason::Summer => Some(Season::Summer),
            GrowingSeason::Fall => Some(Season::Fall),
            GrowingSeason::Winter => Some(Season::Winter),
            GrowingSeason::Greenhouse => None,
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, GrowingSeason::Greenhouse)
    }

    /// Days available for growing when planting on `start_day`.
    ///
    /// Can be zero or negative for a start day past the end of the season.
    pub fn available_days(&self, start_day: u32) -> i64 {
        if self.is_protected() {
            i64::from(GREENHOUSE_DAYS)
        } else {
            i64::from(DAYS_PER_SEASON) - i64::from(start_day) + 1
        }
    }
}

impl From<Season> for GrowingSeason {
    fn from(season: Season) -> Self {
        match season {
            Season::Spring => GrowingSeason::Spring,
            Season::Summer => GrowingSeason::Summer,
            Season::Fall => GrowingSeason::Fall,
            Season::Winter => GrowingSeason::Winter,
        }
    }
}

impl std::fmt::Display for GrowingSeason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.season() {
            Some(season) => write!(f, "{}", season),
            None => write!(f, "Greenhouse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outdoor_window_counts_start_day() {
        assert_eq!(GrowingSeason::Spring.available_days(1), 28);
        assert_eq!(GrowingSeason::Fall.available_days(28), 1);
        assert_eq!(GrowingSeason::Summer.available_days(29), 0);
    }

    #[test]
    fn greenhouse_window_is_fixed() {
        assert_eq!(GrowingSeason::Greenhouse.available_days(1), 112);
        assert_eq!(GrowingSeason::Greenhouse.available_days(20), 112);
    }

    #[test]
    fn season_serializes_lowercase() {
        let json = serde_json::to_string(&GrowingSeason::Greenhouse).unwrap();
        assert_eq!(json, "\"greenhouse\"");
        let season: Season = serde_json::from_str("\"fall\"").unwrap();
        assert_eq!(season, Season::Fall);
    }
}
