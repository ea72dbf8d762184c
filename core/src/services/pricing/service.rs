//! Price estimation service implementation.
//!
//! The estimate is a weighted arithmetic formula over the property's
//! features with a small random jitter on top. Estimation never fails:
//! unknown cities and property types fall back to baseline rates.

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::entities::AreaUnit;

/// Base monthly rate per Marla by city, in PKR
static CITY_BASE_RATES: Lazy<HashMap<&'static str, u64>> = Lazy::new(|| {
    HashMap::from([
        ("Lahore", 10_000),
        ("Karachi", 12_000),
        ("Islamabad", 15_000),
        ("Rawalpindi", 9_000),
        ("Faisalabad", 7_000),
        ("Multan", 6_000),
        ("Peshawar", 8_000),
        ("Quetta", 7_500),
    ])
});

/// Rate applied for cities without a dedicated entry
const FALLBACK_CITY_RATE: u64 = 5_000;

/// Per-feature rent contributions, in PKR
const BEDROOM_RATE: f64 = 5_000.0;
const FLOOR_RATE: f64 = 2_000.0;
const KITCHEN_RATE: f64 = 1_000.0;
const LAWN_PREMIUM: f64 = 3_000.0;

/// Furnished properties rent at a premium
const FURNISHED_MULTIPLIER: f64 = 1.2;

/// Jitter band applied to the deterministic amount
const JITTER_LOW: f64 = 0.95;
const JITTER_HIGH: f64 = 1.05;

/// Furnishing state of the property being estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnishingStatus {
    Furnished,
    Unfurnished,
}

impl Default for FurnishingStatus {
    fn default() -> Self {
        FurnishingStatus::Unfurnished
    }
}

/// Property features fed into the estimation formula
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateInput {
    pub property_type: String,
    pub area: f64,
    pub area_unit: AreaUnit,
    pub bedrooms: u32,
    pub floors: u32,
    pub kitchens: u32,
    pub has_lawn: bool,
    pub city: String,
    #[serde(default)]
    pub furnishing: FurnishingStatus,
}

/// Result of a price estimation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentEstimate {
    /// Suggested monthly rent in PKR, rounded to the nearest 1000
    pub suggested_rent: u64,

    /// Lower bound of the advisable range (90% of the suggestion)
    pub range_low: u64,

    /// Upper bound of the advisable range (110% of the suggestion)
    pub range_high: u64,
}

/// Estimates a monthly rent from property features.
///
/// Stateless and infallible; each call draws fresh jitter.
#[derive(Debug, Clone, Default)]
pub struct PriceEstimator;

impl PriceEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Produce a rent estimate with jitter applied.
    pub fn estimate(&self, input: &EstimateInput) -> RentEstimate {
        let jitter = rand::thread_rng().gen_range(JITTER_LOW..JITTER_HIGH);
        let amount = round_to_thousand(self.midpoint(input) * jitter);

        RentEstimate {
            suggested_rent: amount,
            range_low: round_to_thousand(amount as f64 * 0.9),
            range_high: round_to_thousand(amount as f64 * 1.1),
        }
    }

    /// The deterministic amount before jitter and rounding.
    pub fn midpoint(&self, input: &EstimateInput) -> f64 {
        let area_marla = match input.area_unit {
            AreaUnit::Marla => input.area,
            AreaUnit::Kanal => input.area * 20.0,
        };

        let city_rate = CITY_BASE_RATES
            .get(input.city.as_str())
            .copied()
            .unwrap_or(FALLBACK_CITY_RATE);

        let base = city_rate as f64 * area_marla * type_multiplier(&input.property_type);

        let features = input.bedrooms as f64 * BEDROOM_RATE
            + input.floors as f64 * FLOOR_RATE
            + input.kitchens as f64 * KITCHEN_RATE
            + if input.has_lawn { LAWN_PREMIUM } else { 0.0 };

        let furnishing = match input.furnishing {
            FurnishingStatus::Furnished => FURNISHED_MULTIPLIER,
            FurnishingStatus::Unfurnished => 1.0,
        };

        (base + features) * furnishing
    }
}

/// Multiplier for the property type; unknown types rent at baseline
fn type_multiplier(property_type: &str) -> f64 {
    match property_type {
        "House" => 1.0,
        "Apartment" => 0.9,
        "Villa" => 1.4,
        "Portion" => 0.7,
        _ => 1.0,
    }
}

fn round_to_thousand(amount: f64) -> u64 {
    ((amount / 1000.0).round() * 1000.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> EstimateInput {
        EstimateInput {
            property_type: "House".to_string(),
            area: 10.0,
            area_unit: AreaUnit::Marla,
            bedrooms: 3,
            floors: 2,
            kitchens: 1,
            has_lawn: true,
            city: "Lahore".to_string(),
            furnishing: FurnishingStatus::Unfurnished,
        }
    }

    #[test]
    fn test_midpoint_formula() {
        let estimator = PriceEstimator::new();
        // 10 Marla in Lahore: 10_000 * 10 = 100_000 base,
        // + 3*5000 + 2*2000 + 1*1000 + 3000 lawn = 123_000
        assert_eq!(estimator.midpoint(&input()), 123_000.0);
    }

    #[test]
    fn test_kanal_converts_to_marla() {
        let estimator = PriceEstimator::new();
        let mut kanal = input();
        kanal.area = 0.5;
        kanal.area_unit = AreaUnit::Kanal;
        // 0.5 Kanal = 10 Marla, identical to the baseline input
        assert_eq!(estimator.midpoint(&kanal), estimator.midpoint(&input()));
    }

    #[test]
    fn test_furnished_premium() {
        let estimator = PriceEstimator::new();
        let mut furnished = input();
        furnished.furnishing = FurnishingStatus::Furnished;
        assert_eq!(
            estimator.midpoint(&furnished),
            estimator.midpoint(&input()) * 1.2
        );
    }

    #[test]
    fn test_unknown_city_and_type_fall_back() {
        let estimator = PriceEstimator::new();
        let mut other = input();
        other.city = "Sialkot".to_string();
        other.property_type = "Farmhouse".to_string();
        // 5000 * 10 + 23_000 features
        assert_eq!(estimator.midpoint(&other), 73_000.0);
    }

    #[test]
    fn test_villa_multiplier_applies_to_base_only() {
        let estimator = PriceEstimator::new();
        let mut villa = input();
        villa.property_type = "Villa".to_string();
        // 100_000 * 1.4 + 23_000
        assert_eq!(estimator.midpoint(&villa), 163_000.0);
    }

    #[test]
    fn test_estimate_stays_within_jitter_band() {
        let estimator = PriceEstimator::new();
        let midpoint = estimator.midpoint(&input());
        for _ in 0..50 {
            let estimate = estimator.estimate(&input());
            let low = midpoint * 0.95 - 500.0;
            let high = midpoint * 1.05 + 500.0;
            assert!((estimate.suggested_rent as f64) >= low);
            assert!((estimate.suggested_rent as f64) <= high);
            assert_eq!(estimate.suggested_rent % 1000, 0);
        }
    }

    #[test]
    fn test_estimate_range_brackets_suggestion() {
        let estimator = PriceEstimator::new();
        let estimate = estimator.estimate(&input());
        assert!(estimate.range_low <= estimate.suggested_rent);
        assert!(estimate.range_high >= estimate.suggested_rent);
    }
}
