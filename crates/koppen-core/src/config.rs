//! Numeric boundaries of the published Köppen-Geiger scheme.
//!
//! Every threshold and factor the statistics and classification passes
//! consume lives in one immutable table, so a regional variant of the
//! scheme is a different table, not different logic. `Default` carries
//! the published constants.

use serde::{Deserialize, Serialize};

/// Threshold table consumed by both the statistics and classification
/// passes. All comparisons against these values are exact; the strict /
/// non-strict operator at each boundary is fixed in the rule code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateThresholds {
    /// Warmest month below this is polar (E). °C.
    pub polar_summer_max_c: f64,
    /// Polar split: warmest month below this is ice cap (EF), else tundra (ET). °C.
    pub ice_cap_max_c: f64,
    /// Coldest month at or above this is tropical (A). °C.
    pub tropical_coldest_min_c: f64,
    /// Coldest month at or above this (but under the tropical line) is
    /// temperate (C); below it, continental (D). °C.
    pub temperate_coldest_min_c: f64,
    /// Coldest month below this gives the severe-winter subtype (d). °C.
    pub severe_winter_max_c: f64,
    /// Warmest month at or above this gives the hot-summer subtype (a). °C.
    pub hot_summer_min_c: f64,
    /// A month at or above this counts toward the warm-month tally. °C.
    pub warm_month_min_c: f64,
    /// Warm-month tally needed for the warm-summer subtype (b).
    pub warm_months_for_b: usize,
    /// Annual mean at or above this makes an arid climate hot (h vs k). °C.
    pub hot_arid_mean_min_c: f64,
    /// Driest month at or above this is tropical rainforest (Af). mm.
    pub rainforest_driest_min_mm: f64,
    /// Monsoon line: Am needs driest ≥ intercept − annual / divisor. mm.
    pub monsoon_intercept_mm: f64,
    pub monsoon_divisor: f64,
    /// Aridity threshold = this × annual mean temperature + seasonal offset.
    pub aridity_temp_factor: f64,
    /// Offset when the summer half carries the dominant share of rain. mm.
    pub aridity_summer_offset_mm: f64,
    /// Offset when the winter half carries the dominant share of rain. mm.
    pub aridity_winter_offset_mm: f64,
    /// Offset when neither half dominates. mm.
    pub aridity_even_offset_mm: f64,
    /// Fraction of annual precipitation that makes a half-year dominant.
    /// The comparison is inclusive: exactly this share still dominates.
    pub season_dominance: f64,
    /// Arid (B) when annual precipitation < this × aridity threshold.
    pub steppe_factor: f64,
    /// Desert (BW) when annual precipitation < this × aridity threshold.
    pub desert_factor: f64,
    /// Dry-summer (s) needs the summer driest month below this… mm.
    pub dry_summer_max_mm: f64,
    /// …and below the winter wettest month divided by this.
    pub dry_summer_winter_ratio: f64,
    /// Dry-winter (w) needs the winter driest month below the summer
    /// wettest month divided by this.
    pub dry_winter_summer_ratio: f64,
}

impl Default for ClimateThresholds {
    fn default() -> Self {
        Self {
            polar_summer_max_c: 10.0,
            ice_cap_max_c: 0.0,
            tropical_coldest_min_c: 18.0,
            temperate_coldest_min_c: -3.0,
            severe_winter_max_c: -38.0,
            hot_summer_min_c: 22.0,
            warm_month_min_c: 10.0,
            warm_months_for_b: 4,
            hot_arid_mean_min_c: 18.0,
            rainforest_driest_min_mm: 60.0,
            monsoon_intercept_mm: 100.0,
            monsoon_divisor: 25.0,
            aridity_temp_factor: 2.0,
            aridity_summer_offset_mm: 28.0,
            aridity_winter_offset_mm: 0.0,
            aridity_even_offset_mm: 14.0,
            season_dominance: 0.7,
            steppe_factor: 10.0,
            desert_factor: 5.0,
            dry_summer_max_mm: 40.0,
            dry_summer_winter_ratio: 3.0,
            dry_winter_summer_ratio: 10.0,
        }
    }
}
