//! Aridity threshold: the precipitation cutoff that separates arid (B)
//! climates from everything else.
//!
//! The threshold is linear in annual mean temperature plus an offset
//! picked by a three-way branch on precipitation seasonality. The branch
//! is exact: a half-year is dominant when it carries at least the
//! configured share (70 %) of the annual total, summer checked first.

use crate::config::ClimateThresholds;

/// Compute the aridity threshold in mm.
///
/// Dominance is compared on totals (`summer ≥ share × annual`), so a year
/// with zero precipitation resolves to the summer branch instead of
/// dividing by zero.
pub fn aridity_threshold_mm(
    mean_annual_temp_c: f64,
    summer_total_mm: f64,
    winter_total_mm: f64,
    annual_total_mm: f64,
    thresholds: &ClimateThresholds,
) -> f64 {
    let dominant_share = thresholds.season_dominance * annual_total_mm;
    let offset = if summer_total_mm >= dominant_share {
        thresholds.aridity_summer_offset_mm
    } else if winter_total_mm >= dominant_share {
        thresholds.aridity_winter_offset_mm
    } else {
        thresholds.aridity_even_offset_mm
    };
    thresholds.aridity_temp_factor * mean_annual_temp_c + offset
}
