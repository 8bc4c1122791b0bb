//! Derived climate statistics.
//!
//! One pass over the two monthly series produces every aggregate the
//! classification rules consume. The record is computed once per
//! request, never mutated, and carries the month indices of the
//! temperature extremes alongside their values.

pub mod aridity;
pub mod seasons;

use serde::{Deserialize, Serialize};

use crate::config::ClimateThresholds;
use crate::series::{Hemisphere, MonthlySeries};

use aridity::aridity_threshold_mm;
use seasons::{season_precip, SeasonPrecip};

/// A temperature extreme with the month it occurred in (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthExtreme {
    pub month: usize,
    pub celsius: f64,
}

/// Everything the classification rules need, computed once per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateStatistics {
    pub hemisphere: Hemisphere,
    /// Arithmetic mean of the 12 monthly temperatures. °C.
    pub mean_annual_temp_c: f64,
    /// Sum of the 12 monthly precipitation totals. mm.
    pub annual_precip_mm: f64,
    pub warmest: MonthExtreme,
    pub coldest: MonthExtreme,
    /// Months with mean temperature at or above the warm-month line (10 °C).
    pub warm_month_count: usize,
    /// Driest month of the whole year. mm.
    pub driest_month_mm: f64,
    /// Hemisphere-relative summer half-year precipitation.
    pub summer: SeasonPrecip,
    /// Hemisphere-relative winter half-year precipitation.
    pub winter: SeasonPrecip,
    /// Aridity threshold in mm (see [`aridity`]).
    pub aridity_threshold_mm: f64,
}

/// Derive the full statistics record for one station.
///
/// Pure function of its inputs; validation already happened when the
/// series were constructed.
pub fn compute_statistics(
    temperature: &MonthlySeries,
    precipitation: &MonthlySeries,
    hemisphere: Hemisphere,
    thresholds: &ClimateThresholds,
) -> ClimateStatistics {
    let (warmest_month, warmest_c) = temperature.max_month();
    let (coldest_month, coldest_c) = temperature.min_month();
    let mean_annual_temp_c = temperature.mean();
    let annual_precip_mm = precipitation.sum();

    let warm_month_count = temperature
        .iter()
        .filter(|&t| t >= thresholds.warm_month_min_c)
        .count();

    let summer = season_precip(precipitation, &hemisphere.summer_months());
    let winter = season_precip(precipitation, &hemisphere.winter_months());

    let aridity = aridity_threshold_mm(
        mean_annual_temp_c,
        summer.total_mm,
        winter.total_mm,
        annual_precip_mm,
        thresholds,
    );

    ClimateStatistics {
        hemisphere,
        mean_annual_temp_c,
        annual_precip_mm,
        warmest: MonthExtreme { month: warmest_month, celsius: warmest_c },
        coldest: MonthExtreme { month: coldest_month, celsius: coldest_c },
        warm_month_count,
        driest_month_mm: precipitation.min_month().1,
        summer,
        winter,
        aridity_threshold_mm: aridity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Tokyo 1991–2020 normals, rounded.
    const TOKYO_TEMP: [f64; 12] = [
        5.2, 5.7, 8.7, 13.9, 18.2, 21.4, 25.0, 26.4, 22.8, 17.5, 12.1, 7.6,
    ];
    const TOKYO_PRECIP: [f64; 12] = [
        52.0, 56.0, 118.0, 125.0, 138.0, 168.0, 154.0, 168.0, 210.0, 198.0,
        93.0, 51.0,
    ];

    fn tokyo(hemisphere: Hemisphere) -> ClimateStatistics {
        compute_statistics(
            &MonthlySeries::from_slice(&TOKYO_TEMP).unwrap(),
            &MonthlySeries::from_slice(&TOKYO_PRECIP).unwrap(),
            hemisphere,
            &ClimateThresholds::default(),
        )
    }

    #[test]
    fn tokyo_aggregates() {
        let s = tokyo(Hemisphere::Northern);
        assert_relative_eq!(s.mean_annual_temp_c, 15.375, epsilon = 1e-9);
        assert_relative_eq!(s.annual_precip_mm, 1531.0, epsilon = 1e-9);
        assert_eq!(s.warmest.month, 7); // August
        assert_relative_eq!(s.warmest.celsius, 26.4);
        assert_eq!(s.coldest.month, 0); // January
        assert_relative_eq!(s.coldest.celsius, 5.2);
        assert_eq!(s.driest_month_mm, 51.0); // December
        // Apr–Sep ≥ 10 °C plus October.
        assert_eq!(s.warm_month_count, 8);
    }

    #[test]
    fn tokyo_seasonal_split() {
        let s = tokyo(Hemisphere::Northern);
        // Apr..Sep
        assert_relative_eq!(s.summer.total_mm, 963.0, epsilon = 1e-9);
        assert_relative_eq!(s.winter.total_mm, 568.0, epsilon = 1e-9);
        assert_eq!(s.summer.driest_mm, 125.0);
        assert_eq!(s.winter.wettest_mm, 198.0);
        // Neither half reaches 70 %: even offset.
        assert_relative_eq!(
            s.aridity_threshold_mm,
            2.0 * 15.375 + 14.0,
            epsilon = 1e-9
        );
    }

    /// Flipping hemisphere swaps the seasonal aggregates and nothing else.
    #[test]
    fn hemisphere_flip_swaps_seasons() {
        let north = tokyo(Hemisphere::Northern);
        let south = tokyo(Hemisphere::Southern);
        assert_eq!(north.summer, south.winter);
        assert_eq!(north.winter, south.summer);
        assert_eq!(north.warmest, south.warmest);
        assert_eq!(north.annual_precip_mm, south.annual_precip_mm);
    }

    /// A month at exactly 10.0 °C counts toward the warm-month tally.
    #[test]
    fn warm_month_boundary_is_inclusive() {
        let mut temp = [0.0; 12];
        temp[5] = 10.0;
        temp[6] = 9.999;
        let s = compute_statistics(
            &MonthlySeries::from_slice(&temp).unwrap(),
            &MonthlySeries::from_slice(&[50.0; 12]).unwrap(),
            Hemisphere::Northern,
            &ClimateThresholds::default(),
        );
        assert_eq!(s.warm_month_count, 1);
    }
}
