//! Half-year precipitation aggregates.
//!
//! Seasons are selected by month-index membership, never by reordering
//! the series: the same January value is winter in the north and summer
//! in the south.

use serde::{Deserialize, Serialize};

use crate::series::MonthlySeries;

/// Precipitation aggregates over one six-month half-year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonPrecip {
    pub total_mm: f64,
    pub driest_mm: f64,
    pub wettest_mm: f64,
}

/// Aggregate precipitation over the given half-year month indices.
pub fn season_precip(precipitation: &MonthlySeries, months: &[usize; 6]) -> SeasonPrecip {
    let mut total = 0.0;
    let mut driest = f64::INFINITY;
    let mut wettest = f64::NEG_INFINITY;
    for &m in months {
        let v = precipitation.get(m);
        total += v;
        driest = driest.min(v);
        wettest = wettest.max(v);
    }
    SeasonPrecip {
        total_mm: total,
        driest_mm: driest,
        wettest_mm: wettest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Hemisphere;

    #[test]
    fn aggregates_follow_month_membership() {
        // January = 5 mm, July = 80 mm, everything else 20 mm.
        let mut v = [20.0; 12];
        v[0] = 5.0;
        v[6] = 80.0;
        let p = MonthlySeries::from_slice(&v).unwrap();

        let north = season_precip(&p, &Hemisphere::Northern.summer_months());
        assert_eq!(north.total_mm, 20.0 * 5.0 + 80.0);
        assert_eq!(north.driest_mm, 20.0);
        assert_eq!(north.wettest_mm, 80.0);

        // The same series seen from the south puts January in summer.
        let south = season_precip(&p, &Hemisphere::Southern.summer_months());
        assert_eq!(south.total_mm, 20.0 * 5.0 + 5.0);
        assert_eq!(south.driest_mm, 5.0);
        assert_eq!(south.wettest_mm, 20.0);
    }
}
