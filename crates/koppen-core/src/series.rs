//! Monthly input series and hemisphere handling.
//!
//! `MonthlySeries` is the validation boundary of the whole crate: exactly
//! 12 finite values, index 0 = January. Once one exists, every downstream
//! computation is infallible by type.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Months per series.
pub const MONTHS: usize = 12;

/// Three-letter month labels, index 0 = January.
pub const MONTH_ABBREV: [&str; MONTHS] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Twelve monthly values, January first. Values are guaranteed finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct MonthlySeries {
    values: [f64; MONTHS],
}

impl MonthlySeries {
    /// Validate and wrap a slice of 12 finite monthly values.
    pub fn from_slice(values: &[f64]) -> Result<Self, InputError> {
        let values: [f64; MONTHS] = values
            .try_into()
            .map_err(|_| InputError::Length { len: values.len() })?;
        if let Some(month) = values.iter().position(|v| !v.is_finite()) {
            return Err(InputError::NonFinite { month });
        }
        Ok(Self { values })
    }

    #[inline]
    pub fn get(&self, month: usize) -> f64 {
        self.values[month]
    }

    pub fn values(&self) -> &[f64; MONTHS] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn mean(&self) -> f64 {
        self.sum() / MONTHS as f64
    }

    /// Month index and value of the maximum. Ties go to the earlier month.
    pub fn max_month(&self) -> (usize, f64) {
        let mut best = 0;
        for m in 1..MONTHS {
            if self.values[m] > self.values[best] {
                best = m;
            }
        }
        (best, self.values[best])
    }

    /// Month index and value of the minimum. Ties go to the earlier month.
    pub fn min_month(&self) -> (usize, f64) {
        let mut best = 0;
        for m in 1..MONTHS {
            if self.values[m] < self.values[best] {
                best = m;
            }
        }
        (best, self.values[best])
    }
}

impl TryFrom<Vec<f64>> for MonthlySeries {
    type Error = InputError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl From<MonthlySeries> for Vec<f64> {
    fn from(series: MonthlySeries) -> Self {
        series.values.to_vec()
    }
}

/// Which half-year counts as summer for season-relative rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    Northern,
    Southern,
}

impl Hemisphere {
    /// Month indices of the summer half-year: Apr–Sep in the north,
    /// Oct–Mar in the south.
    pub fn summer_months(self) -> [usize; 6] {
        match self {
            Hemisphere::Northern => [3, 4, 5, 6, 7, 8],
            Hemisphere::Southern => [9, 10, 11, 0, 1, 2],
        }
    }

    /// Complement of [`summer_months`](Self::summer_months).
    pub fn winter_months(self) -> [usize; 6] {
        match self {
            Hemisphere::Northern => [9, 10, 11, 0, 1, 2],
            Hemisphere::Southern => [3, 4, 5, 6, 7, 8],
        }
    }
}

impl FromStr for Hemisphere {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "northern" | "north" | "n" => Ok(Hemisphere::Northern),
            "southern" | "south" | "s" => Ok(Hemisphere::Southern),
            _ => Err(InputError::UnknownHemisphere(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_values_rejected() {
        let err = MonthlySeries::from_slice(&[1.0; 11]).unwrap_err();
        assert_eq!(err, InputError::Length { len: 11 });
    }

    #[test]
    fn empty_series_rejected() {
        let err = MonthlySeries::from_slice(&[]).unwrap_err();
        assert_eq!(err, InputError::Length { len: 0 });
    }

    #[test]
    fn non_finite_value_rejected_with_month() {
        let mut v = [10.0; 12];
        v[4] = f64::NAN;
        assert_eq!(
            MonthlySeries::from_slice(&v).unwrap_err(),
            InputError::NonFinite { month: 4 }
        );
        v[4] = f64::INFINITY;
        assert_eq!(
            MonthlySeries::from_slice(&v).unwrap_err(),
            InputError::NonFinite { month: 4 }
        );
    }

    #[test]
    fn extremes_keep_month_index() {
        let mut v = [0.0; 12];
        v[6] = 25.0;
        v[1] = -8.0;
        let s = MonthlySeries::from_slice(&v).unwrap();
        assert_eq!(s.max_month(), (6, 25.0));
        assert_eq!(s.min_month(), (1, -8.0));
    }

    #[test]
    fn extreme_ties_go_to_earlier_month() {
        let s = MonthlySeries::from_slice(&[3.0; 12]).unwrap();
        assert_eq!(s.max_month(), (0, 3.0));
        assert_eq!(s.min_month(), (0, 3.0));
    }

    #[test]
    fn summer_and_winter_cover_all_months() {
        for hemisphere in [Hemisphere::Northern, Hemisphere::Southern] {
            let mut seen = [false; MONTHS];
            for m in hemisphere.summer_months() {
                seen[m] = true;
            }
            for m in hemisphere.winter_months() {
                assert!(!seen[m], "month {m} in both seasons");
                seen[m] = true;
            }
            assert!(seen.iter().all(|&s| s), "months missing from seasons");
        }
    }

    #[test]
    fn southern_summer_is_northern_winter() {
        assert_eq!(
            Hemisphere::Southern.summer_months(),
            Hemisphere::Northern.winter_months()
        );
    }

    #[test]
    fn hemisphere_parses_case_insensitively() {
        assert_eq!("Northern".parse::<Hemisphere>(), Ok(Hemisphere::Northern));
        assert_eq!("south".parse::<Hemisphere>(), Ok(Hemisphere::Southern));
        assert_eq!(
            "austral".parse::<Hemisphere>(),
            Err(InputError::UnknownHemisphere("austral".to_string()))
        );
    }

    #[test]
    fn series_deserializes_from_json_array() {
        let s: MonthlySeries =
            serde_json::from_str("[1,2,3,4,5,6,7,8,9,10,11,12]").unwrap();
        assert_eq!(s.get(11), 12.0);
        assert!(serde_json::from_str::<MonthlySeries>("[1,2,3]").is_err());
    }
}
