//! Köppen-Geiger climate classification from monthly station data.
//!
//! Pipeline:
//!   validated monthly series (`series`) → derived statistics (`stats`) →
//!   ordered main-class rule table (`classify`) → packaged result
//!   (`report`).
//!
//! The library is pure and synchronous: no I/O, no shared state, O(1)
//! over the fixed 12-month inputs, safe to call from any number of
//! threads at once. File loading and hythergraph rendering live in the
//! workspace tools, not here.

pub mod classify;
pub mod config;
pub mod error;
pub mod report;
pub mod series;
pub mod stats;

pub use classify::{classify, ClimateCode};
pub use config::ClimateThresholds;
pub use error::{ClimateError, InputError};
pub use report::ClassificationResult;
pub use series::{Hemisphere, MonthlySeries};
pub use stats::{compute_statistics, ClimateStatistics};

/// Classify one station's monthly normals with the published thresholds.
///
/// `temperature_c` and `precipitation_mm` must each hold 12 finite
/// values, January first; anything else fails before a statistic is
/// computed.
pub fn classify_station(
    temperature_c: &[f64],
    precipitation_mm: &[f64],
    hemisphere: Hemisphere,
) -> Result<ClassificationResult, ClimateError> {
    classify_station_with(
        &ClimateThresholds::default(),
        temperature_c,
        precipitation_mm,
        hemisphere,
    )
}

/// [`classify_station`] with a caller-supplied threshold table.
pub fn classify_station_with(
    thresholds: &ClimateThresholds,
    temperature_c: &[f64],
    precipitation_mm: &[f64],
    hemisphere: Hemisphere,
) -> Result<ClassificationResult, ClimateError> {
    let temperature = MonthlySeries::from_slice(temperature_c)?;
    let precipitation = MonthlySeries::from_slice(precipitation_mm)?;
    let statistics =
        compute_statistics(&temperature, &precipitation, hemisphere, thresholds);
    let code = classify(&statistics, thresholds)?;
    Ok(ClassificationResult::new(code, statistics))
}
