//! Köppen-Geiger decision procedure.
//!
//! The main classes live in an explicit ordered rule table
//! ([`rules::MAIN_CLASS_RULES`]); classification walks the table and the
//! first rule whose guard passes builds the code. First match wins, so
//! the priority invariant of the scheme is data, not nesting.

pub mod code;
pub mod rules;

pub use code::{
    AridHeat, AridKind, ClimateCode, PolarKind, PrecipRegime, SummerWarmth,
    TropicalRegime,
};

use crate::config::ClimateThresholds;
use crate::error::ClimateError;
use crate::stats::ClimateStatistics;

/// Classify one statistics record.
///
/// The guards are exhaustive over finite inputs;
/// [`ClimateError::Unclassifiable`] signals a rule-table defect rather
/// than a valid outcome.
pub fn classify(
    stats: &ClimateStatistics,
    thresholds: &ClimateThresholds,
) -> Result<ClimateCode, ClimateError> {
    for rule in &rules::MAIN_CLASS_RULES {
        if (rule.applies)(stats, thresholds) {
            return Ok((rule.build)(stats, thresholds));
        }
    }
    Err(ClimateError::Unclassifiable {
        warmest_c: stats.warmest.celsius,
        coldest_c: stats.coldest.celsius,
        annual_precip_mm: stats.annual_precip_mm,
    })
}
