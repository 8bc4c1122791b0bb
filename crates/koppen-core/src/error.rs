//! Error taxonomy: input rejection and the defect-signalling
//! unclassifiable case. Everything propagates to the caller; the
//! library never retries or defaults.

use thiserror::Error;

/// Input rejected before any statistic is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A monthly series did not hold exactly 12 values.
    #[error("expected 12 monthly values, got {len}")]
    Length { len: usize },
    /// A monthly value was NaN or infinite. `month` is 0-based, January = 0.
    #[error("non-finite value at month index {month}")]
    NonFinite { month: usize },
    /// Hemisphere text did not name either hemisphere.
    #[error("unknown hemisphere {0:?}, expected \"northern\" or \"southern\"")]
    UnknownHemisphere(String),
}

/// Any failure of the classification pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClimateError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    /// The rule table is exhaustive over finite inputs, so this only
    /// surfaces on a rule-table defect. It is propagated, never silently
    /// mapped to an "unknown" code.
    #[error(
        "no classification rule matched (warmest {warmest_c} °C, \
         coldest {coldest_c} °C, {annual_precip_mm} mm/yr)"
    )]
    Unclassifiable {
        warmest_c: f64,
        coldest_c: f64,
        annual_precip_mm: f64,
    },
}
