//! Result packaging for downstream consumers.

use serde::Serialize;

use crate::classify::ClimateCode;
use crate::stats::ClimateStatistics;

/// A classification code together with the statistics that produced it.
/// Both fields are exposed by name: display collaborators read `code`,
/// plotting collaborators read the statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub code: ClimateCode,
    pub statistics: ClimateStatistics,
}

impl ClassificationResult {
    /// Package a code with its statistics. No computation happens here.
    pub fn new(code: ClimateCode, statistics: ClimateStatistics) -> Self {
        Self { code, statistics }
    }
}
