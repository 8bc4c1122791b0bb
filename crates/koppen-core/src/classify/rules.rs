//! The ordered main-class rule table.
//!
//! Several class conditions can hold at once at boundary statistics; the
//! published scheme resolves the tie by priority, testing polar before
//! arid before tropical before temperate before continental. The table
//! makes that order a value tests can inspect instead of an artifact of
//! nesting depth.

use crate::config::ClimateThresholds;
use crate::stats::ClimateStatistics;

use super::code::{
    AridHeat, AridKind, ClimateCode, PolarKind, PrecipRegime, SummerWarmth,
    TropicalRegime,
};

/// One main-class rule: a guard plus a code builder. The guards are
/// jointly exhaustive over finite statistics; the builder is only called
/// when its guard passed.
pub struct ClassRule {
    pub name: &'static str,
    pub applies: fn(&ClimateStatistics, &ClimateThresholds) -> bool,
    pub build: fn(&ClimateStatistics, &ClimateThresholds) -> ClimateCode,
}

/// Main-class rules in priority order: E, B, A, C, D.
pub const MAIN_CLASS_RULES: [ClassRule; 5] = [
    ClassRule { name: "polar", applies: polar_applies, build: polar_build },
    ClassRule { name: "arid", applies: arid_applies, build: arid_build },
    ClassRule { name: "tropical", applies: tropical_applies, build: tropical_build },
    ClassRule { name: "temperate", applies: temperate_applies, build: temperate_build },
    ClassRule { name: "continental", applies: continental_applies, build: continental_build },
];

// ── E: polar ──────────────────────────────────────────────────────────────────

// Strict comparison: a warmest month of exactly 10.0 °C is not polar.
fn polar_applies(s: &ClimateStatistics, t: &ClimateThresholds) -> bool {
    s.warmest.celsius < t.polar_summer_max_c
}

fn polar_build(s: &ClimateStatistics, t: &ClimateThresholds) -> ClimateCode {
    let kind = if s.warmest.celsius < t.ice_cap_max_c {
        PolarKind::IceCap
    } else {
        PolarKind::Tundra
    };
    ClimateCode::Polar(kind)
}

// ── B: arid ───────────────────────────────────────────────────────────────────

fn arid_applies(s: &ClimateStatistics, t: &ClimateThresholds) -> bool {
    s.annual_precip_mm < t.steppe_factor * s.aridity_threshold_mm
}

fn arid_build(s: &ClimateStatistics, t: &ClimateThresholds) -> ClimateCode {
    let kind = if s.annual_precip_mm < t.desert_factor * s.aridity_threshold_mm {
        AridKind::Desert
    } else {
        AridKind::Steppe
    };
    let heat = if s.mean_annual_temp_c >= t.hot_arid_mean_min_c {
        AridHeat::Hot
    } else {
        AridHeat::Cold
    };
    ClimateCode::Arid(kind, heat)
}

// ── A: tropical ───────────────────────────────────────────────────────────────

fn tropical_applies(s: &ClimateStatistics, t: &ClimateThresholds) -> bool {
    s.coldest.celsius >= t.tropical_coldest_min_c
}

fn tropical_build(s: &ClimateStatistics, t: &ClimateThresholds) -> ClimateCode {
    let monsoon_line_mm =
        t.monsoon_intercept_mm - s.annual_precip_mm / t.monsoon_divisor;
    let regime = if s.driest_month_mm >= t.rainforest_driest_min_mm {
        TropicalRegime::Rainforest
    } else if s.driest_month_mm >= monsoon_line_mm {
        TropicalRegime::Monsoon
    } else {
        TropicalRegime::Savanna
    };
    ClimateCode::Tropical(regime)
}

// ── C: temperate ──────────────────────────────────────────────────────────────

// Inclusive lower bound: a coldest month of exactly −3.0 °C is temperate,
// not continental. The upper bound is the tropical line, already ruled out
// by table order.
fn temperate_applies(s: &ClimateStatistics, t: &ClimateThresholds) -> bool {
    s.coldest.celsius >= t.temperate_coldest_min_c
        && s.coldest.celsius < t.tropical_coldest_min_c
}

fn temperate_build(s: &ClimateStatistics, t: &ClimateThresholds) -> ClimateCode {
    ClimateCode::Temperate(precip_regime(s, t), summer_warmth(s, t, false))
}

// ── D: continental ────────────────────────────────────────────────────────────

fn continental_applies(s: &ClimateStatistics, t: &ClimateThresholds) -> bool {
    s.coldest.celsius < t.temperate_coldest_min_c
        && s.warmest.celsius >= t.polar_summer_max_c
}

fn continental_build(s: &ClimateStatistics, t: &ClimateThresholds) -> ClimateCode {
    ClimateCode::Continental(precip_regime(s, t), summer_warmth(s, t, true))
}

// ── Shared C/D letter groups ──────────────────────────────────────────────────

/// Group-2 letter shared by C and D: dry summer, dry winter, or neither.
fn precip_regime(s: &ClimateStatistics, t: &ClimateThresholds) -> PrecipRegime {
    let dry_summer = s.summer.driest_mm < t.dry_summer_max_mm
        && s.summer.driest_mm < s.winter.wettest_mm / t.dry_summer_winter_ratio;
    if dry_summer {
        PrecipRegime::DrySummer
    } else if s.winter.driest_mm < s.summer.wettest_mm / t.dry_winter_summer_ratio {
        PrecipRegime::DryWinter
    } else {
        PrecipRegime::NoDrySeason
    }
}

/// Group-3 letter shared by C and D. The severe-winter letter only exists
/// in the continental alphabet and is checked between b and c.
fn summer_warmth(
    s: &ClimateStatistics,
    t: &ClimateThresholds,
    severe_winter_allowed: bool,
) -> SummerWarmth {
    if s.warmest.celsius >= t.hot_summer_min_c {
        SummerWarmth::HotSummer
    } else if s.warm_month_count >= t.warm_months_for_b {
        SummerWarmth::WarmSummer
    } else if severe_winter_allowed && s.coldest.celsius < t.severe_winter_max_c {
        SummerWarmth::SevereWinter
    } else {
        SummerWarmth::CoolSummer
    }
}
