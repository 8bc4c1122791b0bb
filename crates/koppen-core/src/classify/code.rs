//! Typed Köppen-Geiger codes.
//!
//! Each letter group is its own enum restricted to the alphabet its main
//! class allows; `Display` renders the published token ("Cfa", "BWh",
//! "EF"). Polar codes carry no further letters.

use std::fmt;

use serde::Serialize;

/// Group-2 letter of tropical (A) climates: f, m, w.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TropicalRegime {
    Rainforest,
    Monsoon,
    Savanna,
}

impl TropicalRegime {
    pub fn letter(self) -> char {
        match self {
            TropicalRegime::Rainforest => 'f',
            TropicalRegime::Monsoon => 'm',
            TropicalRegime::Savanna => 'w',
        }
    }
}

/// Group-2 letter of arid (B) climates: W, S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AridKind {
    Desert,
    Steppe,
}

impl AridKind {
    pub fn letter(self) -> char {
        match self {
            AridKind::Desert => 'W',
            AridKind::Steppe => 'S',
        }
    }
}

/// Group-3 letter of arid climates: h, k.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AridHeat {
    Hot,
    Cold,
}

impl AridHeat {
    pub fn letter(self) -> char {
        match self {
            AridHeat::Hot => 'h',
            AridHeat::Cold => 'k',
        }
    }
}

/// Group-2 letter of temperate (C) and continental (D) climates: s, w, f.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecipRegime {
    DrySummer,
    DryWinter,
    NoDrySeason,
}

impl PrecipRegime {
    pub fn letter(self) -> char {
        match self {
            PrecipRegime::DrySummer => 's',
            PrecipRegime::DryWinter => 'w',
            PrecipRegime::NoDrySeason => 'f',
        }
    }
}

/// Group-3 letter of temperate and continental climates: a, b, c, d.
/// The severe-winter letter is only ever built for continental codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummerWarmth {
    HotSummer,
    WarmSummer,
    CoolSummer,
    SevereWinter,
}

impl SummerWarmth {
    pub fn letter(self) -> char {
        match self {
            SummerWarmth::HotSummer => 'a',
            SummerWarmth::WarmSummer => 'b',
            SummerWarmth::CoolSummer => 'c',
            SummerWarmth::SevereWinter => 'd',
        }
    }
}

/// Group-2 letter of polar (E) climates: T, F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarKind {
    Tundra,
    IceCap,
}

impl PolarKind {
    pub fn letter(self) -> char {
        match self {
            PolarKind::Tundra => 'T',
            PolarKind::IceCap => 'F',
        }
    }
}

/// A complete classification code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateCode {
    Tropical(TropicalRegime),
    Arid(AridKind, AridHeat),
    Temperate(PrecipRegime, SummerWarmth),
    Continental(PrecipRegime, SummerWarmth),
    Polar(PolarKind),
}

impl ClimateCode {
    /// First letter of the code: the main class, one of A B C D E.
    pub fn main_class(&self) -> char {
        match self {
            ClimateCode::Tropical(_) => 'A',
            ClimateCode::Arid(..) => 'B',
            ClimateCode::Temperate(..) => 'C',
            ClimateCode::Continental(..) => 'D',
            ClimateCode::Polar(_) => 'E',
        }
    }
}

impl fmt::Display for ClimateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.main_class())?;
        match self {
            ClimateCode::Tropical(regime) => write!(f, "{}", regime.letter()),
            ClimateCode::Arid(kind, heat) => {
                write!(f, "{}{}", kind.letter(), heat.letter())
            }
            ClimateCode::Temperate(precip, warmth)
            | ClimateCode::Continental(precip, warmth) => {
                write!(f, "{}{}", precip.letter(), warmth.letter())
            }
            ClimateCode::Polar(kind) => write!(f, "{}", kind.letter()),
        }
    }
}

// Serialized as the rendered token, the form downstream reports consume.
impl Serialize for ClimateCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
