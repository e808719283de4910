//! Closed registry of Eurostat geo codes.
//!
//! The set is fixed at compile time: every code that appears in the raw
//! life-expectancy extract is listed here, in the order Eurostat publishes
//! them. No codes can be added at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Prefixes of supranational aggregates (EU-wide, euro area, EEA, EFTA).
const AGGREGATE_PREFIXES: [&str; 4] = ["EU", "EA", "EEA", "EFTA"];

/// Codes excluded from `countries()` even though they escape the prefix rule.
/// UK is kept out of the country subset alongside the DE_TOT total series.
const EXCLUDED_CODES: [&str; 2] = ["UK", "DE_TOT"];

/// A Eurostat geo code present in the life-expectancy dataset.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    AT,
    BE,
    BG,
    CH,
    CY,
    CZ,
    DK,
    EE,
    EL,
    ES,
    EU27_2020,
    FI,
    FR,
    HR,
    HU,
    IS,
    IT,
    LI,
    LT,
    LU,
    LV,
    MT,
    NL,
    NO,
    PL,
    PT,
    RO,
    SE,
    SI,
    SK,
    DE,
    DE_TOT,
    AL,
    EA18,
    EA19,
    EFTA,
    IE,
    ME,
    MK,
    RS,
    AM,
    AZ,
    GE,
    TR,
    UA,
    BY,
    EEA30_2007,
    EEA31,
    EU27_2007,
    EU28,
    UK,
    XK,
    FX,
    MD,
    SM,
    RU,
}

impl Region {
    /// All regions, in declaration order.
    pub const ALL: [Region; 56] = [
        Region::AT,
        Region::BE,
        Region::BG,
        Region::CH,
        Region::CY,
        Region::CZ,
        Region::DK,
        Region::EE,
        Region::EL,
        Region::ES,
        Region::EU27_2020,
        Region::FI,
        Region::FR,
        Region::HR,
        Region::HU,
        Region::IS,
        Region::IT,
        Region::LI,
        Region::LT,
        Region::LU,
        Region::LV,
        Region::MT,
        Region::NL,
        Region::NO,
        Region::PL,
        Region::PT,
        Region::RO,
        Region::SE,
        Region::SI,
        Region::SK,
        Region::DE,
        Region::DE_TOT,
        Region::AL,
        Region::EA18,
        Region::EA19,
        Region::EFTA,
        Region::IE,
        Region::ME,
        Region::MK,
        Region::RS,
        Region::AM,
        Region::AZ,
        Region::GE,
        Region::TR,
        Region::UA,
        Region::BY,
        Region::EEA30_2007,
        Region::EEA31,
        Region::EU27_2007,
        Region::EU28,
        Region::UK,
        Region::XK,
        Region::FX,
        Region::MD,
        Region::SM,
        Region::RU,
    ];

    /// Returns the geo code as it appears in the source data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::AT => "AT",
            Region::BE => "BE",
            Region::BG => "BG",
            Region::CH => "CH",
            Region::CY => "CY",
            Region::CZ => "CZ",
            Region::DK => "DK",
            Region::EE => "EE",
            Region::EL => "EL",
            Region::ES => "ES",
            Region::EU27_2020 => "EU27_2020",
            Region::FI => "FI",
            Region::FR => "FR",
            Region::HR => "HR",
            Region::HU => "HU",
            Region::IS => "IS",
            Region::IT => "IT",
            Region::LI => "LI",
            Region::LT => "LT",
            Region::LU => "LU",
            Region::LV => "LV",
            Region::MT => "MT",
            Region::NL => "NL",
            Region::NO => "NO",
            Region::PL => "PL",
            Region::PT => "PT",
            Region::RO => "RO",
            Region::SE => "SE",
            Region::SI => "SI",
            Region::SK => "SK",
            Region::DE => "DE",
            Region::DE_TOT => "DE_TOT",
            Region::AL => "AL",
            Region::EA18 => "EA18",
            Region::EA19 => "EA19",
            Region::EFTA => "EFTA",
            Region::IE => "IE",
            Region::ME => "ME",
            Region::MK => "MK",
            Region::RS => "RS",
            Region::AM => "AM",
            Region::AZ => "AZ",
            Region::GE => "GE",
            Region::TR => "TR",
            Region::UA => "UA",
            Region::BY => "BY",
            Region::EEA30_2007 => "EEA30_2007",
            Region::EEA31 => "EEA31",
            Region::EU27_2007 => "EU27_2007",
            Region::EU28 => "EU28",
            Region::UK => "UK",
            Region::XK => "XK",
            Region::FX => "FX",
            Region::MD => "MD",
            Region::SM => "SM",
            Region::RU => "RU",
        }
    }

    /// Returns true if `code` is a known geo code (exact match).
    pub fn is_valid(code: &str) -> bool {
        Region::ALL.iter().any(|region| region.as_str() == code)
    }

    /// Returns true if this code denotes an actual country rather than a
    /// supranational aggregate or total series.
    pub fn is_country(&self) -> bool {
        let code = self.as_str();
        !AGGREGATE_PREFIXES
            .iter()
            .any(|prefix| code.starts_with(prefix))
            && !EXCLUDED_CODES.contains(&code)
    }

    /// All actual countries, in declaration order.
    pub fn countries() -> Vec<Region> {
        Region::ALL
            .iter()
            .copied()
            .filter(Region::is_country)
            .collect()
    }

    fn valid_codes() -> String {
        let codes: Vec<&str> = Region::ALL.iter().map(Region::as_str).collect();
        codes.join(", ")
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = PipelineError;

    /// Parse a geo code. The match is exact: no case folding, no aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| PipelineError::InvalidRegion {
                code: s.to_string(),
                valid: Region::valid_codes(),
            })
    }
}
