use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The screening questionnaires the engine knows how to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum InstrumentId {
    #[serde(rename = "PHQ-9")]
    Phq9,
    #[serde(rename = "GAD-7")]
    Gad7,
    #[serde(rename = "GHQ-12")]
    Ghq12,
}

impl InstrumentId {
    pub const ALL: [InstrumentId; 3] = [
        InstrumentId::Phq9,
        InstrumentId::Gad7,
        InstrumentId::Ghq12,
    ];

    /// Canonical published name, e.g. `PHQ-9`.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentId::Phq9 => "PHQ-9",
            InstrumentId::Gad7 => "GAD-7",
            InstrumentId::Ghq12 => "GHQ-12",
        }
    }

    /// Short slug used in front-end routes (`phq9`, `gad7`, `ghq`).
    pub fn slug(&self) -> &'static str {
        match self {
            InstrumentId::Phq9 => "phq9",
            InstrumentId::Gad7 => "gad7",
            InstrumentId::Ghq12 => "ghq",
        }
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentId {
    type Err = CoreError;

    /// Accepts the canonical name or a front-end slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phq-9" | "phq9" => Ok(InstrumentId::Phq9),
            "gad-7" | "gad7" => Ok(InstrumentId::Gad7),
            "ghq-12" | "ghq12" | "ghq" => Ok(InstrumentId::Ghq12),
            _ => Err(CoreError::UnknownInstrument(s.to_string())),
        }
    }
}
