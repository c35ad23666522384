use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse four-level scale shared by every instrument's severity bands.
/// Drives the colour of a result badge and the dashboard distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityTone {
    Minimal,
    Mild,
    Moderate,
    Severe,
}
