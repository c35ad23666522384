//! peacecode-core
//!
//! Pure domain types shared by the screening engine and its callers:
//! instrument identifiers, response sets, screening results and the
//! caller-owned result history. No scoring logic lives here.

pub mod error;
pub mod models;
