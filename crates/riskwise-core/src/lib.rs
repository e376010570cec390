//! riskwise-core
//!
//! Pure domain types for the risk screening service. No HTTP, no storage —
//! this is the shared vocabulary between the scoring engine and its callers.

pub mod error;
pub mod models;
