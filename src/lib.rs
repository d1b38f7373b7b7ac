//! mudcalc: Drilling Fluid Circulation Calculator
//!
//! Closed-form well-planning calculations for the mud system.
//!
//! ## Architecture
//!
//! - **Config**: immutable `WellPlan` loaded from TOML, validated at load
//! - **Hydraulics**: pure formulas (volumes, pump output, circulation
//!   times, weighting, densities, solids-control efficiency)
//! - **Report**: evaluates every formula once and logs the results
//! - **API**: axum demo shell exposing the column volume formula

pub mod api;
pub mod config;
pub mod hydraulics;
pub mod report;

// Re-export well plan configuration
pub use config::{ConfigError, WellPlan};

// Re-export formula error types
pub use hydraulics::{CalcError, CalcResult};

// Re-export report
pub use report::{CirculationReport, ReportLine};
