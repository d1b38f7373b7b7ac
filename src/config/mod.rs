//! Well Plan Configuration Module
//!
//! Every input of the circulation worksheet (geometry, pump, fluids) lives in
//! one immutable [`WellPlan`] record loaded from TOML. Formulas receive the
//! sections they need by reference; nothing reads configuration globally.
//!
//! ## Loading Order
//!
//! 1. `MUDCALC_CONFIG` environment variable (path to TOML file)
//! 2. `well_plan.toml` in the current working directory
//! 3. Built-in defaults (the reference well from the rig worksheet)
//!
//! ## Usage
//!
//! ```ignore
//! let plan = WellPlan::load();
//! let flow = hydraulics::flow_rate_m3_per_min(&plan.pump)?;
//! ```

mod well_plan;
pub mod validation;

pub use well_plan::*;
