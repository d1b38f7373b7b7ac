//! Hydraulics Module
//!
//! Closed-form circulation and mud-conditioning calculations for well
//! construction planning. Every function here is pure: inputs come from
//! explicit [`WellPlan`](crate::config::WellPlan) sections or from the
//! results of other formulas, never from shared state.
//!
//! ## Formula groups
//! - `volumes` - casing, open hole, drill string and annulus volumes
//! - `pump` - mud pump output
//! - `circulation` - bottoms-up / full-circulation times
//! - `weighting` - barite (or chalk) quantities for a density increase
//! - `density` - mixture density, mass addition, kill weight
//! - `cleaning` - solids-control equipment efficiency
//!
//! All formulas return `Result<f64, CalcError>`. A zero denominator or a
//! non-finite result is reported as an error instead of leaking `inf`/`NaN`.

pub mod circulation;
pub mod cleaning;
pub mod density;
pub mod pump;
pub mod volumes;
pub mod weighting;

pub use circulation::{
    annulus_circulation_time, casing_circulation_time, circulation_time,
    tool_circulation_time, total_circulation_time, wellbore_circulation_time,
};
pub use cleaning::cleaning_efficiency_percent;
pub use density::{blend_density, density_after_mass_addition, equilibrium_density, mixture_density};
pub use pump::{flow_rate_l_per_s, flow_rate_m3_per_min};
pub use volumes::{
    annular_volume, annulus_fluid_volume, annulus_volume, casing_volume,
    casing_volume_with_tool, cylinder_volume, drill_collar_volume, drill_pipe_volume,
    landing_string_volume, tool_internal_volume, tool_volume, total_circulation_volume,
    wellbore_volume, wellbore_volume_with_tool,
};
pub use weighting::{
    bag_count, final_solution_volume, material_concentration, weighting_material_mass,
    weighting_material_volume,
};

use thiserror::Error;

/// Field-practice approximation of π/4 used by every area term.
///
/// Rig worksheets use 0.785 rather than π/4; results are kept consistent
/// with those sheets.
pub const CIRCLE_AREA_FACTOR: f64 = 0.785;

/// Denominators smaller than this in magnitude are treated as zero.
pub const ZERO_EPSILON: f64 = 1e-12;

/// Failure of a single formula evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("{formula}: division by zero ({denominator} evaluates to 0)")]
    DivisionByZero {
        formula: &'static str,
        denominator: &'static str,
    },

    #[error("{quantity} = {value} is invalid: {reason}")]
    InvalidInput {
        quantity: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type CalcResult = Result<f64, CalcError>;

/// Reject NaN and infinite inputs before they reach a formula.
pub(crate) fn finite(quantity: &'static str, value: f64) -> CalcResult {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput {
            quantity,
            value,
            reason: "must be a finite number",
        })
    }
}

/// Divide, failing on a zero denominator instead of producing `inf`.
pub(crate) fn checked_div(
    formula: &'static str,
    numerator: f64,
    denominator: f64,
    denominator_name: &'static str,
) -> CalcResult {
    if denominator.abs() < ZERO_EPSILON {
        return Err(CalcError::DivisionByZero {
            formula,
            denominator: denominator_name,
        });
    }
    finite(formula, numerator / denominator)
}
