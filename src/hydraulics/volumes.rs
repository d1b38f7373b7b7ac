//! Casing, open-hole, drill string and annulus volumes
//!
//! Every area term is `0.785 × D²` ([`CIRCLE_AREA_FACTOR`]). Diameters and
//! lengths are in metres, volumes in m³.
//!
//! Composite volumes take the volumes they are built from as arguments
//! (e.g. `casing_volume_with_tool(casing, tool)`), so the dependency between
//! formulas is visible at the call site.

use super::{finite, CalcError, CalcResult, CIRCLE_AREA_FACTOR};
use crate::config::{CasingConfig, DrillStringConfig, OpenHoleConfig};

fn non_negative(quantity: &'static str, value: f64) -> CalcResult {
    let value = finite(quantity, value)?;
    if value < 0.0 {
        return Err(CalcError::InvalidInput {
            quantity,
            value,
            reason: "cannot be negative",
        });
    }
    Ok(value)
}

/// Volume of a cylinder: `0.785 × D² × L`.
pub fn cylinder_volume(diameter: f64, length: f64) -> CalcResult {
    let d = non_negative("diameter", diameter)?;
    let l = non_negative("length", length)?;
    finite("cylinder volume", CIRCLE_AREA_FACTOR * d.powi(2) * l)
}

/// Volume between two concentric cylinders: `0.785 × (OD² − ID²) × L`.
///
/// This is the steel displacement of a pipe section.
pub fn annular_volume(outer_diameter: f64, inner_diameter: f64, length: f64) -> CalcResult {
    let od = non_negative("outer diameter", outer_diameter)?;
    let id = non_negative("inner diameter", inner_diameter)?;
    let l = non_negative("length", length)?;
    if id > od {
        return Err(CalcError::InvalidInput {
            quantity: "inner diameter",
            value: id,
            reason: "exceeds the outer diameter",
        });
    }
    finite("annular volume", CIRCLE_AREA_FACTOR * (od.powi(2) - id.powi(2)) * l)
}

/// Internal volume of the casing from surface to the shoe (m³).
pub fn casing_volume(casing: &CasingConfig) -> CalcResult {
    cylinder_volume(casing.inner_diameter_m, casing.shoe_depth_m)
}

/// Metal displacement of the drill pipe (m³).
///
/// Drill pipe runs from surface down to the top of the landing string and
/// drill collars.
pub fn drill_pipe_volume(ds: &DrillStringConfig) -> CalcResult {
    let length = ds.tool_depth_m - ds.landing_string_length_m - ds.drill_collar_length_m;
    annular_volume(
        ds.drill_pipe_outer_diameter_m,
        ds.drill_pipe_inner_diameter_m,
        length,
    )
}

/// Metal displacement of the landing string (m³).
pub fn landing_string_volume(ds: &DrillStringConfig) -> CalcResult {
    annular_volume(
        ds.landing_string_outer_diameter_m,
        ds.landing_string_inner_diameter_m,
        ds.landing_string_length_m,
    )
}

/// Metal displacement of the drill collars (m³).
pub fn drill_collar_volume(ds: &DrillStringConfig) -> CalcResult {
    annular_volume(
        ds.drill_collar_outer_diameter_m,
        ds.drill_collar_inner_diameter_m,
        ds.drill_collar_length_m,
    )
}

/// Metal displacement of the whole string: drill pipe + landing string + collars (m³).
pub fn tool_volume(ds: &DrillStringConfig) -> CalcResult {
    finite(
        "tool volume",
        drill_pipe_volume(ds)? + landing_string_volume(ds)? + drill_collar_volume(ds)?,
    )
}

/// Casing volume left for fluid with the string run to the shoe (m³).
pub fn casing_volume_with_tool(casing_volume: f64, tool_volume: f64) -> CalcResult {
    finite("casing volume with tool", casing_volume - tool_volume)
}

/// Casing volume plus the open hole below the shoe, scaled for washout (m³).
pub fn wellbore_volume(casing: &CasingConfig, open_hole: &OpenHoleConfig) -> CalcResult {
    let open_hole_length = open_hole.hole_depth_m - casing.shoe_depth_m;
    let cavernosity = non_negative("cavernosity coefficient", open_hole.cavernosity_coefficient)?;
    let open_hole_volume = cylinder_volume(open_hole.bit_diameter_m, open_hole_length)? * cavernosity;
    finite("wellbore volume", casing_volume(casing)? + open_hole_volume)
}

/// Wellbore volume minus the string's metal displacement (m³).
pub fn wellbore_volume_with_tool(wellbore_volume: f64, tool_volume: f64) -> CalcResult {
    finite("wellbore volume with tool", wellbore_volume - tool_volume)
}

/// Open-hole section only: wellbore volume minus casing volume (m³).
pub fn annulus_volume(wellbore_volume: f64, casing_volume: f64) -> CalcResult {
    finite("annulus volume", wellbore_volume - casing_volume)
}

/// Fluid inside the string (m³).
///
/// The drill pipe bore is measured down to the hole depth, with the landing
/// string and collar bores taking their own lengths.
pub fn tool_internal_volume(ds: &DrillStringConfig, open_hole: &OpenHoleConfig) -> CalcResult {
    let drill_pipe_length =
        open_hole.hole_depth_m - ds.drill_collar_length_m - ds.landing_string_length_m;
    let internal = cylinder_volume(ds.drill_collar_inner_diameter_m, ds.drill_collar_length_m)?
        + cylinder_volume(ds.landing_string_inner_diameter_m, ds.landing_string_length_m)?
        + cylinder_volume(ds.drill_pipe_inner_diameter_m, drill_pipe_length)?;
    finite("tool internal volume", internal)
}

/// Fluid in the annulus around the string (m³).
///
/// Wellbore volume minus the closed-end displacement (outer diameters) of
/// every string section.
pub fn annulus_fluid_volume(
    wellbore_volume: f64,
    ds: &DrillStringConfig,
    open_hole: &OpenHoleConfig,
) -> CalcResult {
    let drill_pipe_length =
        open_hole.hole_depth_m - ds.drill_collar_length_m - ds.landing_string_length_m;
    let closed_end = cylinder_volume(ds.drill_collar_outer_diameter_m, ds.drill_collar_length_m)?
        + cylinder_volume(ds.landing_string_outer_diameter_m, ds.landing_string_length_m)?
        + cylinder_volume(ds.drill_pipe_outer_diameter_m, drill_pipe_length)?;
    finite("annulus fluid volume", wellbore_volume - closed_end)
}

/// Everything in circulation: wellbore with tool plus the surface tanks (m³).
pub fn total_circulation_volume(wellbore_volume_with_tool: f64, surface_volume: f64) -> CalcResult {
    finite(
        "total circulation volume",
        wellbore_volume_with_tool + surface_volume,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WellPlan;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_cylinder_volume_formula() {
        for (d, l) in [(0.13, 2283.0), (0.2, 10.0), (1.0, 1.0)] {
            let v = cylinder_volume(d, l).unwrap();
            assert!(close(v, 0.785 * d * d * l));
        }
    }

    #[test]
    fn test_cylinder_volume_rejects_negative_length() {
        let err = cylinder_volume(0.13, -5.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { quantity: "length", .. }));
    }

    #[test]
    fn test_annular_volume_rejects_inverted_bore() {
        assert!(annular_volume(0.07, 0.09, 100.0).is_err());
        assert!(close(annular_volume(0.09, 0.09, 100.0).unwrap(), 0.0));
    }

    #[test]
    fn test_reference_casing_volume() {
        let plan = WellPlan::default();
        assert!(close(casing_volume(&plan.casing).unwrap(), 30.287_419_5));
    }

    #[test]
    fn test_reference_tool_volume_is_drill_pipe_only() {
        let plan = WellPlan::default();
        let dp = drill_pipe_volume(&plan.drill_string).unwrap();
        assert!(close(dp, 6.933_873_6));
        assert!(close(landing_string_volume(&plan.drill_string).unwrap(), 0.0));
        assert!(close(drill_collar_volume(&plan.drill_string).unwrap(), 0.0));
        assert!(close(tool_volume(&plan.drill_string).unwrap(), dp));
    }

    #[test]
    fn test_bha_shortens_drill_pipe() {
        let mut plan = WellPlan::default();
        plan.drill_string.drill_collar_outer_diameter_m = 0.108;
        plan.drill_string.drill_collar_inner_diameter_m = 0.05;
        plan.drill_string.drill_collar_length_m = 100.0;
        let ds = &plan.drill_string;

        let dp = drill_pipe_volume(ds).unwrap();
        assert!(close(dp, 0.785 * (0.089f64.powi(2) - 0.071f64.powi(2)) * 2967.0));
        let dc = drill_collar_volume(ds).unwrap();
        assert!(close(dc, 0.785 * (0.108f64.powi(2) - 0.05f64.powi(2)) * 100.0));
        assert!(close(tool_volume(ds).unwrap(), dp + dc));
    }

    #[test]
    fn test_casing_volume_with_tool_is_difference() {
        let plan = WellPlan::default();
        let casing = casing_volume(&plan.casing).unwrap();
        let tool = tool_volume(&plan.drill_string).unwrap();
        let with_tool = casing_volume_with_tool(casing, tool).unwrap();
        assert!(close(with_tool, casing - tool));
        assert!(close(with_tool, 23.353_545_9));

        // Order of evaluation does not matter: all inputs are explicit.
        let tool_again = tool_volume(&plan.drill_string).unwrap();
        let casing_again = casing_volume(&plan.casing).unwrap();
        assert_eq!(casing_volume_with_tool(casing_again, tool_again).unwrap(), with_tool);
    }

    #[test]
    fn test_reference_wellbore_volumes() {
        let plan = WellPlan::default();
        let wellbore = wellbore_volume(&plan.casing, &plan.open_hole).unwrap();
        assert!(close(wellbore, 41.035_217_484));

        let casing = casing_volume(&plan.casing).unwrap();
        assert!(close(annulus_volume(wellbore, casing).unwrap(), 10.747_797_984));

        let tool = tool_volume(&plan.drill_string).unwrap();
        let with_tool = wellbore_volume_with_tool(wellbore, tool).unwrap();
        assert!(close(with_tool, 34.101_343_884));

        let total = total_circulation_volume(with_tool, plan.pump.surface_volume_m3).unwrap();
        assert!(close(total, 70.101_343_884));
    }

    #[test]
    fn test_reference_string_fluid_volumes() {
        let plan = WellPlan::default();
        let internal = tool_internal_volume(&plan.drill_string, &plan.open_hole).unwrap();
        assert!(close(internal, 12.136_686_395));

        let wellbore = wellbore_volume(&plan.casing, &plan.open_hole).unwrap();
        let annulus =
            annulus_fluid_volume(wellbore, &plan.drill_string, &plan.open_hole).unwrap();
        assert!(close(annulus, 21.964_657_489));
    }

    #[test]
    fn test_overflow_is_invalid_not_infinite() {
        let err = cylinder_volume(1e200, 1e200).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { quantity: "cylinder volume", .. }));

        let err = annular_volume(1e160, 0.0, 1e300).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { quantity: "annular volume", .. }));

        let mut plan = WellPlan::default();
        plan.open_hole.cavernosity_coefficient = 1e308;
        plan.open_hole.bit_diameter_m = 1e10;
        assert!(wellbore_volume(&plan.casing, &plan.open_hole).is_err());
    }

    #[test]
    fn test_shoe_below_hole_is_invalid() {
        let mut plan = WellPlan::default();
        plan.casing.shoe_depth_m = 3500.0;
        assert!(wellbore_volume(&plan.casing, &plan.open_hole).is_err());
    }
}
