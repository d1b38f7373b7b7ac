//! Circulation times
//!
//! Time to displace a volume at the current pump rate: `t = V / Q`, in
//! minutes when `V` is in m³ and `Q` in m³/min. A stopped pump has no
//! circulation time and is reported as `DivisionByZero`.

use super::{checked_div, CalcResult};

/// Minutes to pump `volume_m3` at `flow_m3_per_min`.
pub fn circulation_time(volume_m3: f64, flow_m3_per_min: f64) -> CalcResult {
    checked_div("circulation time", volume_m3, flow_m3_per_min, "pump flow rate")
}

/// Wellbore (with string in hole) circulation time, min.
pub fn wellbore_circulation_time(wellbore_volume_with_tool: f64, flow: f64) -> CalcResult {
    circulation_time(wellbore_volume_with_tool, flow)
}

/// Full-system circulation time including the surface tanks, min.
///
/// `(wellbore_with_tool + surface_volume) / Q`
pub fn total_circulation_time(
    wellbore_volume_with_tool: f64,
    surface_volume: f64,
    flow: f64,
) -> CalcResult {
    circulation_time(wellbore_volume_with_tool + surface_volume, flow)
}

/// Bottoms-up time through the annulus, min.
pub fn annulus_circulation_time(annulus_fluid_volume: f64, flow: f64) -> CalcResult {
    circulation_time(annulus_fluid_volume, flow)
}

/// Surface-to-bit time down the string bore, min.
pub fn tool_circulation_time(tool_internal_volume: f64, flow: f64) -> CalcResult {
    circulation_time(tool_internal_volume, flow)
}

/// Time to circulate the casing with the string at the shoe, min.
pub fn casing_circulation_time(casing_volume_with_tool: f64, flow: f64) -> CalcResult {
    circulation_time(casing_volume_with_tool, flow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydraulics::CalcError;

    const Q: f64 = 0.593_949_604_5;

    #[test]
    fn test_circulation_time_is_volume_over_flow() {
        assert_eq!(circulation_time(30.0, 0.5).unwrap(), 60.0);
    }

    #[test]
    fn test_zero_flow_is_division_by_zero() {
        let err = circulation_time(30.0, 0.0).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero { .. }));
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        let wellbore = 34.101_343_884;
        let surface = 36.0;
        let total = total_circulation_time(wellbore, surface, Q).unwrap();
        let parts = wellbore / Q + surface / Q;
        assert!((total - parts).abs() < 1e-9);
        assert!((total - 118.025_743_855_849).abs() < 1e-6);
    }

    #[test]
    fn test_reference_times() {
        assert!((wellbore_circulation_time(34.101_343_884, Q).unwrap() - 57.414_540_940).abs() < 1e-6);
        assert!((annulus_circulation_time(21.964_657_489, Q).unwrap() - 36.980_675_334).abs() < 1e-6);
        assert!((tool_circulation_time(12.136_686_395, Q).unwrap() - 20.433_865_606).abs() < 1e-6);
        assert!((casing_circulation_time(23.353_545_9, Q).unwrap() - 39.319_069_704).abs() < 1e-6);
    }
}
