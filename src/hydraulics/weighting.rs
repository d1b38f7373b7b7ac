//! Weighting-up calculations
//!
//! Mass of weighting material needed to raise a mud volume from an initial to
//! a target density:
//!
//! ```text
//! m = (ρt − ρi) / (ρm/1000 − ρt) × ρm × V
//! ```
//!
//! with mud densities ρi, ρt in g/cm³, material density ρm in kg/m³ and mud
//! volume V in m³. When the target equals the material density the ratio is
//! undefined: no amount of material can reach it.

use super::{checked_div, finite, CalcResult};
use crate::config::WeightingConfig;

/// Required weighting material mass (kg).
pub fn weighting_material_mass(w: &WeightingConfig) -> CalcResult {
    let rho_i = finite("initial density", w.initial_density_g_cm3)?;
    let rho_t = finite("target density", w.target_density_g_cm3)?;
    let rho_m = finite("weighting material density", w.material_density_kg_m3)?;
    let volume = finite("solution volume", w.solution_volume_m3)?;

    let ratio = checked_div(
        "weighting material mass",
        rho_t - rho_i,
        rho_m / 1000.0 - rho_t,
        "material density - target density",
    )?;
    finite("weighting material mass", ratio * rho_m * volume)
}

/// Bulk volume of the weighting material (m³).
pub fn weighting_material_volume(mass_kg: f64, w: &WeightingConfig) -> CalcResult {
    checked_div(
        "weighting material volume",
        mass_kg,
        w.material_density_kg_m3,
        "weighting material density",
    )
}

/// Mud volume after the material is added (m³).
pub fn final_solution_volume(material_volume_m3: f64, w: &WeightingConfig) -> CalcResult {
    finite("final solution volume", w.solution_volume_m3 + material_volume_m3)
}

/// Number of sacks of weighting material (fractional).
pub fn bag_count(mass_kg: f64, w: &WeightingConfig) -> CalcResult {
    checked_div("bag count", mass_kg, w.bag_mass_kg, "bag mass")
}

/// Weighting material concentration in the original mud volume (kg/m³).
pub fn material_concentration(mass_kg: f64, w: &WeightingConfig) -> CalcResult {
    checked_div(
        "material concentration",
        mass_kg,
        w.solution_volume_m3,
        "solution volume",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydraulics::CalcError;

    #[test]
    fn test_reference_weighting_job() {
        let w = WeightingConfig::default();
        let mass = weighting_material_mass(&w).unwrap();
        // (1.12 − 1.09) / (2.72 − 1.12) × 2720 × 20
        assert!((mass - 1020.0).abs() < 1e-9);

        let volume = weighting_material_volume(mass, &w).unwrap();
        assert!((volume - 0.375).abs() < 1e-12);
        assert!((final_solution_volume(volume, &w).unwrap() - 20.375).abs() < 1e-12);
        assert!((bag_count(mass, &w).unwrap() - 25.5).abs() < 1e-9);
        assert!((material_concentration(mass, &w).unwrap() - 51.0).abs() < 1e-9);
    }

    #[test]
    fn test_target_equal_to_material_density_is_an_error() {
        let w = WeightingConfig {
            target_density_g_cm3: 2.72,
            material_density_kg_m3: 2720.0,
            ..WeightingConfig::default()
        };
        let err = weighting_material_mass(&w).unwrap_err();
        assert!(matches!(
            err,
            CalcError::DivisionByZero { formula: "weighting material mass", .. }
        ));
    }

    #[test]
    fn test_no_density_change_needs_no_material() {
        let w = WeightingConfig {
            target_density_g_cm3: 1.09,
            ..WeightingConfig::default()
        };
        assert_eq!(weighting_material_mass(&w).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_bag_mass_is_an_error() {
        let w = WeightingConfig {
            bag_mass_kg: 0.0,
            ..WeightingConfig::default()
        };
        assert!(bag_count(1020.0, &w).is_err());
    }
}
