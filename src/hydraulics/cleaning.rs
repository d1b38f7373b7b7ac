//! Solids-control (cleaning equipment) efficiency from a dilution record
//!
//! The solids that stayed in the mud over an interval are backed out of the
//! density change and the water added, then compared with the rock volume
//! drilled:
//!
//! ```text
//! retained = (V₀(ρf − ρ₀) + Vw(ρf − ρw)) / (ρs − ρf)
//! drilled  = π × (D/1000)² × (100 + k) × L / 400
//! E        = (1 − retained / drilled) × 100
//! ```
//!
//! The result is not clamped: inconsistent records can yield values outside
//! 0-100 %.

use super::{checked_div, finite, CalcResult};
use crate::config::DilutionConfig;

/// π as written on the dilution worksheet.
const WORKSHEET_PI: f64 = 3.1416;

/// Drilled-solids removal efficiency, in percent.
pub fn cleaning_efficiency_percent(d: &DilutionConfig) -> CalcResult {
    let rho_f = finite("final mud density", d.final_mud_density_kg_m3)?;

    let density_balance = d.initial_mud_volume_m3 * (rho_f - d.initial_mud_density_kg_m3)
        + d.added_water_volume_m3 * (rho_f - d.water_density_kg_m3);
    let retained_solids = checked_div(
        "cleaning efficiency",
        density_balance,
        d.drilled_solids_density_kg_m3 - rho_f,
        "solids density - final mud density",
    )?;

    let diameter_m = d.wellbore_diameter_mm / 1000.0;
    let drilled_volume =
        WORKSHEET_PI * diameter_m.powi(2) * (100.0 + d.cavernosity_percent) * d.drilled_interval_m
            / 400.0;
    let retained_fraction = checked_div(
        "cleaning efficiency",
        retained_solids,
        drilled_volume,
        "drilled volume",
    )?;

    finite("cleaning efficiency", (1.0 - retained_fraction) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydraulics::CalcError;

    #[test]
    fn test_reference_cleaning_efficiency() {
        let e = cleaning_efficiency_percent(&DilutionConfig::default()).unwrap();
        assert!((e - 48.737_580_922_232_32).abs() < 1e-9);
    }

    #[test]
    fn test_no_solids_retained_is_full_efficiency() {
        let d = DilutionConfig {
            final_mud_density_kg_m3: 1170.0,
            added_water_volume_m3: 0.0,
            ..DilutionConfig::default()
        };
        assert!((cleaning_efficiency_percent(&d).unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_result_is_not_clamped() {
        let d = DilutionConfig {
            drilled_interval_m: 1.0,
            ..DilutionConfig::default()
        };
        assert!(cleaning_efficiency_percent(&d).unwrap() < 0.0);
    }

    #[test]
    fn test_zero_interval_is_an_error() {
        let d = DilutionConfig {
            drilled_interval_m: 0.0,
            ..DilutionConfig::default()
        };
        assert!(matches!(
            cleaning_efficiency_percent(&d),
            Err(CalcError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_solids_density_equal_to_mud_density_is_an_error() {
        let d = DilutionConfig {
            drilled_solids_density_kg_m3: 1165.0,
            ..DilutionConfig::default()
        };
        assert!(cleaning_efficiency_percent(&d).is_err());
    }
}
