//! Mud density calculations: blends, mass additions and kill weight

use super::{checked_div, finite, CalcResult};
use crate::config::{KillConfig, MassAdditionConfig, MixtureConfig};

/// Volume-weighted density of two blended fluids.
///
/// Formula: ρ = (V₁ρ₁ + V₂ρ₂) / (V₁ + V₂)
///
/// The result carries the unit of the inputs. Symmetric in the two fluids.
pub fn mixture_density(v1: f64, d1: f64, v2: f64, d2: f64) -> CalcResult {
    let v1 = finite("volume 1", v1)?;
    let d1 = finite("density 1", d1)?;
    let v2 = finite("volume 2", v2)?;
    let d2 = finite("density 2", d2)?;
    checked_div("mixture density", v1 * d1 + v2 * d2, v1 + v2, "total volume")
}

/// [`mixture_density`] for a configured blend, in g/cm³.
pub fn blend_density(mix: &MixtureConfig) -> CalcResult {
    mixture_density(
        mix.volume_1_m3,
        mix.density_1_g_cm3,
        mix.volume_2_m3,
        mix.density_2_g_cm3,
    )
}

/// Mud density after adding a known mass of material, in g/cm³.
///
/// Formula: ρ = (m·ρm + ρi·ρm·V) / (ρm·V + m) / 1000
///
/// Where m is the material mass (kg), ρm the material density (kg/m³),
/// ρi the initial mud density (kg/m³) and V the mud volume (m³).
pub fn density_after_mass_addition(m: &MassAdditionConfig) -> CalcResult {
    let mass = finite("material mass", m.material_mass_kg)?;
    let rho_m = finite("material density", m.material_density_kg_m3)?;
    let rho_i = finite("initial density", m.initial_density_kg_m3)?;
    let volume = finite("solution volume", m.solution_volume_m3)?;

    let kg_m3 = checked_div(
        "density after mass addition",
        mass * rho_m + rho_i * rho_m * volume,
        rho_m * volume + mass,
        "total mass-volume term",
    )?;
    finite("density after mass addition", kg_m3 / 1000.0)
}

/// Mud density balancing the shut-in standpipe pressure, in g/cm³.
///
/// Formula: ρe = ρ + P / (H × 0.1)
///
/// Where P is the overpressure (atm) and H the true vertical depth (m);
/// 0.1 atm per metre per g/cm³ is the hydrostatic gradient of fresh water.
pub fn equilibrium_density(kill: &KillConfig) -> CalcResult {
    let rho = finite("mud density", kill.mud_density_g_cm3)?;
    let increment = checked_div(
        "equilibrium density",
        kill.standpipe_overpressure_atm,
        kill.true_vertical_depth_m * 0.1,
        "true vertical depth",
    )?;
    finite("equilibrium density", rho + increment)
}
