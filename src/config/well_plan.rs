//! Well Plan - every input of the circulation worksheet as a TOML value
//!
//! Each section struct implements `Default` with the reference well used on
//! the rig worksheet, so an empty or partial file still produces a complete
//! plan. The plan is immutable once loaded and is passed by reference into
//! the hydraulics formulas.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable holding an explicit well plan path.
pub const CONFIG_ENV_VAR: &str = "MUDCALC_CONFIG";

/// Well plan looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "well_plan.toml";

// ============================================================================
// Top-Level Plan
// ============================================================================

/// Root configuration: geometry, pump, fluids and server settings for one well.
///
/// Load with `WellPlan::load()` which searches:
/// 1. `$MUDCALC_CONFIG` env var
/// 2. `./well_plan.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellPlan {
    /// Well / rig identification
    #[serde(default)]
    pub well: WellInfo,

    /// Last casing string run
    #[serde(default)]
    pub casing: CasingConfig,

    /// Open hole below the casing shoe
    #[serde(default)]
    pub open_hole: OpenHoleConfig,

    /// Drill string in the hole
    #[serde(default)]
    pub drill_string: DrillStringConfig,

    /// Mud pump and surface tanks
    #[serde(default)]
    pub pump: PumpConfig,

    /// Weighting-up job (target density known, material mass unknown)
    #[serde(default)]
    pub weighting: WeightingConfig,

    /// Mass addition (material mass known, final density unknown)
    #[serde(default)]
    pub mass_addition: MassAdditionConfig,

    /// Kill-weight inputs
    #[serde(default)]
    pub kill: KillConfig,

    /// Two-fluid blends
    #[serde(default = "default_mixtures")]
    pub mixtures: Vec<MixtureConfig>,

    /// Dilution record for solids-control efficiency
    #[serde(default)]
    pub dilution: DilutionConfig,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for WellPlan {
    fn default() -> Self {
        Self {
            well: WellInfo::default(),
            casing: CasingConfig::default(),
            open_hole: OpenHoleConfig::default(),
            drill_string: DrillStringConfig::default(),
            pump: PumpConfig::default(),
            weighting: WeightingConfig::default(),
            mass_addition: MassAdditionConfig::default(),
            kill: KillConfig::default(),
            mixtures: default_mixtures(),
            dilution: DilutionConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl WellPlan {
    /// Load the plan using the standard search order:
    /// 1. `$MUDCALC_CONFIG` environment variable
    /// 2. `./well_plan.toml` in the current working directory
    /// 3. Built-in defaults (reference worksheet values)
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(plan) => {
                        info!(path = %p.display(), well = %plan.well.name, "Loaded well plan from {CONFIG_ENV_VAR}");
                        return plan;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load well plan from {CONFIG_ENV_VAR}, falling back");
                    }
                }
            } else {
                warn!(path = %path, "{CONFIG_ENV_VAR} points to non-existent file, falling back");
            }
        }

        // 2. Check ./well_plan.toml
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(plan) => {
                    info!(well = %plan.well.name, "Loaded well plan from ./{DEFAULT_CONFIG_FILE}");
                    return plan;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{DEFAULT_CONFIG_FILE}, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No {DEFAULT_CONFIG_FILE} found, using reference well plan");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, err) => ConfigError::Parse(path.to_path_buf(), err),
            other => other,
        })
    }

    /// Parse and validate a plan from raw TOML.
    ///
    /// Unknown keys are logged as warnings and never fail the load.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let plan: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        plan.validate()?;

        for w in super::validation::placeholder_warnings(&plan) {
            warn!("{}", w);
        }
        Ok(plan)
    }

    /// Serialize the current plan to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save the plan to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Well plan saved");
        Ok(())
    }

    /// Reject physically impossible inputs.
    ///
    /// Rules:
    /// - Every numeric value must be finite
    /// - Diameters, lengths, volumes and densities cannot be negative
    /// - Inner diameter of a tubular cannot exceed its outer diameter
    /// - Shoe and tool depths cannot be below the hole depth
    /// - Pump parameters must be positive, fill coefficient in (0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        for (name, value) in self.numeric_fields() {
            if !value.is_finite() {
                errors.push(format!("{name}: value must be finite (got {value})"));
            } else if value < 0.0 {
                errors.push(format!("{name} = {value} cannot be negative"));
            }
        }

        let c = &self.casing;
        Self::check_bore(c.outer_diameter_m, c.inner_diameter_m, "casing", &mut errors);

        let ds = &self.drill_string;
        Self::check_bore(
            ds.drill_pipe_outer_diameter_m,
            ds.drill_pipe_inner_diameter_m,
            "drill_string.drill_pipe",
            &mut errors,
        );
        Self::check_bore(
            ds.landing_string_outer_diameter_m,
            ds.landing_string_inner_diameter_m,
            "drill_string.landing_string",
            &mut errors,
        );
        Self::check_bore(
            ds.drill_collar_outer_diameter_m,
            ds.drill_collar_inner_diameter_m,
            "drill_string.drill_collar",
            &mut errors,
        );

        let hole_depth = self.open_hole.hole_depth_m;
        if c.shoe_depth_m > hole_depth {
            errors.push(format!(
                "casing.shoe_depth_m ({:.1}) must not exceed open_hole.hole_depth_m ({hole_depth:.1})",
                c.shoe_depth_m
            ));
        }
        if ds.tool_depth_m > hole_depth {
            errors.push(format!(
                "drill_string.tool_depth_m ({:.1}) must not exceed open_hole.hole_depth_m ({hole_depth:.1})",
                ds.tool_depth_m
            ));
        }
        let bha_length = ds.landing_string_length_m + ds.drill_collar_length_m;
        if bha_length > ds.tool_depth_m {
            errors.push(format!(
                "drill_string: landing string + drill collar length ({bha_length:.1}) exceeds tool_depth_m ({:.1})",
                ds.tool_depth_m
            ));
        }

        let p = &self.pump;
        if p.strokes_per_minute <= 0.0 {
            errors.push(format!("pump.strokes_per_minute = {} must be > 0", p.strokes_per_minute));
        }
        if p.piston_diameter_m <= 0.0 {
            errors.push(format!("pump.piston_diameter_m = {} must be > 0", p.piston_diameter_m));
        }
        if p.stroke_length_m <= 0.0 {
            errors.push(format!("pump.stroke_length_m = {} must be > 0", p.stroke_length_m));
        }
        if p.piston_count == 0 {
            errors.push("pump.piston_count must be at least 1".to_string());
        }
        if p.fill_coefficient <= 0.0 || p.fill_coefficient > 1.0 {
            errors.push(format!(
                "pump.fill_coefficient = {} must be within (0, 1]",
                p.fill_coefficient
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Every numeric plan value with its dotted key, for blanket range checks.
    fn numeric_fields(&self) -> Vec<(String, f64)> {
        let c = &self.casing;
        let oh = &self.open_hole;
        let ds = &self.drill_string;
        let p = &self.pump;
        let w = &self.weighting;
        let m = &self.mass_addition;
        let k = &self.kill;
        let d = &self.dilution;

        let mut fields: Vec<(String, f64)> = [
            ("casing.outer_diameter_m", c.outer_diameter_m),
            ("casing.inner_diameter_m", c.inner_diameter_m),
            ("casing.shoe_depth_m", c.shoe_depth_m),
            ("open_hole.bit_diameter_m", oh.bit_diameter_m),
            ("open_hole.cavernosity_coefficient", oh.cavernosity_coefficient),
            ("open_hole.hole_depth_m", oh.hole_depth_m),
            ("drill_string.tool_depth_m", ds.tool_depth_m),
            ("drill_string.drill_pipe_outer_diameter_m", ds.drill_pipe_outer_diameter_m),
            ("drill_string.drill_pipe_inner_diameter_m", ds.drill_pipe_inner_diameter_m),
            ("drill_string.landing_string_outer_diameter_m", ds.landing_string_outer_diameter_m),
            ("drill_string.landing_string_inner_diameter_m", ds.landing_string_inner_diameter_m),
            ("drill_string.landing_string_length_m", ds.landing_string_length_m),
            ("drill_string.drill_collar_outer_diameter_m", ds.drill_collar_outer_diameter_m),
            ("drill_string.drill_collar_inner_diameter_m", ds.drill_collar_inner_diameter_m),
            ("drill_string.drill_collar_length_m", ds.drill_collar_length_m),
            ("pump.surface_volume_m3", p.surface_volume_m3),
            ("pump.strokes_per_minute", p.strokes_per_minute),
            ("pump.piston_diameter_m", p.piston_diameter_m),
            ("pump.stroke_length_m", p.stroke_length_m),
            ("pump.fill_coefficient", p.fill_coefficient),
            ("weighting.initial_density_g_cm3", w.initial_density_g_cm3),
            ("weighting.target_density_g_cm3", w.target_density_g_cm3),
            ("weighting.material_density_kg_m3", w.material_density_kg_m3),
            ("weighting.solution_volume_m3", w.solution_volume_m3),
            ("weighting.bag_mass_kg", w.bag_mass_kg),
            ("mass_addition.material_mass_kg", m.material_mass_kg),
            ("mass_addition.initial_density_kg_m3", m.initial_density_kg_m3),
            ("mass_addition.material_density_kg_m3", m.material_density_kg_m3),
            ("mass_addition.solution_volume_m3", m.solution_volume_m3),
            ("kill.true_vertical_depth_m", k.true_vertical_depth_m),
            ("kill.mud_density_g_cm3", k.mud_density_g_cm3),
            ("dilution.initial_mud_density_kg_m3", d.initial_mud_density_kg_m3),
            ("dilution.final_mud_density_kg_m3", d.final_mud_density_kg_m3),
            ("dilution.initial_mud_volume_m3", d.initial_mud_volume_m3),
            ("dilution.added_water_volume_m3", d.added_water_volume_m3),
            ("dilution.water_density_kg_m3", d.water_density_kg_m3),
            ("dilution.wellbore_diameter_mm", d.wellbore_diameter_mm),
            ("dilution.cavernosity_percent", d.cavernosity_percent),
            ("dilution.drilled_interval_m", d.drilled_interval_m),
            ("dilution.drilled_solids_density_kg_m3", d.drilled_solids_density_kg_m3),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

        // Overpressure may legitimately be negative (underbalanced reading),
        // so only finiteness is checked for it.
        if !k.standpipe_overpressure_atm.is_finite() {
            fields.push((
                "kill.standpipe_overpressure_atm".to_string(),
                k.standpipe_overpressure_atm,
            ));
        }

        for (i, mix) in self.mixtures.iter().enumerate() {
            fields.push((format!("mixtures[{i}].volume_1_m3"), mix.volume_1_m3));
            fields.push((format!("mixtures[{i}].density_1_g_cm3"), mix.density_1_g_cm3));
            fields.push((format!("mixtures[{i}].volume_2_m3"), mix.volume_2_m3));
            fields.push((format!("mixtures[{i}].density_2_g_cm3"), mix.density_2_g_cm3));
        }
        fields
    }

    fn check_bore(outer: f64, inner: f64, name: &str, errors: &mut Vec<String>) {
        if inner > outer {
            errors.push(format!(
                "{name}: inner diameter ({inner:.4} m) must not exceed outer diameter ({outer:.4} m)"
            ));
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "Well plan I/O error ({}): {}", path.display(), e),
            Self::Parse(path, e) => {
                write!(f, "Well plan parse error ({}): {}", path.display(), e)
            }
            Self::Serialize(e) => write!(f, "Well plan serialization error: {e}"),
            Self::Validation(errors) => {
                writeln!(f, "Well plan validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Well Info
// ============================================================================

/// Identification metadata. Not used by any formula, but appears in logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellInfo {
    /// Well name / identifier
    #[serde(default = "default_well_name")]
    pub name: String,

    /// Field name
    #[serde(default)]
    pub field: String,

    /// Rig name
    #[serde(default)]
    pub rig: String,
}

fn default_well_name() -> String {
    "DEFAULT".to_string()
}

impl Default for WellInfo {
    fn default() -> Self {
        Self {
            name: default_well_name(),
            field: String::new(),
            rig: String::new(),
        }
    }
}

// ============================================================================
// Casing
// ============================================================================

/// Last casing string, cemented at the shoe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasingConfig {
    /// Casing outer diameter (m).
    #[serde(default = "default_casing_od")]
    pub outer_diameter_m: f64,

    /// Casing inner diameter (m). Drives every casing volume.
    #[serde(default = "default_casing_id")]
    pub inner_diameter_m: f64,

    /// Casing shoe depth (m).
    #[serde(default = "default_shoe_depth")]
    pub shoe_depth_m: f64,
}

fn default_casing_od() -> f64 { 0.146 }
fn default_casing_id() -> f64 { 0.13 }
fn default_shoe_depth() -> f64 { 2283.0 }

impl Default for CasingConfig {
    fn default() -> Self {
        Self {
            outer_diameter_m: default_casing_od(),
            inner_diameter_m: default_casing_id(),
            shoe_depth_m: default_shoe_depth(),
        }
    }
}

// ============================================================================
// Open Hole
// ============================================================================

/// Open hole drilled below the casing shoe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenHoleConfig {
    /// Bit diameter (m).
    #[serde(default = "default_bit_diameter")]
    pub bit_diameter_m: f64,

    /// Washout multiplier applied to the nominal open-hole volume (1.0 = gauge hole).
    #[serde(default = "default_cavernosity_coefficient")]
    pub cavernosity_coefficient: f64,

    /// Measured hole depth (m).
    #[serde(default = "default_hole_depth")]
    pub hole_depth_m: f64,
}

fn default_bit_diameter() -> f64 { 0.126 }
fn default_cavernosity_coefficient() -> f64 { 1.1 }
fn default_hole_depth() -> f64 { 3067.0 }

impl Default for OpenHoleConfig {
    fn default() -> Self {
        Self {
            bit_diameter_m: default_bit_diameter(),
            cavernosity_coefficient: default_cavernosity_coefficient(),
            hole_depth_m: default_hole_depth(),
        }
    }
}

// ============================================================================
// Drill String
// ============================================================================

/// Drill string composition. Drill pipe fills whatever length the landing
/// string and drill collars leave between surface and `tool_depth_m`.
///
/// Landing string and drill collar dimensions default to zero: most plans
/// only carry drill pipe, and a zero section contributes no volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillStringConfig {
    /// Depth of the bit / end of string (m).
    #[serde(default = "default_tool_depth")]
    pub tool_depth_m: f64,

    #[serde(default = "default_drill_pipe_od")]
    pub drill_pipe_outer_diameter_m: f64,

    #[serde(default = "default_drill_pipe_id")]
    pub drill_pipe_inner_diameter_m: f64,

    #[serde(default)]
    pub landing_string_outer_diameter_m: f64,

    #[serde(default)]
    pub landing_string_inner_diameter_m: f64,

    #[serde(default)]
    pub landing_string_length_m: f64,

    #[serde(default)]
    pub drill_collar_outer_diameter_m: f64,

    #[serde(default)]
    pub drill_collar_inner_diameter_m: f64,

    #[serde(default)]
    pub drill_collar_length_m: f64,
}

fn default_tool_depth() -> f64 { 3067.0 }
fn default_drill_pipe_od() -> f64 { 0.089 }
fn default_drill_pipe_id() -> f64 { 0.071 }

impl Default for DrillStringConfig {
    fn default() -> Self {
        Self {
            tool_depth_m: default_tool_depth(),
            drill_pipe_outer_diameter_m: default_drill_pipe_od(),
            drill_pipe_inner_diameter_m: default_drill_pipe_id(),
            landing_string_outer_diameter_m: 0.0,
            landing_string_inner_diameter_m: 0.0,
            landing_string_length_m: 0.0,
            drill_collar_outer_diameter_m: 0.0,
            drill_collar_inner_diameter_m: 0.0,
            drill_collar_length_m: 0.0,
        }
    }
}

// ============================================================================
// Pump
// ============================================================================

/// Triplex mud pump and the fluid held in the surface tanks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpConfig {
    /// Fluid volume in the measuring tanks (m³).
    #[serde(default = "default_surface_volume")]
    pub surface_volume_m3: f64,

    /// Double strokes per minute.
    #[serde(default = "default_strokes_per_minute")]
    pub strokes_per_minute: f64,

    /// Piston (liner) diameter (m).
    #[serde(default = "default_piston_diameter")]
    pub piston_diameter_m: f64,

    /// Piston stroke length (m).
    #[serde(default = "default_stroke_length")]
    pub stroke_length_m: f64,

    /// Volumetric fill coefficient (0-1].
    #[serde(default = "default_fill_coefficient")]
    pub fill_coefficient: f64,

    /// Number of pistons.
    #[serde(default = "default_piston_count")]
    pub piston_count: u32,
}

fn default_surface_volume() -> f64 { 36.0 }
fn default_strokes_per_minute() -> f64 { 35.0 }
fn default_piston_diameter() -> f64 { 0.14 }
fn default_stroke_length() -> f64 { 0.387 }
fn default_fill_coefficient() -> f64 { 0.95 }
fn default_piston_count() -> u32 { 3 }

impl Default for PumpConfig {
    fn default() -> Self {
        Self {
            surface_volume_m3: default_surface_volume(),
            strokes_per_minute: default_strokes_per_minute(),
            piston_diameter_m: default_piston_diameter(),
            stroke_length_m: default_stroke_length(),
            fill_coefficient: default_fill_coefficient(),
            piston_count: default_piston_count(),
        }
    }
}

// ============================================================================
// Weighting
// ============================================================================

/// Weighting-up job: raise `solution_volume_m3` of mud from the initial to
/// the target density with a weighting material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightingConfig {
    #[serde(default = "default_weighting_initial_density")]
    pub initial_density_g_cm3: f64,

    #[serde(default = "default_weighting_target_density")]
    pub target_density_g_cm3: f64,

    /// Weighting material density (kg/m³). Note the unit differs from the mud densities.
    #[serde(default = "default_weighting_material_density")]
    pub material_density_kg_m3: f64,

    #[serde(default = "default_weighting_solution_volume")]
    pub solution_volume_m3: f64,

    /// Mass of one sack of weighting material (kg).
    #[serde(default = "default_bag_mass")]
    pub bag_mass_kg: f64,
}

fn default_weighting_initial_density() -> f64 { 1.09 }
fn default_weighting_target_density() -> f64 { 1.12 }
fn default_weighting_material_density() -> f64 { 2720.0 }
fn default_weighting_solution_volume() -> f64 { 20.0 }
fn default_bag_mass() -> f64 { 40.0 }

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            initial_density_g_cm3: default_weighting_initial_density(),
            target_density_g_cm3: default_weighting_target_density(),
            material_density_kg_m3: default_weighting_material_density(),
            solution_volume_m3: default_weighting_solution_volume(),
            bag_mass_kg: default_bag_mass(),
        }
    }
}

// ============================================================================
// Mass Addition
// ============================================================================

/// A known mass of material added to a known volume of mud; all densities in kg/m³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassAdditionConfig {
    #[serde(default = "default_added_mass")]
    pub material_mass_kg: f64,

    #[serde(default = "default_mass_initial_density")]
    pub initial_density_kg_m3: f64,

    #[serde(default = "default_mass_material_density")]
    pub material_density_kg_m3: f64,

    #[serde(default = "default_mass_solution_volume")]
    pub solution_volume_m3: f64,
}

fn default_added_mass() -> f64 { 1000.0 }
fn default_mass_initial_density() -> f64 { 1180.0 }
fn default_mass_material_density() -> f64 { 2000.0 }
fn default_mass_solution_volume() -> f64 { 47.0 }

impl Default for MassAdditionConfig {
    fn default() -> Self {
        Self {
            material_mass_kg: default_added_mass(),
            initial_density_kg_m3: default_mass_initial_density(),
            material_density_kg_m3: default_mass_material_density(),
            solution_volume_m3: default_mass_solution_volume(),
        }
    }
}

// ============================================================================
// Kill
// ============================================================================

/// Shut-in readings used to compute the equilibrium (kill) mud density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillConfig {
    #[serde(default = "default_tvd")]
    pub true_vertical_depth_m: f64,

    /// Shut-in overpressure on the standpipe (atm).
    #[serde(default = "default_overpressure")]
    pub standpipe_overpressure_atm: f64,

    /// Current mud density (g/cm³).
    #[serde(default = "default_kill_mud_density")]
    pub mud_density_g_cm3: f64,
}

fn default_tvd() -> f64 { 2278.0 }
fn default_overpressure() -> f64 { 9.0 }
fn default_kill_mud_density() -> f64 { 1.11 }

impl Default for KillConfig {
    fn default() -> Self {
        Self {
            true_vertical_depth_m: default_tvd(),
            standpipe_overpressure_atm: default_overpressure(),
            mud_density_g_cm3: default_kill_mud_density(),
        }
    }
}

// ============================================================================
// Mixtures
// ============================================================================

/// Two fluids blended in the pits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixtureConfig {
    pub volume_1_m3: f64,
    pub density_1_g_cm3: f64,
    pub volume_2_m3: f64,
    pub density_2_g_cm3: f64,
}

fn default_mixtures() -> Vec<MixtureConfig> {
    vec![
        MixtureConfig {
            volume_1_m3: 30.0,
            density_1_g_cm3: 1.08,
            volume_2_m3: 10.0,
            density_2_g_cm3: 1.0,
        },
        MixtureConfig {
            volume_1_m3: 30.0,
            density_1_g_cm3: 1.11,
            volume_2_m3: 4.0,
            density_2_g_cm3: 1.01,
        },
    ]
}

// ============================================================================
// Dilution
// ============================================================================

/// Dilution record over a drilled interval, used to back out how much of the
/// drilled solids the cleaning equipment removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DilutionConfig {
    #[serde(default = "default_dilution_initial_density")]
    pub initial_mud_density_kg_m3: f64,

    #[serde(default = "default_dilution_final_density")]
    pub final_mud_density_kg_m3: f64,

    /// Mud volume in circulation at the start of the interval (m³).
    #[serde(default = "default_dilution_initial_volume")]
    pub initial_mud_volume_m3: f64,

    /// Water / fresh mud added over the interval (m³).
    #[serde(default = "default_added_water_volume")]
    pub added_water_volume_m3: f64,

    /// Density of the added water / fresh mud (kg/m³).
    #[serde(default = "default_water_density")]
    pub water_density_kg_m3: f64,

    #[serde(default = "default_wellbore_diameter_mm")]
    pub wellbore_diameter_mm: f64,

    /// Washout allowance in percent (10 = 10 % over gauge).
    #[serde(default = "default_cavernosity_percent")]
    pub cavernosity_percent: f64,

    #[serde(default = "default_drilled_interval")]
    pub drilled_interval_m: f64,

    /// Density of drilled solids (kg/m³).
    #[serde(default = "default_solids_density")]
    pub drilled_solids_density_kg_m3: f64,
}

fn default_dilution_initial_density() -> f64 { 1170.0 }
fn default_dilution_final_density() -> f64 { 1165.0 }
fn default_dilution_initial_volume() -> f64 { 40.0 }
fn default_added_water_volume() -> f64 { 18.0 }
fn default_water_density() -> f64 { 1065.0 }
fn default_wellbore_diameter_mm() -> f64 { 124.0 }
fn default_cavernosity_percent() -> f64 { 10.0 }
fn default_drilled_interval() -> f64 { 176.0 }
fn default_solids_density() -> f64 { 2500.0 }

impl Default for DilutionConfig {
    fn default() -> Self {
        Self {
            initial_mud_density_kg_m3: default_dilution_initial_density(),
            final_mud_density_kg_m3: default_dilution_final_density(),
            initial_mud_volume_m3: default_dilution_initial_volume(),
            added_water_volume_m3: default_added_water_volume(),
            water_density_kg_m3: default_water_density(),
            wellbore_diameter_mm: default_wellbore_diameter_mm(),
            cavernosity_percent: default_cavernosity_percent(),
            drilled_interval_m: default_drilled_interval(),
            drilled_solids_density_kg_m3: default_solids_density(),
        }
    }
}

// ============================================================================
// Server
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server bind address.
    ///
    /// Can be overridden by `MUDCALC_SERVER_ADDR` env var or `--addr` CLI flag.
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    "0.0.0.0:10000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
