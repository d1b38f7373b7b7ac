//! Well plan validation: unknown-key detection with Levenshtein suggestions
//! and warnings for placeholder / suspicious values.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break an existing plan.

use std::collections::HashSet;

use super::WellPlan;

/// A non-fatal plan warning (typo, placeholder, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, ", did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Plan Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for `WellPlan`.
///
/// Maintained by hand to match the struct hierarchy in well_plan.rs.
/// Entries of the `[[mixtures]]` array share the `mixtures.` prefix.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [well]
        "well",
        "well.name",
        "well.field",
        "well.rig",
        // [casing]
        "casing",
        "casing.outer_diameter_m",
        "casing.inner_diameter_m",
        "casing.shoe_depth_m",
        // [open_hole]
        "open_hole",
        "open_hole.bit_diameter_m",
        "open_hole.cavernosity_coefficient",
        "open_hole.hole_depth_m",
        // [drill_string]
        "drill_string",
        "drill_string.tool_depth_m",
        "drill_string.drill_pipe_outer_diameter_m",
        "drill_string.drill_pipe_inner_diameter_m",
        "drill_string.landing_string_outer_diameter_m",
        "drill_string.landing_string_inner_diameter_m",
        "drill_string.landing_string_length_m",
        "drill_string.drill_collar_outer_diameter_m",
        "drill_string.drill_collar_inner_diameter_m",
        "drill_string.drill_collar_length_m",
        // [pump]
        "pump",
        "pump.surface_volume_m3",
        "pump.strokes_per_minute",
        "pump.piston_diameter_m",
        "pump.stroke_length_m",
        "pump.fill_coefficient",
        "pump.piston_count",
        // [weighting]
        "weighting",
        "weighting.initial_density_g_cm3",
        "weighting.target_density_g_cm3",
        "weighting.material_density_kg_m3",
        "weighting.solution_volume_m3",
        "weighting.bag_mass_kg",
        // [mass_addition]
        "mass_addition",
        "mass_addition.material_mass_kg",
        "mass_addition.initial_density_kg_m3",
        "mass_addition.material_density_kg_m3",
        "mass_addition.solution_volume_m3",
        // [kill]
        "kill",
        "kill.true_vertical_depth_m",
        "kill.standpipe_overpressure_atm",
        "kill.mud_density_g_cm3",
        // [[mixtures]]
        "mixtures",
        "mixtures.volume_1_m3",
        "mixtures.density_1_g_cm3",
        "mixtures.volume_2_m3",
        "mixtures.density_2_g_cm3",
        // [dilution]
        "dilution",
        "dilution.initial_mud_density_kg_m3",
        "dilution.final_mud_density_kg_m3",
        "dilution.initial_mud_volume_m3",
        "dilution.added_water_volume_m3",
        "dilution.water_density_kg_m3",
        "dilution.wellbore_diameter_mm",
        "dilution.cavernosity_percent",
        "dilution.drilled_interval_m",
        "dilution.drilled_solids_density_kg_m3",
        // [server]
        "server",
        "server.addr",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// A table `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
/// Tables inside arrays are walked under the array's own key.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            match v {
                toml::Value::Table(_) => keys.extend(walk_toml_keys(v, &path)),
                toml::Value::Array(items) => {
                    for item in items.iter().filter(|i| i.is_table()) {
                        for nested in walk_toml_keys(item, &path) {
                            if !keys.contains(&nested) {
                                keys.push(nested);
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &k in known {
        let dist = levenshtein(unknown, k);
        if dist > 3 {
            continue;
        }
        // Ties resolve alphabetically so the suggestion is stable across runs
        let better = match best {
            None => true,
            Some((best_key, best_dist)) => dist < best_dist || (dist == best_dist && k < best_key),
        };
        if better {
            best = Some((k, dist));
        }
    }
    best.map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown plan keys.
///
/// This does NOT fail on unknown keys; it only warns.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| {
            let suggestion = suggest_correction(&key, &known);
            ValidationWarning {
                message: format!("Unknown well plan key '{key}'"),
                field: key,
                suggestion,
            }
        })
        .collect()
}

// ============================================================================
// Placeholder / Suspicious Value Warnings
// ============================================================================

/// Warn about plan values that are legal but almost certainly unfinished.
///
/// A drill string section left at zero contributes nothing to the tool
/// volumes, and a section with a length but no diameters is silently
/// treated as empty pipe.
pub fn placeholder_warnings(plan: &WellPlan) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let ds = &plan.drill_string;

    let sections = [
        (
            "landing_string",
            ds.landing_string_outer_diameter_m,
            ds.landing_string_inner_diameter_m,
            ds.landing_string_length_m,
        ),
        (
            "drill_collar",
            ds.drill_collar_outer_diameter_m,
            ds.drill_collar_inner_diameter_m,
            ds.drill_collar_length_m,
        ),
    ];

    for (name, outer, inner, length) in sections {
        if length == 0.0 && outer == 0.0 && inner == 0.0 {
            warnings.push(ValidationWarning {
                field: format!("drill_string.{name}_length_m"),
                message: format!(
                    "drill_string.{name} is not set; its volume is taken as zero"
                ),
                suggestion: None,
            });
        } else if length > 0.0 && outer == 0.0 {
            warnings.push(ValidationWarning {
                field: format!("drill_string.{name}_outer_diameter_m"),
                message: format!(
                    "drill_string.{name} has length {length:.1} m but no outer diameter"
                ),
                suggestion: None,
            });
        }
    }

    let cav = plan.open_hole.cavernosity_coefficient;
    if cav < 1.0 {
        warnings.push(ValidationWarning {
            field: "open_hole.cavernosity_coefficient".to_string(),
            message: format!(
                "open_hole.cavernosity_coefficient = {cav:.2} is below 1.0 (hole smaller than bit)"
            ),
            suggestion: None,
        });
    }

    let w = &plan.weighting;
    if w.target_density_g_cm3 < w.initial_density_g_cm3 {
        warnings.push(ValidationWarning {
            field: "weighting.target_density_g_cm3".to_string(),
            message: format!(
                "weighting.target_density_g_cm3 ({:.3}) is below initial density ({:.3}); the material mass will be negative",
                w.target_density_g_cm3, w.initial_density_g_cm3
            ),
            suggestion: None,
        });
    }

    warnings
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_identical() {
        assert_eq!(levenshtein("casing", "casing"), 0);
    }

    #[test]
    fn test_levenshtein_one_edit() {
        assert_eq!(levenshtein("shoe_depht_m", "shoe_depth_m"), 2);
        assert_eq!(levenshtein("bag_mas_kg", "bag_mass_kg"), 1);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_walk_toml_keys_nested() {
        let toml: toml::Value = r#"
            [casing]
            shoe_depth_m = 2283.0
        "#
        .parse()
        .unwrap();
        let keys = walk_toml_keys(&toml, "");
        assert!(keys.contains(&"casing".to_string()));
        assert!(keys.contains(&"casing.shoe_depth_m".to_string()));
    }

    #[test]
    fn test_walk_toml_keys_array_of_tables() {
        let toml: toml::Value = r#"
            [[mixtures]]
            volume_1_m3 = 1.0
            [[mixtures]]
            volume_1_m3 = 2.0
            densty_2 = 1.0
        "#
        .parse()
        .unwrap();
        let keys = walk_toml_keys(&toml, "");
        assert_eq!(
            keys.iter().filter(|k| *k == "mixtures.volume_1_m3").count(),
            1
        );
        assert!(keys.contains(&"mixtures.densty_2".to_string()));
    }

    #[test]
    fn test_every_default_key_is_known() {
        let raw = WellPlan::default().to_toml().unwrap();
        assert!(validate_unknown_keys(&raw).is_empty());
    }

    #[test]
    fn test_default_plan_warns_about_placeholders() {
        let warnings = placeholder_warnings(&WellPlan::default());
        assert!(warnings.iter().any(|w| w.field.contains("landing_string")));
        assert!(warnings.iter().any(|w| w.field.contains("drill_collar")));
    }

    #[test]
    fn test_length_without_diameter_warns() {
        let mut plan = WellPlan::default();
        plan.drill_string.drill_collar_length_m = 120.0;
        let warnings = placeholder_warnings(&plan);
        assert!(warnings
            .iter()
            .any(|w| w.field == "drill_string.drill_collar_outer_diameter_m"));
    }
}
