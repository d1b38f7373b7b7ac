//! Circulation report: every worksheet formula evaluated once over a plan
//!
//! Formulas that depend on another result (circulation times on the pump
//! rate, bag count on the material mass, ...) receive that result explicitly.
//! When an upstream formula fails, every dependent line carries the same
//! error instead of a number.

use serde::Serialize;
use tracing::{error, info};

use crate::config::WellPlan;
use crate::hydraulics::{self, CalcResult};

/// One computed quantity.
#[derive(Debug, Clone, Serialize)]
pub struct ReportLine {
    /// Stable machine-readable key, e.g. `total_circulation_time`
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Unit of `value`
    pub unit: &'static str,
    /// Result, absent when the formula failed
    pub value: Option<f64>,
    /// Failure message, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReportLine {
    fn new(key: impl Into<String>, label: impl Into<String>, unit: &'static str, result: &CalcResult) -> Self {
        let (value, error) = match result {
            Ok(v) => (Some(*v), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            key: key.into(),
            label: label.into(),
            unit,
            value,
            error,
        }
    }
}

/// All worksheet results for one well plan, in presentation order.
#[derive(Debug, Clone, Serialize)]
pub struct CirculationReport {
    pub well: String,
    pub lines: Vec<ReportLine>,
}

/// Apply a formula to one upstream result, propagating its error.
fn then1(a: &CalcResult, f: impl FnOnce(f64) -> CalcResult) -> CalcResult {
    a.clone().and_then(f)
}

/// Apply a formula to two upstream results, propagating the first error.
fn then2(a: &CalcResult, b: &CalcResult, f: impl FnOnce(f64, f64) -> CalcResult) -> CalcResult {
    match (a, b) {
        (Ok(a), Ok(b)) => f(*a, *b),
        (Err(e), _) | (_, Err(e)) => Err(e.clone()),
    }
}

impl CirculationReport {
    /// Evaluate every formula once over `plan`.
    pub fn compute(plan: &WellPlan) -> Self {
        let mut lines = Vec::new();
        let mut push = |key: &str, label: &str, unit: &'static str, r: &CalcResult| {
            lines.push(ReportLine::new(key, label, unit, r));
        };

        // Volumes
        let ds = &plan.drill_string;
        let casing = hydraulics::casing_volume(&plan.casing);
        let drill_pipe = hydraulics::drill_pipe_volume(ds);
        let landing_string = hydraulics::landing_string_volume(ds);
        let drill_collars = hydraulics::drill_collar_volume(ds);
        let tool = hydraulics::tool_volume(ds);
        let casing_with_tool = then2(&casing, &tool, hydraulics::casing_volume_with_tool);
        let wellbore = hydraulics::wellbore_volume(&plan.casing, &plan.open_hole);
        let wellbore_with_tool = then2(&wellbore, &tool, hydraulics::wellbore_volume_with_tool);
        let annulus = then2(&wellbore, &casing, hydraulics::annulus_volume);
        let tool_internal = hydraulics::tool_internal_volume(ds, &plan.open_hole);
        let annulus_fluid = then1(&wellbore, |w| {
            hydraulics::annulus_fluid_volume(w, ds, &plan.open_hole)
        });
        let surface = plan.pump.surface_volume_m3;
        let total_volume = then1(&wellbore_with_tool, |w| {
            hydraulics::total_circulation_volume(w, surface)
        });

        push("casing_volume", "Casing volume", "m3", &casing);
        push("casing_volume_with_tool", "Casing volume with string at shoe", "m3", &casing_with_tool);
        push("wellbore_volume", "Wellbore volume", "m3", &wellbore);
        push("wellbore_volume_with_tool", "Wellbore volume with string", "m3", &wellbore_with_tool);
        push("annulus_volume", "Open hole volume", "m3", &annulus);
        push("drill_pipe_volume", "Drill pipe displacement", "m3", &drill_pipe);
        push("landing_string_volume", "Landing string displacement", "m3", &landing_string);
        push("drill_collar_volume", "Drill collar displacement", "m3", &drill_collars);
        push("tool_volume", "String displacement", "m3", &tool);
        push("tool_internal_volume", "Volume inside string", "m3", &tool_internal);
        push("annulus_fluid_volume", "Volume in annulus", "m3", &annulus_fluid);
        push("total_circulation_volume", "Total circulation volume", "m3", &total_volume);

        // Pump
        let flow = hydraulics::flow_rate_m3_per_min(&plan.pump);
        let flow_lps = then1(&flow, hydraulics::flow_rate_l_per_s);
        push("pump_flow_rate_m3_min", "Pump output", "m3/min", &flow);
        push("pump_flow_rate_l_s", "Pump output", "l/s", &flow_lps);

        // Circulation times
        let wellbore_time = then2(&wellbore_with_tool, &flow, hydraulics::wellbore_circulation_time);
        let total_time = then2(&wellbore_with_tool, &flow, |w, q| {
            hydraulics::total_circulation_time(w, surface, q)
        });
        let annulus_time = then2(&annulus_fluid, &flow, hydraulics::annulus_circulation_time);
        let tool_time = then2(&tool_internal, &flow, hydraulics::tool_circulation_time);
        let casing_time = then2(&casing_with_tool, &flow, hydraulics::casing_circulation_time);
        push("wellbore_circulation_time", "Wellbore circulation time", "min", &wellbore_time);
        push("total_circulation_time", "Total circulation time", "min", &total_time);
        push("annulus_circulation_time", "Annulus circulation time", "min", &annulus_time);
        push("tool_circulation_time", "String circulation time", "min", &tool_time);
        push("casing_circulation_time", "Casing circulation time", "min", &casing_time);

        // Weighting
        let w = &plan.weighting;
        let mass = hydraulics::weighting_material_mass(w);
        let material_volume = then1(&mass, |m| hydraulics::weighting_material_volume(m, w));
        let final_volume = then1(&material_volume, |v| hydraulics::final_solution_volume(v, w));
        let bags = then1(&mass, |m| hydraulics::bag_count(m, w));
        let concentration = then1(&mass, |m| hydraulics::material_concentration(m, w));
        push("weighting_material_mass", "Weighting material mass", "kg", &mass);
        push("weighting_material_volume", "Weighting material volume", "m3", &material_volume);
        push("final_solution_volume", "Final mud volume", "m3", &final_volume);
        push("bag_count", "Weighting material bags", "bags", &bags);
        push("material_concentration", "Weighting material concentration", "kg/m3", &concentration);

        // Densities
        let mass_addition = hydraulics::density_after_mass_addition(&plan.mass_addition);
        let equilibrium = hydraulics::equilibrium_density(&plan.kill);
        push("density_after_mass_addition", "Density after mass addition", "g/cm3", &mass_addition);
        push("equilibrium_density", "Equilibrium (kill) density", "g/cm3", &equilibrium);
        for (i, mix) in plan.mixtures.iter().enumerate() {
            let blend = hydraulics::blend_density(mix);
            push(
                &format!("mixture_density_{}", i + 1),
                &format!("Blend {} density", i + 1),
                "g/cm3",
                &blend,
            );
        }

        // Solids control
        let efficiency = hydraulics::cleaning_efficiency_percent(&plan.dilution);
        push("cleaning_efficiency", "Cleaning equipment efficiency", "%", &efficiency);

        Self {
            well: plan.well.name.clone(),
            lines,
        }
    }

    /// Look up a line by key.
    pub fn get(&self, key: &str) -> Option<&ReportLine> {
        self.lines.iter().find(|l| l.key == key)
    }

    /// Value of a line, if present and successful.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|l| l.value)
    }

    pub fn has_errors(&self) -> bool {
        self.lines.iter().any(|l| l.error.is_some())
    }

    /// Number of failed lines.
    pub fn error_count(&self) -> usize {
        self.lines.iter().filter(|l| l.error.is_some()).count()
    }

    /// Process exit status for `mudcalc report`: 1 when any line failed, else 0.
    pub fn exit_status(&self) -> u8 {
        u8::from(self.has_errors())
    }

    /// Emit one log line per result.
    pub fn log(&self) {
        for line in &self.lines {
            match (&line.value, &line.error) {
                (Some(v), _) => info!(key = %line.key, "{}, {}: {v:.6}", line.label, line.unit),
                (None, Some(e)) => error!(key = %line.key, "{}, {}: {e}", line.label, line.unit),
                (None, None) => {}
            }
        }
    }
}
