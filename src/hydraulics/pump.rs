//! Mud pump output
//!
//! Formula: Q = 0.785 × D² × S × n × z × η
//!
//! Where:
//! - D = piston diameter (m)
//! - S = stroke length (m)
//! - n = double strokes per minute
//! - z = number of pistons
//! - η = fill coefficient

use super::{finite, CalcResult, CIRCLE_AREA_FACTOR};
use crate::config::PumpConfig;

/// Pump output in m³/min.
pub fn flow_rate_m3_per_min(pump: &PumpConfig) -> CalcResult {
    let d = finite("piston diameter", pump.piston_diameter_m)?;
    let s = finite("stroke length", pump.stroke_length_m)?;
    let n = finite("strokes per minute", pump.strokes_per_minute)?;
    let eta = finite("fill coefficient", pump.fill_coefficient)?;
    let z = f64::from(pump.piston_count);

    finite("pump flow rate", CIRCLE_AREA_FACTOR * d.powi(2) * s * n * z * eta)
}

/// Pump output in l/s (m³/min × 1000 / 60).
pub fn flow_rate_l_per_s(flow_m3_per_min: f64) -> CalcResult {
    finite("pump flow rate", flow_m3_per_min * 1000.0 / 60.0)
}
