//! Simple harmonic motion.

use std::f64::consts::TAU;

use crate::error::{FormulaError, denominator, finite};
use crate::quantity::Curve;

const SHM: &str = "simple harmonic motion";

/// Angular frequency `ω = 2π/T` (rad/s).
pub fn angular_frequency(period_s: f64) -> Result<f64, FormulaError> {
    denominator(SHM, "period", period_s)?;
    Ok(TAU / period_s)
}

/// Displacement `x(t) = A·cos(2πt/T)` sampled over one period `[0, T]`.
pub fn shm_displacement(
    period_s: f64,
    amplitude_m: f64,
    points: usize,
) -> Result<Curve, FormulaError> {
    let omega = angular_frequency(period_s)?;
    finite("amplitude", amplitude_m)?;
    Curve::sample(
        "Time (s)",
        "Displacement (m)",
        (0.0, period_s),
        points,
        |t| amplitude_m * (omega * t).cos(),
    )
}
