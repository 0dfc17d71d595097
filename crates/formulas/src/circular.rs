//! Uniform circular motion.

use crate::error::{FormulaError, denominator, finite, non_negative};
use crate::quantity::Curve;

const CENTRIPETAL: &str = "centripetal force";

/// `F = m·v²/r` (N).
pub fn centripetal_force(
    mass_kg: f64,
    radius_m: f64,
    velocity_m_s: f64,
) -> Result<f64, FormulaError> {
    non_negative("mass", mass_kg)?;
    denominator(CENTRIPETAL, "radius", radius_m)?;
    finite("velocity", velocity_m_s)?;
    Ok(mass_kg * velocity_m_s * velocity_m_s / radius_m)
}

/// Force against radius over `[r/2, 2r]` at fixed mass and speed.
pub fn centripetal_curve(
    mass_kg: f64,
    radius_m: f64,
    velocity_m_s: f64,
    points: usize,
) -> Result<Curve, FormulaError> {
    centripetal_force(mass_kg, radius_m, velocity_m_s)?;
    let mv_squared = mass_kg * velocity_m_s * velocity_m_s;
    Curve::sample(
        "Radius (m)",
        "Centripetal Force (N)",
        (0.5 * radius_m, 2.0 * radius_m),
        points,
        |r| mv_squared / r,
    )
}
