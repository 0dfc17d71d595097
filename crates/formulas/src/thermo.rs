//! Entropy change when heat flows from a hot reservoir to a cold one.

use crate::error::{FormulaError, denominator, finite};
use crate::quantity::Curve;

const ENTROPY: &str = "entropy";

/// `ΔS = Q·(1/T_i − 1/T_f)` (J/K); requires `T_f > T_i`.
pub fn entropy_change(
    heat_j: f64,
    t_initial_k: f64,
    t_final_k: f64,
) -> Result<f64, FormulaError> {
    check_temperatures(heat_j, t_initial_k, t_final_k)?;
    Ok(delta_s(heat_j, t_initial_k, t_final_k))
}

/// `ΔS` against final temperature, swept over `[T_i, T_f]`.
pub fn entropy_curve(
    heat_j: f64,
    t_initial_k: f64,
    t_final_k: f64,
    points: usize,
) -> Result<Curve, FormulaError> {
    check_temperatures(heat_j, t_initial_k, t_final_k)?;
    Curve::sample(
        "Temperature (K)",
        "Entropy Change (J/K)",
        (t_initial_k, t_final_k),
        points,
        |t| delta_s(heat_j, t_initial_k, t),
    )
}

#[inline]
fn delta_s(heat_j: f64, t_initial_k: f64, t_k: f64) -> f64 {
    heat_j * (1.0 / t_initial_k - 1.0 / t_k)
}

fn check_temperatures(heat_j: f64, t_initial_k: f64, t_final_k: f64) -> Result<(), FormulaError> {
    finite("heat", heat_j)?;
    denominator(ENTROPY, "initial temperature", t_initial_k)?;
    finite("final temperature", t_final_k)?;
    if t_final_k <= t_initial_k {
        return Err(FormulaError::domain(
            ENTROPY,
            format!(
                "final temperature ({t_final_k} K) must exceed initial temperature ({t_initial_k} K)"
            ),
        ));
    }
    Ok(())
}
