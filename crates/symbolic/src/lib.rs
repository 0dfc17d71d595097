//! Flight-time derivation for a projectile that lands at its launch height.
//!
//! The vertical displacement `v0·sin(θ)·t − ½·g·t²` is a quadratic in `t`
//! with no constant term. Its roots are the launch instant and the landing
//! instant; the landing root is kept and compiled into a [`DerivedFormula`]
//! that is built once per process and shared read-only afterwards.

pub mod derivation;
pub mod trajectory;

use std::sync::OnceLock;

use thiserror::Error;

pub use derivation::{DerivedFormula, Quadratic};
pub use trajectory::{position_at, positions};

/// Errors surfaced while evaluating the flight-time formula.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    #[error("gravity is zero; the flight never ends")]
    ZeroGravity,
    #[error("{name} = {value} must be finite and non-negative")]
    InvalidInput { name: &'static str, value: f64 },
}

static FLIGHT_TIME: OnceLock<DerivedFormula> = OnceLock::new();

/// Process-wide flight-time formula, derived on first use.
pub fn flight_time_formula() -> &'static DerivedFormula {
    FLIGHT_TIME.get_or_init(DerivedFormula::derive)
}

/// Time of flight `2·v0·sin(θ)/g` for launch speed `v0` (m/s), angle `theta` (rad)
/// and gravity `g` (m/s²).
pub fn solve_flight_time(v0: f64, theta: f64, g: f64) -> Result<f64, SolveError> {
    check_non_negative("v0", v0)?;
    if !theta.is_finite() {
        return Err(SolveError::InvalidInput {
            name: "theta",
            value: theta,
        });
    }
    check_non_negative("g", g)?;
    if g == 0.0 {
        return Err(SolveError::ZeroGravity);
    }
    Ok(flight_time_formula().evaluate(v0, theta, g))
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), SolveError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SolveError::InvalidInput { name, value })
    }
}
