//! Keplerian ellipses around the Sun.

use std::f64::consts::TAU;

use phys_core::constants::{G_M3_KG_S2, M_SUN_KG};
use phys_core::units::{au_to_m, seconds_to_years};

use crate::error::{FormulaError, finite, positive};
use crate::quantity::{Curve, ScalarResult};

const ORBIT: &str = "orbit";

/// Period and apsides of a heliocentric orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitResult {
    pub period_s: f64,
    pub period_years: f64,
    pub perihelion_au: f64,
    pub aphelion_au: f64,
}

impl OrbitResult {
    pub fn scalars(&self) -> Vec<ScalarResult> {
        vec![
            ScalarResult::new("Orbital Period", self.period_s, "s"),
            ScalarResult::new("Orbital Period", self.period_years, "Earth years"),
            ScalarResult::new("Perihelion", self.perihelion_au, "AU"),
            ScalarResult::new("Aphelion", self.aphelion_au, "AU"),
        ]
    }
}

/// Kepler's third law, `T = 2π·√(a³/(G·M_sun))`, for `a` in metres.
pub fn orbital_period_s(semi_major_axis_m: f64) -> Result<f64, FormulaError> {
    positive("semi-major axis", semi_major_axis_m)?;
    Ok(TAU * (semi_major_axis_m.powi(3) / (G_M3_KG_S2 * M_SUN_KG)).sqrt())
}

/// Summary of an orbit with semi-major axis `a` (AU) and eccentricity `e`.
pub fn orbit(semi_major_axis_au: f64, eccentricity: f64) -> Result<OrbitResult, FormulaError> {
    check_shape(semi_major_axis_au, eccentricity)?;
    let period_s = orbital_period_s(au_to_m(semi_major_axis_au))?;
    Ok(OrbitResult {
        period_s,
        period_years: seconds_to_years(period_s),
        perihelion_au: semi_major_axis_au * (1.0 - eccentricity),
        aphelion_au: semi_major_axis_au * (1.0 + eccentricity),
    })
}

/// Polar radius `r = a(1−e²)/(1+e·cos ν)` at true anomaly `ν`; the focus sits at the origin.
#[inline]
pub fn orbit_radius(semi_major_axis: f64, eccentricity: f64, true_anomaly: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * true_anomaly.cos())
}

/// Ellipse sampled at `points` anomalies over `[0, 2π]`; the last sample wraps onto the first.
pub fn orbit_curve(
    semi_major_axis_au: f64,
    eccentricity: f64,
    points: usize,
) -> Result<Curve, FormulaError> {
    check_shape(semi_major_axis_au, eccentricity)?;
    let anomalies = Curve::sample("True anomaly (rad)", "r (AU)", (0.0, TAU), points, |nu| {
        orbit_radius(semi_major_axis_au, eccentricity, nu)
    })?;
    Ok(Curve::from_points(
        "X (AU)",
        "Y (AU)",
        anomalies.points().map(|(nu, r)| (r * nu.cos(), r * nu.sin())),
    ))
}

fn check_shape(semi_major_axis_au: f64, eccentricity: f64) -> Result<(), FormulaError> {
    positive("semi-major axis", semi_major_axis_au)?;
    finite("eccentricity", eccentricity)?;
    if eccentricity < 0.0 {
        return Err(FormulaError::OutOfRange {
            parameter: "eccentricity",
            value: eccentricity,
            expected: ">= 0",
        });
    }
    if eccentricity >= 1.0 {
        return Err(FormulaError::domain(
            ORBIT,
            format!("eccentricity {eccentricity} does not describe a closed ellipse"),
        ));
    }
    Ok(())
}
