//! Projectile motion and free fall near a planetary surface, without drag.

use std::f64::consts::FRAC_PI_2;

use phys_core::sampling::linspace;
use phys_symbolic::{positions, solve_flight_time};

use crate::error::{FormulaError, denominator, non_negative, point_count, positive};
use crate::quantity::{Curve, ScalarResult};

const PROJECTILE: &str = "projectile motion";
const FREE_FALL: &str = "free fall";

/// Closed-form summary of a projectile launched from and landing on level ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileResult {
    pub time_of_flight_s: f64,
    pub max_height_m: f64,
    pub range_m: f64,
}

impl ProjectileResult {
    pub fn scalars(&self) -> Vec<ScalarResult> {
        vec![
            ScalarResult::new("Time of Flight", self.time_of_flight_s, "s"),
            ScalarResult::new("Max Height", self.max_height_m, "m"),
            ScalarResult::new("Range", self.range_m, "m"),
        ]
    }
}

/// Time of flight, apex height, and range for launch speed `v0` (m/s),
/// angle `theta` (rad, strictly between 0 and π/2), and gravity `g` (m/s²).
pub fn projectile_motion(v0: f64, theta: f64, g: f64) -> Result<ProjectileResult, FormulaError> {
    check_launch(v0, theta, g)?;
    let time_of_flight_s = solve_flight_time(v0, theta, g)?;
    let sin = theta.sin();
    Ok(ProjectileResult {
        time_of_flight_s,
        max_height_m: v0 * v0 * sin * sin / (2.0 * g),
        range_m: v0 * v0 * (2.0 * theta).sin() / g,
    })
}

/// Trajectory sampled at `points` evenly spaced instants over `[0, t_flight]`.
pub fn trajectory(v0: f64, theta: f64, g: f64, points: usize) -> Result<Curve, FormulaError> {
    check_launch(v0, theta, g)?;
    let points = point_count(points)?;
    let t_flight = solve_flight_time(v0, theta, g)?;
    let times = linspace(0.0, t_flight, points);
    Ok(Curve::from_points(
        "Distance (m)",
        "Height (m)",
        positions(v0, theta, &times, g),
    ))
}

fn check_launch(v0: f64, theta: f64, g: f64) -> Result<(), FormulaError> {
    positive("v0", v0)?;
    if !(theta.is_finite() && theta > 0.0 && theta < FRAC_PI_2) {
        return Err(FormulaError::OutOfRange {
            parameter: "theta",
            value: theta,
            expected: "an angle strictly between 0 and pi/2 rad",
        });
    }
    denominator(PROJECTILE, "g", g)?;
    Ok(())
}

/// Fall time and impact speed for a drop from rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeFallResult {
    pub fall_time_s: f64,
    pub final_velocity_m_s: f64,
}

impl FreeFallResult {
    pub fn scalars(&self) -> Vec<ScalarResult> {
        vec![
            ScalarResult::new("Time to Fall", self.fall_time_s, "s"),
            ScalarResult::new("Final Velocity Before Impact", self.final_velocity_m_s, "m/s"),
        ]
    }
}

/// Drop from height `h` (m) under gravity `g` (m/s²): `t = √(2h/g)`, `v = √(2gh)`.
pub fn free_fall(h: f64, g: f64) -> Result<FreeFallResult, FormulaError> {
    non_negative("h", h)?;
    denominator(FREE_FALL, "g", g)?;
    Ok(FreeFallResult {
        fall_time_s: (2.0 * h / g).sqrt(),
        final_velocity_m_s: (2.0 * g * h).sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trajectory_lands_at_launch_height() {
        let curve = trajectory(20.0, 45f64.to_radians(), 9.81, 100).expect("trajectory");
        assert_eq!(curve.len(), 100);
        let (_, y_end) = curve.last().expect("last point");
        assert!(y_end.abs() < 1e-9, "y(t_flight) = {y_end}");
    }

    #[test]
    fn horizontal_launch_is_out_of_range() {
        assert!(matches!(
            projectile_motion(10.0, 0.0, 9.81),
            Err(FormulaError::OutOfRange {
                parameter: "theta",
                ..
            })
        ));
    }

    #[test]
    fn free_fall_from_ground_is_instant() {
        let result = free_fall(0.0, 9.81).expect("free fall");
        assert_eq!(result.fall_time_s, 0.0);
        assert_eq!(result.final_velocity_m_s, 0.0);
    }
}
