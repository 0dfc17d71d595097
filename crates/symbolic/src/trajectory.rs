//! Position evaluation along a drag-free ballistic arc.

/// Position `(x, y)` in metres at time `t` seconds after launch.
#[inline]
pub fn position_at(v0: f64, theta: f64, t: f64, g: f64) -> (f64, f64) {
    let (sin, cos) = theta.sin_cos();
    let x = v0 * cos * t;
    let y = v0 * sin * t - 0.5 * g * t * t;
    (x, y)
}

/// Positions for each time sample, in input order.
pub fn positions(v0: f64, theta: f64, times: &[f64], g: f64) -> Vec<(f64, f64)> {
    times
        .iter()
        .map(|&t| position_at(v0, theta, t, g))
        .collect()
}
