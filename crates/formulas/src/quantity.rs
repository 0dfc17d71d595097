//! Value records returned by the formulas.

use phys_core::sampling::linspace;
use serde::Serialize;

use crate::error::{FormulaError, finite, point_count};

/// A named physical quantity with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalarResult {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl ScalarResult {
    pub const fn new(name: &'static str, value: f64, unit: &'static str) -> Self {
        Self { name, value, unit }
    }
}

/// Ordered `(x, y)` samples of a function, stored as two equal-length arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    x_label: &'static str,
    y_label: &'static str,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Curve {
    /// Sample `f` at `points` inclusive grid positions over `[start, end]`.
    pub fn sample<F>(
        x_label: &'static str,
        y_label: &'static str,
        (start, end): (f64, f64),
        points: usize,
        f: F,
    ) -> Result<Self, FormulaError>
    where
        F: Fn(f64) -> f64,
    {
        let points = point_count(points)?;
        finite("sweep start", start)?;
        finite("sweep end", end)?;
        let x = linspace(start, end, points);
        let y = x.iter().map(|&v| f(v)).collect();
        Ok(Self {
            x_label,
            y_label,
            x,
            y,
        })
    }

    /// Build a curve from explicit pairs.
    pub fn from_points<I>(x_label: &'static str, y_label: &'static str, points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (x, y): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
        Self {
            x_label,
            y_label,
            x,
            y,
        }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn x_label(&self) -> &'static str {
        self.x_label
    }

    pub fn y_label(&self) -> &'static str {
        self.y_label
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.points().next()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        match (self.x.last(), self.y.last()) {
            (Some(&x), Some(&y)) => Some((x, y)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_curve_has_requested_length() {
        let curve = Curve::sample("t", "x", (0.0, 2.0), 7, |t| t * t).expect("curve");
        assert_eq!(curve.len(), 7);
        assert_eq!(curve.x().len(), curve.y().len());
        assert_eq!(curve.last(), Some((2.0, 4.0)));
    }

    #[test]
    fn zero_points_are_rejected() {
        assert!(Curve::sample("t", "x", (0.0, 1.0), 0, |t| t).is_err());
    }
}
