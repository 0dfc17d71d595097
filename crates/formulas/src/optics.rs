//! Thin-lens imaging, `1/d_i = 1/f − 1/d_o`.
//!
//! Distances are signed (real-is-positive). The image distance has poles at
//! `d_o = f` (image at infinity) and `d_o = 0`.

use crate::error::{FormulaError, finite, nonzero};
use crate::quantity::{Curve, ScalarResult};

const LENS: &str = "lens formula";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensResult {
    pub image_distance_m: f64,
    pub magnification: f64,
}

impl LensResult {
    pub fn scalars(&self) -> Vec<ScalarResult> {
        vec![
            ScalarResult::new("Image Distance", self.image_distance_m, "m"),
            ScalarResult::new("Magnification", self.magnification, ""),
        ]
    }
}

/// Image distance and lateral magnification `m = −d_i/d_o`.
pub fn image_distance(
    focal_length_m: f64,
    object_distance_m: f64,
) -> Result<LensResult, FormulaError> {
    nonzero(LENS, "focal length", focal_length_m)?;
    nonzero(LENS, "object distance", object_distance_m)?;
    if object_distance_m == focal_length_m {
        return Err(FormulaError::SingularValue {
            formula: LENS,
            quantity: "object distance minus focal length",
        });
    }
    let image_distance_m = image_at(focal_length_m, object_distance_m);
    Ok(LensResult {
        image_distance_m,
        magnification: -image_distance_m / object_distance_m,
    })
}

/// Image distance against object distance over the default sweep for `d_o`.
pub fn lens_curve(
    focal_length_m: f64,
    object_distance_m: f64,
    points: usize,
) -> Result<Curve, FormulaError> {
    image_distance(focal_length_m, object_distance_m)?;
    let sweep = default_object_sweep(focal_length_m, object_distance_m);
    lens_sweep(focal_length_m, sweep, points)
}

/// Image distance against object distance over an explicit `[start, end]`.
///
/// The sweep must not contain a pole (`f` or `0`).
pub fn lens_sweep(
    focal_length_m: f64,
    (start, end): (f64, f64),
    points: usize,
) -> Result<Curve, FormulaError> {
    nonzero(LENS, "focal length", focal_length_m)?;
    finite("sweep start", start)?;
    finite("sweep end", end)?;
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    if (lo..=hi).contains(&focal_length_m) {
        return Err(FormulaError::SingularValue {
            formula: LENS,
            quantity: "object distance minus focal length",
        });
    }
    if (lo..=hi).contains(&0.0) {
        return Err(FormulaError::SingularValue {
            formula: LENS,
            quantity: "object distance",
        });
    }
    Curve::sample(
        "Object Distance (m)",
        "Image Distance (m)",
        (start, end),
        points,
        |d_o| image_at(focal_length_m, d_o),
    )
}

/// A sweep lying in the same pole-free interval as `d_o`.
///
/// Between the poles the sweep trims 5% off each side; beyond the outer pole
/// it runs from a quarter to four times the distance past that pole.
pub fn default_object_sweep(focal_length_m: f64, object_distance_m: f64) -> (f64, f64) {
    let (near, far) = if focal_length_m < 0.0 {
        (focal_length_m, 0.0)
    } else {
        (0.0, focal_length_m)
    };
    if object_distance_m > near && object_distance_m < far {
        let margin = 0.05 * (far - near);
        (near + margin, far - margin)
    } else {
        let edge = if object_distance_m > far { far } else { near };
        let span = object_distance_m - edge;
        (edge + 0.25 * span, edge + 4.0 * span)
    }
}

#[inline]
fn image_at(focal_length_m: f64, object_distance_m: f64) -> f64 {
    1.0 / (1.0 / focal_length_m - 1.0 / object_distance_m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_at_twice_focal_length_images_symmetrically() {
        let result = image_distance(0.1, 0.2).expect("lens");
        assert!((result.image_distance_m - 0.2).abs() < 1e-12);
        assert!((result.magnification + 1.0).abs() < 1e-12);
    }

    #[test]
    fn object_inside_focal_length_forms_virtual_image() {
        let result = image_distance(0.2, 0.1).expect("lens");
        assert!(result.image_distance_m < 0.0);
    }

    #[test]
    fn default_sweeps_avoid_poles() {
        let cases = [
            (0.1, 0.3),
            (0.2, 0.05),
            (0.2, -0.4),
            (-0.2, 0.3),
            (-0.2, -0.1),
            (-0.2, -0.5),
        ];
        for &(f, d_o) in &cases {
            let (start, end) = default_object_sweep(f, d_o);
            let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
            assert!(!(lo..=hi).contains(&f), "f={f} d_o={d_o} sweep=({start}, {end})");
            assert!(!(lo..=hi).contains(&0.0), "f={f} d_o={d_o} sweep=({start}, {end})");
            assert!(lens_curve(f, d_o, 20).is_ok());
        }
    }

    #[test]
    fn sweep_across_focal_point_is_singular() {
        assert!(matches!(
            lens_sweep(0.1, (0.05, 0.5), 10),
            Err(FormulaError::SingularValue { .. })
        ));
    }
}
