//! Axial stress and strain in a uniform bar.

use crate::error::{FormulaError, denominator, finite};
use crate::quantity::ScalarResult;

const STRESS_STRAIN: &str = "stress and strain";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressStrainResult {
    pub stress_pa: f64,
    pub strain: f64,
    /// `None` when the bar is unstrained.
    pub youngs_modulus_pa: Option<f64>,
}

impl StressStrainResult {
    pub fn scalars(&self) -> Vec<ScalarResult> {
        let mut scalars = vec![
            ScalarResult::new("Stress", self.stress_pa, "Pa"),
            ScalarResult::new("Strain", self.strain, ""),
        ];
        if let Some(modulus) = self.youngs_modulus_pa {
            scalars.push(ScalarResult::new("Young's Modulus", modulus, "Pa"));
        }
        scalars
    }
}

/// `stress = F/A`, `strain = Δl/l`.
pub fn stress_strain(
    force_n: f64,
    area_m2: f64,
    original_length_m: f64,
    extension_m: f64,
) -> Result<StressStrainResult, FormulaError> {
    finite("force", force_n)?;
    denominator(STRESS_STRAIN, "area", area_m2)?;
    denominator(STRESS_STRAIN, "original length", original_length_m)?;
    finite("extension", extension_m)?;

    let stress_pa = force_n / area_m2;
    let strain = extension_m / original_length_m;
    let youngs_modulus_pa = (strain != 0.0).then(|| stress_pa / strain);
    Ok(StressStrainResult {
        stress_pa,
        strain,
        youngs_modulus_pa,
    })
}
