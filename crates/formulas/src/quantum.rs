//! Photon energies: hydrogen level transitions, Planck's relation, and mass–energy equivalence.

use phys_core::constants::{PLANCK_J_S, RYDBERG_PER_M, SPEED_OF_LIGHT_M_S};
use phys_core::units::m_to_nm;
use serde::Serialize;

use crate::error::{FormulaError, finite, positive};
use crate::quantity::ScalarResult;

const TRANSITION: &str = "energy transition";

/// Band edges in joules: `[1e-19, 3e-19, 1e-16)`.
pub const ENERGY_BAND_THRESHOLDS_J: [f64; 3] = [1.0e-19, 3.0e-19, 1.0e-16];

/// Qualitative photon energy bands used for comparisons in the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyBand {
    BelowVisible,
    Visible,
    Ultraviolet,
    XRay,
}

impl EnergyBand {
    /// Identifier matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            EnergyBand::BelowVisible => "below_visible",
            EnergyBand::Visible => "visible",
            EnergyBand::Ultraviolet => "ultraviolet",
            EnergyBand::XRay => "x_ray",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EnergyBand::BelowVisible => {
                "Lower than visible light, comparable to infrared and microwave photons"
            }
            EnergyBand::Visible => "Around the energy of visible light photons",
            EnergyBand::Ultraviolet => "Ultraviolet photons, energetic enough to break chemical bonds",
            EnergyBand::XRay => "X-ray territory and beyond, energetic enough to ionize atoms",
        }
    }
}

/// Classify a photon energy (J). Total over all inputs; NaN lands in the top band.
pub fn energy_band(energy_j: f64) -> EnergyBand {
    let [low, mid, high] = ENERGY_BAND_THRESHOLDS_J;
    if energy_j < low {
        EnergyBand::BelowVisible
    } else if energy_j < mid {
        EnergyBand::Visible
    } else if energy_j < high {
        EnergyBand::Ultraviolet
    } else {
        EnergyBand::XRay
    }
}

/// Photon emitted when a hydrogen electron drops between levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionResult {
    pub wavelength_m: f64,
    pub wavelength_nm: f64,
    pub photon_energy_j: f64,
    pub band: EnergyBand,
}

impl TransitionResult {
    pub fn scalars(&self) -> Vec<ScalarResult> {
        vec![
            ScalarResult::new("Emitted Photon Wavelength", self.wavelength_nm, "nm"),
            ScalarResult::new("Photon Energy", self.photon_energy_j, "J"),
        ]
    }
}

/// Rydberg formula `1/λ = R_H·(1/n_f² − 1/n_i²)`; requires `n_final < n_initial`.
pub fn energy_transition(n_initial: u32, n_final: u32) -> Result<TransitionResult, FormulaError> {
    check_level("n_initial", n_initial)?;
    check_level("n_final", n_final)?;
    if n_final >= n_initial {
        return Err(FormulaError::domain(
            TRANSITION,
            format!(
                "final energy level ({n_final}) must be lower than initial energy level ({n_initial})"
            ),
        ));
    }
    let (ni, nf) = (f64::from(n_initial), f64::from(n_final));
    let inverse = RYDBERG_PER_M * (1.0 / (nf * nf) - 1.0 / (ni * ni));
    let wavelength_m = 1.0 / inverse;
    let photon_energy_j = PLANCK_J_S * SPEED_OF_LIGHT_M_S / wavelength_m;
    Ok(TransitionResult {
        wavelength_m,
        wavelength_nm: m_to_nm(wavelength_m),
        photon_energy_j,
        band: energy_band(photon_energy_j),
    })
}

fn check_level(parameter: &'static str, n: u32) -> Result<(), FormulaError> {
    if n == 0 {
        return Err(FormulaError::OutOfRange {
            parameter,
            value: 0.0,
            expected: "a principal quantum number >= 1",
        });
    }
    Ok(())
}

/// Photon at frequency `10^exponent` Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotonResult {
    pub frequency_hz: f64,
    pub energy_j: f64,
    pub band: EnergyBand,
}

impl PhotonResult {
    pub fn scalars(&self) -> Vec<ScalarResult> {
        vec![
            ScalarResult::new("Frequency", self.frequency_hz, "Hz"),
            ScalarResult::new("Photon Energy", self.energy_j, "J"),
        ]
    }
}

/// Planck's relation `E = h·ν` with `ν = 10^exponent`.
pub fn photon_energy(frequency_exponent: f64) -> Result<PhotonResult, FormulaError> {
    finite("frequency exponent", frequency_exponent)?;
    let frequency_hz = 10f64.powf(frequency_exponent);
    finite("frequency", frequency_hz)?;
    let energy_j = PLANCK_J_S * frequency_hz;
    Ok(PhotonResult {
        frequency_hz,
        energy_j,
        band: energy_band(energy_j),
    })
}

/// Rest energy `E = m·c²` (J) for a mass in kilograms.
pub fn mass_energy(mass_kg: f64) -> Result<f64, FormulaError> {
    positive("mass", mass_kg)?;
    Ok(mass_kg * SPEED_OF_LIGHT_M_S * SPEED_OF_LIGHT_M_S)
}
