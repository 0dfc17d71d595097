//! Topic identifiers and their typed parameter records.

use std::fmt;
use std::str::FromStr;

use phys_config::TopicCatalog;

use crate::TopicError;

/// Fieldless identifier for each menu entry, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicKind {
    Projectile,
    FreeFall,
    Shm,
    Orbit,
    EnergyTransition,
    PhotonEnergy,
    MassEnergy,
    StressStrain,
    Entropy,
    Centripetal,
    Lens,
}

impl TopicKind {
    pub const ALL: [TopicKind; 11] = [
        TopicKind::Projectile,
        TopicKind::FreeFall,
        TopicKind::Shm,
        TopicKind::Orbit,
        TopicKind::EnergyTransition,
        TopicKind::PhotonEnergy,
        TopicKind::MassEnergy,
        TopicKind::StressStrain,
        TopicKind::Entropy,
        TopicKind::Centripetal,
        TopicKind::Lens,
    ];

    /// Catalog key and command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            TopicKind::Projectile => "projectile",
            TopicKind::FreeFall => "free-fall",
            TopicKind::Shm => "shm",
            TopicKind::Orbit => "orbit",
            TopicKind::EnergyTransition => "energy-transition",
            TopicKind::PhotonEnergy => "photon-energy",
            TopicKind::MassEnergy => "mass-energy",
            TopicKind::StressStrain => "stress-strain",
            TopicKind::Entropy => "entropy",
            TopicKind::Centripetal => "centripetal",
            TopicKind::Lens => "lens",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            TopicKind::Projectile => "Projectile Motion",
            TopicKind::FreeFall => "Free Fall",
            TopicKind::Shm => "Simple Harmonic Motion",
            TopicKind::Orbit => "Celestial Gravitation",
            TopicKind::EnergyTransition => "Energy Transition",
            TopicKind::PhotonEnergy => "Planck's Constant",
            TopicKind::MassEnergy => "E=mc²",
            TopicKind::StressStrain => "Stress and Strain",
            TopicKind::Entropy => "Entropy",
            TopicKind::Centripetal => "Centripetal Force",
            TopicKind::Lens => "Lens Formula",
        }
    }
}

impl fmt::Display for TopicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TopicKind {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        TopicKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| TopicError::UnknownTopic(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileParams {
    pub velocity_m_s: f64,
    pub angle_deg: f64,
    pub gravity_m_s2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeFallParams {
    pub height_m: f64,
    pub gravity_m_s2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShmParams {
    pub period_s: f64,
    pub amplitude_m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParams {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyTransitionParams {
    pub n_initial: u32,
    pub n_final: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotonEnergyParams {
    pub frequency_exponent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassEnergyParams {
    pub mass_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressStrainParams {
    pub force_n: f64,
    pub area_m2: f64,
    pub length_m: f64,
    pub extension_m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyParams {
    pub heat_j: f64,
    pub t_initial_k: f64,
    pub t_final_k: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentripetalParams {
    pub mass_kg: f64,
    pub radius_m: f64,
    pub velocity_m_s: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensParams {
    pub focal_length_m: f64,
    pub object_distance_m: f64,
}

/// A selected topic with its parameters, as entered in the menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Topic {
    Projectile(ProjectileParams),
    FreeFall(FreeFallParams),
    Shm(ShmParams),
    Orbit(OrbitParams),
    EnergyTransition(EnergyTransitionParams),
    PhotonEnergy(PhotonEnergyParams),
    MassEnergy(MassEnergyParams),
    StressStrain(StressStrainParams),
    Entropy(EntropyParams),
    Centripetal(CentripetalParams),
    Lens(LensParams),
}

impl Topic {
    pub fn kind(&self) -> TopicKind {
        match self {
            Topic::Projectile(_) => TopicKind::Projectile,
            Topic::FreeFall(_) => TopicKind::FreeFall,
            Topic::Shm(_) => TopicKind::Shm,
            Topic::Orbit(_) => TopicKind::Orbit,
            Topic::EnergyTransition(_) => TopicKind::EnergyTransition,
            Topic::PhotonEnergy(_) => TopicKind::PhotonEnergy,
            Topic::MassEnergy(_) => TopicKind::MassEnergy,
            Topic::StressStrain(_) => TopicKind::StressStrain,
            Topic::Entropy(_) => TopicKind::Entropy,
            Topic::Centripetal(_) => TopicKind::Centripetal,
            Topic::Lens(_) => TopicKind::Lens,
        }
    }

    /// Topic populated with catalog defaults.
    pub fn from_catalog(
        kind: TopicKind,
        catalog: &TopicCatalog,
        gravity_m_s2: f64,
    ) -> Result<Self, TopicError> {
        Self::resolve(kind, catalog, gravity_m_s2, |_| None)
    }

    /// Topic populated from `requested` values keyed by catalog parameter,
    /// clamped into declared bounds; missing keys take catalog defaults.
    pub fn resolve<F>(
        kind: TopicKind,
        catalog: &TopicCatalog,
        gravity_m_s2: f64,
        requested: F,
    ) -> Result<Self, TopicError>
    where
        F: Fn(&str) -> Option<f64>,
    {
        let topic = kind.name();
        let get = |key: &str| catalog.resolve(topic, key, requested(key));
        let level = |key: &str| get(key).map(|v| v.round().max(0.0) as u32);

        let resolved = match kind {
            TopicKind::Projectile => Topic::Projectile(ProjectileParams {
                velocity_m_s: get("velocity")?,
                angle_deg: get("angle")?,
                gravity_m_s2,
            }),
            TopicKind::FreeFall => Topic::FreeFall(FreeFallParams {
                height_m: get("height")?,
                gravity_m_s2,
            }),
            TopicKind::Shm => Topic::Shm(ShmParams {
                period_s: get("period")?,
                amplitude_m: get("amplitude")?,
            }),
            TopicKind::Orbit => Topic::Orbit(OrbitParams {
                semi_major_axis_au: get("semi-major-axis")?,
                eccentricity: get("eccentricity")?,
            }),
            TopicKind::EnergyTransition => Topic::EnergyTransition(EnergyTransitionParams {
                n_initial: level("n-initial")?,
                n_final: level("n-final")?,
            }),
            TopicKind::PhotonEnergy => Topic::PhotonEnergy(PhotonEnergyParams {
                frequency_exponent: get("frequency-exponent")?,
            }),
            TopicKind::MassEnergy => Topic::MassEnergy(MassEnergyParams {
                mass_kg: get("mass")?,
            }),
            TopicKind::StressStrain => Topic::StressStrain(StressStrainParams {
                force_n: get("force")?,
                area_m2: get("area")?,
                length_m: get("length")?,
                extension_m: get("extension")?,
            }),
            TopicKind::Entropy => Topic::Entropy(EntropyParams {
                heat_j: get("heat")?,
                t_initial_k: get("t-initial")?,
                t_final_k: get("t-final")?,
            }),
            TopicKind::Centripetal => Topic::Centripetal(CentripetalParams {
                mass_kg: get("mass")?,
                radius_m: get("radius")?,
                velocity_m_s: get("velocity")?,
            }),
            TopicKind::Lens => Topic::Lens(LensParams {
                focal_length_m: get("focal-length")?,
                object_distance_m: get("object-distance")?,
            }),
        };
        Ok(resolved)
    }

    /// Parameters as `(key, value, unit)` triples, in catalog order.
    pub fn parameters(&self) -> Vec<(&'static str, f64, &'static str)> {
        match *self {
            Topic::Projectile(p) => vec![
                ("velocity", p.velocity_m_s, "m/s"),
                ("angle", p.angle_deg, "deg"),
                ("gravity", p.gravity_m_s2, "m/s²"),
            ],
            Topic::FreeFall(p) => vec![
                ("height", p.height_m, "m"),
                ("gravity", p.gravity_m_s2, "m/s²"),
            ],
            Topic::Shm(p) => vec![("period", p.period_s, "s"), ("amplitude", p.amplitude_m, "m")],
            Topic::Orbit(p) => vec![
                ("semi-major-axis", p.semi_major_axis_au, "AU"),
                ("eccentricity", p.eccentricity, ""),
            ],
            Topic::EnergyTransition(p) => vec![
                ("n-initial", f64::from(p.n_initial), ""),
                ("n-final", f64::from(p.n_final), ""),
            ],
            Topic::PhotonEnergy(p) => vec![("frequency-exponent", p.frequency_exponent, "")],
            Topic::MassEnergy(p) => vec![("mass", p.mass_kg, "kg")],
            Topic::StressStrain(p) => vec![
                ("force", p.force_n, "N"),
                ("area", p.area_m2, "m²"),
                ("length", p.length_m, "m"),
                ("extension", p.extension_m, "m"),
            ],
            Topic::Entropy(p) => vec![
                ("heat", p.heat_j, "J"),
                ("t-initial", p.t_initial_k, "K"),
                ("t-final", p.t_final_k, "K"),
            ],
            Topic::Centripetal(p) => vec![
                ("mass", p.mass_kg, "kg"),
                ("radius", p.radius_m, "m"),
                ("velocity", p.velocity_m_s, "m/s"),
            ],
            Topic::Lens(p) => vec![
                ("focal-length", p.focal_length_m, "m"),
                ("object-distance", p.object_distance_m, "m"),
            ],
        }
    }
}
