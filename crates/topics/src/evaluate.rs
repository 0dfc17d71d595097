//! Dispatch from a [`Topic`] to the formula layer.

use phys_config::SimulatorConfig;
use phys_core::units::deg_to_rad;
use phys_formulas::{
    Curve, DEFAULT_CURVE_POINTS, DEFAULT_ORBIT_POINTS, EnergyBand, FormulaError, ScalarResult,
    circular, kinematics, materials, optics, orbit, oscillation, quantum, thermo,
};
use tracing::{debug, warn};

use crate::TopicError;
use crate::topic::{Topic, TopicKind};

/// Sample counts for generated curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampling {
    pub curve_points: usize,
    pub orbit_points: usize,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            curve_points: DEFAULT_CURVE_POINTS,
            orbit_points: DEFAULT_ORBIT_POINTS,
        }
    }
}

impl From<&SimulatorConfig> for Sampling {
    fn from(config: &SimulatorConfig) -> Self {
        Self {
            curve_points: config.curve_points,
            orbit_points: config.orbit_points,
        }
    }
}

/// Results of one topic evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub kind: TopicKind,
    pub scalars: Vec<ScalarResult>,
    pub curve: Option<Curve>,
    pub band: Option<EnergyBand>,
}

impl Evaluation {
    fn new(kind: TopicKind, scalars: Vec<ScalarResult>) -> Self {
        Self {
            kind,
            scalars,
            curve: None,
            band: None,
        }
    }

    fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = Some(curve);
        self
    }

    fn with_band(mut self, band: EnergyBand) -> Self {
        self.band = Some(band);
        self
    }

    /// First scalar with the given name.
    pub fn scalar(&self, name: &str) -> Option<&ScalarResult> {
        self.scalars.iter().find(|s| s.name == name)
    }
}

/// Evaluate a topic. Rejected inputs skip curve generation and surface as [`TopicError::Formula`].
pub fn evaluate(topic: &Topic, sampling: &Sampling) -> Result<Evaluation, TopicError> {
    let kind = topic.kind();
    debug!(topic = kind.name(), ?sampling, "evaluating topic");
    match dispatch(topic, sampling) {
        Ok(evaluation) => {
            debug!(
                topic = kind.name(),
                scalars = evaluation.scalars.len(),
                points = evaluation.curve.as_ref().map(Curve::len).unwrap_or(0),
                "topic evaluated"
            );
            Ok(evaluation)
        }
        Err(err) => {
            warn!(topic = kind.name(), %err, "formula rejected inputs");
            Err(err.into())
        }
    }
}

fn dispatch(topic: &Topic, sampling: &Sampling) -> Result<Evaluation, FormulaError> {
    let kind = topic.kind();
    let n = sampling.curve_points;
    let evaluation = match *topic {
        Topic::Projectile(p) => {
            let theta = deg_to_rad(p.angle_deg);
            let result = kinematics::projectile_motion(p.velocity_m_s, theta, p.gravity_m_s2)?;
            let curve = kinematics::trajectory(p.velocity_m_s, theta, p.gravity_m_s2, n)?;
            Evaluation::new(kind, result.scalars()).with_curve(curve)
        }
        Topic::FreeFall(p) => {
            let result = kinematics::free_fall(p.height_m, p.gravity_m_s2)?;
            Evaluation::new(kind, result.scalars())
        }
        Topic::Shm(p) => {
            let omega = oscillation::angular_frequency(p.period_s)?;
            let curve = oscillation::shm_displacement(p.period_s, p.amplitude_m, n)?;
            Evaluation::new(
                kind,
                vec![ScalarResult::new("Angular Frequency", omega, "rad/s")],
            )
            .with_curve(curve)
        }
        Topic::Orbit(p) => {
            let result = orbit::orbit(p.semi_major_axis_au, p.eccentricity)?;
            let curve =
                orbit::orbit_curve(p.semi_major_axis_au, p.eccentricity, sampling.orbit_points)?;
            Evaluation::new(kind, result.scalars()).with_curve(curve)
        }
        Topic::EnergyTransition(p) => {
            let result = quantum::energy_transition(p.n_initial, p.n_final)?;
            Evaluation::new(kind, result.scalars()).with_band(result.band)
        }
        Topic::PhotonEnergy(p) => {
            let result = quantum::photon_energy(p.frequency_exponent)?;
            Evaluation::new(kind, result.scalars()).with_band(result.band)
        }
        Topic::MassEnergy(p) => {
            let energy = quantum::mass_energy(p.mass_kg)?;
            Evaluation::new(
                kind,
                vec![ScalarResult::new("Equivalent Energy", energy, "J")],
            )
        }
        Topic::StressStrain(p) => {
            let result =
                materials::stress_strain(p.force_n, p.area_m2, p.length_m, p.extension_m)?;
            Evaluation::new(kind, result.scalars())
        }
        Topic::Entropy(p) => {
            let delta = thermo::entropy_change(p.heat_j, p.t_initial_k, p.t_final_k)?;
            let curve = thermo::entropy_curve(p.heat_j, p.t_initial_k, p.t_final_k, n)?;
            Evaluation::new(kind, vec![ScalarResult::new("Entropy Change", delta, "J/K")])
                .with_curve(curve)
        }
        Topic::Centripetal(p) => {
            let force = circular::centripetal_force(p.mass_kg, p.radius_m, p.velocity_m_s)?;
            let curve = circular::centripetal_curve(p.mass_kg, p.radius_m, p.velocity_m_s, n)?;
            Evaluation::new(
                kind,
                vec![ScalarResult::new("Centripetal Force", force, "N")],
            )
            .with_curve(curve)
        }
        Topic::Lens(p) => {
            let result = optics::image_distance(p.focal_length_m, p.object_distance_m)?;
            let sweep = optics::default_object_sweep(p.focal_length_m, p.object_distance_m);
            debug!(?sweep, focal_length_m = p.focal_length_m, "lens sweep");
            let curve = optics::lens_curve(p.focal_length_m, p.object_distance_m, n)?;
            Evaluation::new(kind, result.scalars()).with_curve(curve)
        }
    };
    Ok(evaluation)
}
