//! Topic selection for the Physics Explorer.
//!
//! Each menu entry is a [`Topic`] variant carrying its own typed parameter
//! record; [`evaluate`] maps it onto exactly one family of formulas.

pub mod evaluate;
pub mod topic;

pub use evaluate::{Evaluation, Sampling, evaluate};
pub use topic::{
    CentripetalParams, EnergyTransitionParams, EntropyParams, FreeFallParams, LensParams,
    MassEnergyParams, OrbitParams, PhotonEnergyParams, ProjectileParams, ShmParams,
    StressStrainParams, Topic, TopicKind,
};

pub use phys_config as config;
pub use phys_formulas as formulas;

use thiserror::Error;

/// Errors surfaced while building or evaluating a topic.
#[derive(Debug, Error)]
pub enum TopicError {
    #[error(transparent)]
    Formula(#[from] phys_formulas::FormulaError),
    #[error("catalog lookup failed: {0}")]
    Config(#[from] phys_config::ConfigError),
    #[error("unknown topic `{0}`")]
    UnknownTopic(String),
}

impl TopicError {
    /// Domain and singular failures are shown as warnings rather than errors.
    pub fn is_warning(&self) -> bool {
        matches!(self, TopicError::Formula(err) if err.is_domain_or_singular())
    }
}
