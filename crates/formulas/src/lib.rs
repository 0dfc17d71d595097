//! Closed-form physics formulas for the Physics Explorer.
//!
//! Every function here is pure: it validates its inputs, evaluates a
//! textbook closed form, and either returns the result or a typed
//! [`FormulaError`]. Curves are sampled on inclusive linear grids and always
//! carry exactly the requested number of points.

pub mod circular;
pub mod error;
pub mod kinematics;
pub mod materials;
pub mod optics;
pub mod orbit;
pub mod oscillation;
pub mod quantity;
pub mod quantum;
pub mod thermo;

pub use error::FormulaError;
pub use quantity::{Curve, ScalarResult};
pub use quantum::EnergyBand;

/// Default number of samples for time and parameter sweeps.
pub const DEFAULT_CURVE_POINTS: usize = 100;
/// Default number of samples around an orbit.
pub const DEFAULT_ORBIT_POINTS: usize = 360;
