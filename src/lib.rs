//! Physics Explorer: closed-form physics formulas behind a small menu-driven front-end.
//!
//! The formula layer lives in the workspace crates re-exported here, so the
//! command-line front-end and any other presentation layer (GUI, web) share it.

pub mod logging;
pub mod plot;

pub use phys_config as config;
pub use phys_core::{constants, sampling, units};
pub use phys_export as export;
pub use phys_formulas as formulas;
pub use phys_symbolic as symbolic;
pub use phys_topics as topics;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
