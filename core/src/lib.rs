//! Synthetic thermal/power core for board-mounted components.
//!
//! The crate synthesizes surface heatmaps, power waveforms and two-node RC
//! junction/case temperature histories, then cross-checks the resulting run
//! against simple physical-consistency rules.

pub mod math;
pub mod model;
pub mod prelude;
pub mod synthesis;
pub mod telemetry;
pub mod validation;

pub use model::{Component, ComponentSpec, Footprint, Grid, RunSpec, SimulationRun, TimeAxis};
pub use prelude::{SimError, SimResult, ValidationCheck};
pub use synthesis::synthesize_run;
pub use validation::{CheckConfig, CheckResult, CheckStatus, ValidationEngine, ValidationReport};
