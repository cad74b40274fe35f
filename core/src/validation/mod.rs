pub mod capacitance;
pub mod config;
pub mod energy;
pub mod engine;
pub mod overlap;
pub mod result;
pub mod steady;

pub use capacitance::CapacitanceCheck;
pub use config::{CheckConfig, EnergyModel};
pub use energy::{EnergyBalanceCheck, EnergyBudget};
pub use engine::{ValidationEngine, ValidationReport};
pub use overlap::OverlapCheck;
pub use result::{fmt_value, CheckResult, CheckStatus};
pub use steady::SteadyStateCheck;
