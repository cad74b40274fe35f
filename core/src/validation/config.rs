use serde::{Deserialize, Serialize};

/// How stored and dissipated energy are obtained for the energy balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyModel {
    /// Fixed 30 % stored / 70 % dissipated split of the input energy. The
    /// balance closes by construction; this is a placeholder, not a check.
    #[default]
    FixedSplit,
    /// Stored energy from the final node temperatures and dissipated energy
    /// integrated from the case-to-ambient heat flow.
    Simulated,
}

/// Pass/fail thresholds, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    #[serde(alias = "steadyPctMax")]
    pub steady_pct_max: f64,
    #[serde(alias = "energyPctMax")]
    pub energy_pct_max: f64,
    #[serde(alias = "capWarnPct")]
    pub cap_warn_pct: f64,
    #[serde(alias = "energyModel")]
    pub energy_model: EnergyModel,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            steady_pct_max: 5.0,
            energy_pct_max: 2.0,
            cap_warn_pct: 25.0,
            energy_model: EnergyModel::FixedSplit,
        }
    }
}
