use crate::math::integrate_area;
use crate::model::{Component, ComponentSeries, SimulationRun};
use crate::prelude::{SimError, SimResult, ValidationCheck};
use crate::synthesis::thermal::JUNCTION_HEAT_FRACTION;
use crate::validation::config::{CheckConfig, EnergyModel};
use crate::validation::result::{fmt_value, CheckResult, CheckStatus};

/// Share of input energy booked as stored under [`EnergyModel::FixedSplit`].
pub const FIXED_STORED_SHARE: f64 = 0.3;
/// Share of input energy booked as dissipated under [`EnergyModel::FixedSplit`].
pub const FIXED_DISSIPATED_SHARE: f64 = 0.7;

/// Input, stored and dissipated energy (J) of one component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBudget {
    pub input: f64,
    pub stored: f64,
    pub dissipated: f64,
}

impl EnergyBudget {
    /// `100 · |Ein − (Es + Ed)| / max(1, Ein)`.
    pub fn balance_pct(&self) -> f64 {
        100.0 * (self.input - (self.stored + self.dissipated)).abs() / self.input.max(1.0)
    }

    pub fn compute(
        run: &SimulationRun,
        component: &Component,
        series: &ComponentSeries,
        model: EnergyModel,
    ) -> SimResult<Self> {
        let t = run.time().as_slice();
        let input = integrate_area(t, &series.power)?;

        match model {
            EnergyModel::FixedSplit => Ok(Self {
                input,
                stored: FIXED_STORED_SHARE * input,
                dissipated: FIXED_DISSIPATED_SHARE * input,
            }),
            EnergyModel::Simulated => {
                let ambient = run.ambient();
                let params = &component.thermal;
                let (tj, tc) = series
                    .final_junction()
                    .zip(series.final_case())
                    .ok_or_else(|| {
                        SimError::invalid(format!("{} has no temperature samples", series.name))
                    })?;

                // Time constants act as heat capacities (J/K) in the normalized model.
                let stored = params.tau_j * (tj - ambient) + params.tau_c * (tc - ambient);
                let to_ambient: Vec<f64> =
                    series.case.iter().map(|&c| (c - ambient) / params.r_ca).collect();
                let bypass = (1.0 - JUNCTION_HEAT_FRACTION) * input;
                let dissipated = bypass + integrate_area(t, &to_ambient)?;

                Ok(Self {
                    input,
                    stored,
                    dissipated,
                })
            }
        }
    }
}

/// Energy conservation: input energy must equal stored plus dissipated.
pub struct EnergyBalanceCheck;

impl ValidationCheck for EnergyBalanceCheck {
    fn key(&self) -> &'static str {
        "energy"
    }

    fn evaluate(&self, run: &SimulationRun, config: &CheckConfig) -> SimResult<CheckResult> {
        let mut rows = Vec::with_capacity(run.series().len());
        let mut worst = 0.0_f64;

        for (component, series) in run.entries() {
            let budget = EnergyBudget::compute(run, component, series, config.energy_model)?;
            let bal = budget.balance_pct();
            worst = worst.max(bal);
            rows.push(vec![
                series.name.clone(),
                format!("{} J", fmt_value(budget.input, 2)),
                format!("{} J", fmt_value(budget.stored, 2)),
                format!("{} J", fmt_value(budget.dissipated, 2)),
                format!("{}%", fmt_value(bal, 2)),
            ]);
        }

        let basis = match config.energy_model {
            EnergyModel::FixedSplit => "fixed 30/70 split, closes by construction",
            EnergyModel::Simulated => "stored and dissipated energy from simulated state",
        };
        let summary = format!(
            "Largest imbalance {}% against a {}% limit ({})",
            fmt_value(worst, 2),
            fmt_value(config.energy_pct_max, 2),
            basis
        );
        Ok(CheckResult::new(
            self.key(),
            CheckStatus::from_pass(worst <= config.energy_pct_max),
            "Energy Conservation",
            summary,
        )
        .with_table(&["Component", "Input", "Stored", "Dissipated", "Balance %"], rows))
    }
}
