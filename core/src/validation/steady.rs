use crate::math::StatsHelper;
use crate::model::SimulationRun;
use crate::prelude::{SimError, SimResult, ValidationCheck};
use crate::validation::config::CheckConfig;
use crate::validation::result::{fmt_value, CheckResult, CheckStatus};

/// Lumped resistance used by the steady-state estimate. It is a fixed
/// heuristic and deliberately not `R_JC + R_CA`.
pub const STEADY_R_TOTAL: f64 = 3.0;

/// Compares each final junction temperature with
/// `ambient + mean(P) · (1 + R_total)`.
pub struct SteadyStateCheck;

impl SteadyStateCheck {
    pub fn expected_junction(ambient: f64, power: &[f64]) -> f64 {
        ambient + StatsHelper::average(power) * (1.0 + STEADY_R_TOTAL)
    }
}

impl ValidationCheck for SteadyStateCheck {
    fn key(&self) -> &'static str {
        "steady"
    }

    fn evaluate(&self, run: &SimulationRun, config: &CheckConfig) -> SimResult<CheckResult> {
        let mut rows = Vec::with_capacity(run.series().len());
        let mut worst = 0.0_f64;

        for series in run.series() {
            let actual = series.final_junction().ok_or_else(|| {
                SimError::invalid(format!("{} has an empty junction series", series.name))
            })?;
            let expected = Self::expected_junction(run.ambient(), &series.power);
            let err = StatsHelper::relative_error_pct(actual, expected);
            worst = worst.max(err);
            rows.push(vec![
                series.name.clone(),
                format!("{}°C", fmt_value(expected, 2)),
                format!("{}°C", fmt_value(actual, 2)),
                format!("{}%", fmt_value(err, 2)),
            ]);
        }

        let pass = worst <= config.steady_pct_max;
        let summary = format!(
            "Largest deviation {}% against a {}% limit",
            fmt_value(worst, 2),
            fmt_value(config.steady_pct_max, 2)
        );
        Ok(CheckResult::new(
            self.key(),
            CheckStatus::from_pass(pass),
            "Steady-State Temperature (Tj)",
            summary,
        )
        .with_table(&["Component", "Expected", "Got", "Error %"], rows))
    }
}
