use crate::model::SimulationRun;
use crate::prelude::{SimResult, ValidationCheck};
use crate::validation::config::CheckConfig;
use crate::validation::result::{fmt_value, CheckResult, CheckStatus};

/// Placeholder junction capacitance (J/K).
pub const PLACEHOLDER_CJ: f64 = 1.2;
/// Placeholder case capacitance (J/K).
pub const PLACEHOLDER_CC: f64 = 1.8;

/// Heuristic magnitude table. Values are fixed rather than read from the run,
/// so the result is always `warn`.
pub struct CapacitanceCheck;

impl ValidationCheck for CapacitanceCheck {
    fn key(&self) -> &'static str {
        "cap"
    }

    fn evaluate(&self, run: &SimulationRun, config: &CheckConfig) -> SimResult<CheckResult> {
        let total = PLACEHOLDER_CJ + PLACEHOLDER_CC;
        let rows = run
            .components()
            .iter()
            .map(|c| {
                vec![
                    c.name.clone(),
                    format!("{} J/K", fmt_value(PLACEHOLDER_CJ, 2)),
                    format!("{} J/K", fmt_value(PLACEHOLDER_CC, 2)),
                    format!("{} J/K", fmt_value(total, 2)),
                    "OK".to_string(),
                ]
            })
            .collect();

        let summary = format!(
            "Heuristic placeholder values, not derived from the run (warn band {}%)",
            fmt_value(config.cap_warn_pct, 0)
        );
        Ok(
            CheckResult::new(self.key(), CheckStatus::Warn, "Thermal Capacitance Magnitude", summary)
                .with_table(&["Component", "Cj", "Cc", "Total C", "Status"], rows),
        )
    }
}
