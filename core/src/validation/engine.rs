use crate::model::SimulationRun;
use crate::prelude::{SimResult, ValidationCheck};
use crate::telemetry::LogManager;
use crate::validation::capacitance::CapacitanceCheck;
use crate::validation::config::CheckConfig;
use crate::validation::energy::EnergyBalanceCheck;
use crate::validation::overlap::OverlapCheck;
use crate::validation::result::{CheckResult, CheckStatus};
use crate::validation::steady::SteadyStateCheck;
use serde::Serialize;

/// Runs a fixed set of checks against a finished run.
pub struct ValidationEngine {
    config: CheckConfig,
    checks: Vec<Box<dyn ValidationCheck + Send + Sync>>,
    logger: LogManager,
}

impl ValidationEngine {
    /// Steady-state, energy, capacitance and overlap checks, in that order.
    pub fn new(config: CheckConfig) -> Self {
        Self::with_checks(
            config,
            vec![
                Box::new(SteadyStateCheck),
                Box::new(EnergyBalanceCheck),
                Box::new(CapacitanceCheck),
                Box::new(OverlapCheck),
            ],
        )
    }

    pub fn with_checks(
        config: CheckConfig,
        checks: Vec<Box<dyn ValidationCheck + Send + Sync>>,
    ) -> Self {
        Self {
            config,
            checks,
            logger: LogManager::new("validation"),
        }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    pub fn evaluate(&self, run: &SimulationRun) -> SimResult<ValidationReport> {
        let mut results = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            let result = check.evaluate(run, &self.config)?;
            self.logger.detail(&format!(
                "{} -> {} ({})",
                check.key(),
                result.status.label(),
                result.summary
            ));
            results.push(result);
        }

        let report = ValidationReport::from_results(results);
        self.logger.record(&report.headline());
        Ok(report)
    }
}

/// All check results of one run plus the unweighted pass count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub results: Vec<CheckResult>,
    pub passing: usize,
    pub total: usize,
}

impl ValidationReport {
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let passing = results.iter().filter(|r| r.passed()).count();
        let total = results.len();
        Self {
            results,
            passing,
            total,
        }
    }

    pub fn failing(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == CheckStatus::Fail)
            .count()
    }

    pub fn get(&self, key: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.key == key)
    }

    /// `pass` when every check passes, `fail` when none does, `warn` otherwise.
    pub fn overall_status(&self) -> CheckStatus {
        if self.passing == self.total {
            CheckStatus::Pass
        } else if self.passing == 0 {
            CheckStatus::Fail
        } else {
            CheckStatus::Warn
        }
    }

    pub fn headline(&self) -> String {
        format!("{} / {} passing", self.passing, self.total)
    }
}
