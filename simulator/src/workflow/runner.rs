use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use boardtherm::telemetry::{MetricsRecorder, MetricsSnapshot};
use boardtherm::{synthesize_run, SimulationRun, ValidationEngine, ValidationReport};
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;

pub struct WorkflowResult {
    pub seed: u64,
    pub run: Arc<SimulationRun>,
    pub report: ValidationReport,
}

pub struct Runner {
    config: WorkflowConfig,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        self.execute_with_seed(self.config.seed)
    }

    /// Synthesizes a fresh run from the configured scenario and validates it.
    pub fn execute_with_seed(&self, seed: u64) -> anyhow::Result<WorkflowResult> {
        let outcome = self.run_stages(seed);
        if outcome.is_err() {
            self.metrics.record_error();
        }
        outcome
    }

    fn run_stages(&self, seed: u64) -> anyhow::Result<WorkflowResult> {
        let mut rng = StdRng::seed_from_u64(seed);
        let run = synthesize_run(&self.config.scenario, &mut rng)
            .with_context(|| format!("synthesizing run with seed {}", seed))?;
        self.metrics.record_run();

        let engine = ValidationEngine::new(self.config.checks.clone());
        let report = engine.evaluate(&run).context("evaluating checks")?;
        self.metrics.record_checks(report.total, report.failing());

        Ok(WorkflowResult {
            seed,
            run: Arc::new(run),
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardtherm::CheckStatus;

    #[test]
    fn runner_executes_workflow() {
        let runner = Runner::new(WorkflowConfig::default());
        let result = runner.execute().unwrap();
        assert_eq!(result.run.series().len(), 4);
        assert_eq!(result.run.time().len(), 2400);
        assert_eq!(result.report.total, 4);
        assert_eq!(result.report.get("cap").unwrap().status, CheckStatus::Warn);

        let metrics = runner.metrics();
        assert_eq!(metrics.runs, 1);
        assert_eq!(metrics.checks_evaluated, 4);
    }

    #[test]
    fn reruns_produce_independent_runs() {
        let runner = Runner::new(WorkflowConfig::default());
        let first = runner.execute_with_seed(1).unwrap();
        let second = runner.execute_with_seed(2).unwrap();
        assert!(!Arc::ptr_eq(&first.run, &second.run));
        assert_ne!(first.run.fields().top(), second.run.fields().top());
    }

    #[test]
    fn failures_are_counted() {
        let mut config = WorkflowConfig::default();
        config.scenario.components.clear();
        let runner = Runner::new(config);
        assert!(runner.execute().is_err());
        assert_eq!(runner.metrics().errors, 1);
    }
}
