use boardtherm::telemetry::MetricsSnapshot;
use boardtherm::{SimulationRun, ValidationReport};
use serde::Serialize;
use std::sync::Arc;

/// Latest published run and its check report.
///
/// Runs are swapped in whole; nothing here is mutated in place.
#[derive(Debug, Clone, Default)]
pub struct VisualizationModel {
    pub seed: u64,
    pub run: Option<Arc<SimulationRun>>,
    pub report: Option<ValidationReport>,
}

/// Compact status payload for the renderer's header pill.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSummary {
    pub seed: u64,
    pub passing: usize,
    pub total: usize,
    pub status: String,
    /// `(min, max)` °C across the surface fields, when a run is published.
    pub field_range: Option<(f64, f64)>,
    pub metrics: MetricsSnapshot,
}

impl VisualizationModel {
    pub fn summary(&self, metrics: MetricsSnapshot) -> StatusSummary {
        let (passing, total, status) = match &self.report {
            Some(report) => (
                report.passing,
                report.total,
                report.overall_status().label().to_string(),
            ),
            None => (0, 0, "PENDING".to_string()),
        };
        StatusSummary {
            seed: self.seed,
            passing,
            total,
            status,
            field_range: self.run.as_ref().map(|run| run.fields().range()),
            metrics,
        }
    }
}
