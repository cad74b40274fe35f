use crate::math::find_overlaps;
use crate::model::SimulationRun;
use crate::prelude::{SimResult, ValidationCheck};
use crate::validation::config::CheckConfig;
use crate::validation::result::{CheckResult, CheckStatus};

/// Fails when any two component footprints share board area.
pub struct OverlapCheck;

impl ValidationCheck for OverlapCheck {
    fn key(&self) -> &'static str {
        "overlap"
    }

    fn evaluate(&self, run: &SimulationRun, _config: &CheckConfig) -> SimResult<CheckResult> {
        let footprints = run.footprints();
        let pairs = find_overlaps(footprints.iter().map(|f| &f.rect));
        let label = "Component Footprint Overlap";

        if pairs.is_empty() {
            return Ok(CheckResult::new(
                self.key(),
                CheckStatus::Pass,
                label,
                "No overlapping components found".to_string(),
            )
            .with_table(&["Status"], vec![vec!["No overlaps detected".to_string()]]));
        }

        let rows = pairs
            .iter()
            .map(|&(i, j)| vec![footprints[i].name.clone(), footprints[j].name.clone()])
            .collect();
        Ok(CheckResult::new(
            self.key(),
            CheckStatus::Fail,
            label,
            format!("{} overlaps detected", pairs.len()),
        )
        .with_table(&["Component 1", "Component 2"], rows))
    }
}
