use crate::generator::profile::demo_board;
use anyhow::Context;
use boardtherm::{CheckConfig, RunSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub seed: u64,
    pub scenario: RunSpec,
    pub checks: CheckConfig,
    pub export_dir: Option<PathBuf>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            scenario: demo_board(),
            checks: CheckConfig::default(),
            export_dir: None,
        }
    }
}

/// Command-line values that take precedence over the loaded workflow.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub ambient: Option<f64>,
    pub sim_time: Option<f64>,
    pub dt: Option<f64>,
    pub export_dir: Option<PathBuf>,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        config
            .scenario
            .validate()
            .with_context(|| format!("validating scenario in {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
        if let Some(ambient) = overrides.ambient {
            self.scenario.ambient = ambient;
        }
        if let Some(sim_time) = overrides.sim_time {
            self.scenario.sim_time = sim_time;
        }
        if let Some(dt) = overrides.dt {
            self.scenario.dt = dt;
        }
        if overrides.export_dir.is_some() {
            self.export_dir = overrides.export_dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardtherm::validation::EnergyModel;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_use_demo_board() {
        let cfg = WorkflowConfig::default();
        assert_eq!(cfg.scenario.components.len(), 4);
        assert_eq!(cfg.checks.steady_pct_max, 5.0);
    }

    #[test]
    fn overrides_replace_scenario_values() {
        let cfg = WorkflowConfig::default().with_overrides(Overrides {
            seed: Some(7),
            dt: Some(0.5),
            ..Default::default()
        });
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.scenario.dt, 0.5);
        assert_eq!(cfg.scenario.sim_time, 600.0);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"seed: 3
checks:
  steadyPctMax: 4.0
  energy_model: simulated
scenario:
  grid: { nx: 10, ny: 8, dx: 0.5, dy: 0.5 }
  ambient: 30.0
  sim_time: 120.0
  dt: 0.25
  components:
    - name: U7
      waveform: { kind: sinusoidal, freq: 0.1 }
      footprint: { x: 0, y: 0, l: 4, w: 4 }
    - name: Q2
      color: '#000000'
      waveform: { kind: square_pulse }
      thermal: { tau_j: 4.0, tau_c: 9.0 }
",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.seed, 3);
        assert_eq!(cfg.checks.steady_pct_max, 4.0);
        assert_eq!(cfg.checks.energy_model, EnergyModel::Simulated);
        assert_eq!(cfg.scenario.components.len(), 2);
        assert!(cfg.scenario.components[1].thermal.is_some());
    }

    #[test]
    fn config_load_rejects_empty_scenario() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"scenario:
  grid: { nx: 10, ny: 8, dx: 1, dy: 1 }
  ambient: 25.0
  sim_time: 10.0
  dt: 0.5
  components: []
",
        )
        .unwrap();
        let path = temp.into_temp_path();
        assert!(WorkflowConfig::load(&path).is_err());
    }
}
