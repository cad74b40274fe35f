use crate::model::component::ComponentSpec;
use crate::model::grid::Grid;
use crate::prelude::{SimError, SimResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything needed to synthesize one run, apart from the random source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSpec {
    pub grid: Grid,
    pub ambient: f64,
    pub sim_time: f64,
    pub dt: f64,
    pub components: Vec<ComponentSpec>,
}

impl RunSpec {
    pub fn validate(&self) -> SimResult<()> {
        self.grid.validate()?;
        if !self.ambient.is_finite() {
            return Err(SimError::invalid("ambient temperature must be finite"));
        }
        if self.components.is_empty() {
            return Err(SimError::invalid("at least one component is required"));
        }

        let mut seen = HashSet::new();
        for component in &self.components {
            if component.name.trim().is_empty() {
                return Err(SimError::invalid("component names must not be blank"));
            }
            if !seen.insert(component.name.as_str()) {
                return Err(SimError::invalid(format!(
                    "duplicate component name {}",
                    component.name
                )));
            }
            component.waveform.validate()?;
            if let Some(params) = &component.thermal {
                params.validate()?;
            }
            if let Some(rect) = &component.footprint {
                let finite = [rect.x, rect.y, rect.l, rect.w].iter().all(|v| v.is_finite());
                if !(finite && rect.l >= 0.0 && rect.w >= 0.0) {
                    return Err(SimError::invalid(format!(
                        "footprint of {} must be finite with non-negative extent: {:?}",
                        component.name, rect
                    )));
                }
            }
        }
        Ok(())
    }
}
