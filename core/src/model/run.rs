use crate::model::component::{Component, Footprint};
use crate::model::grid::{Grid, SurfaceFields};
use crate::prelude::{SimError, SimResult};
use serde::Serialize;

/// Upper bound on time samples per run; larger axes are rejected rather than allocated.
pub const MAX_STEPS: usize = 10_000_000;

/// Uniformly spaced simulation instants shared by every component of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeAxis {
    dt: f64,
    samples: Vec<f64>,
}

impl TimeAxis {
    /// `floor(sim_time / dt)` samples at `i * dt`, covering `[0, sim_time)`.
    pub fn uniform(sim_time: f64, dt: f64) -> SimResult<Self> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::invalid(format!("time step must be positive, got {}", dt)));
        }
        if !(sim_time.is_finite() && sim_time > 0.0) {
            return Err(SimError::invalid(format!(
                "simulation time must be positive, got {}",
                sim_time
            )));
        }
        // Absorbs representation error such as 600 / 0.1 = 5999.999...
        let steps = (sim_time / dt + 1e-9).floor();
        if steps > MAX_STEPS as f64 {
            return Err(SimError::invalid(format!(
                "{} / {} needs {} steps, above the {} step limit",
                sim_time, dt, steps, MAX_STEPS
            )));
        }
        let count = steps as usize;
        if count == 0 {
            return Err(SimError::invalid(format!(
                "time step {} exceeds simulation time {}",
                dt, sim_time
            )));
        }
        let samples = (0..count).map(|i| i as f64 * dt).collect();
        Ok(Self { dt, samples })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }
}

/// Equal-length power and temperature histories of one component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentSeries {
    pub name: String,
    pub power: Vec<f64>,
    pub junction: Vec<f64>,
    pub case: Vec<f64>,
}

impl ComponentSeries {
    pub fn final_junction(&self) -> Option<f64> {
        self.junction.last().copied()
    }

    pub fn final_case(&self) -> Option<f64> {
        self.case.last().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunMeta {
    pub ambient: f64,
    pub sim_time: f64,
    pub dt: f64,
}

/// Immutable aggregate produced by one synthesis call.
///
/// `components`, `series` and (where present) `footprints` share the
/// component name as join key; `series` follows component order.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRun {
    grid: Grid,
    fields: SurfaceFields,
    time: TimeAxis,
    components: Vec<Component>,
    footprints: Vec<Footprint>,
    series: Vec<ComponentSeries>,
    meta: RunMeta,
}

impl SimulationRun {
    pub(crate) fn assemble(
        grid: Grid,
        fields: SurfaceFields,
        time: TimeAxis,
        components: Vec<Component>,
        footprints: Vec<Footprint>,
        series: Vec<ComponentSeries>,
        meta: RunMeta,
    ) -> SimResult<Self> {
        if fields.top().dim() != grid.shape() {
            return Err(SimError::invalid("field shape does not match grid"));
        }
        if components.len() != series.len() {
            return Err(SimError::invalid(format!(
                "{} components but {} series",
                components.len(),
                series.len()
            )));
        }
        for (component, s) in components.iter().zip(&series) {
            if component.name != s.name {
                return Err(SimError::invalid(format!(
                    "series {} does not follow component {}",
                    s.name, component.name
                )));
            }
            let n = time.len();
            if s.power.len() != n || s.junction.len() != n || s.case.len() != n {
                return Err(SimError::invalid(format!(
                    "series for {} is not aligned with the {}-sample time axis",
                    s.name, n
                )));
            }
        }
        Ok(Self {
            grid,
            fields,
            time,
            components,
            footprints,
            series,
            meta,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fields(&self) -> &SurfaceFields {
        &self.fields
    }

    pub fn time(&self) -> &TimeAxis {
        &self.time
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn footprints(&self) -> &[Footprint] {
        &self.footprints
    }

    pub fn series(&self) -> &[ComponentSeries] {
        &self.series
    }

    pub fn meta(&self) -> &RunMeta {
        &self.meta
    }

    pub fn ambient(&self) -> f64 {
        self.meta.ambient
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn series_for(&self, name: &str) -> Option<&ComponentSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Components paired with their histories, in run order.
    pub fn entries(&self) -> impl Iterator<Item = (&Component, &ComponentSeries)> {
        self.components.iter().zip(self.series.iter())
    }
}
