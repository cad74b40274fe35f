pub mod component;
pub mod grid;
pub mod run;
pub mod spec;

pub use component::{Component, ComponentSpec, Footprint};
pub use grid::{Field, Grid, SurfaceFields};
pub use run::{ComponentSeries, RunMeta, SimulationRun, TimeAxis};
pub use spec::RunSpec;
