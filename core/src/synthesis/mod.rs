pub mod builder;
pub mod field;
pub mod thermal;
pub mod waveform;

pub use builder::synthesize_run;
pub use field::{synthesize_field, synthesize_surfaces};
pub use thermal::{integrate, ThermalParams, ThermalSeries};
pub use waveform::{waveform, WaveformKind};
