use crate::math::Rect;
use crate::synthesis::thermal::ThermalParams;
use crate::synthesis::waveform::WaveformKind;
use serde::{Deserialize, Serialize};

/// Declarative description of one board component, as read from a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
    pub waveform: WaveformKind,
    #[serde(default)]
    pub footprint: Option<Rect>,
    /// Fixed time constants; drawn from the run's random source when absent.
    #[serde(default)]
    pub thermal: Option<ThermalParams>,
}

fn default_color() -> String {
    "#64748b".to_string()
}

impl ComponentSpec {
    pub fn new(name: impl Into<String>, color: impl Into<String>, waveform: WaveformKind) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            waveform,
            footprint: None,
            thermal: None,
        }
    }

    pub fn with_footprint(mut self, rect: Rect) -> Self {
        self.footprint = Some(rect);
        self
    }

    pub fn with_thermal(mut self, params: ThermalParams) -> Self {
        self.thermal = Some(params);
        self
    }
}

/// A component as resolved inside a run; thermal parameters are concrete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub name: String,
    /// Display attribute only.
    pub color: String,
    pub waveform: WaveformKind,
    pub thermal: ThermalParams,
}

/// Board area occupied by a named component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footprint {
    pub name: String,
    #[serde(flatten)]
    pub rect: Rect,
}

impl Footprint {
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        Self {
            name: name.into(),
            rect,
        }
    }
}
