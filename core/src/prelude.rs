use crate::model::SimulationRun;
use crate::validation::{CheckConfig, CheckResult};

/// Common error type for synthesis, integration and validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("numeric overflow in {context} at step {step}")]
    NumericOverflow { context: String, step: usize },
}

pub type SimResult<T> = Result<T, SimError>;

impl SimError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SimError::InvalidInput(message.into())
    }
}

/// A named physical-consistency rule evaluated against one finished run.
pub trait ValidationCheck {
    /// Stable identifier used to key results (`steady`, `energy`, ...).
    fn key(&self) -> &'static str;
    fn evaluate(&self, run: &SimulationRun, config: &CheckConfig) -> SimResult<CheckResult>;
}
