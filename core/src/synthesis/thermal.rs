//! Two-node (junction, case) lumped RC thermal model.
//!
//! ```text
//! dTj/dt = (0.8·P − (Tj − Tc)/R_jc) / tau_j
//! dTc/dt = ((Tj − Tc)/R_jc − (Tc − ambient)/R_ca) / tau_c
//! ```
//!
//! Both derivatives are evaluated from the previous step's state before
//! either node is written (simultaneous forward-Euler update).
//!
//! ## Stability
//!
//! Forward Euler on this linear system is stable only while
//! `dt < 2 / |λ_fast|`, where `λ_fast` is the most negative eigenvalue of the
//! system matrix (see [`ThermalParams::max_stable_dt`]). For the drawn time
//! constant ranges that limit is roughly 5 s. Oversized steps are not
//! corrected: a warning is logged and, if the recurrence blows up to a
//! non-finite value, [`SimError::NumericOverflow`] is returned.

use crate::prelude::{SimError, SimResult};
use crate::telemetry::LogManager;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Junction-to-case resistance (K/W).
pub const R_JC: f64 = 1.3;
/// Case-to-ambient resistance (K/W).
pub const R_CA: f64 = 3.4;
/// Share of component power deposited in the junction node.
pub const JUNCTION_HEAT_FRACTION: f64 = 0.8;

pub const TAU_J_RANGE: Range<f64> = 3.0..6.0;
pub const TAU_C_RANGE: Range<f64> = 7.0..13.0;

/// Per-component thermal parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalParams {
    pub tau_j: f64,
    pub tau_c: f64,
    #[serde(default = "default_r_jc")]
    pub r_jc: f64,
    #[serde(default = "default_r_ca")]
    pub r_ca: f64,
}

fn default_r_jc() -> f64 {
    R_JC
}

fn default_r_ca() -> f64 {
    R_CA
}

impl ThermalParams {
    pub fn new(tau_j: f64, tau_c: f64) -> Self {
        Self {
            tau_j,
            tau_c,
            r_jc: R_JC,
            r_ca: R_CA,
        }
    }

    /// Draws `tau_j ∈ [3, 6)` and `tau_c ∈ [7, 13)`.
    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        let tau_j = rng.gen_range(TAU_J_RANGE);
        let tau_c = rng.gen_range(TAU_C_RANGE);
        Self::new(tau_j, tau_c)
    }

    pub fn validate(&self) -> SimResult<()> {
        let positive = [self.tau_j, self.tau_c, self.r_jc, self.r_ca]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0);
        if positive {
            Ok(())
        } else {
            Err(SimError::invalid(format!(
                "thermal parameters must be positive: {:?}",
                self
            )))
        }
    }

    /// Largest forward-Euler step that keeps the recurrence from diverging.
    pub fn max_stable_dt(&self) -> f64 {
        let g_jc = 1.0 / self.r_jc;
        let g_ca = 1.0 / self.r_ca;
        let a = -g_jc / self.tau_j;
        let b = g_jc / self.tau_j;
        let c = g_jc / self.tau_c;
        let d = -(g_jc + g_ca) / self.tau_c;

        let trace = a + d;
        let det = a * d - b * c;
        // b * c > 0, so the eigenvalues are real.
        let disc = (trace * trace - 4.0 * det).max(0.0);
        let fast = (trace - disc.sqrt()) / 2.0;
        2.0 / fast.abs()
    }

    /// Junction and case temperatures the model settles at under constant power.
    pub fn steady_state(&self, power: f64, ambient: f64) -> (f64, f64) {
        let q = JUNCTION_HEAT_FRACTION * power;
        let tc = ambient + q * self.r_ca;
        (tc + q * self.r_jc, tc)
    }
}

/// Junction and case temperature histories, one sample per power sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThermalSeries {
    pub junction: Vec<f64>,
    pub case: Vec<f64>,
}

/// Advances the two-node model over `power`, starting from `Tj = Tc = ambient`.
pub fn integrate(
    power: &[f64],
    dt: f64,
    ambient: f64,
    params: &ThermalParams,
) -> SimResult<ThermalSeries> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimError::invalid(format!("time step must be positive, got {}", dt)));
    }
    params.validate()?;

    let limit = params.max_stable_dt();
    if dt >= limit {
        LogManager::new("thermal").caution(&format!(
            "dt {:.3}s exceeds forward-Euler stability limit {:.3}s (tau_j {:.2}, tau_c {:.2})",
            dt, limit, params.tau_j, params.tau_c
        ));
    }

    let mut junction = Vec::with_capacity(power.len());
    let mut case = Vec::with_capacity(power.len());
    let (mut tj, mut tc) = (ambient, ambient);

    for (step, &p) in power.iter().enumerate() {
        let q_jc = (tj - tc) / params.r_jc;
        let q_ca = (tc - ambient) / params.r_ca;
        let d_tj = (JUNCTION_HEAT_FRACTION * p - q_jc) / params.tau_j;
        let d_tc = (q_jc - q_ca) / params.tau_c;
        tj += d_tj * dt;
        tc += d_tc * dt;

        if !(tj.is_finite() && tc.is_finite()) {
            return Err(SimError::NumericOverflow {
                context: "junction/case recurrence".to_string(),
                step,
            });
        }
        junction.push(tj);
        case.push(tc);
    }

    Ok(ThermalSeries { junction, case })
}
