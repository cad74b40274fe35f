use crate::prelude::{SimError, SimResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Power-vs-time rule carried by each component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WaveformKind {
    /// `peak` while `t mod period < duty * period`, otherwise zero.
    SquarePulse {
        #[serde(default = "defaults::pulse_period")]
        period: f64,
        #[serde(default = "defaults::pulse_duty")]
        duty: f64,
        #[serde(default = "defaults::pulse_peak")]
        peak: f64,
    },
    Constant {
        #[serde(default = "defaults::constant_value")]
        value: f64,
    },
    /// `base + amplitude * sin(2π · freq · t)`.
    Sinusoidal {
        #[serde(default = "defaults::sine_base")]
        base: f64,
        #[serde(default = "defaults::sine_amplitude")]
        amplitude: f64,
        #[serde(default = "defaults::sine_freq")]
        freq: f64,
    },
    /// `magnitude * (1 - 2·phase)²` over each period: `magnitude` at the
    /// period edges, zero at mid-period.
    Parabolic {
        #[serde(default = "defaults::parabola_period")]
        period: f64,
        #[serde(default = "defaults::parabola_magnitude")]
        magnitude: f64,
    },
}

mod defaults {
    pub fn pulse_period() -> f64 {
        2.0
    }
    pub fn pulse_duty() -> f64 {
        0.5
    }
    pub fn pulse_peak() -> f64 {
        3.0
    }
    pub fn constant_value() -> f64 {
        1.5
    }
    pub fn sine_base() -> f64 {
        1.5
    }
    pub fn sine_amplitude() -> f64 {
        1.5
    }
    pub fn sine_freq() -> f64 {
        0.2
    }
    pub fn parabola_period() -> f64 {
        6.0
    }
    pub fn parabola_magnitude() -> f64 {
        2.0
    }
}

impl WaveformKind {
    pub fn square_pulse() -> Self {
        WaveformKind::SquarePulse {
            period: defaults::pulse_period(),
            duty: defaults::pulse_duty(),
            peak: defaults::pulse_peak(),
        }
    }

    pub fn constant() -> Self {
        WaveformKind::Constant {
            value: defaults::constant_value(),
        }
    }

    pub fn sinusoidal() -> Self {
        WaveformKind::Sinusoidal {
            base: defaults::sine_base(),
            amplitude: defaults::sine_amplitude(),
            freq: defaults::sine_freq(),
        }
    }

    pub fn parabolic() -> Self {
        WaveformKind::Parabolic {
            period: defaults::parabola_period(),
            magnitude: defaults::parabola_magnitude(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WaveformKind::SquarePulse { .. } => "square_pulse",
            WaveformKind::Constant { .. } => "constant",
            WaveformKind::Sinusoidal { .. } => "sinusoidal",
            WaveformKind::Parabolic { .. } => "parabolic",
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        let ok = match *self {
            WaveformKind::SquarePulse { period, duty, peak } => {
                period.is_finite() && period > 0.0 && (0.0..=1.0).contains(&duty) && peak.is_finite()
            }
            WaveformKind::Constant { value } => value.is_finite(),
            WaveformKind::Sinusoidal {
                base,
                amplitude,
                freq,
            } => base.is_finite() && amplitude.is_finite() && freq.is_finite(),
            WaveformKind::Parabolic { period, magnitude } => {
                period.is_finite() && period > 0.0 && magnitude.is_finite()
            }
        };
        if ok {
            Ok(())
        } else {
            Err(SimError::invalid(format!(
                "invalid {} waveform parameters: {:?}",
                self.name(),
                self
            )))
        }
    }

    /// Instantaneous power (W) at time `t` (s).
    pub fn sample(&self, t: f64) -> f64 {
        match *self {
            WaveformKind::SquarePulse { period, duty, peak } => {
                if t.rem_euclid(period) < duty * period {
                    peak
                } else {
                    0.0
                }
            }
            WaveformKind::Constant { value } => value,
            WaveformKind::Sinusoidal {
                base,
                amplitude,
                freq,
            } => base + amplitude * (2.0 * PI * freq * t).sin(),
            WaveformKind::Parabolic { period, magnitude } => {
                let phase = t.rem_euclid(period) / period;
                magnitude * (1.0 - 2.0 * phase).powi(2)
            }
        }
    }
}

/// Samples `kind` at every instant of the time axis.
pub fn waveform(kind: &WaveformKind, t_axis: &[f64]) -> Vec<f64> {
    t_axis.iter().map(|&t| kind.sample(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn axis(n: usize, dt: f64) -> Vec<f64> {
        (0..n).map(|i| i as f64 * dt).collect()
    }

    #[test]
    fn square_pulse_follows_duty_cycle() {
        let series = waveform(&WaveformKind::square_pulse(), &axis(8, 0.5));
        assert_eq!(series, vec![3.0, 3.0, 0.0, 0.0, 3.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn constant_ignores_time() {
        let series = waveform(&WaveformKind::constant(), &axis(5, 13.0));
        assert!(series.iter().all(|&p| p == 1.5));
    }

    #[test]
    fn default_sinusoid_never_goes_negative() {
        let series = waveform(&WaveformKind::sinusoidal(), &axis(2400, 0.25));
        assert!(series.iter().all(|&p| p >= -1e-12 && p <= 3.0 + 1e-12));
        assert_relative_eq!(series[0], 1.5);
        // Quarter period of a 0.2 Hz sine is 1.25 s.
        assert_relative_eq!(series[5], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn parabolic_peaks_at_edges_and_vanishes_mid_period() {
        let kind = WaveformKind::parabolic();
        assert_relative_eq!(kind.sample(0.0), 2.0);
        assert_relative_eq!(kind.sample(3.0), 0.0);
        assert_relative_eq!(kind.sample(1.5), 0.5);
        assert_relative_eq!(kind.sample(4.5), 0.5);
        assert_relative_eq!(kind.sample(6.0), 2.0);
    }

    #[test]
    fn invalid_parameters_are_reported() {
        let bad = WaveformKind::SquarePulse {
            period: 0.0,
            duty: 0.5,
            peak: 1.0,
        };
        assert!(bad.validate().is_err());
        let bad_duty = WaveformKind::SquarePulse {
            period: 1.0,
            duty: 1.5,
            peak: 1.0,
        };
        assert!(bad_duty.validate().is_err());
        assert!(WaveformKind::parabolic().validate().is_ok());
    }

    #[test]
    fn partial_parameters_fall_back_to_defaults() {
        let kind: WaveformKind = serde_json::from_str(r#"{"kind":"square_pulse","peak":5.0}"#).unwrap();
        assert_eq!(
            kind,
            WaveformKind::SquarePulse {
                period: 2.0,
                duty: 0.5,
                peak: 5.0
            }
        );
    }
}
