use crate::prelude::{SimError, SimResult};

/// Composite trapezoidal area under `y` sampled at `t`.
///
/// Series of length zero or one enclose no area. Mismatched lengths are
/// rejected instead of truncated.
pub fn integrate_area(t: &[f64], y: &[f64]) -> SimResult<f64> {
    if t.len() != y.len() {
        return Err(SimError::invalid(format!(
            "time axis has {} samples but series has {}",
            t.len(),
            y.len()
        )));
    }

    let area = t
        .windows(2)
        .zip(y.windows(2))
        .map(|(ts, ys)| 0.5 * (ys[0] + ys[1]) * (ts[1] - ts[0]))
        .sum();
    Ok(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn single_sample_has_no_area() {
        assert_eq!(integrate_area(&[0.0], &[5.0]).unwrap(), 0.0);
        assert_eq!(integrate_area(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn constant_series_integrates_to_height_times_span() {
        let t: Vec<f64> = (0..=400).map(|i| i as f64 * 0.25).collect();
        let y = vec![2.5; t.len()];
        assert_relative_eq!(integrate_area(&t, &y).unwrap(), 250.0, epsilon = 1e-9);
    }

    #[test]
    fn linear_ramp_is_exact() {
        let t = [0.0, 1.0, 3.0];
        let y = [0.0, 1.0, 3.0];
        assert_relative_eq!(integrate_area(&t, &y).unwrap(), 4.5);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = integrate_area(&[0.0, 1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, SimError::InvalidInput(_)));
    }
}
