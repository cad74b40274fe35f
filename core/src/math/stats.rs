pub struct StatsHelper;

impl StatsHelper {
    /// Arithmetic mean with the divisor floored at one, so an empty series yields zero.
    pub fn average(samples: &[f64]) -> f64 {
        let sum: f64 = samples.iter().sum();
        sum / samples.len().max(1) as f64
    }

    /// Smallest and largest sample, or `None` for an empty input.
    pub fn min_max<'a, I>(values: I) -> Option<(f64, f64)>
    where
        I: IntoIterator<Item = &'a f64>,
    {
        values.into_iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Percentage deviation of `actual` from `expected`, with the divisor floored at one.
    pub fn relative_error_pct(actual: f64, expected: f64) -> f64 {
        100.0 * (actual - expected).abs() / expected.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn average_of_empty_series_is_zero() {
        assert_eq!(StatsHelper::average(&[]), 0.0);
    }

    #[test]
    fn average_handles_plain_values() {
        assert_eq!(StatsHelper::average(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn min_max_scans_all_values() {
        let values = [3.0, -1.0, 7.5, 2.0];
        assert_eq!(StatsHelper::min_max(values.iter()), Some((-1.0, 7.5)));
        assert_eq!(StatsHelper::min_max(std::iter::empty::<&f64>()), None);
    }

    #[test]
    fn relative_error_floors_small_expectations() {
        assert_eq!(StatsHelper::relative_error_pct(0.5, 0.0), 50.0);
        assert_relative_eq!(StatsHelper::relative_error_pct(33.0, 30.0), 10.0);
    }
}
