use serde::Serialize;
use std::sync::Mutex;

pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub runs: usize,
    pub checks_evaluated: usize,
    pub checks_failed: usize,
    pub errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_run(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.runs += 1;
        }
    }

    pub fn record_checks(&self, evaluated: usize, failed: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.checks_evaluated += evaluated;
            metrics.checks_failed += failed;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.errors += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner.lock().map(|m| *m).unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let metrics = MetricsRecorder::new();
        metrics.record_run();
        metrics.record_run();
        metrics.record_checks(4, 1);
        metrics.record_error();
        let snap = metrics.snapshot();
        assert_eq!(snap.runs, 2);
        assert_eq!(snap.checks_evaluated, 4);
        assert_eq!(snap.checks_failed, 1);
        assert_eq!(snap.errors, 1);
    }
}
