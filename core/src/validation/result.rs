use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

impl CheckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => "FAIL",
        }
    }

    pub fn from_pass(pass: bool) -> Self {
        if pass {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }
}

/// Outcome of one validation rule, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub key: String,
    pub status: CheckStatus,
    pub label: String,
    pub summary: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CheckResult {
    pub fn new(key: &str, status: CheckStatus, label: &str, summary: String) -> Self {
        Self {
            key: key.to_string(),
            status,
            label: label.to_string(),
            summary,
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn with_table(mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        self.headers = headers.iter().map(|h| h.to_string()).collect();
        self.rows = rows;
        self
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// Fixed-precision display value; magnitudes below 1e-6 render as `0`.
pub fn fmt_value(v: f64, digits: usize) -> String {
    if v.abs() < 1e-6 {
        "0".to_string()
    } else {
        format!("{:.*}", digits, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_value_flushes_tiny_magnitudes() {
        assert_eq!(fmt_value(1e-9, 2), "0");
        assert_eq!(fmt_value(-3e-7, 2), "0");
        assert_eq!(fmt_value(31.004, 2), "31.00");
        assert_eq!(fmt_value(899.76, 1), "899.8");
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CheckStatus::Warn).unwrap(), "\"warn\"");
        assert_eq!(CheckStatus::from_pass(false).label(), "FAIL");
    }
}
