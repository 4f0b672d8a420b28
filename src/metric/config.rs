use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MetricResult;

/// Constants shared by every error-metric variant.
///
/// # Fields
/// - `threshold`             — magnitudes below this use the linear fallback
///                             instead of the log-ratio (also the floor of the scale)
/// - `observed_gate`         — amplification applies when `|observed_i|` exceeds this
/// - `standard_sign_penalty` — log-ratio multiplier on a sign flip (Standard)
/// - `partial_sign_penalty`  — log-ratio multiplier on a sign flip (Partial / Enhanced)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricConfig {
    pub threshold: f64,
    pub observed_gate: f64,
    pub standard_sign_penalty: f64,
    pub partial_sign_penalty: f64,
}

impl Default for MetricConfig {
    fn default() -> Self {
        MetricConfig {
            threshold: 1e-12,
            observed_gate: 0.05,
            standard_sign_penalty: 3.0,
            partial_sign_penalty: 4.0,
        }
    }
}

impl MetricConfig {
    /// Parses a JSON document. Missing fields keep their default value.
    pub fn from_json(text: &str) -> MetricResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> MetricResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = MetricConfig::from_json(r#"{ "observed_gate": 0.1 }"#).unwrap();
        assert_eq!(config.observed_gate, 0.1);
        assert_eq!(config.threshold, 1e-12);
        assert_eq!(config.partial_sign_penalty, 4.0);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = MetricConfig::from_json("{ threshold: ").unwrap_err();
        assert!(matches!(err, crate::MetricError::Config(_)));
    }
}
