//! Loader for curve data stored as labelled numeric arrays.
//!
//! Supported format:
//! - UTF-8 text containing assignments of the form `data_V = [ ... ];`
//!   and `data_JD = [ ... ];` anywhere in the file
//! - Array bodies may span many lines; tokens are separated by whitespace,
//!   commas or semicolons
//! - Anything outside the two assignments is ignored
use std::path::Path;

use log::debug;
use regex::Regex;

use crate::data::CurveData;
use crate::error::{MetricError, MetricResult};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

pub const OBSERVED_LABEL: &str = "data_V";
pub const REFERENCE_LABEL: &str = "data_JD";

/// Reads `path` and parses the observed / reference arrays out of it.
pub fn load_curve_data<P: AsRef<Path>>(path: P) -> MetricResult<CurveData> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let data = parse_curve_data(&text)?;
    debug!("loaded {} samples from {}", data.len(), path.display());
    Ok(data)
}

/// Parses the observed (`data_V`) and reference (`data_JD`) arrays.
pub fn parse_curve_data(text: &str) -> MetricResult<CurveData> {
    let observed = parse_labelled_array(text, OBSERVED_LABEL)?;
    let reference = parse_labelled_array(text, REFERENCE_LABEL)?;
    CurveData::new(observed, reference)
}

/// Extracts the body of `label = [ ... ];` and parses it as floats.
pub fn parse_labelled_array(text: &str, label: &str) -> MetricResult<Vec<f64>> {
    let pattern = format!(r"(?s)\b{}\s*=\s*\[(.*?)\]\s*;", regex::escape(label));
    let re = Regex::new(&pattern).map_err(|e| MetricError::Parse(e.to_string()))?;

    let body = re
        .captures(text)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| MetricError::Parse(format!("array `{}` not found", label)))?;

    parse_floats(body.as_str(), label)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn parse_floats(body: &str, label: &str) -> MetricResult<Vec<f64>> {
    body.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|tok| !tok.is_empty())
        .enumerate()
        .map(|(idx, tok)| {
            tok.parse::<f64>().map_err(|_| {
                MetricError::Parse(format!(
                    "`{}` item {}: '{}' is not a number",
                    label,
                    idx + 1,
                    tok
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
function [data_V, data_JD] = loadData()
% measured curve
data_V = [0.1 0.2
  -0.3, 0.4];
data_JD = [1e-3 2.5e-3 ...
];
";

    #[test]
    fn multi_line_arrays() {
        let v = parse_labelled_array(SAMPLE, OBSERVED_LABEL).unwrap();
        assert_eq!(v, vec![0.1, 0.2, -0.3, 0.4]);
    }

    #[test]
    fn bad_token_is_reported_with_position() {
        let err = parse_labelled_array(SAMPLE, REFERENCE_LABEL).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("item 3"), "{msg}");
        assert!(msg.contains("..."), "{msg}");
    }

    #[test]
    fn missing_label() {
        let err = parse_labelled_array("data_V = [1 2];", REFERENCE_LABEL).unwrap_err();
        assert!(matches!(err, MetricError::Parse(_)));
    }

    #[test]
    fn label_prefix_does_not_match() {
        let text = "old_data_V = [9 9];\ndata_V = [1 2];\ndata_JD = [3 4];";
        let data = parse_curve_data(text).unwrap();
        assert_eq!(data.observed, vec![1.0, 2.0]);
        assert_eq!(data.reference, vec![3.0, 4.0]);
    }

    #[test]
    fn unequal_lengths_are_rejected() {
        let err = parse_curve_data("data_V = [1 2 3];\ndata_JD = [3 4];").unwrap_err();
        assert!(matches!(err, MetricError::ShapeMismatch { .. }));
    }
}
