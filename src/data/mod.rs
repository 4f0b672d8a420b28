pub mod loader;
pub mod synthetic;

pub use loader::{load_curve_data, parse_curve_data};
pub use synthetic::{synthetic_prediction, synthetic_prev_error};

use serde::{Deserialize, Serialize};

use crate::error::{MetricError, MetricResult};

/// Paired observed (V) and reference (JD) samples; index i of each refers to
/// the same sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveData {
    pub observed: Vec<f64>,
    pub reference: Vec<f64>,
}

impl CurveData {
    pub fn new(observed: Vec<f64>, reference: Vec<f64>) -> MetricResult<Self> {
        if observed.len() != reference.len() {
            return Err(MetricError::ShapeMismatch {
                name: "observed",
                expected: reference.len(),
                actual: observed.len(),
            });
        }
        Ok(CurveData { observed, reference })
    }

    pub fn len(&self) -> usize {
        self.reference.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }
}
