use serde::{Deserialize, Serialize};

use crate::error::MetricResult;
use crate::metric::config::MetricConfig;
use crate::metric::partial::PartialMetric;
use crate::metric::standard::StandardMetric;

/// Selects which error-metric variant to compute.
///
/// - `Standard` — log-ratio with a ×3 guarded sign penalty; ignores `prev`.
/// - `Partial`  — log-ratio with a ×4 sign penalty; amplification may come
///   from a previous error sequence.
/// - `Enhanced` — same algorithm as `Partial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Standard,
    Partial,
    Enhanced,
}

/// Selects the element-by-element or the whole-sequence form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Implementation {
    Loop,
    Vectorized,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] =
        [MetricKind::Standard, MetricKind::Partial, MetricKind::Enhanced];

    pub fn name(self) -> &'static str {
        match self {
            MetricKind::Standard => "standard",
            MetricKind::Partial => "partial",
            MetricKind::Enhanced => "enhanced",
        }
    }

    pub fn uses_prev(self) -> bool {
        !matches!(self, MetricKind::Standard)
    }

    pub fn compute(
        self,
        implementation: Implementation,
        config: &MetricConfig,
        predicted: &[f64],
        observed: &[f64],
        reference: &[f64],
        prev: Option<&[f64]>,
    ) -> MetricResult<Vec<f64>> {
        match (self, implementation) {
            (MetricKind::Standard, Implementation::Loop) => {
                StandardMetric::compute_loop(config, predicted, observed, reference)
            }
            (MetricKind::Standard, Implementation::Vectorized) => {
                StandardMetric::compute_vec(config, predicted, observed, reference)
            }
            (MetricKind::Partial | MetricKind::Enhanced, Implementation::Loop) => {
                PartialMetric::compute_loop(config, predicted, observed, reference, prev)
            }
            (MetricKind::Partial | MetricKind::Enhanced, Implementation::Vectorized) => {
                PartialMetric::compute_vec(config, predicted, observed, reference, prev)
            }
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
