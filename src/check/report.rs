use serde::{Deserialize, Serialize};

use crate::metric::MetricKind;

/// Outcome of comparing the loop and vectorized forms of one metric variant.
///
/// The CLI prints one report per variant, or emits the list as JSON with
/// `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquivalenceReport {
    /// Variant that was checked.
    pub kind: MetricKind,
    /// Number of samples compared.
    pub len: usize,
    /// Largest |loop − vectorized| over all indices where both are finite.
    pub max_abs_diff: f64,
    /// Indices that fell outside the tolerance.
    pub mismatches: Vec<usize>,
    pub passed: bool,
}

impl std::fmt::Display for EquivalenceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<9} n={:<6} max|diff|={:.3e}  {}",
            self.kind.name(),
            self.len,
            self.max_abs_diff,
            if self.passed { "ok" } else { "MISMATCH" }
        )?;
        if let Some(first) = self.mismatches.first() {
            write!(f, " ({} indices, first at {})", self.mismatches.len(), first)?;
        }
        Ok(())
    }
}
