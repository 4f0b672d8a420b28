use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::check::report::EquivalenceReport;
use crate::data::{synthetic_prediction, synthetic_prev_error, CurveData};
use crate::error::MetricResult;
use crate::metric::{Implementation, MetricConfig, MetricKind};

/// Closeness criterion: `|a − b| <= abs + rel·|b|`.
///
/// With `equal_nan` set, NaN on both sides at the same index counts as equal,
/// so inputs containing NaN (which propagate through both forms) still compare.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub abs: f64,
    pub rel: f64,
    pub equal_nan: bool,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance { abs: 1e-8, rel: 1e-5, equal_nan: true }
    }
}

impl Tolerance {
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return self.equal_nan && a.is_nan() && b.is_nan();
        }
        if a == b {
            // Covers equal infinities.
            return true;
        }
        if a.is_infinite() || b.is_infinite() {
            return false;
        }
        (a - b).abs() <= self.abs + self.rel * b.abs()
    }
}

/// True when both slices have the same length and every pair is close.
pub fn all_close(a: &[f64], b: &[f64], tolerance: &Tolerance) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| tolerance.is_close(x, y))
}

/// Runs both implementations of `kind` and compares them index by index.
pub fn check_equivalence(
    kind: MetricKind,
    config: &MetricConfig,
    predicted: &[f64],
    observed: &[f64],
    reference: &[f64],
    prev: Option<&[f64]>,
    tolerance: &Tolerance,
) -> MetricResult<EquivalenceReport> {
    let looped = kind.compute(Implementation::Loop, config, predicted, observed, reference, prev)?;
    let vectorized =
        kind.compute(Implementation::Vectorized, config, predicted, observed, reference, prev)?;

    let mut max_abs_diff: f64 = 0.0;
    let mut mismatches = Vec::new();
    for (i, (&x, &y)) in looped.iter().zip(vectorized.iter()).enumerate() {
        if x.is_finite() && y.is_finite() {
            max_abs_diff = max_abs_diff.max((x - y).abs());
        }
        if !tolerance.is_close(x, y) {
            mismatches.push(i);
        }
    }

    Ok(EquivalenceReport {
        kind,
        len: looped.len(),
        max_abs_diff,
        passed: mismatches.is_empty(),
        mismatches,
    })
}

/// Checks every variant against the synthetic prediction built from `data`.
///
/// Partial and Enhanced receive the synthetic previous-error sequence.
pub fn run_self_check(
    data: &CurveData,
    config: &MetricConfig,
    tolerance: &Tolerance,
) -> MetricResult<Vec<EquivalenceReport>> {
    let predicted = synthetic_prediction(data);
    let prev = synthetic_prev_error(data);
    debug!("self-check over {} samples with {:?}", data.len(), config);

    let mut reports = Vec::with_capacity(MetricKind::ALL.len());
    for kind in MetricKind::ALL {
        let prev = if kind.uses_prev() { Some(prev.as_slice()) } else { None };
        let report = check_equivalence(
            kind,
            config,
            &predicted,
            &data.observed,
            &data.reference,
            prev,
            tolerance,
        )?;
        if report.passed {
            info!("{}", report);
        } else {
            warn!("{}", report);
        }
        reports.push(report);
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_matches_allclose_rule() {
        let tol = Tolerance::default();
        assert!(tol.is_close(1.0, 1.0 + 5e-6));
        assert!(!tol.is_close(1.0, 1.0 + 5e-5));
        assert!(tol.is_close(0.0, 5e-9));
        assert!(!tol.is_close(0.0, 5e-8));
        assert!(tol.is_close(f64::INFINITY, f64::INFINITY));
        assert!(!tol.is_close(f64::INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn nan_equality_is_configurable() {
        let mut tol = Tolerance::default();
        assert!(tol.is_close(f64::NAN, f64::NAN));
        assert!(!tol.is_close(f64::NAN, 1.0));
        tol.equal_nan = false;
        assert!(!tol.is_close(f64::NAN, f64::NAN));
    }

    #[test]
    fn all_close_rejects_length_difference() {
        assert!(!all_close(&[1.0], &[1.0, 2.0], &Tolerance::default()));
        assert!(all_close(&[1.0, 2.0], &[1.0, 2.0], &Tolerance::default()));
    }

    #[test]
    fn nan_inputs_still_pass() {
        let report = check_equivalence(
            MetricKind::Partial,
            &MetricConfig::default(),
            &[f64::NAN, 2.0],
            &[0.1, 0.1],
            &[1.0, f64::NAN],
            None,
            &Tolerance::default(),
        )
        .unwrap();
        assert!(report.passed, "{report}");
        assert_eq!(report.len, 2);
    }

    #[test]
    fn self_check_covers_every_variant() {
        let data = CurveData::new(vec![0.0, 0.3, -1.2, 2.0], vec![1e-3, -4.0, 0.0, 7.5]).unwrap();
        let reports =
            run_self_check(&data, &MetricConfig::default(), &Tolerance::default()).unwrap();
        let kinds: Vec<_> = reports.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, MetricKind::ALL.to_vec());
        assert!(reports.iter().all(|r| r.passed));
    }
}
