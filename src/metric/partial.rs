use ndarray::{ArrayView1, Zip};

use crate::error::MetricResult;
use crate::metric::common::{
    amplification_mask, amplify, base_error, reference_scale, scale_masked, sign, sign_mismatch,
    validate_inputs,
};
use crate::metric::config::MetricConfig;

/// Partial log-ratio error.
///
/// Same as `StandardMetric` except:
/// - a sign flip in the log branch multiplies by `partial_sign_penalty`, with
///   no magnitude guards beyond being outside the fallback branch;
/// - when `prev` is given, amplification is `e_i · (1 + |prev_i|)` instead of
///   `e_i · (1 + |e_i|)`.
pub struct PartialMetric;

/// The Enhanced variant shares the Partial algorithm.
pub type EnhancedMetric = PartialMetric;

impl PartialMetric {
    /// Element-by-element form.
    pub fn compute_loop(
        config: &MetricConfig,
        predicted: &[f64],
        observed: &[f64],
        reference: &[f64],
        prev: Option<&[f64]>,
    ) -> MetricResult<Vec<f64>> {
        validate_inputs(predicted, observed, reference, prev)?;
        let threshold = config.threshold;
        let scale = reference_scale(reference, threshold);

        let mut err = vec![0.0; reference.len()];
        for i in 0..reference.len() {
            let a = reference[i].abs();
            let p = predicted[i].abs();

            let mut e = if a < threshold || p < threshold {
                (predicted[i] - reference[i]) / scale
            } else {
                let mut e = p.log10() - a.log10();
                if sign(predicted[i]) != sign(reference[i]) {
                    e *= config.partial_sign_penalty;
                }
                e
            };

            if observed[i].abs() > config.observed_gate {
                let boost = match prev {
                    Some(prev) => prev[i].abs(),
                    None => e.abs(),
                };
                e *= 1.0 + boost;
            }
            err[i] = e;
        }
        Ok(err)
    }

    /// Whole-sequence form built from masked array operations.
    pub fn compute_vec(
        config: &MetricConfig,
        predicted: &[f64],
        observed: &[f64],
        reference: &[f64],
        prev: Option<&[f64]>,
    ) -> MetricResult<Vec<f64>> {
        validate_inputs(predicted, observed, reference, prev)?;
        let threshold = config.threshold;
        let scale = reference_scale(reference, threshold);

        let predicted = ArrayView1::from(predicted);
        let observed = ArrayView1::from(observed);
        let reference = ArrayView1::from(reference);

        let (mut err, small) = base_error(predicted, reference, threshold, scale);

        let mut mismatch = sign_mismatch(predicted, reference);
        Zip::from(&mut mismatch).and(&small).for_each(|m, &s| *m = *m && !s);
        scale_masked(&mut err, &mismatch, config.partial_sign_penalty);

        let gate = amplification_mask(observed, config.observed_gate);
        let err = match prev {
            Some(prev) => amplify(&err, &ArrayView1::from(prev).to_owned(), &gate),
            None => amplify(&err, &err, &gate),
        };
        Ok(err.into_raw_vec())
    }
}

/// Partial error with the default constants (vectorized form).
pub fn compute_error_partial(
    predicted: &[f64],
    observed: &[f64],
    reference: &[f64],
    prev: Option<&[f64]>,
) -> MetricResult<Vec<f64>> {
    PartialMetric::compute_vec(&MetricConfig::default(), predicted, observed, reference, prev)
}

pub fn compute_error_partial_loop(
    predicted: &[f64],
    observed: &[f64],
    reference: &[f64],
    prev: Option<&[f64]>,
) -> MetricResult<Vec<f64>> {
    PartialMetric::compute_loop(&MetricConfig::default(), predicted, observed, reference, prev)
}

pub fn compute_error_partial_vec(
    predicted: &[f64],
    observed: &[f64],
    reference: &[f64],
    prev: Option<&[f64]>,
) -> MetricResult<Vec<f64>> {
    PartialMetric::compute_vec(&MetricConfig::default(), predicted, observed, reference, prev)
}

pub use self::compute_error_partial as compute_error_enhanced;
pub use self::compute_error_partial_loop as compute_error_enhanced_loop;
pub use self::compute_error_partial_vec as compute_error_enhanced_vec;
