use ndarray::ArrayView1;

use crate::error::MetricResult;
use crate::metric::common::{
    amplification_mask, amplify, base_error, reference_scale, scale_masked, sign, sign_mismatch,
    validate_inputs,
};
use crate::metric::config::MetricConfig;

/// Standard log-ratio error between a predicted and a reference curve.
///
/// Per index:
///   e_i = (pred_i − ref_i) / scale               if |ref_i| or |pred_i| < threshold
///   e_i = log10|pred_i| − log10|ref_i|           otherwise,
///         × `standard_sign_penalty` when the signs differ and both magnitudes
///         exceed the threshold
///   e_i = e_i · (1 + |e_i|)                      when |observed_i| > observed_gate
///
/// `scale = max(threshold, max |ref|)` is computed once per call.
pub struct StandardMetric;

impl StandardMetric {
    /// Element-by-element form.
    pub fn compute_loop(
        config: &MetricConfig,
        predicted: &[f64],
        observed: &[f64],
        reference: &[f64],
    ) -> MetricResult<Vec<f64>> {
        validate_inputs(predicted, observed, reference, None)?;
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
                if sign(predicted[i]) != sign(reference[i]) && p > threshold && a > threshold {
                    e *= config.standard_sign_penalty;
                }
                e
            };

            if observed[i].abs() > config.observed_gate {
                e *= 1.0 + e.abs();
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
    ) -> MetricResult<Vec<f64>> {
        validate_inputs(predicted, observed, reference, None)?;
        let threshold = config.threshold;
        let scale = reference_scale(reference, threshold);

        let predicted = ArrayView1::from(predicted);
        let observed = ArrayView1::from(observed);
        let reference = ArrayView1::from(reference);

        let (mut err, _) = base_error(predicted, reference, threshold, scale);

        // Both guards are required here; they also exclude the fallback indices.
        let mut mismatch = sign_mismatch(predicted, reference);
        ndarray::Zip::from(&mut mismatch)
            .and(&predicted)
            .and(&reference)
            .for_each(|m, &p, &r| *m = *m && p.abs() > threshold && r.abs() > threshold);
        scale_masked(&mut err, &mismatch, config.standard_sign_penalty);

        let gate = amplification_mask(observed, config.observed_gate);
        let err = amplify(&err, &err, &gate);
        Ok(err.into_raw_vec())
    }
}

/// Standard error with the default constants (vectorized form).
pub fn compute_error(
    predicted: &[f64],
    observed: &[f64],
    reference: &[f64],
) -> MetricResult<Vec<f64>> {
    StandardMetric::compute_vec(&MetricConfig::default(), predicted, observed, reference)
}

pub fn compute_error_loop(
    predicted: &[f64],
    observed: &[f64],
    reference: &[f64],
) -> MetricResult<Vec<f64>> {
    StandardMetric::compute_loop(&MetricConfig::default(), predicted, observed, reference)
}

pub fn compute_error_vec(
    predicted: &[f64],
    observed: &[f64],
    reference: &[f64],
) -> MetricResult<Vec<f64>> {
    StandardMetric::compute_vec(&MetricConfig::default(), predicted, observed, reference)
}
