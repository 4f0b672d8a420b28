use ndarray::{Array1, ArrayView1, Zip};

use crate::error::{MetricError, MetricResult};

/// Checks that every sequence has the reference length and that the reference
/// is non-empty.
pub(crate) fn validate_inputs(
    predicted: &[f64],
    observed: &[f64],
    reference: &[f64],
    prev: Option<&[f64]>,
) -> MetricResult<()> {
    if reference.is_empty() {
        return Err(MetricError::InvalidInput(
            "reference sequence must not be empty".into(),
        ));
    }
    let expected = reference.len();
    let mut others = vec![("predicted", predicted.len()), ("observed", observed.len())];
    if let Some(prev) = prev {
        others.push(("prev", prev.len()));
    }
    for (name, actual) in others {
        if actual != expected {
            return Err(MetricError::ShapeMismatch { name, expected, actual });
        }
    }
    Ok(())
}

/// Global normalisation for the linear fallback: max(floor, max |reference|).
///
/// A NaN anywhere in the reference makes the maximum undefined, in which case
/// the floor is used.
pub(crate) fn reference_scale(reference: &[f64], floor: f64) -> f64 {
    let mut scale = floor;
    for x in reference {
        let magnitude = x.abs();
        if magnitude.is_nan() {
            return floor;
        }
        scale = scale.max(magnitude);
    }
    scale
}

/// Three-valued sign: -1, 0 or 1 (NaN stays NaN).
///
/// `f64::signum` maps ±0.0 to ±1.0, which would report a mismatch between a
/// zero and a positive value.
pub(crate) fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

/// Element-wise select: `on_true[i]` where `mask[i]`, else `on_false[i]`.
pub(crate) fn select(
    mask: &Array1<bool>,
    on_true: &Array1<f64>,
    on_false: &Array1<f64>,
) -> Array1<f64> {
    Zip::from(mask)
        .and(on_true)
        .and(on_false)
        .map_collect(|&m, &t, &f| if m { t } else { f })
}

/// Pre-amplification error for the whole sequence: the linear fallback where
/// either magnitude is below `threshold`, the log-ratio elsewhere.
///
/// Returns the error together with the fallback mask.
pub(crate) fn base_error(
    predicted: ArrayView1<f64>,
    reference: ArrayView1<f64>,
    threshold: f64,
    scale: f64,
) -> (Array1<f64>, Array1<bool>) {
    let a = reference.mapv(f64::abs);
    let p = predicted.mapv(f64::abs);
    let small = Zip::from(&a)
        .and(&p)
        .map_collect(|&a, &p| a < threshold || p < threshold);

    let linear = (&predicted - &reference) / scale;
    let log_ratio = p.mapv(f64::log10) - a.mapv(f64::log10);

    (select(&small, &linear, &log_ratio), small)
}

/// Sign disagreement between prediction and reference, index by index.
pub(crate) fn sign_mismatch(
    predicted: ArrayView1<f64>,
    reference: ArrayView1<f64>,
) -> Array1<bool> {
    Zip::from(&predicted)
        .and(&reference)
        .map_collect(|&p, &r| sign(p) != sign(r))
}

/// Multiplies `err` by `factor` wherever `mask` holds.
pub(crate) fn scale_masked(err: &mut Array1<f64>, mask: &Array1<bool>, factor: f64) {
    Zip::from(err).and(mask).for_each(|e, &m| {
        if m {
            *e *= factor;
        }
    });
}

/// Amplification gate: `|observed_i| > gate`.
pub(crate) fn amplification_mask(observed: ArrayView1<f64>, gate: f64) -> Array1<bool> {
    observed.mapv(|v| v.abs() > gate)
}

/// Applies `err_i * (1 + |boost_i|)` wherever `mask` holds.
pub(crate) fn amplify(
    err: &Array1<f64>,
    boost: &Array1<f64>,
    mask: &Array1<bool>,
) -> Array1<f64> {
    let amplified = err * &(boost.mapv(f64::abs) + 1.0);
    select(mask, &amplified, err)
}
