use crate::data::CurveData;

/// Amplitude of the sinusoidal perturbation applied to the reference.
const PERTURBATION: f64 = 0.1;

/// Amplitude of the synthetic previous-error sequence.
const PREV_AMPLITUDE: f64 = 0.5;

/// Prediction used by the self-check: `JD_i · (1 + 0.1·sin(V_i))`.
pub fn synthetic_prediction(data: &CurveData) -> Vec<f64> {
    data.reference.iter().zip(data.observed.iter())
        .map(|(jd, v)| jd * (1.0 + PERTURBATION * v.sin()))
        .collect()
}

/// Previous-error sequence used by the self-check: `0.5 · |sin(V_i)|`.
pub fn synthetic_prev_error(data: &CurveData) -> Vec<f64> {
    data.observed.iter()
        .map(|v| PREV_AMPLITUDE * v.sin().abs())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_observed_leaves_reference_unchanged() {
        let data = CurveData::new(vec![0.0, 0.0], vec![1.5, -2.0]).unwrap();
        assert_eq!(synthetic_prediction(&data), vec![1.5, -2.0]);
        assert_eq!(synthetic_prev_error(&data), vec![0.0, 0.0]);
    }

    #[test]
    fn perturbation_follows_sine() {
        let half_pi = std::f64::consts::FRAC_PI_2;
        let data = CurveData::new(vec![half_pi, -half_pi], vec![10.0, 10.0]).unwrap();
        let pred = synthetic_prediction(&data);
        assert_abs_diff_eq!(pred[0], 11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pred[1], 9.0, epsilon = 1e-12);
        let prev = synthetic_prev_error(&data);
        assert_abs_diff_eq!(prev[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(prev[1], 0.5, epsilon = 1e-12);
    }
}
