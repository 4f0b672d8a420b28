use thiserror::Error;

/// Errors raised while validating inputs, loading curve data or reading config.
#[derive(Debug, Error)]
pub enum MetricError {
    /// A sequence did not have the same length as the reference sequence.
    #[error("length of `{name}` must match the reference (expected={expected}, actual={actual})")]
    ShapeMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to parse curve data: {0}")]
    Parse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid metric config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type MetricResult<T> = Result<T, MetricError>;
