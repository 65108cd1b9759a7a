use thiserror::Error;

/// Configuration failures detected while resolving slider options.
///
/// All of these are raised at construction time. Once a
/// [`SliderConfig`](crate::SliderConfig) exists, value updates never fail:
/// out-of-range input is corrected by the normalizer instead.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("option `{option}` expects a number but `{raw}` was found instead")]
    NotNumeric { option: &'static str, raw: String },

    #[error("option `{option}` must be finite, got {value}")]
    NonFinite { option: &'static str, value: f64 },

    #[error("unknown orientation `{0}` (expected `horizontal` or `vertical`)")]
    UnknownOrientation(String),

    #[error("option `thumbs` must be a positive integer, got `{0}`")]
    InvalidThumbs(String),

    #[error("empty range: min ({min}) must be below max ({max})")]
    EmptyRange { min: f64, max: f64 },

    #[error("step must be positive, got {0}")]
    NonPositiveStep(f64),

    #[error("step {0} rounds to zero at the maximum supported precision")]
    StepTooSmall(f64),

    #[error("cannot derive a precision from a non-numeric step")]
    NonNumericStep,
}
