use thiserror::Error;

/// Top-level error type for the fillet digitizing core.
#[derive(Debug, Error)]
pub enum FilletError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors surfaced by a digitizing session.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error(
        "invalid geometry: segments {first_segment} and {second_segment} intersect, reduce radius"
    )]
    SelfIntersecting {
        first_segment: usize,
        second_segment: usize,
    },
}

/// Errors related to session configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid configuration: {parameter} = {value}")]
    InvalidParameter { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`FilletError`].
pub type Result<T> = std::result::Result<T, FilletError>;
