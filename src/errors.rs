/// Validation failures detected before any network traffic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("the selected service is not a valid identifier: {0}")]
    InvalidService(String),
}

/// Everything that can go wrong during a submission. All variants are
/// terminal; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("{0}")]
    Validation(#[from] FormError),

    #[error("could not connect to the clinic server")]
    Transport(#[source] anyhow::Error),

    #[error("the clinic refused the submission: {0}")]
    Rejected(String),

    #[error("a submission is already in progress")]
    Busy,
}
