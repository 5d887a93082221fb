use thiserror::Error;

/// Why a form submission did not produce a record.
#[derive(Debug, Error)]
pub(crate) enum SubmitError {
    #[error("Amount must be a number greater than zero")]
    InvalidAmount,

    #[error("Amount must not exceed {0}")]
    AmountTooLarge(String),

    #[error("Date must be YYYY-MM-DD, got '{0}'")]
    InvalidDate(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
