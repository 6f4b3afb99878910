use thiserror::Error;

/// Client-input failures of the report pipeline, plus the collaborator
/// failure bucket. Each maps 1:1 to a stable machine-readable code.
#[derive(Debug, Error)]
pub enum SushiError {
    #[error("request is not bound to a publishing context")]
    MissingScopeContext,
    #[error("customer_id is missing or not recognized")]
    InvalidCustomerId,
    #[error("begin_date and end_date must be 4-digit years")]
    InvalidDateRange,
    #[error("count must be an integer between 1 and 100")]
    InvalidCount,
    #[error("position_token must be a non-negative integer")]
    InvalidPositionToken,
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl SushiError {
    /// Machine-readable code surfaced verbatim in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            SushiError::MissingScopeContext => "resourceNotFound",
            SushiError::InvalidCustomerId => "invalidCustomerId",
            SushiError::InvalidDateRange => "invalidDates",
            SushiError::InvalidCount => "invalidCount",
            SushiError::InvalidPositionToken => "invalidPositionToken",
            SushiError::Upstream(_) => "upstreamUnavailable",
        }
    }
}
