use thiserror::Error;

/// Failures surfaced by catalog operations.
///
/// The `Display` text of each variant is the message reported to callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// A candidate failed validation; no mutation took place.
    #[error("{0}")]
    InvalidInput(String),
    /// The referenced category does not exist.
    #[error("unknown category")]
    UnknownCategory,
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The operation exists only as a contract.
    #[error("not implemented")]
    NotImplemented,
    /// The catalog store could not be read or written. Callers may retry.
    #[error("catalog store unavailable")]
    Persistence,
}

impl ServiceError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether the failure was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::UnknownCategory)
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
