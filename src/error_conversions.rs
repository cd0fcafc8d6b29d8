//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` implementations bridging them live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod service {
    use crate::domain::types::TypeConstraintError;
    use crate::forms::games::{ImportGamesFormError, ScrapeGameFormError};
    use crate::services::ServiceError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::InvalidInput(val.to_string())
        }
    }

    impl From<ScrapeGameFormError> for ServiceError {
        fn from(val: ScrapeGameFormError) -> Self {
            ServiceError::InvalidInput(val.to_string())
        }
    }

    impl From<ImportGamesFormError> for ServiceError {
        fn from(val: ImportGamesFormError) -> Self {
            ServiceError::InvalidInput(val.to_string())
        }
    }
}
