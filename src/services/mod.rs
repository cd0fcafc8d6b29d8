pub mod categories;
pub mod errors;
pub mod games;
pub mod import;
pub mod seed;
pub mod stats;

pub use errors::{ServiceError, ServiceResult};
