//! Error vocabulary shared by services, adapters and the HTTP layer.

pub mod domain;
pub mod error_code;

pub use domain::DomainError;
pub use error_code::ErrorCode;
