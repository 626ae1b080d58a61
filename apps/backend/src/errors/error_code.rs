//! Error codes for the backend API.
//!
//! Every error response carries exactly one of these codes. Add new codes
//! here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Token authentication
    /// No `x-access-token` header, or an empty one
    MissingToken,
    /// Token was logged out
    TokenRevoked,
    /// Bad signature, malformed payload, or unknown user
    InvalidToken,
    /// Token `exp` has passed
    TokenExpired,

    // Login
    /// No account for the supplied email
    UserDoesNotExist,
    /// Password did not match the stored hash
    WrongPassword,

    // Request validation
    /// Required form/JSON fields absent or blank
    MissingFields,
    /// `id` query parameter missing or not a non-negative integer
    InvalidUserId,
    /// BLE upload body did not match `{mac, level, time}`
    InvalidDataFormat,

    // Resource not found
    UserNotFound,
    /// Requested BLE data page is empty
    DataNotFound,
    /// General not found error (unknown route, missing record)
    NotFound,
    /// Known path, unsupported HTTP method
    MethodNotAllowed,

    // Conflicts
    /// Signup with an email that is already registered
    UserExists,
    /// Unique email constraint raced at insert time
    UniqueEmail,
    /// Generic conflict (fallback for unmatched unique violations)
    Conflict,

    // System errors
    DbError,
    DbUnavailable,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingToken => "MISSING_TOKEN",
            Self::TokenRevoked => "TOKEN_REVOKED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",

            Self::UserDoesNotExist => "USER_DOES_NOT_EXIST",
            Self::WrongPassword => "WRONG_PASSWORD",

            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidUserId => "INVALID_USER_ID",
            Self::InvalidDataFormat => "INVALID_DATA_FORMAT",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::DataNotFound => "DATA_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",

            Self::UserExists => "USER_EXISTS",
            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
