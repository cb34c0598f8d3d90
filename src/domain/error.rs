//! Errors raised by object operations.

use crate::api::ApiError;
use crate::domain::ParseValueError;
use thiserror::Error;

/// Errors raised when misusing an [`Object`](crate::domain::Object).
///
/// All errors surface at the point of misuse; nothing is retried.
#[derive(Debug, Error)]
pub enum ObjectError {
    #[error("not authenticated: attach a transport before calling {operation}")]
    NotAuthenticated { operation: &'static str },

    #[error("invalid type: {0}")]
    InvalidType(String),

    #[error("invalid icon: {0}")]
    InvalidIcon(String),

    #[error("object has no attribute '{0}'")]
    AttributeNotFound(String),

    #[error("invalid value for '{name}': {source}")]
    InvalidValue {
        name: String,
        #[source]
        source: ParseValueError,
    },

    #[error("attribute '{name}' expects {expected}")]
    InvalidAttribute { name: String, expected: &'static str },

    #[error("attribute '{0}' is read-only")]
    ReadOnly(String),

    #[error("object has no space id")]
    MissingSpace,

    #[error("object has no id; create it first")]
    MissingId,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ObjectError {
    pub(crate) fn invalid_value(name: &str, source: ParseValueError) -> Self {
        ObjectError::InvalidValue {
            name: name.to_string(),
            source,
        }
    }
}
