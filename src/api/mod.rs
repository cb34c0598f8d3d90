//! Transport seam between objects and the remote API.
//!
//! An [`Object`](crate::domain::Object) never performs I/O itself. Auth-gated
//! operations hand a request record to a [`Transport`], which is either the
//! HTTP client ([`HttpTransport`]) or the in-memory recorder
//! ([`MemoryTransport`]).

mod error;
mod http;
mod memory;
mod request;

pub use error::ApiError;
pub use http::{DEFAULT_API_URL, HttpTransport};
pub use memory::MemoryTransport;
pub use request::{CreateObjectRequest, ObjectRecord, PropertyEntry, UpdateObjectRequest};

/// Performs object calls against the remote API.
pub trait Transport {
    /// Creates an object in `space_id`.
    fn create_object(
        &self,
        space_id: &str,
        request: &CreateObjectRequest,
    ) -> Result<ObjectRecord, ApiError>;

    /// Updates the object `object_id` in `space_id`.
    fn update_object(
        &self,
        space_id: &str,
        object_id: &str,
        request: &UpdateObjectRequest,
    ) -> Result<ObjectRecord, ApiError>;
}
