//! HTTP transport for the local REST API.

use super::{ApiError, CreateObjectRequest, ObjectRecord, Transport, UpdateObjectRequest};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Base URL of the API served by the desktop application.
pub const DEFAULT_API_URL: &str = "http://localhost:31009/v1";

/// API version sent with every request.
const API_VERSION: &str = "2025-05-20";

/// Blocking HTTP client authenticated with a bearer API key.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: Url,
    api_key: String,
    agent: ureq::Agent,
}

#[derive(Deserialize)]
struct ObjectEnvelope {
    object: ObjectRecord,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ErrorBody {
    message: String,
}

impl HttpTransport {
    /// Creates a transport for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the URL does not parse or cannot
    /// carry path segments.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|err| ApiError::InvalidUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            base_url: parsed,
            api_key: api_key.into(),
            agent: ureq::AgentBuilder::new().build(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, escaping each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request_json<T, R>(&self, method: &str, url: &Url, body: &T) -> Result<R, ApiError>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_string(body).map_err(ApiError::Encode)?;
        tracing::debug!(%method, %url, "sending API request");
        let response = self
            .agent
            .request(method, url.as_str())
            .set("Accept", "application/json")
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Anytype-Version", API_VERSION)
            .send_string(&payload);

        match response {
            Ok(resp) => read_json_response(resp),
            Err(ureq::Error::Status(status, resp)) => Err(status_error(status, resp)),
            Err(ureq::Error::Transport(err)) => Err(ApiError::Transport(Box::new(err))),
        }
    }
}

fn read_json_response<R>(response: ureq::Response) -> Result<R, ApiError>
where
    R: DeserializeOwned,
{
    let body = response.into_string().map_err(ApiError::Read)?;
    decode_json(&body)
}

fn decode_json<R>(body: &str) -> Result<R, ApiError>
where
    R: DeserializeOwned,
{
    serde_json::from_str(body).map_err(ApiError::Decode)
}

fn status_error(status: u16, response: ureq::Response) -> ApiError {
    let body = response.into_string().unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|parsed| parsed.message)
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.trim().to_string());
    tracing::debug!(status, %message, "API request failed");
    ApiError::Status { status, message }
}

impl Transport for HttpTransport {
    fn create_object(
        &self,
        space_id: &str,
        request: &CreateObjectRequest,
    ) -> Result<ObjectRecord, ApiError> {
        let url = self.endpoint(&["spaces", space_id, "objects"]);
        let envelope: ObjectEnvelope = self.request_json("POST", &url, request)?;
        Ok(envelope.object)
    }

    fn update_object(
        &self,
        space_id: &str,
        object_id: &str,
        request: &UpdateObjectRequest,
    ) -> Result<ObjectRecord, ApiError> {
        let url = self.endpoint(&["spaces", space_id, "objects", object_id]);
        let envelope: ObjectEnvelope = self.request_json("PATCH", &url, request)?;
        Ok(envelope.object)
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}
