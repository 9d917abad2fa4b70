//! Entry and auth DTOs.

use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Submitted username.
    pub username: String,
    /// Submitted password.
    pub password: String,
}

/// Form body for `POST /add`.
///
/// No length or content validation; empty strings are accepted.
#[derive(Debug, Deserialize)]
pub struct AddEntryForm {
    /// Entry title.
    pub title: String,
    /// Entry body.
    pub text: String,
}

/// Query string for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring to search for. Missing or empty matches all entries.
    #[serde(default)]
    pub query: Option<String>,
}

/// Outcome of a delete request.
///
/// Serialized as the bare numbers `0` (failure) and `1` (success) to keep
/// the wire format machine-friendly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatus {
    /// The delete could not be performed.
    Failure,
    /// The delete was carried out (including the no-op case where no row
    /// matched the id).
    Success,
}

impl Serialize for DeleteStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(match self {
            Self::Failure => 0,
            Self::Success => 1,
        })
    }
}

/// Response body for `GET /delete/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    /// `1` on success, `0` on failure.
    #[schema(value_type = u8)]
    pub status: DeleteStatus,
    /// Human-readable outcome description.
    pub message: String,
}

impl DeleteResponse {
    /// Builds a success response.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: DeleteStatus::Success,
            message: message.into(),
        }
    }

    /// Builds a failure response.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: DeleteStatus::Failure,
            message: message.into(),
        }
    }
}
