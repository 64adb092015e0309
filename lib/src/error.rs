//! Custom Error and Result types for this library

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Coarse classification of a failed request, suitable for choosing what to
/// show a user
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The requested device does not exist
    NotFound,
    /// The server rejected the submitted input
    Validation,
    /// The server answered with some other non-success status, or with a
    /// body this library could not understand
    Server,
    /// The server could not be reached at all
    Transport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::Validation => write!(f, "validation failed"),
            ErrorKind::Server => write!(f, "server error"),
            ErrorKind::Transport => write!(f, "connection failed"),
        }
    }
}

/// A validation message attached to a single input field
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FieldError {
    /// Name of the offending field i.e. "name" or "manufacturer"
    pub field: String,
    /// Human readable message reported by the server
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Custom Error type for this library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeviceApiError {
    /// The server reported that the device does not exist
    #[error("device not found: {message}")]
    NotFound {
        /// Message reported by the server
        message: String,
    },

    /// The server rejected the submitted input
    #[error("validation failed ({status}): {message}")]
    Validation {
        /// HTTP status code of the response
        status: u16,
        /// Summary message reported by the server
        message: String,
        /// Per field messages, empty if the server did not send any
        fields: Vec<FieldError>,
    },

    /// Any other non-success response
    #[error("request failed ({status}): {message}")]
    Status {
        /// HTTP status code of the response
        status: u16,
        /// Message reported by the server or the status reason
        message: String,
    },

    /// Network, DNS, TLS or I/O failure before a response was received
    #[error("transport error: {_0}")]
    Transport(String),

    /// A success response whose body did not match the expected shape
    #[error("failed to decode response: {_0}")]
    Decode(String),

    /// The client was configured with unusable values, so no request could
    /// be sent
    #[error("invalid configuration: {_0}")]
    InvalidConfig(String),
}

impl DeviceApiError {
    /// Returns the coarse classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeviceApiError::NotFound { .. } => ErrorKind::NotFound,
            DeviceApiError::Validation { .. } => ErrorKind::Validation,
            DeviceApiError::Status { .. } | DeviceApiError::Decode(_) => {
                ErrorKind::Server
            }
            DeviceApiError::Transport(_) | DeviceApiError::InvalidConfig(_) => {
                ErrorKind::Transport
            }
        }
    }

    /// Returns the HTTP status associated with this error, if a response was
    /// received
    pub fn status(&self) -> Option<u16> {
        match self {
            DeviceApiError::NotFound { .. } => Some(404),
            DeviceApiError::Validation { status, .. }
            | DeviceApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns field level validation messages, empty for every other kind
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            DeviceApiError::Validation { fields, .. } => fields,
            _ => &[],
        }
    }

    /// Builds an error from a non-success status and the raw response body.
    ///
    /// Understands `{"detail": "..."}`, `{"detail": [{"loc": [..], "msg":
    /// ".."}]}` and `{"error": {"code": "..", "message": "..", "details":
    /// {..}}}` bodies. Anything else falls back to the body text or the
    /// status reason.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();

        let (message, fields, code) = match parsed {
            Some(ErrorBody::Detail {
                detail: Detail::Message(message),
            }) => (message, Vec::new(), None),
            Some(ErrorBody::Detail {
                detail: Detail::Fields(details),
            }) => {
                let fields = details
                    .into_iter()
                    .map(FieldDetail::into_field_error)
                    .collect::<Vec<_>>();
                let message = fields
                    .iter()
                    .map(|f| f.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                (message, fields, None)
            }
            Some(ErrorBody::App {
                error: AppError::Message(message),
            }) => (message, Vec::new(), None),
            Some(ErrorBody::App {
                error: AppError::Structured(err),
            }) => {
                let fields = err.field_errors();
                (err.message, fields, Some(err.code))
            }
            None => (body.trim().to_string(), Vec::new(), None),
        };

        let message = if message.is_empty() {
            format!("server responded with status {status}")
        } else {
            message
        };

        match (status, code.as_deref()) {
            (404, _) | (_, Some(DEVICE_NOT_FOUND)) => Self::NotFound { message },
            (400 | 422, _) | (_, Some(VALIDATION_ERROR)) => Self::Validation {
                status,
                message,
                fields,
            },
            _ => Self::Status { status, message },
        }
    }
}

impl From<ureq::Error> for DeviceApiError {
    fn from(value: ureq::Error) -> Self {
        match value {
            ureq::Error::StatusCode(status) => Self::Status {
                status,
                message: format!("server responded with status {status}"),
            },
            other => Self::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for DeviceApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

const DEVICE_NOT_FOUND: &str = "DEVICE_NOT_FOUND";
const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Detail { detail: Detail },
    App { error: AppError },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Fields(Vec<FieldDetail>),
}

#[derive(Deserialize)]
struct FieldDetail {
    #[serde(default)]
    loc: Vec<serde_json::Value>,
    msg: String,
}

impl FieldDetail {
    fn into_field_error(self) -> FieldError {
        // loc looks like ["body", "name"] - the last entry names the field
        let field = match self.loc.last() {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::from("body"),
        };

        FieldError {
            field,
            message: self.msg,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AppError {
    Message(String),
    Structured(StructuredError),
}

#[derive(Deserialize)]
struct StructuredError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: serde_json::Value,
}

impl StructuredError {
    fn field_errors(&self) -> Vec<FieldError> {
        let Some(details) = self.details.as_object() else {
            return Vec::new();
        };

        details
            .iter()
            .filter_map(|(field, value)| {
                value.as_str().map(|message| FieldError {
                    field: field.clone(),
                    message: message.to_string(),
                })
            })
            .collect()
    }
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`DeviceApiError`]
pub type Result<T> = std::result::Result<T, DeviceApiError>;

#[cfg(test)]
#[path = "./error_tests.rs"]
mod tests;
