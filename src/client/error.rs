// ABOUTME: Client error types with SNAFU pattern.
// ABOUTME: Unifies transport and service failures for programmatic handling.

use snafu::Snafu;

/// Unified error for GameLift API operations.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ClientError {
    #[snafu(display("resource not found: {resource}"))]
    NotFound { resource: String },

    #[snafu(display("transport failure: {message}"))]
    Transport { message: String },

    #[snafu(display("service error {code}: {message}"))]
    Api { code: String, message: String },

    #[snafu(display("unrecognized {resource} status on the wire: {value}"))]
    UnexpectedStatus {
        resource: &'static str,
        value: String,
    },

    #[snafu(display("invalid request: {message}"))]
    InvalidRequest { message: String },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    NotFound,
    Transport,
    Api,
    UnexpectedStatus,
    InvalidRequest,
}

impl ClientError {
    pub fn kind(&self) -> ClientErrorKind {
        match self {
            ClientError::NotFound { .. } => ClientErrorKind::NotFound,
            ClientError::Transport { .. } => ClientErrorKind::Transport,
            ClientError::Api { .. } => ClientErrorKind::Api,
            ClientError::UnexpectedStatus { .. } => ClientErrorKind::UnexpectedStatus,
            ClientError::InvalidRequest { .. } => ClientErrorKind::InvalidRequest,
        }
    }
}

impl From<crate::types::UnknownStatus> for ClientError {
    fn from(err: crate::types::UnknownStatus) -> Self {
        ClientError::UnexpectedStatus {
            resource: err.resource,
            value: err.value,
        }
    }
}
