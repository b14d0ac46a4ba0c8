//! Request error taxonomy with HTTP status mapping.
//!
//! Every failure condition of the slash-command endpoint maps to one variant
//! here. All variants are terminal for the request: none are retried, each is
//! logged at the site it occurs and mirrored to the caller as a status code
//! plus a plain-text body. Slack renders the body verbatim, so there is no
//! JSON envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lunchbox_core::CoreError;
use thiserror::Error;

/// Errors surfaced by the slash-command endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request used a method other than POST.
    #[error("Method Not Allowed.")]
    MethodNotAllowed,

    /// Request body could not be read.
    #[error("{0}")]
    BodyRead(String),

    /// Request body was not a valid URL-encoded form.
    #[error("{0}")]
    MalformedForm(String),

    /// The `token` field did not match the configured shared secret.
    #[error("Unauthorized Token.")]
    Unauthorized,

    /// The first token of `text` selected no known operation.
    #[error("Invalid SubCommand.")]
    InvalidSubCommand,

    /// The store rejected the add or list operation.
    #[error(transparent)]
    Store(#[from] CoreError),
}

impl ApiError {
    /// Returns the HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BodyRead(_) | Self::MalformedForm(_) | Self::InvalidSubCommand | Self::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_contract() {
        assert_eq!(ApiError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidSubCommand.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ApiError::Store(CoreError::Database("boom".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn fixed_messages_are_stable() {
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method Not Allowed.");
        assert_eq!(ApiError::Unauthorized.to_string(), "Unauthorized Token.");
        assert_eq!(ApiError::InvalidSubCommand.to_string(), "Invalid SubCommand.");
    }

    #[test]
    fn store_errors_surface_their_message() {
        let err = ApiError::Store(CoreError::Database("connection reset".to_string()));
        assert_eq!(err.to_string(), "Database error: connection reset");
    }
}
