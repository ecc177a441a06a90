//! Error types for request dispatch.
//!
//! # Design
//! Protocol outcomes are `Response` values, never Rust errors. Inside the
//! dispatcher, however, each handler returns `Result<Response, DispatchError>`
//! so failures propagate with `?`; the conversion into a `Response` happens
//! once at the edge. `NotFound` gets its own variant because it is the one
//! recoverable outcome that is not the client's malformed input.

use thiserror::Error;

use crate::protocol::Response;
use crate::status::StatusCode;

/// Reasons an accepted request could not be carried out.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request is well-formed but does not address a valid operation.
    /// The string becomes the response reason.
    #[error("bad request: {0}")]
    BadRequest(&'static str),

    /// The addressed category does not exist.
    #[error("resource not found")]
    NotFound,

    /// No id is left above the largest stored one.
    #[error("id space exhausted")]
    IdsExhausted,

    /// An entity could not be encoded into the response body.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DispatchError {
    fn from(e: serde_json::Error) -> Self {
        DispatchError::Serialization(e.to_string())
    }
}

impl From<DispatchError> for Response {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::BadRequest(reason) => {
                Response::with_reason(StatusCode::BadRequest, reason)
            }
            DispatchError::NotFound => Response::status(StatusCode::NotFound),
            DispatchError::IdsExhausted | DispatchError::Serialization(_) => {
                Response::status(StatusCode::Error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_status_classes() {
        let resp: Response = DispatchError::BadRequest("duplicate id").into();
        assert_eq!(resp.status, "4 duplicate id");

        let resp: Response = DispatchError::NotFound.into();
        assert_eq!(resp.status, "5 Not Found");

        let resp: Response = DispatchError::Serialization("boom".to_string()).into();
        assert_eq!(resp.status, "6 Error");

        let resp: Response = DispatchError::IdsExhausted.into();
        assert_eq!(resp.status, "6 Error");
    }
}
