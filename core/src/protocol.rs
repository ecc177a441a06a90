//! Protocol request and response records.
//!
//! # Design
//! These types describe one protocol exchange as plain data. The core
//! validates and dispatches `Request` values and produces `Response` values
//! without touching the network. The host owns the transport and the JSON
//! framing; both types derive serde so it can decode and encode them
//! directly.
//!
//! Fields use owned `String`s so values can move between the host and the
//! core without lifetime concerns.

use serde::{Deserialize, Serialize};

use crate::status::StatusCode;

/// A protocol request described as plain data.
///
/// Missing JSON keys decode to empty strings so the validator can report
/// them as `missing …` issues instead of the host rejecting the frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Request {
    pub fn new(method: &str, path: &str, date: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            date: date.to_string(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A protocol response described as plain data.
///
/// `status` is the class code followed by a reason phrase or an issue
/// list, e.g. `"1 Ok"` or `"4 missing path, illegal date"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Response {
    /// A response whose status line is the code and its reason phrase.
    pub fn status(code: StatusCode) -> Self {
        Self::with_reason(code, code.reason())
    }

    /// A response with a custom reason after the class code.
    pub fn with_reason(code: StatusCode, reason: &str) -> Self {
        Self {
            status: format!("{} {reason}", code.as_u8()),
            body: None,
        }
    }

    pub fn ok() -> Self {
        Self::status(StatusCode::Ok)
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Recovers the class code from the leading numeral of `status`.
    pub fn status_code(&self) -> Option<StatusCode> {
        let lead = self.status.split_whitespace().next()?;
        lead.parse::<u8>().ok().and_then(StatusCode::from_u8)
    }

    /// The text after the class code.
    pub fn reason(&self) -> &str {
        self.status
            .split_once(' ')
            .map(|(_, reason)| reason)
            .unwrap_or("")
    }
}
