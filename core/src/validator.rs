//! Request validation with accumulated issues.
//!
//! # Design
//! Each check appends to a list that is created inside the call and
//! returned, so one request's issues can never leak into the next. Checks
//! run in a fixed order (method, path, date, body) and never short-circuit
//! each other, which keeps the joined message deterministic.

use std::fmt;

use tracing::debug;

use crate::method::Method;
use crate::protocol::{Request, Response};
use crate::status::StatusCode;
use crate::structured::{JsonSyntax, StructuredData};

/// Reason reported when the request itself is absent.
pub const MISSING_REQUEST: &str = "Missing method, missing path, missing date";

/// One validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issue {
    MissingMethod,
    IllegalMethod,
    MissingPath,
    InvalidPath,
    MissingDate,
    IllegalDate,
    MissingBody,
    IllegalBody,
}

impl Issue {
    pub fn as_str(self) -> &'static str {
        match self {
            Issue::MissingMethod => "missing method",
            Issue::IllegalMethod => "illegal method",
            Issue::MissingPath => "missing path",
            Issue::InvalidPath => "invalid path",
            Issue::MissingDate => "missing date",
            Issue::IllegalDate => "illegal date",
            Issue::MissingBody => "missing body",
            Issue::IllegalBody => "illegal body",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `"4 "` followed by `issues` joined in order.
pub fn rejection(issues: &[Issue]) -> Response {
    let reason = issues
        .iter()
        .map(|issue| issue.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Response::with_reason(StatusCode::BadRequest, &reason)
}

/// Validates protocol requests. Holds no per-request state.
#[derive(Debug, Clone, Default)]
pub struct RequestValidator<D = JsonSyntax> {
    syntax: D,
}

impl RequestValidator<JsonSyntax> {
    pub fn new() -> Self {
        Self { syntax: JsonSyntax }
    }
}

impl<D: StructuredData> RequestValidator<D> {
    /// Use `syntax` to decide whether create/update bodies are well-formed.
    pub fn with_syntax(syntax: D) -> Self {
        Self { syntax }
    }

    /// `"1 Ok"` for a valid request, otherwise `"4 "` and the joined issues.
    pub fn validate(&self, request: Option<&Request>) -> Response {
        let Some(request) = request else {
            debug!("request absent");
            return Response::with_reason(StatusCode::BadRequest, MISSING_REQUEST);
        };

        match self.check(request) {
            Ok(_) => Response::ok(),
            Err(issues) => {
                debug!(method = %request.method, path = %request.path, "request rejected");
                rejection(&issues)
            }
        }
    }

    /// The accepted method, or every issue found in `request`.
    pub fn check(&self, request: &Request) -> Result<Method, Vec<Issue>> {
        let (method, issues) = self.inspect(request);
        match method {
            Some(method) if issues.is_empty() => Ok(method),
            _ => Err(issues),
        }
    }

    /// Every issue found in `request`, in check order.
    pub fn issues(&self, request: &Request) -> Vec<Issue> {
        self.inspect(request).1
    }

    fn inspect(&self, request: &Request) -> (Option<Method>, Vec<Issue>) {
        let mut issues = Vec::new();

        let raw_method = request.method.trim();
        let method = if raw_method.is_empty() {
            issues.push(Issue::MissingMethod);
            None
        } else {
            match request.method.parse::<Method>() {
                Ok(method) => Some(method),
                Err(()) => {
                    issues.push(Issue::IllegalMethod);
                    None
                }
            }
        };

        // An illegal method still selects a body rule by its lowercase name,
        // so `UPDATE` without a body reports both problems.
        let body_rule = method.or_else(|| raw_method.to_ascii_lowercase().parse::<Method>().ok());

        if request.path.trim().is_empty() {
            issues.push(Issue::MissingPath);
        } else if !request.path.starts_with('/') {
            issues.push(Issue::InvalidPath);
        }

        if request.date.trim().is_empty() {
            issues.push(Issue::MissingDate);
        } else if request.date.trim().parse::<i64>().is_err() {
            issues.push(Issue::IllegalDate);
        }

        if let Some(rule) = body_rule {
            self.check_body(rule, request.body.as_deref(), &mut issues);
        }

        (method, issues)
    }

    fn check_body(&self, method: Method, body: Option<&str>, issues: &mut Vec<Issue>) {
        let body = body.filter(|b| !b.is_empty());
        match method {
            Method::Create | Method::Update => match body {
                None => issues.push(Issue::MissingBody),
                Some(text) if !self.syntax.is_well_formed(text) => {
                    issues.push(Issue::IllegalBody)
                }
                Some(_) => {}
            },
            Method::Echo => {
                if body.is_none() {
                    issues.push(Issue::MissingBody);
                }
            }
            Method::Read | Method::Delete => {}
        }
    }
}
