//! Resource path grammar.
//!
//! A request path addresses a two-level resource and an optional id:
//! `/api/categories` or `/api/categories/5`. Empty segments are dropped,
//! so leading, trailing and doubled slashes are tolerated. Segments after
//! the id are ignored.

use thiserror::Error;

/// Reasons a path does not address a resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("empty path")]
    Empty,

    #[error("path needs at least two segments")]
    TooFewSegments,

    #[error("id is not an integer: {0}")]
    InvalidId(String),
}

/// Result of parsing a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    /// Canonical resource path, e.g. `/api/categories`.
    pub resource: String,
    /// Third segment, when present.
    pub id: Option<String>,
}

impl ParsedPath {
    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    /// The id as an integer store key. `Ok(None)` when the path has no id.
    pub fn key(&self) -> Result<Option<i64>, PathError> {
        match &self.id {
            None => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| PathError::InvalidId(raw.clone())),
        }
    }
}

/// Split `url` into resource path and optional id.
pub fn parse(url: &str) -> Result<ParsedPath, PathError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(PathError::Empty);
    }

    let mut segments = url.split('/').filter(|s| !s.is_empty());
    let (Some(first), Some(second)) = (segments.next(), segments.next()) else {
        return Err(PathError::TooFewSegments);
    };

    Ok(ParsedPath {
        resource: format!("/{first}/{second}"),
        id: segments.next().map(str::to_string),
    })
}
