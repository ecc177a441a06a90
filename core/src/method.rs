//! Protocol method as a typed enum.
//!
//! The wire form is lowercase and matched case-sensitively. Anything outside
//! the closed set is an `illegal method` issue, reported by the validator.

use std::fmt;
use std::str::FromStr;

/// A known protocol method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Create,
    Read,
    Update,
    Delete,
    Echo,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Create => "create",
            Method::Read => "read",
            Method::Update => "update",
            Method::Delete => "delete",
            Method::Echo => "echo",
        }
    }

    /// Methods whose body must be well-formed structured data.
    pub fn requires_structured_body(self) -> bool {
        matches!(self, Method::Create | Method::Update)
    }
}

impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Method::Create),
            "read" => Ok(Method::Read),
            "update" => Ok(Method::Update),
            "delete" => Ok(Method::Delete),
            "echo" => Ok(Method::Echo),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
