//! Protocol status classes.
//!
//! The leading numeral of every `Response::status` is one of these codes.
//! The validator only ever produces `Ok` and `BadRequest`; the remaining
//! codes come from the dispatcher after a request has been accepted.

/// Outcome category of a protocol response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Ok,
    Created,
    Updated,
    BadRequest,
    NotFound,
    Error,
}

impl StatusCode {
    pub fn as_u8(self) -> u8 {
        match self {
            StatusCode::Ok => 1,
            StatusCode::Created => 2,
            StatusCode::Updated => 3,
            StatusCode::BadRequest => 4,
            StatusCode::NotFound => 5,
            StatusCode::Error => 6,
        }
    }

    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            1 => Some(StatusCode::Ok),
            2 => Some(StatusCode::Created),
            3 => Some(StatusCode::Updated),
            4 => Some(StatusCode::BadRequest),
            5 => Some(StatusCode::NotFound),
            6 => Some(StatusCode::Error),
            _ => None,
        }
    }

    /// Default reason phrase written after the code.
    pub fn reason(self) -> &'static str {
        match self {
            StatusCode::Ok => "Ok",
            StatusCode::Created => "Created",
            StatusCode::Updated => "Updated",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::Error => "Error",
        }
    }
}

impl From<StatusCode> for u8 {
    fn from(code: StatusCode) -> u8 {
        code.as_u8()
    }
}
