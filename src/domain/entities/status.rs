use axum::http::StatusCode;
use std::fmt;

/// Final status of a logged request.
///
/// `Unknown` is recorded when the handler fails, panics, or is dropped
/// before it produces a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Code(u16),
    Unknown,
}

impl Status {
    pub fn code(&self) -> Option<u16> {
        match self {
            Status::Code(code) => Some(*code),
            Status::Unknown => None,
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            Status::Code(code) => Tier::from_code(*code),
            Status::Unknown => Tier::Error,
        }
    }
}

impl From<StatusCode> for Status {
    fn from(status: StatusCode) -> Self {
        Status::Code(status.as_u16())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Code(code) => write!(f, "{}", code),
            Status::Unknown => f.write_str("unknown"),
        }
    }
}

/// Severity bucket used to highlight a status in the log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Success,
    Redirect,
    Warning,
    Error,
}

impl Tier {
    pub fn from_code(code: u16) -> Self {
        match code {
            500.. => Tier::Error,
            400..=499 => Tier::Warning,
            300..=399 => Tier::Redirect,
            _ => Tier::Success,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Success => "success",
            Tier::Redirect => "redirect",
            Tier::Warning => "warning",
            Tier::Error => "error",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
