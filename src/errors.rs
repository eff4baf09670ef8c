// errors.rs
use std::fmt;

/// Errors originating from the server logic itself (routing, bad query
/// params). Upstream fetch failures are not errors at this level: they are
/// recorded on the result store and render as a banner on a normal page.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<astra::Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
        }
    }
}

impl std::error::Error for ServerError {}
