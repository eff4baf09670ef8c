use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    /// Transport failure or timeout. Treated the same either way.
    Network(String),
    /// Non-2xx response with whatever message the server sent back.
    Upstream { status: u16, message: String },
    /// 2xx response whose body did not match the expected envelope.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Upstream { status, message } => {
                write!(f, "Upstream HTTP {status}: {message}")
            }
            FetchError::Decode(msg) => write!(f, "Response decode error: {msg}"),
        }
    }
}

impl Error for FetchError {}
