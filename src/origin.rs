// src/origin.rs
use std::fmt;

/// The base URL of the execution service: scheme, host and port.
///
/// The client and service are deployed behind the same origin, so there is no
/// further routing configuration. The origin is handed to the dispatcher
/// explicitly rather than read from ambient state, which keeps the dispatcher
/// pointable at a local test server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(String);

impl Origin {
    /// Creates an origin from a base URL. Trailing slashes are trimmed so
    /// joined paths never contain `//`.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Origin(base.trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
