use std::collections::BTreeMap;
use std::fmt;

/// Result type for roombook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by the gateway and the view layer
#[derive(Debug)]
pub enum Error {
    /// No response within the fixed request timeout
    Timeout,

    /// Transport-level failure (connection refused, DNS, broken stream)
    Network(String),

    /// Requested resource identifier does not exist
    NotFound(String),

    /// Server rejected the payload; carries the diagnostic body it returned
    Api(ApiFailure),

    /// Local precondition check failed before any network call was made
    Precondition(String),

    /// Response body could not be decoded into the expected representation
    Decode(String),
}

impl Error {
    /// Most specific user-facing message available for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api(failure) => failure.preferred_message(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Timeout => write!(f, "Request timed out"),
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Api(failure) => write!(f, "{}", failure.preferred_message()),
            Error::Precondition(msg) => write!(f, "{}", msg),
            Error::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Diagnostic payload a server attaches to a rejected request: a bare string
/// message, a field-level validation map, or a generic title/message object.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ApiFailure {
    /// Bare string body, when the server answered with plain text
    pub message: Option<String>,
    /// Field name -> validation messages
    pub field_errors: BTreeMap<String, Vec<String>>,
    /// `title` or `message` from a structured error object
    pub title: Option<String>,
}

impl ApiFailure {
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Pick the most specific message the server provided:
    /// string body > first field error > title/message > generic fallback.
    pub fn preferred_message(&self) -> String {
        if let Some(msg) = self.message.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            return msg.to_string();
        }
        if let Some(first) = self
            .field_errors
            .values()
            .flat_map(|msgs| msgs.iter())
            .map(|m| m.trim())
            .find(|m| !m.is_empty())
        {
            return first.to_string();
        }
        if let Some(title) = self.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            return title.to_string();
        }
        "The server rejected the request".to_string()
    }
}
