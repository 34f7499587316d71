use std::error::Error as StdError;
use std::fmt;

/// Failure classes of a submission run.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Missing, empty, or invalid configuration. Raised before any network
    /// activity.
    Config,
    /// The payload could not be serialized to canonical JSON.
    Canonicalize,
    /// The request never produced an HTTP response.
    Network,
    /// The endpoint answered with a non-success status.
    Status,
}

/// Crate-wide error type.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
    message: String,
    status: Option<u16>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Config,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    pub(crate) fn canonicalize(source: serde_json::Error) -> Self {
        Self {
            kind: Kind::Canonicalize,
            message: format!("failed to canonicalize payload: {source}"),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    pub(crate) fn network(source: reqwest::Error) -> Self {
        Self {
            kind: Kind::Network,
            message: format!("request failed: {source}"),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    pub(crate) fn rejected(status: reqwest::StatusCode, body: String) -> Self {
        Self {
            kind: Kind::Status,
            message: format!("submission rejected with status {status}: {body}"),
            status: Some(status.as_u16()),
            source: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// HTTP status for `Kind::Status` errors.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.status
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

impl From<url::ParseError> for Error {
    fn from(source: url::ParseError) -> Self {
        Self::config(format!("invalid endpoint URL: {source}"))
    }
}
