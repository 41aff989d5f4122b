use std::fmt;

use serde::Serialize;

/// Closed set of user-facing failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Offline,
    Timeout,
    NetworkUnreachable,
    NetworkError,
    ProtocolError,
    Unknown,
}

impl ErrorKind {
    /// Stable code for telemetry and UI bridges.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Offline => "offline",
            ErrorKind::Timeout => "timeout",
            ErrorKind::NetworkUnreachable => "network_unreachable",
            ErrorKind::NetworkError => "network_error",
            ErrorKind::ProtocolError => "protocol_error",
            ErrorKind::Unknown => "unknown",
        }
    }

    /// Transient conditions that may clear on their own.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            ErrorKind::Offline | ErrorKind::Timeout | ErrorKind::NetworkUnreachable
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Classified failure, safe for display and retry decisions.
///
/// Only the classifier builds these; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    kind: ErrorKind,
    message: String,
    retryable: bool,
}

impl ErrorReport {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable: kind.is_retryable(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn retryable(&self) -> bool {
        self.retryable
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
