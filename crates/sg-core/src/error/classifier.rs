use super::{ErrorKind, ErrorReport, Failure};
use crate::ports::ConnectivityProbePort;

pub const OFFLINE_MESSAGE: &str = "You appear to be offline. Check your connection and try again.";
pub const TIMEOUT_MESSAGE: &str = "The request timed out. Please try again.";
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach the server. Please try again later.";
pub const UNKNOWN_MESSAGE: &str = "An unexpected error occurred.";

const TIMEOUT_MARKERS: &[&str] = &["timeout", "timed out"];

const UNREACHABLE_MARKERS: &[&str] = &[
    "network request failed",
    "failed to fetch",
    "unreachable",
    "connection refused",
    "could not connect",
    "error sending request",
];

/// Classify a failure, consulting the connectivity probe first.
pub fn classify(failure: &Failure, connectivity: &dyn ConnectivityProbePort) -> ErrorReport {
    classify_with(failure, connectivity.is_online())
}

/// Display string for a failure.
pub fn classify_message(failure: &Failure, connectivity: &dyn ConnectivityProbePort) -> String {
    classify(failure, connectivity).message().to_string()
}

/// Pure classification given the current connectivity.
///
/// First match wins: offline, transport message, protocol list, generic
/// message, stringified value.
pub fn classify_with(failure: &Failure, online: bool) -> ErrorReport {
    if !online {
        return ErrorReport::new(ErrorKind::Offline, OFFLINE_MESSAGE);
    }

    if let Some(network) = &failure.network {
        return classify_transport(network);
    }

    if !failure.protocol.is_empty() {
        return ErrorReport::new(ErrorKind::ProtocolError, failure.protocol.join(", "));
    }

    if let Some(message) = failure.message.as_deref().filter(|m| !m.trim().is_empty()) {
        return ErrorReport::new(ErrorKind::Unknown, message);
    }

    let text = failure.stringified();
    if text.trim().is_empty() {
        ErrorReport::new(ErrorKind::Unknown, UNKNOWN_MESSAGE)
    } else {
        ErrorReport::new(ErrorKind::Unknown, text)
    }
}

fn classify_transport(message: &str) -> ErrorReport {
    let lowered = message.to_lowercase();

    if TIMEOUT_MARKERS.iter().any(|m| lowered.contains(m)) {
        return ErrorReport::new(ErrorKind::Timeout, TIMEOUT_MESSAGE);
    }
    if UNREACHABLE_MARKERS.iter().any(|m| lowered.contains(m)) {
        return ErrorReport::new(ErrorKind::NetworkUnreachable, UNREACHABLE_MESSAGE);
    }
    if message.trim().is_empty() {
        return ErrorReport::new(ErrorKind::NetworkError, UNKNOWN_MESSAGE);
    }
    ErrorReport::new(ErrorKind::NetworkError, message)
}
