use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw failure as it came back from a backend call.
///
/// This is a plain data carrier: it records whatever the failing call
/// exposed and makes no judgement about it. Several fields may be filled at
/// once (a GraphQL client error can carry both a transport message and a
/// server error list); the classifier decides which one wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    /// Transport-layer message (timeouts, refused connections, ...).
    pub network: Option<String>,
    /// Server-reported error messages, in the order the server sent them.
    pub protocol: Vec<String>,
    /// Message of a generic error value.
    pub message: Option<String>,
    /// The original value, used when nothing above is present.
    pub value: Value,
}

impl Failure {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            network: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn protocol(errors: Vec<String>) -> Self {
        Self {
            protocol: errors,
            ..Self::default()
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Capture a loosely-typed failure payload.
    ///
    /// Recognized keys: `networkError` (string or `{message}`),
    /// `graphQLErrors` / `protocolErrors` / `errors` (strings or
    /// `{message}` objects) and `message`. Anything else is only kept as
    /// `value`.
    pub fn from_value(value: Value) -> Self {
        let mut failure = Self::default();

        if let Value::Object(map) = &value {
            failure.network = map.get("networkError").and_then(message_of);

            for key in ["graphQLErrors", "protocolErrors", "errors"] {
                if let Some(Value::Array(items)) = map.get(key) {
                    failure.protocol.extend(items.iter().filter_map(message_of));
                }
            }

            failure.message = map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
        }

        failure.value = value;
        failure
    }

    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        Self::message(err.to_string())
    }

    pub(crate) fn stringified(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

fn message_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(network) = &self.network {
            return write!(f, "network: {network}");
        }
        if !self.protocol.is_empty() {
            return write!(f, "protocol: {}", self.protocol.join(", "));
        }
        if let Some(message) = &self.message {
            return f.write_str(message);
        }
        f.write_str(&self.stringified())
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Self::message(format!("{err:#}"))
    }
}

impl From<Value> for Failure {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
