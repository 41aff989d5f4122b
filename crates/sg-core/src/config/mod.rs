//! # Client configuration DTO
//!
//! Pure data. Maps a TOML document onto [`ClientConfig`] without validation:
//! a missing key becomes an empty value, which is a fact and not an error.
//! Deciding what an empty endpoint means is the caller's business.

use std::path::PathBuf;

/// Client configuration (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// GraphQL endpoint URL (may be empty)
    pub graphql_endpoint: String,

    /// Per-request timeout in seconds, 0 when unset
    pub request_timeout_secs: u64,

    /// Data directory override (empty when unset)
    pub data_dir: PathBuf,

    /// Whether to also write logs to a file under the data directory
    pub file_logging: bool,
}

impl ClientConfig {
    /// Create ClientConfig from a TOML value
    ///
    /// Must NOT contain any validation or default value logic.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            graphql_endpoint: toml_value
                .get("backend")
                .and_then(|b| b.get("graphql_endpoint"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            request_timeout_secs: toml_value
                .get("backend")
                .and_then(|b| b.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            data_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty ClientConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            graphql_endpoint: String::new(),
            request_timeout_secs: 0,
            data_dir: PathBuf::new(),
            file_logging: false,
        }
    }

    /// Create ClientConfig rooted at a platform data directory
    ///
    /// The caller resolves `data_dir` (e.g. through the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            file_logging: true,
            ..Self::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [backend]
            graphql_endpoint = "https://api.example.com/graphql"
            request_timeout_secs = 15

            [storage]
            data_dir = "/tmp/sessiongate"

            [logging]
            file_logging = true
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = ClientConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.graphql_endpoint, "https://api.example.com/graphql");
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/sessiongate"));
        assert!(config.file_logging);
    }

    #[test]
    fn test_from_toml_missing_values_are_empty() {
        let toml_value: Value = toml::from_str("[backend]\n").unwrap();

        let config = ClientConfig::from_toml(&toml_value).unwrap();

        // Empty is a fact, not an error
        assert_eq!(config, ClientConfig::empty());
    }

    #[test]
    fn test_from_toml_negative_timeout_reads_as_zero() {
        let toml_value: Value = toml::from_str("[backend]\nrequest_timeout_secs = -3\n").unwrap();

        let config = ClientConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.request_timeout_secs, 0);
    }

    #[test]
    fn test_with_system_defaults_keeps_data_dir() {
        let config = ClientConfig::with_system_defaults(PathBuf::from("/tmp/test"));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/test"));
        assert!(config.graphql_endpoint.is_empty());
    }
}
