use serde::{Deserialize, Serialize};

/// Storage key of the persisted flags payload.
pub const PERSISTED_FLAGS_KEY: &str = "app_flags";

pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Persisted subset of the app flags.
///
/// Unknown fields are ignored and missing fields default, so payloads
/// written by older or newer builds still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedFlags {
    pub schema_version: u32,
    pub is_onboarded: bool,
}

impl Default for PersistedFlags {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            is_onboarded: false,
        }
    }
}

/// Payload shape written before the schema was versioned.
#[derive(Debug, Deserialize)]
struct LegacyFlagsV1 {
    #[serde(rename = "isOnboarded", default)]
    is_onboarded: bool,
}

impl PersistedFlags {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode a stored payload, migrating older shapes to the current one.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)?;

        match value.get("schema_version").and_then(|v| v.as_u64()) {
            Some(_) => {
                let mut flags: PersistedFlags = serde_json::from_value(value)?;
                flags.schema_version = flags.schema_version.max(CURRENT_SCHEMA_VERSION);
                Ok(flags)
            }
            None => {
                let legacy: LegacyFlagsV1 = serde_json::from_value(value)?;
                Ok(Self::migrate_v1(legacy))
            }
        }
    }

    fn migrate_v1(legacy: LegacyFlagsV1) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            is_onboarded: legacy.is_onboarded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_current_schema() {
        let flags = PersistedFlags {
            is_onboarded: true,
            ..PersistedFlags::default()
        };
        let decoded = PersistedFlags::from_json(&flags.to_json().unwrap()).unwrap();
        assert_eq!(decoded, flags);
    }

    #[test]
    fn test_unversioned_payload_is_migrated() {
        let decoded = PersistedFlags::from_json(r#"{"isOnboarded":true}"#).unwrap();
        assert!(decoded.is_onboarded);
        assert_eq!(decoded.schema_version, CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let raw = r#"{"schema_version":2,"is_onboarded":true,"theme":"dark"}"#;
        let decoded = PersistedFlags::from_json(raw).unwrap();
        assert!(decoded.is_onboarded);
    }

    #[test]
    fn test_missing_fields_default() {
        let decoded = PersistedFlags::from_json(r#"{"schema_version":2}"#).unwrap();
        assert!(!decoded.is_onboarded);
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(PersistedFlags::from_json("not json").is_err());
    }
}
