//! Device configuration

use serde::Deserialize;

use crate::SdkError;

/// Name used when the host does not configure one
pub const DEFAULT_NAME: &str = "LinkPlay device";

/// Configuration for one LinkPlay device
///
/// Deserializable from any serde format, e.g.
/// `{"host": "192.168.1.20", "name": "Kitchen", "lastfm_api_key": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceConfig {
    /// Host name or IP address, optionally with `:port`
    pub host: String,

    #[serde(default = "default_name")]
    pub name: String,

    /// Enables cover-art lookups when set
    #[serde(default)]
    pub lastfm_api_key: Option<String>,
}

impl DeviceConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            name: default_name(),
            lastfm_api_key: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_lastfm_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.lastfm_api_key = Some(api_key.into());
        self
    }

    /// Check that the configuration can be used to reach a device
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.host.trim().is_empty() {
            return Err(SdkError::Config("host must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let config: DeviceConfig = serde_json::from_str(r#"{"host": "10.0.0.7"}"#).unwrap();
        assert_eq!(config, DeviceConfig::new("10.0.0.7"));
        assert_eq!(config.name, "LinkPlay device");
        assert!(config.lastfm_api_key.is_none());
    }

    #[test]
    fn test_deserialize_full() {
        let config: DeviceConfig = serde_json::from_str(
            r#"{"host": "10.0.0.7:8080", "name": "Kitchen", "lastfm_api_key": "abc"}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            DeviceConfig::new("10.0.0.7:8080")
                .with_name("Kitchen")
                .with_lastfm_api_key("abc")
        );
    }

    #[test]
    fn test_missing_host_is_rejected() {
        assert!(serde_json::from_str::<DeviceConfig>(r#"{"name": "x"}"#).is_err());
        assert!(matches!(
            DeviceConfig::new("  ").validate(),
            Err(SdkError::Config(_))
        ));
    }
}
