//! Connection configuration parser

use dataport_core::{ConnectionConfig, DataportError};

use crate::env::EnvSubstitutor;

/// Parser for connection configuration files
///
/// Both entry points substitute `{{ env.VAR }}` placeholders first, then
/// route through [`ConnectionConfig::from_value`] so discriminator errors
/// are reported uniformly regardless of the source format.
pub struct ConfigParser;

impl ConfigParser {
    /// Parse a YAML document into a connection configuration
    pub fn parse_yaml(content: &str) -> Result<ConnectionConfig, DataportError> {
        let substituted = EnvSubstitutor::new().substitute(content)?;
        let value: serde_json::Value = serde_yaml::from_str(&substituted)
            .map_err(|e| DataportError::Configuration(format!("invalid YAML: {}", e)))?;
        ConnectionConfig::from_value(value)
    }

    /// Parse a JSON document into a connection configuration
    pub fn parse_json(content: &str) -> Result<ConnectionConfig, DataportError> {
        let substituted = EnvSubstitutor::new().substitute(content)?;
        let value: serde_json::Value = serde_json::from_str(&substituted)?;
        ConnectionConfig::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataport_types::Backend;

    #[test]
    fn test_parse_yaml() {
        let config = ConfigParser::parse_yaml(
            "kind: mock\nhost: localhost\nport: 1521\ndatabase: testdb\nread_only: true\n",
        )
        .unwrap();
        assert_eq!(config.kind, Backend::Mock);
        assert_eq!(config.host.as_deref(), Some("localhost"));
        assert_eq!(config.port, Some(1521));
        assert!(config.read_only);
    }

    #[test]
    fn test_parse_json() {
        let config =
            ConfigParser::parse_json(r#"{"kind": "mock", "database": "testdb"}"#).unwrap();
        assert_eq!(config.kind, Backend::Mock);
        assert_eq!(config.database.as_deref(), Some("testdb"));
        assert!(!config.read_only);
    }

    #[test]
    fn test_parse_yaml_with_env_placeholder() {
        std::env::set_var("DATAPORT_TEST_DB", "inventory");
        let config =
            ConfigParser::parse_yaml("kind: mock\ndatabase: \"{{ env.DATAPORT_TEST_DB }}\"\n")
                .unwrap();
        assert_eq!(config.database.as_deref(), Some("inventory"));
        std::env::remove_var("DATAPORT_TEST_DB");
    }

    #[test]
    fn test_parse_yaml_missing_kind() {
        let result = ConfigParser::parse_yaml("host: localhost\n");
        assert!(matches!(
            result.unwrap_err(),
            DataportError::Configuration(_)
        ));
    }

    #[test]
    fn test_parse_yaml_unknown_kind() {
        let result = ConfigParser::parse_yaml("kind: clickhouse\n");
        assert!(matches!(result.unwrap_err(), DataportError::UnknownKind(_)));
    }

    #[test]
    fn test_parse_yaml_invalid_document() {
        let result = ConfigParser::parse_yaml("kind: [unclosed");
        assert!(matches!(
            result.unwrap_err(),
            DataportError::Configuration(_)
        ));
    }

    #[test]
    fn test_parse_json_missing_env_var() {
        let result = ConfigParser::parse_json(
            r#"{"kind": "mock", "password": "{{ env.DATAPORT_NO_SUCH_SECRET }}"}"#,
        );
        assert!(matches!(
            result.unwrap_err(),
            DataportError::EnvVarNotFound(_)
        ));
    }
}
