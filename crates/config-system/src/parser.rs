//! Configuration parser for multiple formats
//!
//! The page passes its configuration in as a string, so everything here
//! works on text rather than files.

use crate::{ConfigError, ConfigValidator, Result, WidgetConfig};

/// Configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl std::str::FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            other => Err(ConfigError::Parse(format!(
                "Unsupported config format: {other}"
            ))),
        }
    }
}

/// Configuration parser
pub struct ConfigParser;

impl ConfigParser {
    /// Parse and validate configuration from a string.
    /// Missing sections and fields take their defaults.
    pub fn parse_string(content: &str, format: ConfigFormat) -> Result<WidgetConfig> {
        let config = match format {
            ConfigFormat::Yaml => Self::parse_yaml(content)?,
            ConfigFormat::Json => Self::parse_json(content)?,
            ConfigFormat::Toml => Self::parse_toml(content)?,
        };
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Parse the JSON handed over by the page; no input means defaults
    pub fn parse_json_or_default(content: Option<&str>) -> Result<WidgetConfig> {
        match content.map(str::trim) {
            None | Some("") => {
                log::debug!("No configuration supplied, using defaults");
                Ok(WidgetConfig::default())
            }
            Some(json) => Self::parse_string(json, ConfigFormat::Json),
        }
    }

    fn parse_yaml(content: &str) -> Result<WidgetConfig> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("YAML parse error: {}", e)))
    }

    fn parse_json(content: &str) -> Result<WidgetConfig> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("JSON parse error: {}", e)))
    }

    fn parse_toml(content: &str) -> Result<WidgetConfig> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(format!("TOML parse error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = ConfigParser::parse_string(
            r#"{"tiles": {"access_token": "pk.test"}, "map": {"zoom": 11}}"#,
            ConfigFormat::Json,
        )
        .unwrap();

        assert_eq!(config.tiles.access_token, "pk.test");
        assert_eq!(config.tiles.style_id, "mapbox/dark-v10");
        assert_eq!(config.map.zoom, 11);
        assert_eq!(config.map.center_lat, 51.505);
    }

    #[test]
    fn test_toml() {
        let content = r#"
[endpoints]
counts_url = "https://counts.example/api/v1/cams/recent"
timeout_ms = 5000

[logging]
level = "debug"
"#;
        let config = ConfigParser::parse_string(content, ConfigFormat::Toml).unwrap();
        assert_eq!(
            config.endpoints.counts_url,
            "https://counts.example/api/v1/cams/recent"
        );
        assert_eq!(config.endpoints.timeout_ms, Some(5000));
        assert_eq!(config.logging.level(), log::Level::Debug);
    }

    #[test]
    fn test_yaml() {
        let content = "map:\n  center_lat: 51.45\n  center_lon: -0.2\nchart:\n  idle_title: Pick a camera\n";
        let config = ConfigParser::parse_string(content, ConfigFormat::Yaml).unwrap();
        assert_eq!(config.map.center_lat, 51.45);
        assert_eq!(config.chart.idle_title, "Pick a camera");
    }

    #[test]
    fn test_missing_input_uses_defaults() {
        assert_eq!(
            ConfigParser::parse_json_or_default(None).unwrap(),
            WidgetConfig::default()
        );
        assert_eq!(
            ConfigParser::parse_json_or_default(Some("  ")).unwrap(),
            WidgetConfig::default()
        );
    }

    #[test]
    fn test_invalid_inputs() {
        let err = ConfigParser::parse_json_or_default(Some("{map:")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = ConfigParser::parse_string(r#"{"map": {"zoom": 40}}"#, ConfigFormat::Json)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_format_names() {
        assert_eq!("YML".parse::<ConfigFormat>().unwrap(), ConfigFormat::Yaml);
        assert_eq!("json".parse::<ConfigFormat>().unwrap(), ConfigFormat::Json);
        assert!("ini".parse::<ConfigFormat>().is_err());
    }
}
