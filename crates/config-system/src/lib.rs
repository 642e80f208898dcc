//! Configuration system for the JamCam map
//! Map view, tile layer, endpoints and chart texts

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod parser;
pub mod validation;

pub use parser::{ConfigFormat, ConfigParser};
pub use validation::ConfigValidator;

use jamcam_shared::chart_config::IDLE_TITLE;
use jamcam_shared::DEFAULT_IMAGE_BASE_URL;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<ConfigError> for jamcam_shared::JamcamError {
    fn from(err: ConfigError) -> Self {
        jamcam_shared::JamcamError::InvalidConfig {
            message: err.to_string(),
            field: None,
        }
    }
}

/// Complete widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WidgetConfig {
    pub map: MapConfig,
    pub tiles: TileLayerConfig,
    pub endpoints: EndpointConfig,
    pub chart: ChartTexts,
    pub logging: LoggingConfig,
}

/// Initial map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 51.505,
            center_lon: -0.09,
            zoom: 13,
        }
    }
}

/// Basemap tile layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayerConfig {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
    /// Mapbox style id substituted for `{id}`
    pub style_id: String,
    pub tile_size: u32,
    pub zoom_offset: i8,
    /// Substituted for `{accessToken}`; supplied by the deployment
    pub access_token: String,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url_template:
                "https://api.mapbox.com/styles/v1/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}"
                    .to_string(),
            attribution: "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, \
                <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, \
                Imagery \u{a9} <a href=\"https://www.mapbox.com/\">Mapbox</a>"
                .to_string(),
            max_zoom: 18,
            style_id: "mapbox/dark-v10".to_string(),
            tile_size: 512,
            zoom_offset: -1,
            access_token: String::new(),
        }
    }
}

/// Remote endpoints the page talks to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Camera directory (JSON array of `{id, lat, lon, ...}`)
    pub directory_url: String,
    /// Recent counts, queried with `?id=<raw id>`
    pub counts_url: String,
    /// Base for `<raw id>.jpg` camera stills
    pub image_base_url: String,
    /// Abort requests after this many milliseconds; no timeout when unset
    pub timeout_ms: Option<u32>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            directory_url: "https://api.tfl.gov.uk/Place/Type/JamCam/".to_string(),
            counts_url: "http://51.105.7.82:8080/api/v1/cams/recent".to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            timeout_ms: None,
        }
    }
}

/// Texts of the chart before any selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTexts {
    pub idle_title: String,
}

impl Default for ChartTexts {
    fn default() -> Self {
        Self {
            idle_title: IDLE_TITLE.to_string(),
        }
    }
}

/// Console logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Info)
    }
}
