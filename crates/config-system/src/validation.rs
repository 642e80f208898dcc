//! Configuration validation utilities

use crate::{ConfigError, EndpointConfig, MapConfig, Result, TileLayerConfig, WidgetConfig};
use url::Url;

/// Highest zoom level any common tile service serves
const MAX_ZOOM_LEVEL: u8 = 22;

/// Largest delay `setTimeout` accepts without wrapping
pub const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &WidgetConfig) -> Result<()> {
        Self::validate_map(&config.map)?;
        Self::validate_tiles(&config.tiles)?;
        Self::validate_endpoints(&config.endpoints)?;

        // Cross-field validation
        if config.map.zoom > config.tiles.max_zoom {
            return Err(ConfigError::Validation(format!(
                "Initial zoom {} exceeds tile max_zoom {}",
                config.map.zoom, config.tiles.max_zoom
            )));
        }

        Ok(())
    }

    fn validate_map(map: &MapConfig) -> Result<()> {
        if !(-90.0..=90.0).contains(&map.center_lat) {
            return Err(ConfigError::Validation(format!(
                "Invalid center_lat: {}. Must be between -90 and 90",
                map.center_lat
            )));
        }

        if !(-180.0..=180.0).contains(&map.center_lon) {
            return Err(ConfigError::Validation(format!(
                "Invalid center_lon: {}. Must be between -180 and 180",
                map.center_lon
            )));
        }

        if map.zoom > MAX_ZOOM_LEVEL {
            return Err(ConfigError::Validation(format!(
                "Invalid zoom: {}. Must be between 0 and {MAX_ZOOM_LEVEL}",
                map.zoom
            )));
        }

        Ok(())
    }

    fn validate_tiles(tiles: &TileLayerConfig) -> Result<()> {
        if tiles.max_zoom > MAX_ZOOM_LEVEL {
            return Err(ConfigError::Validation(format!(
                "Invalid max_zoom: {}. Must be between 0 and {MAX_ZOOM_LEVEL}",
                tiles.max_zoom
            )));
        }

        if !tiles.tile_size.is_power_of_two() {
            return Err(ConfigError::Validation(format!(
                "Invalid tile_size: {}. Must be a power of two",
                tiles.tile_size
            )));
        }

        for placeholder in ["{z}", "{x}", "{y}"] {
            if !tiles.url_template.contains(placeholder) {
                return Err(ConfigError::Validation(format!(
                    "Tile url_template is missing {placeholder}"
                )));
            }
        }

        if tiles.url_template.contains("{accessToken}") && tiles.access_token.is_empty() {
            log::warn!("Tile layer expects an access token but none is configured");
        }

        Ok(())
    }

    fn validate_endpoints(endpoints: &EndpointConfig) -> Result<()> {
        Self::validate_url("directory_url", &endpoints.directory_url)?;
        Self::validate_url("counts_url", &endpoints.counts_url)?;
        Self::validate_url("image_base_url", &endpoints.image_base_url)?;

        match endpoints.timeout_ms {
            Some(0) => {
                return Err(ConfigError::Validation(
                    "timeout_ms must be positive when set".to_string(),
                ))
            }
            Some(ms) if ms > MAX_TIMEOUT_MS => {
                return Err(ConfigError::Validation(format!(
                    "Invalid timeout_ms: {ms}. Must be at most {MAX_TIMEOUT_MS}"
                )))
            }
            _ => {}
        }

        Ok(())
    }

    fn validate_url(field: &str, value: &str) -> Result<()> {
        let url = Url::parse(value)
            .map_err(|e| ConfigError::Validation(format!("Invalid {field} '{value}': {e}")))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::Validation(format!(
                "Invalid {field} '{value}': unsupported scheme {scheme}"
            ))),
        }
    }
}
