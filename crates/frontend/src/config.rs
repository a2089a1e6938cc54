//! Application configuration
//!
//! Values are baked in at build time:
//! - `API_BASE_URL`: backend base URL; when absent it is derived from the
//!   window location (see [`api_base_from_location`])
//! - `MAPBOX_TOKEN`: access token for satellite tiles; without it the map
//!   falls back to OpenStreetMap tiles

use crate::shared::api_utils::{api_base_from_location, join_url};
use crate::shared::map::TileSource;
use contracts::domain::a001_orphanage::GeoPoint;
use leptos::prelude::*;

/// Initial map center for the create form
pub const DEFAULT_MAP_CENTER: GeoPoint = GeoPoint::new(-5.1152628, -42.7759954);
pub const DEFAULT_MAP_ZOOM: u8 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub tiles: TileSource,
    pub map_center: GeoPoint,
    pub map_zoom: u8,
}

impl AppConfig {
    pub fn load() -> Self {
        let api_base = match non_empty(option_env!("API_BASE_URL")) {
            Some(base) => base.to_string(),
            None => api_base_from_location(),
        };
        Self::new(api_base, option_env!("MAPBOX_TOKEN"))
    }

    pub fn new(api_base: String, mapbox_token: Option<&str>) -> Self {
        let tiles = match non_empty(mapbox_token) {
            Some(token) => TileSource::mapbox_satellite(token),
            None => {
                log::warn!("MAPBOX_TOKEN is not set, using OpenStreetMap tiles");
                TileSource::openstreetmap()
            }
        };

        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            tiles,
            map_center: DEFAULT_MAP_CENTER,
            map_zoom: DEFAULT_MAP_ZOOM,
        }
    }

    /// Full URL of an API path relative to the configured base
    pub fn api_url(&self, path: &str) -> String {
        join_url(&self.api_base, path)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Configuration provided by `App`; loaded on the spot when missing
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}
