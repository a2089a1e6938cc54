use super::projection::TileCoord;

const MAPBOX_SATELLITE: &str =
    "https://api.mapbox.com/styles/v1/mapbox/satellite-v9/tiles/256/{z}/{x}/{y}@2x";
const OPENSTREETMAP: &str = "https://a.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Raster tile provider described by a `{z}/{x}/{y}` URL template
#[derive(Debug, Clone, PartialEq)]
pub struct TileSource {
    pub template: String,
    pub attribution: String,
}

impl TileSource {
    /// Mapbox satellite imagery, authenticated with an access token
    pub fn mapbox_satellite(access_token: &str) -> Self {
        Self {
            template: format!(
                "{}?access_token={}",
                MAPBOX_SATELLITE,
                urlencoding::encode(access_token)
            ),
            attribution: "© Mapbox © OpenStreetMap".to_string(),
        }
    }

    pub fn openstreetmap() -> Self {
        Self {
            template: OPENSTREETMAP.to_string(),
            attribution: "© OpenStreetMap".to_string(),
        }
    }

    pub fn tile_url(&self, tile: TileCoord) -> String {
        self.template
            .replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }
}
