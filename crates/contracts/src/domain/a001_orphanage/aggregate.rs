use serde::{Deserialize, Serialize};

/// Relative API path that accepts new orphanage records
pub const ENDPOINT: &str = "orphanages";

/// Maximum length of the "about" text, in characters
pub const ABOUT_MAX_CHARS: usize = 300;

/// Multipart field names understood by the backend
pub mod fields {
    pub const NAME: &str = "name";
    pub const ABOUT: &str = "about";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const INSTRUCTIONS: &str = "instructions";
    pub const OPENING_HOURS: &str = "opening_hours";
    pub const OPEN_ON_WEEKENDS: &str = "open_on_weekends";
    pub const IMAGES: &str = "images";
}

// ============================================================================
// Geo point
// ============================================================================

/// Point on the map, WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// ============================================================================
// Create request
// ============================================================================

/// Text part of the "create orphanage" request.
///
/// Images travel next to these fields as separate `images` parts of the same
/// multipart body, so they are not part of this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrphanageRequest {
    pub name: String,
    pub about: String,
    pub latitude: f64,
    pub longitude: f64,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
}

impl CreateOrphanageRequest {
    /// Text fields in the order they are appended to the multipart body
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (fields::NAME, self.name.clone()),
            (fields::ABOUT, self.about.clone()),
            (fields::LATITUDE, self.latitude.to_string()),
            (fields::LONGITUDE, self.longitude.to_string()),
            (fields::INSTRUCTIONS, self.instructions.clone()),
            (fields::OPENING_HOURS, self.opening_hours.clone()),
            (fields::OPEN_ON_WEEKENDS, self.open_on_weekends.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateOrphanageRequest {
        CreateOrphanageRequest {
            name: "Shelter A".to_string(),
            about: "desc".to_string(),
            latitude: -5.1,
            longitude: -42.7,
            instructions: String::new(),
            opening_hours: String::new(),
            open_on_weekends: false,
        }
    }

    #[test]
    fn test_text_fields_order_and_values() {
        let fields = request().text_fields();
        assert_eq!(
            fields,
            vec![
                ("name", "Shelter A".to_string()),
                ("about", "desc".to_string()),
                ("latitude", "-5.1".to_string()),
                ("longitude", "-42.7".to_string()),
                ("instructions", String::new()),
                ("opening_hours", String::new()),
                ("open_on_weekends", "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_zero_coordinates_are_plain_zero() {
        let mut req = request();
        req.latitude = 0.0;
        req.longitude = 0.0;
        let fields = req.text_fields();
        assert_eq!(fields[2].1, "0");
        assert_eq!(fields[3].1, "0");
    }

    #[test]
    fn test_coordinates_keep_full_precision() {
        let mut req = request();
        req.latitude = -5.1152628;
        req.longitude = -42.7759954;
        let fields = req.text_fields();
        assert_eq!(fields[2].1, "-5.1152628");
        assert_eq!(fields[3].1, "-42.7759954");
    }
}
