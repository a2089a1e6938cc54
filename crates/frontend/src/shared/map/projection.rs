//! Web-Mercator projection (EPSG:3857) for 256-px raster tiles

use contracts::domain::a001_orphanage::GeoPoint;
use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;
/// Latitude where the Mercator square ends
pub const MAX_LATITUDE: f64 = 85.051_128_78;
pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 19;

/// Point in pixels, either in world space or relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the whole world in pixels at a zoom level
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2f64.powi(i32::from(zoom))
}

pub fn project(point: GeoPoint, zoom: u8) -> PixelPoint {
    let size = world_size(zoom);
    let lat = point.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.longitude + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    PixelPoint::new(x, y)
}

/// Longitude folded into `[-180, 180)`
pub fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

/// Inverse of [`project`]; pixels left or right of the world wrap around
pub fn unproject(pixel: PixelPoint, zoom: u8) -> GeoPoint {
    let size = world_size(zoom);
    let longitude = wrap_longitude(pixel.x / size * 360.0 - 180.0);
    let n = PI * (1.0 - 2.0 * pixel.y / size);
    let latitude = n.sinh().atan().to_degrees();
    GeoPoint::new(latitude, longitude)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

/// Tile placed inside the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleTile {
    pub coord: TileCoord,
    /// Column before wrapping; may lie outside `[0, 2^z)`
    pub column: i64,
    pub left: f64,
    pub top: f64,
}

/// What part of the map is on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(center: GeoPoint, zoom: u8, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            width,
            height,
        }
    }

    /// World pixel shown at the top-left corner of the viewport
    fn origin(&self) -> PixelPoint {
        let c = project(self.center, self.zoom);
        PixelPoint::new(c.x - self.width / 2.0, c.y - self.height / 2.0)
    }

    /// Convert a position inside the viewport to coordinates
    pub fn screen_to_geo(&self, x: f64, y: f64) -> GeoPoint {
        let o = self.origin();
        unproject(PixelPoint::new(o.x + x, o.y + y), self.zoom)
    }

    /// Position of a point relative to the viewport's top-left corner.
    ///
    /// The copy of the point closest to the center is used, so a marker
    /// stays visible when the view straddles the antimeridian.
    pub fn geo_to_screen(&self, point: GeoPoint) -> PixelPoint {
        let size = world_size(self.zoom);
        let c = project(self.center, self.zoom);
        let p = project(point, self.zoom);
        let dx = (p.x - c.x + size / 2.0).rem_euclid(size) - size / 2.0;
        PixelPoint::new(dx + self.width / 2.0, p.y - c.y + self.height / 2.0)
    }

    /// Viewport after the map content has been dragged by `(dx, dy)` pixels.
    ///
    /// The center latitude stays inside the Mercator square.
    pub fn panned(&self, dx: f64, dy: f64) -> Self {
        let c = project(self.center, self.zoom);
        let mut center = unproject(PixelPoint::new(c.x - dx, c.y - dy), self.zoom);
        center.latitude = center.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        Self { center, ..*self }
    }

    pub fn zoomed(&self, delta: i8) -> Self {
        let zoom = (i16::from(self.zoom) + i16::from(delta))
            .clamp(i16::from(MIN_ZOOM), i16::from(MAX_ZOOM)) as u8;
        Self { zoom, ..*self }
    }

    /// Tiles covering the viewport, with their offsets in pixels.
    ///
    /// Columns wrap around the antimeridian; rows beyond the poles are skipped.
    pub fn visible_tiles(&self) -> Vec<VisibleTile> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Vec::new();
        }

        let o = self.origin();
        let count = 1i64 << self.zoom;

        let first_col = (o.x / TILE_SIZE).floor() as i64;
        let last_col = ((o.x + self.width) / TILE_SIZE).ceil() as i64 - 1;
        let first_row = (o.y / TILE_SIZE).floor() as i64;
        let last_row = ((o.y + self.height) / TILE_SIZE).ceil() as i64 - 1;

        let mut tiles = Vec::new();
        for row in first_row.max(0)..=last_row.min(count - 1) {
            for column in first_col..=last_col {
                tiles.push(VisibleTile {
                    coord: TileCoord {
                        z: self.zoom,
                        x: column.rem_euclid(count) as u32,
                        y: row as u32,
                    },
                    column,
                    left: column as f64 * TILE_SIZE - o.x,
                    top: row as f64 * TILE_SIZE - o.y,
                });
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: GeoPoint, b: GeoPoint) {
        assert!(
            (a.latitude - b.latitude).abs() < EPS && (a.longitude - b.longitude).abs() < EPS,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_project_origin() {
        assert_eq!(
            project(GeoPoint::new(0.0, 0.0), 1),
            PixelPoint::new(256.0, 256.0)
        );
        let nw = project(GeoPoint::new(MAX_LATITUDE, -180.0), 0);
        assert!(nw.x.abs() < EPS);
        assert!(nw.y.abs() < 1e-6);
    }

    #[test]
    fn test_unproject_inverts_project() {
        let p = GeoPoint::new(-5.1152628, -42.7759954);
        assert_close(unproject(project(p, 15), 15), p);
    }

    #[test]
    fn test_viewport_center_maps_to_center() {
        let center = GeoPoint::new(-5.1152628, -42.7759954);
        let vp = Viewport::new(center, 15, 640.0, 280.0);
        assert_close(vp.screen_to_geo(320.0, 140.0), center);

        let screen = vp.geo_to_screen(center);
        assert!((screen.x - 320.0).abs() < 1e-6);
        assert!((screen.y - 140.0).abs() < 1e-6);
    }

    #[test]
    fn test_screen_to_geo_direction() {
        let vp = Viewport::new(GeoPoint::new(0.0, 0.0), 10, 400.0, 400.0);
        let ne = vp.screen_to_geo(400.0, 0.0);
        assert!(ne.latitude > 0.0);
        assert!(ne.longitude > 0.0);
    }

    #[test]
    fn test_panned_moves_center_against_drag() {
        let vp = Viewport::new(GeoPoint::new(0.0, 0.0), 5, 400.0, 400.0);
        let moved = vp.panned(100.0, 0.0);
        assert!(moved.center.longitude < 0.0);
        assert!(moved.center.latitude.abs() < EPS);
        assert_eq!(moved.zoom, 5);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let vp = Viewport::new(GeoPoint::default(), 18, 100.0, 100.0);
        assert_eq!(vp.zoomed(1).zoom, 19);
        assert_eq!(vp.zoomed(1).zoomed(1).zoom, 19);
        assert_eq!(Viewport::new(GeoPoint::default(), 2, 1.0, 1.0).zoomed(-5).zoom, MIN_ZOOM);
    }

    #[test]
    fn test_visible_tiles_whole_world() {
        let vp = Viewport::new(GeoPoint::new(0.0, 0.0), 1, 512.0, 512.0);
        let mut coords: Vec<(u32, u32)> = vp
            .visible_tiles()
            .iter()
            .map(|t| (t.coord.x, t.coord.y))
            .collect();
        coords.sort();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_visible_tiles_wrap_columns() {
        let vp = Viewport::new(GeoPoint::new(0.0, 180.0), 1, 512.0, 256.0);
        let tiles = vp.visible_tiles();
        let wrapped = tiles.iter().find(|t| t.column == 2).map(|t| t.coord.x);
        assert_eq!(wrapped, Some(0));
        let first = tiles.iter().find(|t| t.column == 1).map(|t| t.left);
        assert_eq!(first, Some(0.0));
    }

    #[test]
    fn test_picks_across_antimeridian_stay_in_range() {
        let vp = Viewport::new(GeoPoint::new(0.0, 179.0), 5, 640.0, 280.0);
        let east = vp.screen_to_geo(640.0, 140.0);
        assert!((-180.0..180.0).contains(&east.longitude), "{:?}", east);
        assert!(east.longitude < 0.0);

        let mut moved = vp;
        for _ in 0..20 {
            moved = moved.panned(-600.0, 0.0);
            assert!((-180.0..180.0).contains(&moved.center.longitude));
        }
    }

    #[test]
    fn test_wrap_longitude() {
        assert_eq!(wrap_longitude(193.0625), -166.9375);
        assert_eq!(wrap_longitude(-190.0), 170.0);
        assert_eq!(wrap_longitude(180.0), -180.0);
        assert_eq!(wrap_longitude(-42.5), -42.5);
    }

    #[test]
    fn test_marker_uses_nearest_world_copy() {
        let vp = Viewport::new(GeoPoint::new(0.0, 179.0), 5, 640.0, 280.0);
        let p = vp.geo_to_screen(GeoPoint::new(0.0, -179.0));
        assert!(p.x > 320.0 && p.x < 640.0, "{:?}", p);
    }

    #[test]
    fn test_panned_keeps_latitude_in_mercator_square() {
        let vp = Viewport::new(GeoPoint::new(80.0, 0.0), 3, 400.0, 400.0);
        let north = vp.panned(0.0, 10_000.0);
        assert!(north.center.latitude <= MAX_LATITUDE);
        let south = vp.panned(0.0, -100_000.0);
        assert!(south.center.latitude >= -MAX_LATITUDE);
    }

    #[test]
    fn test_visible_tiles_skip_rows_beyond_poles() {
        let vp = Viewport::new(GeoPoint::new(MAX_LATITUDE, 0.0), 1, 256.0, 512.0);
        assert!(vp.visible_tiles().iter().all(|t| t.coord.y < 2));
        assert!(!vp.visible_tiles().is_empty());
    }

    #[test]
    fn test_visible_tiles_empty_viewport() {
        let vp = Viewport::new(GeoPoint::default(), 3, 0.0, 280.0);
        assert!(vp.visible_tiles().is_empty());
    }
}
