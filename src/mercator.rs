use std::f64::consts::PI;

use crate::bounds::Bounds;
use crate::constants::GridConstants;
use crate::point::Point;
use crate::unit::Unit;

const HALF_WORLD_WIDTH: f64 = GridConstants::WEB_MERCATOR_HALF_WORLD_WIDTH;

pub struct MercatorProjection;

impl MercatorProjection {
    /// Forward Web Mercator projection. Latitudes of +/-90 project to infinity.
    pub fn to_meters(longitude: f64, latitude: f64) -> Point {
        let x = longitude * HALF_WORLD_WIDTH / 180.0;
        let y = ((90.0 + latitude) * PI / 360.0).tan().ln() / (PI / 180.0);
        Point::meters(x, y * HALF_WORLD_WIDTH / 180.0)
    }

    pub fn to_degrees(x: f64, y: f64) -> Point {
        let longitude = x * 180.0 / HALF_WORLD_WIDTH;
        let latitude = y * 180.0 / HALF_WORLD_WIDTH;
        let latitude = (latitude * (PI / 180.0)).exp().atan() / PI * 360.0 - 90.0;
        Point::degrees(longitude, latitude)
    }

    /// Treats the coordinate as being in the opposite unit and converts it into `unit`.
    pub fn to_unit(longitude: f64, latitude: f64, unit: Unit) -> Point {
        match unit {
            Unit::Degree => Self::to_degrees(longitude, latitude),
            Unit::Meter => Self::to_meters(longitude, latitude),
        }
    }

    pub fn convert(from: Unit, longitude: f64, latitude: f64, to: Unit) -> Point {
        if from == to {
            Point::new(longitude, latitude, to)
        } else {
            Self::to_unit(longitude, latitude, to)
        }
    }

    /// Saturates at `u64::MAX` from zoom 64 on.
    pub fn tiles_per_side(zoom: u8) -> u64 {
        1u64.checked_shl(u32::from(zoom)).unwrap_or(u64::MAX)
    }

    pub fn tile_size(tiles_per_side: u64) -> f64 {
        (2.0 * HALF_WORLD_WIDTH) / tiles_per_side as f64
    }

    /// Meter bounds of the XYZ tile. Tile (0, 0) is the north west corner of the world.
    pub fn tile_bounds(x: u32, y: u32, zoom: u8) -> Bounds {
        let tile_size = (2.0 * HALF_WORLD_WIDTH) / 2f64.powi(i32::from(zoom));
        let (x, y) = (x as f64, y as f64);

        let min_lon = -HALF_WORLD_WIDTH + (x * tile_size);
        let min_lat = HALF_WORLD_WIDTH - ((y + 1.0) * tile_size);
        let max_lon = -HALF_WORLD_WIDTH + ((x + 1.0) * tile_size);
        let max_lat = HALF_WORLD_WIDTH - (y * tile_size);

        Bounds::meters(min_lon, min_lat, max_lon, max_lat)
    }

    /// Fractional zoom level whose tiles match the shorter side of the bounds.
    pub fn zoom_level(bounds: &Bounds) -> f64 {
        let bounds = bounds.to_meters();
        let tile_size = bounds.get_width().min(bounds.get_height());
        let tiles_per_side = 2.0 * HALF_WORLD_WIDTH / tile_size;
        tiles_per_side.log2()
    }
}
