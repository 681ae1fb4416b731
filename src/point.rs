use crate::bounds::Bounds;
use crate::grid_utils::GridUtils;
use crate::mercator::MercatorProjection;
use crate::pixel::Pixel;
use crate::tile::Tile;
use crate::unit::{Hemisphere, Unit};

/// Longitude / latitude pair tagged with the unit it is expressed in.
/// Values are not clamped to the world extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub longitude: f64,
    pub latitude: f64,
    pub unit: Unit,
}

impl Point {
    pub fn new(longitude: f64, latitude: f64, unit: Unit) -> Self {
        Self {
            longitude,
            latitude,
            unit,
        }
    }

    pub fn degrees(longitude: f64, latitude: f64) -> Self {
        Self::new(longitude, latitude, Unit::Degree)
    }

    pub fn meters(longitude: f64, latitude: f64) -> Self {
        Self::new(longitude, latitude, Unit::Meter)
    }

    pub fn degrees_to_meters(longitude: f64, latitude: f64) -> Self {
        MercatorProjection::convert(Unit::Degree, longitude, latitude, Unit::Meter)
    }

    pub fn meters_to_degrees(longitude: f64, latitude: f64) -> Self {
        MercatorProjection::convert(Unit::Meter, longitude, latitude, Unit::Degree)
    }

    pub fn is_unit(&self, unit: Unit) -> bool {
        self.unit == unit
    }

    pub fn is_degrees(&self) -> bool {
        self.is_unit(Unit::Degree)
    }

    pub fn is_meters(&self) -> bool {
        self.is_unit(Unit::Meter)
    }

    /// Returns the point itself when already in `unit`.
    pub fn to_unit(&self, unit: Unit) -> Point {
        if self.is_unit(unit) {
            *self
        } else {
            MercatorProjection::convert(self.unit, self.longitude, self.latitude, unit)
        }
    }

    pub fn to_degrees(&self) -> Point {
        self.to_unit(Unit::Degree)
    }

    pub fn to_meters(&self) -> Point {
        self.to_unit(Unit::Meter)
    }

    pub fn get_pixel(&self, width: u32, height: u32, bounds: &Bounds) -> Pixel {
        GridUtils::get_pixel(width, height, bounds, self)
    }

    pub fn get_pixel_in_tile(&self, tile: &Tile) -> Pixel {
        self.get_pixel(tile.width, tile.height, &tile.bounds)
    }

    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_point(self)
    }
}
