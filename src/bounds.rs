use crate::errors::GridError;
use crate::grid_utils::GridUtils;
use crate::line::Line;
use crate::pixel::PixelRange;
use crate::point::Point;
use crate::tile::Tile;
use crate::unit::Unit;

/// Axis aligned rectangle in a single unit. May be empty (max below min).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_longitude: f64,
    pub min_latitude: f64,
    pub max_longitude: f64,
    pub max_latitude: f64,
    pub unit: Unit,
}

impl Bounds {
    pub fn new(
        min_longitude: f64,
        min_latitude: f64,
        max_longitude: f64,
        max_latitude: f64,
        unit: Unit,
    ) -> Self {
        Self {
            min_longitude,
            min_latitude,
            max_longitude,
            max_latitude,
            unit,
        }
    }

    pub fn degrees(
        min_longitude: f64,
        min_latitude: f64,
        max_longitude: f64,
        max_latitude: f64,
    ) -> Self {
        Self::new(
            min_longitude,
            min_latitude,
            max_longitude,
            max_latitude,
            Unit::Degree,
        )
    }

    pub fn meters(
        min_longitude: f64,
        min_latitude: f64,
        max_longitude: f64,
        max_latitude: f64,
    ) -> Self {
        Self::new(
            min_longitude,
            min_latitude,
            max_longitude,
            max_latitude,
            Unit::Meter,
        )
    }

    pub fn from_corners(southwest: &Point, northeast: &Point) -> Result<Self, GridError> {
        if !southwest.is_unit(northeast.unit) {
            return Err(GridError::UnitMismatch {
                first: southwest.unit,
                second: northeast.unit,
            });
        }
        Ok(Self::new(
            southwest.longitude,
            southwest.latitude,
            northeast.longitude,
            northeast.latitude,
            southwest.unit,
        ))
    }

    pub fn get_west(&self) -> f64 {
        self.min_longitude
    }

    pub fn get_south(&self) -> f64 {
        self.min_latitude
    }

    pub fn get_east(&self) -> f64 {
        self.max_longitude
    }

    pub fn get_north(&self) -> f64 {
        self.max_latitude
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

    /// Converts the south west and north east corners.
    pub fn to_unit(&self, unit: Unit) -> Bounds {
        if self.is_unit(unit) {
            return *self;
        }
        let southwest = self.get_southwest().to_unit(unit);
        let northeast = self.get_northeast().to_unit(unit);
        Bounds::new(
            southwest.longitude,
            southwest.latitude,
            northeast.longitude,
            northeast.latitude,
            unit,
        )
    }

    pub fn to_degrees(&self) -> Bounds {
        self.to_unit(Unit::Degree)
    }

    pub fn to_meters(&self) -> Bounds {
        self.to_unit(Unit::Meter)
    }

    pub fn get_width(&self) -> f64 {
        self.max_longitude - self.min_longitude
    }

    pub fn get_height(&self) -> f64 {
        self.max_latitude - self.min_latitude
    }

    pub fn is_empty(&self) -> bool {
        self.get_width() <= 0.0 || self.get_height() <= 0.0
    }

    pub fn get_center_longitude(&self) -> f64 {
        (self.get_width() / 2.0) + self.min_longitude
    }

    pub fn get_center_latitude(&self) -> f64 {
        self.get_center().latitude
    }

    /// Center point. Degree bounds take the latitude midpoint in Mercator meters,
    /// so the center matches what a projected map shows.
    pub fn get_center(&self) -> Point {
        let center_longitude = self.get_center_longitude();

        let (north, south) = match self.unit {
            Unit::Degree => (
                Point::degrees_to_meters(center_longitude, self.max_latitude),
                Point::degrees_to_meters(center_longitude, self.min_latitude),
            ),
            Unit::Meter => (
                Point::meters(center_longitude, self.max_latitude),
                Point::meters(center_longitude, self.min_latitude),
            ),
        };

        let center_y = south.latitude + (0.5 * (north.latitude - south.latitude));
        Point::meters(north.longitude, center_y).to_unit(self.unit)
    }

    pub fn get_southwest(&self) -> Point {
        Point::new(self.min_longitude, self.min_latitude, self.unit)
    }

    pub fn get_northwest(&self) -> Point {
        Point::new(self.min_longitude, self.max_latitude, self.unit)
    }

    pub fn get_southeast(&self) -> Point {
        Point::new(self.max_longitude, self.min_latitude, self.unit)
    }

    pub fn get_northeast(&self) -> Point {
        Point::new(self.max_longitude, self.max_latitude, self.unit)
    }

    /// Smallest bounds covering both, in this unit.
    pub fn union(&self, bounds: &Bounds) -> Bounds {
        let bounds = bounds.to_unit(self.unit);
        Bounds::new(
            self.min_longitude.min(bounds.min_longitude),
            self.min_latitude.min(bounds.min_latitude),
            self.max_longitude.max(bounds.max_longitude),
            self.max_latitude.max(bounds.max_latitude),
            self.unit,
        )
    }

    /// Intersection of both bounds, in this unit. Empty when they do not overlap.
    pub fn overlap(&self, bounds: &Bounds) -> Bounds {
        let bounds = bounds.to_unit(self.unit);
        Bounds::new(
            self.min_longitude.max(bounds.min_longitude),
            self.min_latitude.max(bounds.min_latitude),
            self.max_longitude.min(bounds.max_longitude),
            self.max_latitude.min(bounds.max_latitude),
            self.unit,
        )
    }

    pub fn contains(&self, point: &Point) -> bool {
        let point = point.to_unit(self.unit);
        point.longitude >= self.min_longitude
            && point.longitude <= self.max_longitude
            && point.latitude >= self.min_latitude
            && point.latitude <= self.max_latitude
    }

    pub fn get_west_line(&self) -> Line {
        Line::from_same_unit(self.get_northwest(), self.get_southwest())
    }

    pub fn get_south_line(&self) -> Line {
        Line::from_same_unit(self.get_southwest(), self.get_southeast())
    }

    pub fn get_east_line(&self) -> Line {
        Line::from_same_unit(self.get_southeast(), self.get_northeast())
    }

    pub fn get_north_line(&self) -> Line {
        Line::from_same_unit(self.get_northeast(), self.get_northwest())
    }

    /// Closed ring: south west, north west, north east, south east.
    pub fn get_lines(&self) -> [Line; 4] {
        let southwest = self.get_southwest();
        let northwest = self.get_northwest();
        let northeast = self.get_northeast();
        let southeast = self.get_southeast();

        [
            Line::from_same_unit(southwest, northwest),
            Line::from_same_unit(northwest, northeast),
            Line::from_same_unit(northeast, southeast),
            Line::from_same_unit(southeast, southwest),
        ]
    }

    /// Degree bounds expanded outward to multiples of `precision`.
    pub fn to_precision(&self, precision: f64) -> Bounds {
        let bounds = self.to_degrees();
        Bounds::degrees(
            GridUtils::precision_before(bounds.min_longitude, precision),
            GridUtils::precision_before(bounds.min_latitude, precision),
            GridUtils::precision_after(bounds.max_longitude, precision),
            GridUtils::precision_after(bounds.max_latitude, precision),
        )
    }

    /// Pixel rectangle of these bounds inside a `width` x `height` tile covering `bounds`.
    pub fn get_pixel_range(&self, width: u32, height: u32, bounds: &Bounds) -> PixelRange {
        let bounds = bounds.to_meters();
        let top_left = GridUtils::get_pixel(width, height, &bounds, &self.get_northwest());
        let bottom_right = GridUtils::get_pixel(width, height, &bounds, &self.get_southeast());
        PixelRange::new(top_left, bottom_right)
    }

    pub fn get_pixel_range_in_tile(&self, tile: &Tile) -> PixelRange {
        self.get_pixel_range(tile.width, tile.height, &tile.bounds)
    }
}
