pub struct GridConstants;

impl GridConstants {
    pub const MIN_LON: f64 = -180.0;
    pub const MAX_LON: f64 = 180.0;
    pub const MIN_LAT: f64 = -90.0;
    pub const MAX_LAT: f64 = 90.0;

    /// Half the width of the Web Mercator world, in meters.
    pub const WEB_MERCATOR_HALF_WORLD_WIDTH: f64 = 20037508.342789244;

    pub const MAX_MAP_ZOOM_LEVEL: u8 = 21;
}
