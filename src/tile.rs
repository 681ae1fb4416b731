use crate::bounds::Bounds;
use crate::mercator::MercatorProjection;

/// A raster tile being drawn: pixel dimensions, zoom and Mercator bounds.
#[derive(Debug, Clone)]
pub struct Tile {
    pub width: u32,
    pub height: u32,
    pub zoom: u8,
    pub bounds: Bounds,
}

impl Tile {
    pub fn new(width: u32, height: u32, x: u32, y: u32, zoom: u8) -> Self {
        Self {
            width,
            height,
            zoom,
            bounds: MercatorProjection::tile_bounds(x, y, zoom),
        }
    }

    /// Tile over arbitrary bounds. The zoom is the nearest whole zoom level.
    pub fn from_bounds(width: u32, height: u32, bounds: &Bounds) -> Self {
        let zoom = MercatorProjection::zoom_level(bounds).round().max(0.0) as u8;
        Self {
            width,
            height,
            zoom,
            bounds: bounds.to_meters(),
        }
    }

    pub fn get_bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn get_zoom(&self) -> u8 {
        self.zoom
    }
}
