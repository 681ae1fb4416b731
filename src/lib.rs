mod bounds;
mod constants;
mod errors;
mod grid;
mod grid_utils;
mod grids;
mod labeler;
mod line;
mod loader;
mod mercator;
mod pixel;
mod point;
mod properties;
mod style;
mod tile;
mod unit;
mod zoom_grids;

// Create a single, consistent public API
pub use bounds::Bounds;
pub use constants::GridConstants;
pub use errors::GridError;
pub use grid::Grid;
pub use grid_utils::GridUtils;
pub use grids::{GridId, GridType, Grids};
pub use labeler::Labeler;
pub use line::Line;
pub use loader::GridLoader;
pub use mercator::MercatorProjection;
pub use pixel::{Pixel, PixelRange};
pub use point::Point;
pub use properties::{build_property, GridProperties, MapProperties, PropertyConstants};
pub use style::{Color, GridStyle};
pub use tile::Tile;
pub use unit::{Hemisphere, Unit};
pub use zoom_grids::ZoomGrids;
