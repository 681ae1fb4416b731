/// Tile local raster coordinate, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    pub x: f32,
    pub y: f32,
}

impl Pixel {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRange {
    pub top_left: Pixel,
    pub bottom_right: Pixel,
}

impl PixelRange {
    pub fn new(top_left: Pixel, bottom_right: Pixel) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    pub fn get_min_x(&self) -> f32 {
        self.top_left.x
    }

    pub fn get_min_y(&self) -> f32 {
        self.top_left.y
    }

    pub fn get_max_x(&self) -> f32 {
        self.bottom_right.x
    }

    pub fn get_max_y(&self) -> f32 {
        self.bottom_right.y
    }

    pub fn get_width(&self) -> f32 {
        self.get_max_x() - self.get_min_x()
    }

    pub fn get_height(&self) -> f32 {
        self.get_max_y() - self.get_min_y()
    }
}
