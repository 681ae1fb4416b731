use crate::errors::GridError;

/// Opaque ARGB color value, as packed by the raster collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    pub fn argb(&self) -> u32 {
        self.0
    }

    pub fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Parses `#RRGGBB` or `#AARRGGBB`, the leading `#` being optional.
    pub fn from_hex(hex: &str) -> Result<Self, GridError> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || GridError::invalid_argument(format!("Invalid hex color: {}", hex));

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Color(0xFF00_0000 | value)),
            8 => Ok(Color(value)),
            _ => Err(invalid()),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyle {
    pub color: Color,
    pub width: f64,
}

impl GridStyle {
    pub const DEFAULT_WIDTH: f64 = 1.0;

    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

impl Default for GridStyle {
    fn default() -> Self {
        Self::new(Color::BLACK, Self::DEFAULT_WIDTH)
    }
}
