use crate::errors::GridError;
use crate::style::Color;

/// Label placement settings of a grid. The zoom range is independent of the grid's.
#[derive(Debug, Clone, PartialEq)]
pub struct Labeler {
    enabled: bool,
    min_zoom: u8,
    max_zoom: Option<u8>,
    color: Color,
    text_size: f64,
    /// Fraction of the tile kept clear of labels at each edge
    buffer: f64,
}

impl Labeler {
    pub fn new(
        min_zoom: u8,
        max_zoom: Option<u8>,
        color: Color,
        text_size: f64,
        buffer: f64,
    ) -> Result<Self, GridError> {
        Self::with_enabled(true, min_zoom, max_zoom, color, text_size, buffer)
    }

    pub fn with_enabled(
        enabled: bool,
        min_zoom: u8,
        max_zoom: Option<u8>,
        color: Color,
        text_size: f64,
        buffer: f64,
    ) -> Result<Self, GridError> {
        Self::validate_buffer(buffer)?;
        Ok(Self {
            enabled,
            min_zoom,
            max_zoom,
            color,
            text_size,
            buffer,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn get_min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn set_min_zoom(&mut self, min_zoom: u8) {
        self.min_zoom = min_zoom;
    }

    pub fn get_max_zoom(&self) -> Option<u8> {
        self.max_zoom
    }

    pub fn has_max_zoom(&self) -> bool {
        self.max_zoom.is_some()
    }

    pub fn set_max_zoom(&mut self, max_zoom: Option<u8>) {
        self.max_zoom = max_zoom;
    }

    pub fn is_within(&self, zoom: u8) -> bool {
        zoom >= self.min_zoom && self.max_zoom.map_or(true, |max| zoom <= max)
    }

    pub fn get_color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn get_text_size(&self) -> f64 {
        self.text_size
    }

    pub fn set_text_size(&mut self, text_size: f64) {
        self.text_size = text_size;
    }

    pub fn get_buffer(&self) -> f64 {
        self.buffer
    }

    pub fn set_buffer(&mut self, buffer: f64) -> Result<(), GridError> {
        Self::validate_buffer(buffer)?;
        self.buffer = buffer;
        Ok(())
    }

    pub(crate) fn validate_buffer(buffer: f64) -> Result<(), GridError> {
        // also rejects NaN
        if !(0.0..0.5).contains(&buffer) {
            return Err(GridError::invalid_argument(format!(
                "Grid edge buffer must be >= 0 and < 0.5. buffer: {}",
                buffer
            )));
        }
        Ok(())
    }
}
