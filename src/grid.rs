use crate::errors::GridError;
use crate::labeler::Labeler;
use crate::style::{Color, GridStyle};

/// Common state of every grid overlay: enablement, zoom visibility, style and labeler.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    enabled: bool,
    min_zoom: u8,
    max_zoom: Option<u8>,
    lines_min_zoom: Option<u8>,
    lines_max_zoom: Option<u8>,
    style: GridStyle,
    labeler: Option<Labeler>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            enabled: true,
            min_zoom: 0,
            max_zoom: None,
            lines_min_zoom: None,
            lines_max_zoom: None,
            style: GridStyle::default(),
            labeler: None,
        }
    }
}

impl Grid {
    pub fn new(min_zoom: u8, max_zoom: Option<u8>) -> Result<Self, GridError> {
        let mut grid = Self::default();
        grid.set_zoom_range(min_zoom, max_zoom)?;
        Ok(grid)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Only changes the flag. Registered grids are toggled through the registry.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn get_min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn get_max_zoom(&self) -> Option<u8> {
        self.max_zoom
    }

    pub fn has_max_zoom(&self) -> bool {
        self.max_zoom.is_some()
    }

    /// Only changes the stored range. Registered grids are edited through the registry.
    pub fn set_zoom_range(&mut self, min_zoom: u8, max_zoom: Option<u8>) -> Result<(), GridError> {
        validate_range(min_zoom, max_zoom)?;
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        Ok(())
    }

    pub fn is_within_zoom(&self, zoom: u8) -> bool {
        zoom >= self.min_zoom && self.max_zoom.map_or(true, |max| zoom <= max)
    }

    pub fn get_lines_min_zoom(&self) -> u8 {
        self.lines_min_zoom.unwrap_or(self.min_zoom)
    }

    pub fn has_lines_min_zoom(&self) -> bool {
        self.lines_min_zoom.is_some()
    }

    pub fn get_lines_max_zoom(&self) -> Option<u8> {
        self.lines_max_zoom.or(self.max_zoom)
    }

    pub fn has_lines_max_zoom(&self) -> bool {
        self.lines_max_zoom.is_some()
    }

    /// Overrides the zoom range lines are drawn in. `None` falls back to the grid range.
    pub fn set_lines_zoom_range(
        &mut self,
        lines_min_zoom: Option<u8>,
        lines_max_zoom: Option<u8>,
    ) -> Result<(), GridError> {
        if let (Some(min), Some(max)) = (lines_min_zoom, lines_max_zoom) {
            validate_range(min, Some(max))?;
        }
        self.lines_min_zoom = lines_min_zoom;
        self.lines_max_zoom = lines_max_zoom;
        Ok(())
    }

    pub fn is_within_lines_zoom(&self, zoom: u8) -> bool {
        zoom >= self.get_lines_min_zoom() && self.get_lines_max_zoom().map_or(true, |max| zoom <= max)
    }

    pub fn get_style(&self) -> &GridStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: GridStyle) {
        self.style = style;
    }

    pub fn get_color(&self) -> Color {
        self.style.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    pub fn get_width(&self) -> f64 {
        self.style.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.style.width = width;
    }

    pub fn get_labeler(&self) -> Option<&Labeler> {
        self.labeler.as_ref()
    }

    pub fn get_labeler_mut(&mut self) -> Option<&mut Labeler> {
        self.labeler.as_mut()
    }

    pub fn has_labeler(&self) -> bool {
        self.labeler.is_some()
    }

    pub fn set_labeler(&mut self, labeler: Option<Labeler>) {
        self.labeler = labeler;
    }

    pub fn is_labeler_within(&self, zoom: u8) -> bool {
        self.labeler
            .as_ref()
            .map_or(false, |labeler| labeler.is_enabled() && labeler.is_within(zoom))
    }

    pub fn get_label_buffer(&self) -> f64 {
        self.labeler.as_ref().map_or(0.0, Labeler::get_buffer)
    }
}

pub(crate) fn validate_range(min_zoom: u8, max_zoom: Option<u8>) -> Result<(), GridError> {
    match max_zoom {
        Some(max) if max < min_zoom => Err(GridError::InvalidRange { min: min_zoom, max }),
        _ => Ok(()),
    }
}
