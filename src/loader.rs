use tracing::debug;

use crate::errors::GridError;
use crate::grid::Grid;
use crate::labeler::Labeler;
use crate::properties::{GridProperties, PropertyConstants as P};
use crate::style::{Color, GridStyle};

/// Seeds grids and labelers from `grids.<key>.*` properties.
pub struct GridLoader<'a, G: GridProperties + ?Sized> {
    properties: &'a G,
    default_width: f64,
}

impl<'a, G: GridProperties + ?Sized> GridLoader<'a, G> {
    /// `default_width` is the grid system's line width when none is configured.
    pub fn new(properties: &'a G, default_width: f64) -> Self {
        Self {
            properties,
            default_width,
        }
    }

    pub fn get_default_width(&self) -> f64 {
        self.default_width
    }

    /// An explicit `enabled` wins over the configured value, which defaults to true.
    pub fn load_grid(
        &self,
        grid: &mut Grid,
        grid_key: &str,
        enabled: Option<bool>,
        labeler: Option<Labeler>,
    ) -> Result<(), GridError> {
        let props = self.properties;

        let enabled = match enabled {
            Some(enabled) => enabled,
            None => props
                .get_boolean_property(false, &[P::GRIDS, grid_key, P::ENABLED])?
                .unwrap_or(true),
        };

        let min_zoom = props
            .get_zoom_property(false, &[P::GRIDS, grid_key, P::MIN_ZOOM])?
            .unwrap_or(0);
        let max_zoom = props.get_zoom_property(false, &[P::GRIDS, grid_key, P::MAX_ZOOM])?;
        let lines_min_zoom =
            props.get_zoom_property(false, &[P::GRIDS, grid_key, P::LINES, P::MIN_ZOOM])?;
        let lines_max_zoom =
            props.get_zoom_property(false, &[P::GRIDS, grid_key, P::LINES, P::MAX_ZOOM])?;

        let color = match props.get_property(false, &[P::GRIDS, grid_key, P::COLOR])? {
            Some(color) => Color::from_hex(&color)?,
            None => Color::BLACK,
        };
        let width = props
            .get_double_property(false, &[P::GRIDS, grid_key, P::WIDTH])?
            .unwrap_or_else(|| {
                debug!("No width for grid '{}', using {}", grid_key, self.default_width);
                self.default_width
            });

        let labeler = match labeler {
            Some(mut labeler) => {
                self.load_labeler(&mut labeler, grid_key)?;
                Some(labeler)
            }
            None => None,
        };

        // Everything validated, apply to the grid.
        let mut loaded = grid.clone();
        loaded.set_enabled(enabled);
        loaded.set_zoom_range(min_zoom, max_zoom)?;
        loaded.set_lines_zoom_range(lines_min_zoom, lines_max_zoom)?;
        loaded.set_style(GridStyle::new(color, width));
        loaded.set_labeler(labeler);
        *grid = loaded;

        debug!(
            "Loaded grid '{}': enabled={}, zoom {}..{:?}",
            grid_key, enabled, min_zoom, max_zoom
        );
        Ok(())
    }

    /// Labeler settings only override what is configured; enablement defaults to false.
    pub fn load_labeler(&self, labeler: &mut Labeler, grid_key: &str) -> Result<(), GridError> {
        let props = self.properties;

        let enabled = props
            .get_boolean_property(false, &[P::GRIDS, grid_key, P::LABELER, P::ENABLED])?
            .unwrap_or(false);
        let min_zoom =
            props.get_zoom_property(false, &[P::GRIDS, grid_key, P::LABELER, P::MIN_ZOOM])?;
        let max_zoom =
            props.get_zoom_property(false, &[P::GRIDS, grid_key, P::LABELER, P::MAX_ZOOM])?;
        let color = props
            .get_property(false, &[P::GRIDS, grid_key, P::LABELER, P::COLOR])?
            .map(|color| Color::from_hex(&color))
            .transpose()?;
        let text_size =
            props.get_double_property(false, &[P::GRIDS, grid_key, P::LABELER, P::TEXT_SIZE])?;
        let buffer =
            props.get_double_property(false, &[P::GRIDS, grid_key, P::LABELER, P::BUFFER])?;
        if let Some(buffer) = buffer {
            Labeler::validate_buffer(buffer)?;
        }

        labeler.set_enabled(enabled);
        if let Some(min_zoom) = min_zoom {
            labeler.set_min_zoom(min_zoom);
        }
        if max_zoom.is_some() {
            labeler.set_max_zoom(max_zoom);
        }
        if let Some(color) = color {
            labeler.set_color(color);
        }
        if let Some(text_size) = text_size {
            labeler.set_text_size(text_size);
        }
        if let Some(buffer) = buffer {
            labeler.set_buffer(buffer)?;
        }
        Ok(())
    }

    /// Color of a secondary style, e.g. `grids.<key>.<key2>.color`.
    pub fn load_style_color(&self, grid_key: &str, grid_key2: &str) -> Result<Option<Color>, GridError> {
        self.properties
            .get_property(false, &[P::GRIDS, grid_key, grid_key2, P::COLOR])?
            .map(|color| Color::from_hex(&color))
            .transpose()
    }

    pub fn load_style_width(&self, grid_key: &str, grid_key2: &str) -> Result<Option<f64>, GridError> {
        self.properties
            .get_double_property(false, &[P::GRIDS, grid_key, grid_key2, P::WIDTH])
    }

    /// Falls back to the grid's own color and width. A zero width counts as unset.
    pub fn grid_style(&self, color: Option<Color>, width: Option<f64>, grid: &Grid) -> GridStyle {
        let color = color.unwrap_or_else(|| grid.get_color());
        let width = width
            .filter(|width| *width != 0.0)
            .unwrap_or_else(|| grid.get_width());
        GridStyle::new(color, width)
    }
}
