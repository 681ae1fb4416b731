use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use tracing::{debug, info};

use crate::constants::GridConstants;
use crate::errors::GridError;
use crate::grid::{validate_range, Grid};
use crate::labeler::Labeler;
use crate::style::GridStyle;
use crate::zoom_grids::ZoomGrids;

/// Capability a concrete grid variant provides to plug into [`Grids`].
pub trait GridType {
    /// Ordering of grids within a zoom level. Unique per registry, see [`Grids::with_max_zoom`].
    type Key: Ord + Clone + Debug;

    fn key(&self) -> Self::Key;

    fn grid(&self) -> &Grid;

    fn grid_mut(&mut self) -> &mut Grid;
}

/// Handle to a grid owned by a [`Grids`] registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridId(usize);

impl GridId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Owns the grids of one grid system and the per zoom level index of the
/// enabled grids visible at that level.
///
/// Not synchronized: a reader may observe a grid in only part of its range
/// while an edit is in progress, so callers sharing a registry must serialize
/// every mutating call.
#[derive(Debug)]
pub struct Grids<T: GridType> {
    grids: Vec<T>,
    zoom_grids: BTreeMap<u8, ZoomGrids<T::Key>>,
}

impl<T: GridType> Grids<T> {
    /// Builds zoom levels 0 through [`GridConstants::MAX_MAP_ZOOM_LEVEL`].
    pub fn new(grids: Vec<T>) -> Result<Self, GridError> {
        Self::with_max_zoom(grids, GridConstants::MAX_MAP_ZOOM_LEVEL)
    }

    /// Fails with [`GridError::DuplicateKey`] when two grids share a key.
    pub fn with_max_zoom(grids: Vec<T>, max_zoom: u8) -> Result<Self, GridError> {
        let mut keys = BTreeSet::new();
        for variant in &grids {
            let key = variant.key();
            if !keys.insert(key.clone()) {
                return Err(GridError::DuplicateKey(format!("{:?}", key)));
            }
        }

        let mut registry = Self {
            grids,
            zoom_grids: BTreeMap::new(),
        };
        registry.create_zoom_grids(max_zoom);
        Ok(registry)
    }

    fn create_zoom_grids(&mut self, max_zoom: u8) {
        for zoom in 0..=max_zoom {
            self.create_zoom_level(zoom);
        }
        info!(
            "Built zoom grids 0..={} for {} grids",
            max_zoom,
            self.grids.len()
        );
    }

    fn create_zoom_level(&mut self, zoom: u8) -> &ZoomGrids<T::Key> {
        let grids = &self.grids;
        self.zoom_grids
            .entry(zoom)
            .or_insert_with(|| Self::index_zoom_level(grids, zoom))
    }

    fn index_zoom_level(grids: &[T], zoom: u8) -> ZoomGrids<T::Key> {
        let mut zoom_grids = ZoomGrids::new(zoom);
        for (index, variant) in grids.iter().enumerate() {
            let grid = variant.grid();
            if grid.is_enabled() && grid.is_within_zoom(zoom) {
                zoom_grids.add_grid(variant.key(), GridId(index));
            }
        }
        debug!("Zoom {} holds {} grids", zoom, zoom_grids.num_grids());
        zoom_grids
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = GridId> {
        (0..self.grids.len()).map(GridId)
    }

    pub fn get(&self, id: GridId) -> Result<&T, GridError> {
        self.grids.get(id.0).ok_or(GridError::UnknownGrid(id.0))
    }

    pub fn grid(&self, id: GridId) -> Result<&Grid, GridError> {
        self.get(id).map(GridType::grid)
    }

    pub fn all(&self) -> impl Iterator<Item = (GridId, &T)> {
        self.grids
            .iter()
            .enumerate()
            .map(|(index, variant)| (GridId(index), variant))
    }

    pub fn min_zoom_level(&self) -> u8 {
        self.zoom_grids.keys().next().copied().unwrap_or(0)
    }

    pub fn max_zoom_level(&self) -> u8 {
        self.zoom_grids.keys().next_back().copied().unwrap_or(0)
    }

    /// Index of a built zoom level, `None` outside the built span.
    pub fn zoom_grids(&self, zoom: u8) -> Option<&ZoomGrids<T::Key>> {
        self.zoom_grids.get(&zoom)
    }

    /// Index of the zoom level. Beyond the built span every level up to `zoom`
    /// is built and kept, so the span stays contiguous.
    pub fn zoom_grids_extending(&mut self, zoom: u8) -> &ZoomGrids<T::Key> {
        let max_zoom = self.max_zoom_level();
        if zoom > max_zoom {
            info!("Extending zoom grids {}..={}", max_zoom + 1, zoom);
            for level in max_zoom + 1..zoom {
                self.create_zoom_level(level);
            }
        }
        self.create_zoom_level(zoom)
    }

    /// Active grids at the zoom level in key order. Empty outside the built span.
    pub fn grids_at(&self, zoom: u8) -> impl Iterator<Item = (GridId, &T)> {
        self.zoom_grids
            .get(&zoom)
            .into_iter()
            .flat_map(ZoomGrids::ids)
            .map(move |id| (id, &self.grids[id.0]))
    }

    pub fn enable_grids(&mut self, ids: &[GridId]) -> Result<(), GridError> {
        for &id in ids {
            self.enable(id)?;
        }
        Ok(())
    }

    pub fn disable_grids(&mut self, ids: &[GridId]) -> Result<(), GridError> {
        for &id in ids {
            self.disable(id)?;
        }
        Ok(())
    }

    pub fn enable(&mut self, id: GridId) -> Result<(), GridError> {
        let grid = self.grid_mut(id)?;
        if grid.is_enabled() {
            return Ok(());
        }
        grid.set_enabled(true);
        let (min_zoom, max_zoom) = (grid.get_min_zoom(), grid.get_max_zoom());

        let max_zoom = max_zoom.unwrap_or_else(|| self.max_zoom_level());
        for zoom in min_zoom..=max_zoom {
            self.add_grid(id, zoom);
        }
        debug!("Enabled grid {} over zooms {}..={}", id.0, min_zoom, max_zoom);
        Ok(())
    }

    pub fn disable(&mut self, id: GridId) -> Result<(), GridError> {
        let grid = self.grid_mut(id)?;
        if !grid.is_enabled() {
            return Ok(());
        }
        grid.set_enabled(false);
        let (min_zoom, max_zoom) = (grid.get_min_zoom(), grid.get_max_zoom());

        let max_zoom = max_zoom.unwrap_or_else(|| self.max_zoom_level());
        for zoom in min_zoom..=max_zoom {
            self.remove_grid(id, zoom);
        }
        debug!("Disabled grid {} over zooms {}..={}", id.0, min_zoom, max_zoom);
        Ok(())
    }

    /// Raises the max zoom to `min_zoom` when the range would otherwise invert.
    pub fn set_min_zoom(&mut self, id: GridId, min_zoom: u8) -> Result<(), GridError> {
        let max_zoom = self
            .grid(id)?
            .get_max_zoom()
            .map(|max_zoom| max_zoom.max(min_zoom));
        self.set_zoom_range(id, min_zoom, max_zoom)
    }

    /// Lowers the min zoom to `max_zoom` when the range would otherwise invert.
    pub fn set_max_zoom(&mut self, id: GridId, max_zoom: Option<u8>) -> Result<(), GridError> {
        let grid_min_zoom = self.grid(id)?.get_min_zoom();
        let min_zoom = max_zoom.map_or(grid_min_zoom, |max_zoom| grid_min_zoom.min(max_zoom));
        self.set_zoom_range(id, min_zoom, max_zoom)
    }

    /// Stores the new range on the grid and moves it between zoom levels.
    ///
    /// Only the levels outside the overlap of the old and new ranges change
    /// membership. Both ranges are clamped into the built span first; an
    /// unbounded max covers up to the highest built level.
    pub fn set_zoom_range(
        &mut self,
        id: GridId,
        min_zoom: u8,
        max_zoom: Option<u8>,
    ) -> Result<(), GridError> {
        validate_range(min_zoom, max_zoom)?;

        let all_min = self.min_zoom_level();
        let all_max = self.max_zoom_level();

        let grid = self.grid_mut(id)?;
        let enabled = grid.is_enabled();
        let old_min = grid.get_min_zoom().max(all_min);
        let old_max = grid.get_max_zoom().map_or(all_max, |max| max.min(all_max));

        grid.set_zoom_range(min_zoom, max_zoom)?;

        if !enabled {
            debug!("Grid {} is disabled, stored zoom range only", id.0);
            return Ok(());
        }

        let new_min = min_zoom.max(all_min);
        let new_max = max_zoom.map_or(all_max, |max| max.min(all_max));

        let overlap_min = old_min.max(new_min);
        let overlap_max = old_max.min(new_max);

        if overlap_min <= overlap_max {
            for zoom in old_min.min(new_min)..=old_max.max(new_max) {
                if zoom >= overlap_min && zoom <= overlap_max {
                    continue;
                }
                if zoom >= new_min && zoom <= new_max {
                    self.add_grid(id, zoom);
                } else {
                    self.remove_grid(id, zoom);
                }
            }
        } else {
            for zoom in old_min..=old_max {
                self.remove_grid(id, zoom);
            }
            for zoom in new_min..=new_max {
                self.add_grid(id, zoom);
            }
        }

        debug!(
            "Moved grid {} from zooms {}..={} to {}..={}",
            id.0, old_min, old_max, new_min, new_max
        );
        Ok(())
    }

    pub fn set_lines_zoom_range(
        &mut self,
        id: GridId,
        lines_min_zoom: Option<u8>,
        lines_max_zoom: Option<u8>,
    ) -> Result<(), GridError> {
        self.grid_mut(id)?
            .set_lines_zoom_range(lines_min_zoom, lines_max_zoom)
    }

    pub fn set_style(&mut self, id: GridId, style: GridStyle) -> Result<(), GridError> {
        self.grid_mut(id)?.set_style(style);
        Ok(())
    }

    pub fn labeler_mut(&mut self, id: GridId) -> Result<Option<&mut Labeler>, GridError> {
        Ok(self.grid_mut(id)?.get_labeler_mut())
    }

    pub fn enable_all_labelers(&mut self) {
        for variant in self.grids.iter_mut() {
            if let Some(labeler) = variant.grid_mut().get_labeler_mut() {
                labeler.set_enabled(true);
            }
        }
    }

    /// Validates the buffer before touching any labeler.
    pub fn set_all_label_buffers(&mut self, buffer: f64) -> Result<(), GridError> {
        Labeler::validate_buffer(buffer)?;
        for variant in self.grids.iter_mut() {
            if let Some(labeler) = variant.grid_mut().get_labeler_mut() {
                labeler.set_buffer(buffer)?;
            }
        }
        Ok(())
    }

    fn grid_mut(&mut self, id: GridId) -> Result<&mut Grid, GridError> {
        self.grids
            .get_mut(id.0)
            .map(GridType::grid_mut)
            .ok_or(GridError::UnknownGrid(id.0))
    }

    fn add_grid(&mut self, id: GridId, zoom: u8) {
        let key = self.grids[id.0].key();
        if let Some(zoom_grids) = self.zoom_grids.get_mut(&zoom) {
            zoom_grids.add_grid(key, id);
        }
    }

    fn remove_grid(&mut self, id: GridId, zoom: u8) {
        let key = self.grids[id.0].key();
        if let Some(zoom_grids) = self.zoom_grids.get_mut(&zoom) {
            zoom_grids.remove_grid(&key, id);
        }
    }
}
