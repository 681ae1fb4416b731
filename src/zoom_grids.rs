use std::collections::BTreeMap;

use crate::grids::GridId;

/// Grids active at a single zoom level, ordered by the grid type's key.
/// At most one grid is held per key.
#[derive(Debug, Clone)]
pub struct ZoomGrids<K: Ord> {
    zoom: u8,
    grids: BTreeMap<K, GridId>,
}

impl<K: Ord> ZoomGrids<K> {
    pub fn new(zoom: u8) -> Self {
        Self {
            zoom,
            grids: BTreeMap::new(),
        }
    }

    pub fn get_zoom(&self) -> u8 {
        self.zoom
    }

    pub fn num_grids(&self) -> usize {
        self.grids.len()
    }

    pub fn has_grids(&self) -> bool {
        !self.grids.is_empty()
    }

    pub fn contains(&self, id: GridId) -> bool {
        self.grids.values().any(|&held| held == id)
    }

    /// Returns false when a grid with the same key is already present.
    pub fn add_grid(&mut self, key: K, id: GridId) -> bool {
        if self.grids.contains_key(&key) {
            return false;
        }
        self.grids.insert(key, id);
        true
    }

    /// Removes the grid only when it is the one held under `key`.
    pub fn remove_grid(&mut self, key: &K, id: GridId) -> bool {
        match self.grids.get(key) {
            Some(&held) if held == id => {
                self.grids.remove(key);
                true
            }
            _ => false,
        }
    }

    /// Grid ids in key order.
    pub fn ids(&self) -> impl Iterator<Item = GridId> + '_ {
        self.grids.values().copied()
    }
}
