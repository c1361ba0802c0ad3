use std::sync::Arc;

use serde::Serialize;

use crate::{
    Bounds, RegionTable, SelectionError, ViewportBounds, selection_error::UnknownRegionSnafu,
};

/// The selected region and the viewport derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionState {
    pub region: String,
    pub bounds: ViewportBounds,
}

/// A region rectangle to draw on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionOverlay {
    pub name: String,
    pub bounds: Bounds,
    pub selected: bool,
}

/// Keeps track of which region the map is fitted to.
///
/// Exactly one region is selected at any time, starting with the first region of the table.
/// Selecting moves the viewport to the stored rectangle of the region as-is.
#[derive(Debug, Clone)]
pub struct SelectionController {
    regions: Arc<RegionTable>,
    selected: usize,
}

impl SelectionController {
    pub fn new(regions: Arc<RegionTable>) -> Self {
        Self {
            regions,
            selected: 0,
        }
    }

    pub fn select(&mut self, name: &str) -> Result<ViewportBounds, SelectionError> {
        let Some(index) = self.regions.position(name) else {
            return UnknownRegionSnafu { name }.fail();
        };

        self.selected = index;
        Ok(self.current_bounds())
    }

    pub fn current_bounds(&self) -> ViewportBounds {
        self.regions.by_index(self.selected).bounds
    }

    pub fn selected_region(&self) -> &str {
        &self.regions.by_index(self.selected).name
    }

    pub fn state(&self) -> SelectionState {
        SelectionState {
            region: self.selected_region().to_string(),
            bounds: self.current_bounds(),
        }
    }

    /// Every region of the table with the selected one flagged.
    pub fn overlays(&self) -> Vec<RegionOverlay> {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, r)| RegionOverlay {
                name: r.name.clone(),
                bounds: r.bounds,
                selected: i == self.selected,
            })
            .collect()
    }

    pub fn regions(&self) -> &Arc<RegionTable> {
        &self.regions
    }
}
