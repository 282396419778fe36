use serde::{Deserialize, Serialize};

use crate::Coord2;

/// One position on the grid.
///
/// Coordinates and the hazard flag are fixed at placement. Visibility only ever goes from hidden to visible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    row: u8,
    column: u8,
    hazard: bool,
    visible: bool,
    adjacent_hazards: u8,
}

impl Cell {
    pub(crate) const fn new(hazard: bool) -> Self {
        Self {
            row: 0,
            column: 0,
            hazard,
            visible: false,
            adjacent_hazards: 0,
        }
    }

    pub(crate) const fn placed(self, (row, column): Coord2) -> Self {
        Self {
            row,
            column,
            ..self
        }
    }

    pub const fn row(&self) -> u8 {
        self.row
    }

    pub const fn column(&self) -> u8 {
        self.column
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.column)
    }

    pub const fn is_hazard(&self) -> bool {
        self.hazard
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hazards among the neighbours, only meaningful for visible safe cells.
    pub const fn adjacent_hazards(&self) -> u8 {
        self.adjacent_hazards
    }

    /// Returns whether the cell was hidden before.
    pub(crate) fn reveal(&mut self) -> bool {
        !core::mem::replace(&mut self.visible, true)
    }

    pub(crate) fn set_adjacent_hazards(&mut self, count: u8) {
        self.adjacent_hazards = count;
    }
}
