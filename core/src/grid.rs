use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
use crate::types::nd_index;

/// Fixed-size playing field, indexed by `(row, column)`.
///
/// Deserializing checks that the shape fits [`Coord`] and that every cell sits at its own coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid", into = "RawGrid")]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub(crate) fn from_cells(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    /// Builds a hand-made layout of any size with hazards at `hazard_coords`.
    ///
    /// Generation limits don't apply here. Duplicated coordinates count once.
    pub fn from_hazard_coords(size: Coord2, hazard_coords: &[Coord2]) -> Result<(Self, HazardIndex)> {
        let mut cells = Array2::from_shape_fn(nd_index(size), |(row, column)| {
            Cell::new(false).placed((row as Coord, column as Coord))
        });

        for &coords in hazard_coords {
            let cell = cells
                .get_mut(nd_index(coords))
                .ok_or(GameError::IndexOutOfRange {
                    row: coords.0,
                    column: coords.1,
                })?;
            *cell = Cell::new(true).placed(coords);
        }

        let grid = Self::from_cells(cells);
        let hazards = HazardIndex::scan(&grid);
        Ok((grid, hazards))
    }

    pub fn size(&self) -> Coord2 {
        (self.rows(), self.columns())
    }

    // shape is bounded by `Coord::MAX` on construction and deserialization
    pub fn rows(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn columns(&self) -> Coord {
        self.cells.ncols() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.rows(), self.columns())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, columns) = self.size();
        if coords.0 < rows && coords.1 < columns {
            Ok(coords)
        } else {
            Err(GameError::IndexOutOfRange {
                row: coords.0,
                column: coords.1,
            })
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(nd_index(coords))
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[nd_index(coords)]
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.size())
    }

    pub fn adjacent_hazard_count(&self, coords: Coord2) -> u8 {
        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| self[pos].is_hazard())
            .count();
        // at most 8 neighbours
        count as u8
    }

    pub fn hazard_count(&self) -> CellCount {
        self.count_where(Cell::is_hazard)
    }

    pub fn visible_count(&self) -> CellCount {
        self.count_where(Cell::is_visible)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.hazard_count()
    }

    /// Whether every safe cell has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.iter()
            .all(|cell| cell.is_hazard() || cell.is_visible())
    }

    fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        self.iter().filter(|&cell| pred(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[nd_index(coords)]
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub(crate) struct RawGrid {
    cells: Array2<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GameError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let (rows, columns) = raw.cells.dim();
        if rows > usize::from(Coord::MAX) || columns > usize::from(Coord::MAX) {
            return Err(GameError::InvalidLayout);
        }

        let misplaced = raw
            .cells
            .indexed_iter()
            .any(|((row, column), cell)| cell.coords() != (row as Coord, column as Coord));
        if misplaced {
            return Err(GameError::InvalidLayout);
        }

        Ok(Self::from_cells(raw.cells))
    }
}

impl From<Grid> for RawGrid {
    fn from(grid: Grid) -> Self {
        Self { cells: grid.cells }
    }
}

/// In-bounds cells of the 3x3 window around a center, the center itself excluded.
#[derive(Debug, Clone)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    slot: u8,
}

impl Neighbors {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            slot: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.slot < 9 {
            let slot = self.slot;
            self.slot += 1;
            if slot == 4 {
                continue;
            }

            // window is shifted by one: slot 0 is (row - 1, column - 1)
            let row = u16::from(self.center.0) + u16::from(slot / 3);
            let column = u16::from(self.center.1) + u16::from(slot % 3);
            if row == 0 || column == 0 {
                continue;
            }
            let (row, column) = (row - 1, column - 1);
            if row < u16::from(self.bounds.0) && column < u16::from(self.bounds.1) {
                return Some((row as Coord, column as Coord));
            }
        }
        None
    }
}

/// Coordinates of every hazard on one grid, without duplicates.
///
/// Carries the size of the grid it was produced for. Deserializing rejects coordinates outside that size and
/// repeated entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHazardIndex", into = "RawHazardIndex")]
pub struct HazardIndex {
    size: Coord2,
    coords: Vec<Coord2>,
}

impl HazardIndex {
    pub(crate) fn new(size: Coord2, coords: Vec<Coord2>) -> Self {
        Self { size, coords }
    }

    /// Rebuilds the index by scanning a grid.
    pub fn scan(grid: &Grid) -> Self {
        let coords = grid
            .iter()
            .filter(|cell| cell.is_hazard())
            .map(Cell::coords)
            .collect();
        Self::new(grid.size(), coords)
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.coords.contains(&coords)
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.coords.iter().copied()
    }

    pub(crate) fn check_size(&self, grid: &Grid) -> Result<()> {
        if self.size == grid.size() {
            Ok(())
        } else {
            Err(GameError::MismatchedHazardIndex)
        }
    }

    /// Checks that the index lists exactly the hazards of `grid`.
    ///
    /// Entries are unique, so a matching count with every entry on a hazard means the sets are equal.
    pub(crate) fn check_belongs_to(&self, grid: &Grid) -> Result<()> {
        self.check_size(grid)?;

        if self.len() != usize::from(grid.hazard_count()) {
            return Err(GameError::MismatchedHazardIndex);
        }

        let all_hazards = self
            .iter()
            .all(|coords| grid.get(coords).is_some_and(Cell::is_hazard));
        if all_hazards {
            Ok(())
        } else {
            Err(GameError::MismatchedHazardIndex)
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub(crate) struct RawHazardIndex {
    size: Coord2,
    coords: Vec<Coord2>,
}

impl TryFrom<RawHazardIndex> for HazardIndex {
    type Error = GameError;

    fn try_from(raw: RawHazardIndex) -> Result<Self> {
        let mut seen: Array2<bool> = Array2::default(nd_index(raw.size));
        for &coords in &raw.coords {
            match seen.get_mut(nd_index(coords)) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(GameError::InvalidLayout),
            }
        }
        Ok(Self::new(raw.size, raw.coords))
    }
}

impl From<HazardIndex> for RawHazardIndex {
    fn from(index: HazardIndex) -> Self {
        Self {
            size: index.size,
            coords: index.coords,
        }
    }
}
