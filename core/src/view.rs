use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a player may see of one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub row: Coord,
    pub column: Coord,
    /// Known only once the cell is visible.
    pub hazard: Option<bool>,
    pub visible: bool,
    /// Known only for visible safe cells.
    pub adjacent_hazards: Option<u8>,
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        let visible = cell.is_visible();
        Self {
            row: cell.row(),
            column: cell.column(),
            hazard: visible.then_some(cell.is_hazard()),
            visible,
            adjacent_hazards: (visible && !cell.is_hazard()).then_some(cell.adjacent_hazards()),
        }
    }
}

/// Row-major snapshot of a grid for hosts that serialize game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridView {
    pub rows: Coord,
    pub columns: Coord,
    pub cells: Vec<CellView>,
}

impl GridView {
    pub fn cell(&self, (row, column): Coord2) -> Option<&CellView> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells
            .get(usize::from(row) * usize::from(self.columns) + usize::from(column))
    }
}

impl Grid {
    pub fn view(&self) -> GridView {
        GridView {
            rows: self.rows(),
            columns: self.columns(),
            cells: self.iter().map(CellView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hidden_cells_hide_hazard_and_count() {
        let (grid, _) = Grid::from_hazard_coords((5, 5), &[(0, 0)]).unwrap();

        let view = grid.view();

        assert_eq!(view.cells.len(), 25);
        assert!(view.cells.iter().all(|cell| cell.hazard.is_none() && !cell.visible));
    }

    #[test]
    fn visible_cells_expose_what_is_known() {
        let (mut grid, hazards) = Grid::from_hazard_coords((5, 5), &[(0, 0)]).unwrap();
        inspect(&mut grid, &hazards, (1, 1)).unwrap();
        inspect(&mut grid, &hazards, (0, 0)).unwrap();

        let view = grid.view();

        assert_eq!(
            view.cell((1, 1)),
            Some(&CellView {
                row: 1,
                column: 1,
                hazard: Some(false),
                visible: true,
                adjacent_hazards: Some(1),
            })
        );
        assert_eq!(view.cell((0, 0)).and_then(|cell| cell.hazard), Some(true));
        assert_eq!(view.cell((0, 0)).and_then(|cell| cell.adjacent_hazards), None);
        assert_eq!(view.cell((5, 0)), None);
    }

    #[test]
    fn serializes_to_json() {
        let (mut grid, hazards) = Grid::from_hazard_coords((5, 5), &[(0, 0)]).unwrap();
        inspect(&mut grid, &hazards, (0, 1)).unwrap();

        let value = serde_json::to_value(grid.view()).unwrap();

        assert_eq!(value["rows"], json!(5));
        assert_eq!(
            value["cells"][1],
            json!({
                "row": 0,
                "column": 1,
                "hazard": false,
                "visible": true,
                "adjacent_hazards": 1,
            })
        );
        assert_eq!(value["cells"][0]["hazard"], json!(null));
    }
}
