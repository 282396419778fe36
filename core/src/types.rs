/// Single grid axis, used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for hazard counts and total-cell counts.
pub type CellCount = u16;

/// Grid position as `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// Number of cells on a `rows × columns` grid, exact for any pair of axes.
pub const fn area(rows: Coord, columns: Coord) -> CellCount {
    rows as CellCount * columns as CellCount
}

/// ndarray index for a grid position.
pub(crate) fn nd_index((row, column): Coord2) -> [usize; 2] {
    [row.into(), column.into()]
}
