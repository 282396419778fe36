use alloc::vec::Vec;

use crate::*;

/// Inspects the cell at `coords`, mutating `grid` in place.
///
/// A hazard discloses every hazard in `hazards` and nothing else. A safe cell is revealed with its adjacency count
/// and, when that count is zero, the reveal spreads through its hidden safe neighbours.
///
/// `hazards` must list exactly the hazards of `grid`, otherwise nothing is touched.
pub fn inspect(grid: &mut Grid, hazards: &HazardIndex, coords: Coord2) -> Result<RevealOutcome> {
    let coords = grid.validate_coords(coords)?;
    hazards.check_size(grid)?;

    log::trace!("Inspecting row {} column {}", coords.0, coords.1);

    if grid[coords].is_hazard() {
        hazards.check_belongs_to(grid)?;
        let disclosed = reveal_hazards(grid, hazards);
        log::debug!("Hazard hit at {:?}, disclosed {} hazards", coords, disclosed);
        Ok(RevealOutcome::HitHazard { disclosed })
    } else {
        let disclosed = flood_reveal(grid, coords);
        log::debug!("Revealed {} cells from {:?}", disclosed, coords);
        Ok(RevealOutcome::Revealed { disclosed })
    }
}

fn reveal_hazards(grid: &mut Grid, hazards: &HazardIndex) -> CellCount {
    let mut disclosed = 0;
    for coords in hazards.iter() {
        if grid.cell_mut(coords).reveal() {
            disclosed += 1;
        }
    }
    disclosed
}

/// Iterative flood fill, with the visibility flag doubling as the visited marker.
///
/// `start` is always processed, every other cell at most once.
fn flood_reveal(grid: &mut Grid, start: Coord2) -> CellCount {
    let mut disclosed = 0;
    let mut pending = Vec::from([start]);

    while let Some(coords) = pending.pop() {
        if coords != start && grid[coords].is_visible() {
            continue;
        }

        let adjacent_hazards = grid.adjacent_hazard_count(coords);
        let cell = grid.cell_mut(coords);
        cell.set_adjacent_hazards(adjacent_hazards);
        if cell.reveal() {
            disclosed += 1;
        }

        if adjacent_hazards == 0 {
            pending.extend(grid.iter_neighbors(coords).filter(|&pos| {
                let neighbor = &grid[pos];
                !neighbor.is_hazard() && !neighbor.is_visible()
            }));
        }
    }

    disclosed
}

/// One game session: a grid together with its hazard index.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    grid: Grid,
    hazards: HazardIndex,
    hazard_hit: bool,
}

impl Game {
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        let (grid, hazards) = ShuffleFieldGenerator::new(seed).generate(config);
        Self {
            grid,
            hazards,
            hazard_hit: false,
        }
    }

    pub fn from_layout(grid: Grid, hazards: HazardIndex) -> Result<Self> {
        hazards.check_belongs_to(&grid)?;
        Ok(Self {
            grid,
            hazards,
            hazard_hit: false,
        })
    }

    pub fn inspect(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let outcome = inspect(&mut self.grid, &self.hazards, coords)?;
        if outcome.is_hazard_hit() {
            self.hazard_hit = true;
        }
        Ok(outcome)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn hazards(&self) -> &HazardIndex {
        &self.hazards
    }

    pub fn view(&self) -> GridView {
        self.grid.view()
    }

    /// Whether any inspect so far landed on a hazard.
    pub fn hazard_hit(&self) -> bool {
        self.hazard_hit
    }

    pub fn is_cleared(&self) -> bool {
        self.grid.is_cleared()
    }

    pub fn into_parts(self) -> (Grid, HazardIndex) {
        (self.grid, self.hazards)
    }
}
