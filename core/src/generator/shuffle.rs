use alloc::vec::Vec;
use ndarray::Array2;

use super::*;
use crate::types::nd_index;

/// Uniform placement: flag the first `effective_hazards` cells of a flat sequence, shuffle it, then lay it out
/// row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleFieldGenerator {
    seed: u64,
}

impl ShuffleFieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl FieldGenerator for ShuffleFieldGenerator {
    fn generate(self, config: FieldConfig) -> (Grid, HazardIndex) {
        use rand::prelude::*;

        log::trace!(
            "Generating field, rows: {}, columns: {}, hazards: {}",
            config.rows(),
            config.columns(),
            config.requested_hazards()
        );

        let total_cells = config.total_cells();
        let hazard_count = config.effective_hazards();
        if hazard_count < config.requested_hazards() {
            log::debug!(
                "Hazard count capped, requested {} but only {} fit",
                config.requested_hazards(),
                hazard_count
            );
        }

        let mut sequence: Vec<Cell> = (0..total_cells)
            .map(|i| Cell::new(i < hazard_count))
            .collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        sequence.shuffle(&mut rng);

        let (rows, columns) = config.size();
        let mut sequence = sequence.into_iter();
        let mut hazards = Vec::with_capacity(hazard_count.into());
        let cells = Array2::from_shape_fn(nd_index(config.size()), |(row, column)| {
            let coords = (row as Coord, column as Coord);
            let cell = match sequence.next() {
                Some(cell) => cell.placed(coords),
                None => {
                    log::warn!("No cell left for row {} column {}, filling with a safe one", row, column);
                    Cell::new(false).placed(coords)
                }
            };
            if cell.is_hazard() {
                hazards.push(coords);
            }
            cell
        });

        // double check hazard count
        if hazards.len() != usize::from(hazard_count) {
            log::warn!(
                "Generated field hazard count mismatch, actual: {}, expected: {}",
                hazards.len(),
                hazard_count
            );
        }

        (
            Grid::from_cells(cells),
            HazardIndex::new((rows, columns), hazards),
        )
    }
}
