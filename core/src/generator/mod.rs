use crate::*;
pub use shuffle::*;

mod shuffle;

pub trait FieldGenerator {
    fn generate(self, config: FieldConfig) -> (Grid, HazardIndex);
}

/// Validates the request and generates a field with [`ShuffleFieldGenerator`].
pub fn generate_field(
    rows: Coord,
    columns: Coord,
    hazards: CellCount,
    seed: u64,
) -> Result<(Grid, HazardIndex)> {
    let config = FieldConfig::new(rows, columns, hazards)?;
    Ok(ShuffleFieldGenerator::new(seed).generate(config))
}
