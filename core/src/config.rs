use serde::{Deserialize, Serialize};

use crate::*;

pub const MIN_DIMENSION: Coord = 5;
pub const MAX_DIMENSION: Coord = 40;
pub const MIN_HAZARDS: CellCount = 1;

/// Cells always kept free of hazards, roughly one 3x3 neighbourhood.
pub const SAFE_MARGIN: CellCount = 9;

/// Validated request for a new field.
///
/// Deserializing runs the same checks as [`FieldConfig::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFieldConfig", into = "RawFieldConfig")]
pub struct FieldConfig {
    rows: Coord,
    columns: Coord,
    hazards: CellCount,
}

impl FieldConfig {
    pub fn new(rows: Coord, columns: Coord, hazards: CellCount) -> Result<Self> {
        if rows < MIN_DIMENSION || columns < MIN_DIMENSION {
            return Err(DimensionError::TooSmall(rows.min(columns)).into());
        }
        if rows > MAX_DIMENSION || columns > MAX_DIMENSION {
            return Err(DimensionError::TooLarge(rows.max(columns)).into());
        }
        if hazards < MIN_HAZARDS {
            return Err(GameError::InvalidHazardCount(hazards));
        }
        Ok(Self {
            rows,
            columns,
            hazards,
        })
    }

    pub const fn beginner() -> Self {
        Self {
            rows: 9,
            columns: 9,
            hazards: 10,
        }
    }

    pub const fn intermediate() -> Self {
        Self {
            rows: 16,
            columns: 16,
            hazards: 40,
        }
    }

    pub const fn expert() -> Self {
        Self {
            rows: 16,
            columns: 30,
            hazards: 99,
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn columns(&self) -> Coord {
        self.columns
    }

    /// The hazard count as requested, before capping.
    pub const fn requested_hazards(&self) -> CellCount {
        self.hazards
    }

    /// Hazards actually placed: the request capped at `total_cells - SAFE_MARGIN`.
    pub const fn effective_hazards(&self) -> CellCount {
        let cap = self.total_cells().saturating_sub(SAFE_MARGIN);
        if self.hazards < cap { self.hazards } else { cap }
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.rows, self.columns)
    }
}

/// Unchecked wire form of [`FieldConfig`].
#[derive(Copy, Clone, Serialize, Deserialize)]
pub(crate) struct RawFieldConfig {
    rows: Coord,
    columns: Coord,
    hazards: CellCount,
}

impl TryFrom<RawFieldConfig> for FieldConfig {
    type Error = GameError;

    fn try_from(raw: RawFieldConfig) -> Result<Self> {
        Self::new(raw.rows, raw.columns, raw.hazards)
    }
}

impl From<FieldConfig> for RawFieldConfig {
    fn from(config: FieldConfig) -> Self {
        Self {
            rows: config.rows,
            columns: config.columns,
            hazards: config.hazards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn rejects_small_dimensions() {
        assert_eq!(
            FieldConfig::new(0, 8, 16),
            Err(GameError::InvalidDimension(DimensionError::TooSmall(0)))
        );
        assert_eq!(
            FieldConfig::new(8, 4, 16),
            Err(GameError::InvalidDimension(DimensionError::TooSmall(4)))
        );
    }

    #[test]
    fn rejects_large_dimensions() {
        assert_eq!(
            FieldConfig::new(100, 8, 16),
            Err(GameError::InvalidDimension(DimensionError::TooLarge(100)))
        );
        assert_eq!(
            FieldConfig::new(8, 41, 16),
            Err(GameError::InvalidDimension(DimensionError::TooLarge(41)))
        );
    }

    #[test]
    fn too_small_wins_over_too_large() {
        assert_eq!(
            FieldConfig::new(4, 41, 16),
            Err(GameError::InvalidDimension(DimensionError::TooSmall(4)))
        );
    }

    #[test]
    fn rejects_zero_hazards() {
        assert_eq!(FieldConfig::new(8, 9, 0), Err(GameError::InvalidHazardCount(0)));
    }

    #[test]
    fn accepts_bounds_inclusive() {
        assert!(FieldConfig::new(5, 5, 1).is_ok());
        assert!(FieldConfig::new(40, 40, 1).is_ok());
    }

    #[test]
    fn effective_hazards_is_capped_silently() {
        let config = FieldConfig::new(8, 8, 100).unwrap();

        assert_eq!(config.requested_hazards(), 100);
        assert_eq!(config.effective_hazards(), 64 - 9);
        assert_eq!(FieldConfig::new(8, 9, 16).unwrap().effective_hazards(), 16);
    }

    #[test]
    fn presets_are_valid() {
        for preset in [
            FieldConfig::beginner(),
            FieldConfig::intermediate(),
            FieldConfig::expert(),
        ] {
            assert_eq!(
                FieldConfig::new(preset.rows(), preset.columns(), preset.requested_hazards()),
                Ok(preset)
            );
        }
    }

    #[test]
    fn deserialize_validates() {
        let config: FieldConfig =
            serde_json::from_str(r#"{"rows":9,"columns":12,"hazards":20}"#).unwrap();
        assert_eq!(config.size(), (9, 12));

        let err = serde_json::from_str::<FieldConfig>(r#"{"rows":3,"columns":12,"hazards":20}"#)
            .unwrap_err();
        assert!(err.to_string().contains("dimension too small"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            GameError::from(DimensionError::TooLarge(41)).to_string(),
            "Invalid dimension: dimension too large, 41 is more than 40"
        );
        assert_eq!(
            GameError::InvalidHazardCount(0).to_string(),
            "Invalid hazard count: hazard count too small, 0 is less than 1"
        );
    }
}
