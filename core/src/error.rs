use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("dimension too small, {0} is less than 5")]
    TooSmall(Coord),
    #[error("dimension too large, {0} is more than 40")]
    TooLarge(Coord),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(#[from] DimensionError),
    #[error("Invalid hazard count: hazard count too small, {0} is less than 1")]
    InvalidHazardCount(CellCount),
    #[error("Index out of range: row {row}, column {column}")]
    IndexOutOfRange { row: Coord, column: Coord },
    #[error("Hazard index does not belong to this grid")]
    MismatchedHazardIndex,
    #[error("Layout does not match its declared size")]
    InvalidLayout,
}

pub type Result<T> = core::result::Result<T, GameError>;
