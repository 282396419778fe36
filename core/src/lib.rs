#![no_std]

extern crate alloc;

pub use cell::*;
pub use config::{FieldConfig, MAX_DIMENSION, MIN_DIMENSION, MIN_HAZARDS, SAFE_MARGIN};
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use types::*;
pub use view::*;

mod cell;
mod config;
mod engine;
mod error;
mod generator;
mod grid;
mod types;
mod view;

/// What a single inspect did to the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// A safe cell was inspected, `disclosed` cells turned visible.
    Revealed { disclosed: CellCount },
    /// A hazard was inspected and every hazard was disclosed.
    HitHazard { disclosed: CellCount },
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Revealed { disclosed } | Self::HitHazard { disclosed } => disclosed > 0,
        }
    }

    pub const fn is_hazard_hit(self) -> bool {
        matches!(self, Self::HitHazard { .. })
    }

    pub const fn disclosed(self) -> CellCount {
        match self {
            Self::Revealed { disclosed } | Self::HitHazard { disclosed } => disclosed,
        }
    }
}
