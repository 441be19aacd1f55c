//! Construction drill: the same grid from two distinct fill primitives.

use ndarray::Array2;

use gridkata_core::construct::{filled_grid, ones_grid};
use gridkata_core::DrillConfig;

/// Grids produced by the two construction primitives.
#[derive(Debug)]
pub struct ConstructionOutcome {
    pub by_ones: Array2<f32>,
    pub by_fill: Array2<f32>,
}

impl ConstructionOutcome {
    /// True when both primitives produced the same shape and values.
    pub fn grids_agree(&self) -> bool {
        self.by_ones == self.by_fill
    }
}

pub fn run_construction(config: &DrillConfig) -> ConstructionOutcome {
    let (rows, cols) = config.fill_shape;
    log::info!(
        "[GridKata::Construction] building two {}x{} grids",
        rows,
        cols
    );
    ConstructionOutcome {
        by_ones: ones_grid(rows, cols),
        by_fill: filled_grid(rows, cols, config.fill_value),
    }
}

pub fn print_construction(outcome: &ConstructionOutcome) {
    println!("{}", outcome.by_ones);
    println!("{}", outcome.by_fill);
}
