//! Extraction drill: a rectangular block out of an all-ones source.

use anyhow::Result;
use ndarray::Array2;

use gridkata_core::construct::ones_grid;
use gridkata_core::extract::block;
use gridkata_core::DrillConfig;

/// The extracted sub-array.
#[derive(Debug)]
pub struct ExtractionOutcome {
    pub sub: Array2<f64>,
}

pub fn run_extraction(config: &DrillConfig) -> Result<ExtractionOutcome> {
    let (rows, cols) = config.source_shape;
    let source = ones_grid::<f64>(rows, cols);
    let sub = block(&source, 0..config.block_rows, 0..config.block_cols)?;
    log::info!(
        "[GridKata::Extraction] extracted {:?} block from {}x{} source",
        sub.shape(),
        rows,
        cols
    );
    Ok(ExtractionOutcome { sub })
}

pub fn print_extraction(outcome: &ExtractionOutcome) {
    println!("{}", outcome.sub);
}
