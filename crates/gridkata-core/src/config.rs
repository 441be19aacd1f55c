use serde::{Deserialize, Serialize};

/// Central run configuration for the exercise suite.
///
/// Every drill parameter lives here so a JSON config file can reshape a run
/// without touching code. The defaults are the canonical exercise values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    /// Shape of the two constructed grids.
    pub fill_shape: (usize, usize),
    /// Constant written by the fill-with-constant primitive.
    pub fill_value: f32,
    /// Shape of the all-ones source for block extraction.
    pub source_shape: (usize, usize),
    /// Row count of the extracted block.
    pub block_rows: usize,
    /// Column count of the extracted block.
    pub block_cols: usize,
    /// Side length of the traversal cube.
    pub cube_side: usize,
    /// Length of the evenly spaced sequence.
    pub seq_len: usize,
    /// First value of the sequence (inclusive).
    pub seq_start: f64,
    /// Last value of the sequence (inclusive).
    pub seq_stop: f64,
    /// Stride of the overwrite pass.
    pub overwrite_stride: usize,
    /// Value written at each strided position.
    pub overwrite_value: f64,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            fill_shape: (3, 4),
            fill_value: 1.0,
            source_shape: (6, 6),
            block_rows: 3,
            block_cols: 4,
            cube_side: 4,
            seq_len: 200,
            seq_start: 0.05,
            seq_stop: 10.0,
            overwrite_stride: 15,
            overwrite_value: 15.0,
        }
    }
}
