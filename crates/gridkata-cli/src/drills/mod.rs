//! Per-exercise drill runners.
//!
//! Each drill module pairs a `run_*` function that returns an outcome
//! struct with a `print_*` (or `write_*`) function that emits it, so the
//! run logic stays testable without capturing process output.
pub mod construction;
pub mod extraction;
pub mod sequence;
pub mod traversal;

use std::path::Path;

use anyhow::{Context, Result};

use gridkata_core::DrillConfig;

/// Load a drill configuration from a JSON file.
pub fn load_drill_config<P: AsRef<Path>>(path: P) -> Result<DrillConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DrillConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
