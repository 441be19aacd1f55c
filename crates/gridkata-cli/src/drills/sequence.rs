//! Sequence drill: evenly spaced values with a strided overwrite.

use std::path::Path;

use anyhow::{Context, Result};
use ndarray::Array1;

use gridkata_core::sequence::{evenly_spaced, overwrite_strided};
use gridkata_core::DrillConfig;

/// The mutated sequence.
#[derive(Debug)]
pub struct SequenceOutcome {
    pub values: Array1<f64>,
}

pub fn run_sequence(config: &DrillConfig) -> Result<SequenceOutcome> {
    let mut values = evenly_spaced(config.seq_start, config.seq_stop, config.seq_len);
    overwrite_strided(&mut values, config.overwrite_stride, config.overwrite_value)?;
    log::info!(
        "[GridKata::Sequence] {} values from {} to {}, every {}th set to {}",
        config.seq_len,
        config.seq_start,
        config.seq_stop,
        config.overwrite_stride,
        config.overwrite_value
    );
    Ok(SequenceOutcome { values })
}

/// Emit the final sequence, one value per line.
pub fn print_sequence(outcome: &SequenceOutcome) {
    for value in outcome.values.iter() {
        println!("{}", value);
    }
}

/// Write the final sequence as `index,value` CSV.
pub fn write_sequence_csv(outcome: &SequenceOutcome, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output: {}", path.display()))?;
    writer.write_record(["index", "value"])?;
    for (index, value) in outcome.values.iter().enumerate() {
        writer.write_record(&[index.to_string(), value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
