pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter, Report};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::StructuralExtract;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Read and decode a structural extract from a JSON file.
pub fn read_extract(path: &Path) -> Result<StructuralExtract> {
    let contents = read_file(path)?;
    StructuralExtract::from_json(&contents)
        .with_context(|| format!("Invalid structural extract in {}", path.display()))
}
