//! The module responsible for writing output data to disk.
use crate::recommendation::monoculture::SingleCropProposal;
use crate::recommendation::schedule::ScheduleRow;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The root folder in which farm-specific output folders will be created
const OUTPUT_DIRECTORY_ROOT: &str = "agroplan_results";

/// The output file name for the rotation planting schedule
const SCHEDULE_FILE_NAME: &str = "schedule.csv";

/// The output file name for single-crop proposals
const PROPOSALS_FILE_NAME: &str = "single_crop_proposals.csv";

/// Get the default output directory for the farm specified at `farm_dir`
pub fn get_output_dir(farm_dir: &Path) -> Result<PathBuf> {
    // Get the farm name from the dir path. This ends up being convoluted because we need to check
    // for all possible errors. Ugh.
    let farm_dir = farm_dir
        .canonicalize() // canonicalise in case the user has specified "."
        .context("Could not resolve path to farm")?;

    let farm_name = farm_dir
        .file_name()
        .context("Farm cannot be in root folder")?
        .to_str()
        .context("Invalid chars in farm dir name")?;

    // Construct path
    Ok([OUTPUT_DIRECTORY_ROOT, farm_name].iter().collect())
}

/// Create the output directory if it does not already exist
pub fn create_output_directory(output_dir: &Path) -> Result<()> {
    if output_dir.is_dir() {
        // already exists
        return Ok(());
    }

    // Try to create the directory, with parents
    fs::create_dir_all(output_dir)?;

    Ok(())
}

/// Write the planting schedule to a CSV file in `output_dir`
pub fn write_schedule(output_dir: &Path, schedule: &[ScheduleRow]) -> Result<()> {
    let file_path = output_dir.join(SCHEDULE_FILE_NAME);
    let mut writer = csv::Writer::from_path(&file_path)
        .with_context(|| format!("Failed to create {}", file_path.display()))?;

    for row in schedule {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write the single-crop proposals to a CSV file in `output_dir`
pub fn write_single_crop_proposals(
    output_dir: &Path,
    proposals: &[SingleCropProposal],
) -> Result<()> {
    let file_path = output_dir.join(PROPOSALS_FILE_NAME);
    let mut writer = csv::Writer::from_path(&file_path)
        .with_context(|| format!("Failed to create {}", file_path.display()))?;

    for proposal in proposals {
        writer.serialize(proposal)?;
    }
    writer.flush()?;

    Ok(())
}
