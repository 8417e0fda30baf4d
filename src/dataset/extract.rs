//! Extraction of the zipped raw dataset.

use std::fs::File;
use std::path::Path;

use crate::error::Result;

/// Extracts every entry of `input_path` into `output_path`, creating the
/// output directory if needed.
pub fn extract_zip_file(input_path: &Path, output_path: &Path) -> Result<()> {
    std::fs::create_dir_all(output_path)?;
    let file = File::open(input_path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    archive.extract(output_path)?;
    tracing::info!(
        "{} extracted successfully at {}",
        input_path.display(),
        output_path.display()
    );
    Ok(())
}
