//! The aggregated dataset artifact: one JSON document with the centres,
//! the aggregation timestamp, and the facet metadata.

use std::fs;
use std::path::Path;

use ctprix_core::models::Dataset;
use ctprix_core::{CtprixError, Result};

/// Write the dataset as a single compact JSON document, creating parent
/// directories as needed.
pub fn save_dataset<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Compact, not pretty: the artifact is megabytes of centres
    let json = serde_json::to_string(dataset)?;
    fs::write(path, &json)?;

    tracing::info!(
        path = %path.display(),
        centres = dataset.metadata.total_centres,
        bytes = json.len(),
        "dataset artifact written"
    );
    Ok(())
}

/// Load a dataset artifact.
///
/// A missing file is reported as [`CtprixError::DatasetNotFound`] so the CLI
/// can point the user at `ctprix fetch` instead of surfacing a raw IO error.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CtprixError::DatasetNotFound { path: path.to_path_buf() });
    }
    let content = fs::read_to_string(path)?;
    let dataset: Dataset = serde_json::from_str(&content)?;
    Ok(dataset)
}
