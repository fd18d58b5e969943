//! Download the full open-data export and build the dataset artifact.

use anyhow::{bail, Context, Result};
use ctprix_core::config::LayeredConfig;
use ctprix_core::models::RawPriceRecord;
use ctprix_engine::build_dataset;
use ctprix_store::save_dataset;

use crate::cli::FetchArgs;
use crate::output::OutputWriter;

pub async fn execute(args: FetchArgs, output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let url = args.url.as_deref().unwrap_or(&config.export_url.value);

    output.info("Fetching complete dataset from the export API, this may take a moment...");
    tracing::debug!(url, "starting export download");

    let response = reqwest::get(url).await.context("export request failed")?;
    if !response.status().is_success() {
        bail!("export request failed with HTTP status {}", response.status());
    }

    let records: Vec<RawPriceRecord> =
        response.json().await.context("export payload is not the expected JSON array")?;
    output.info(format!("Fetched {} records", records.len()));

    let dataset = build_dataset(&records)?;
    let path = &config.dataset_path.value;
    save_dataset(&dataset, path)?;

    output.success(format!(
        "Aggregated {} unique centres into {}",
        dataset.metadata.total_centres,
        path.display()
    ));
    output.kv("Régions", dataset.metadata.regions.len());
    output.kv("Départements", dataset.metadata.departements.len());
    output.kv("Types de véhicules", dataset.metadata.vehicules.len());
    output.kv("Types d'énergie", dataset.metadata.energies.len());

    output.result(&dataset.metadata)?;
    Ok(())
}
