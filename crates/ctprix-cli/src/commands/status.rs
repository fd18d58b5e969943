//! Dataset artifact and configuration summary.

use anyhow::Result;
use ctprix_core::config::LayeredConfig;
use ctprix_store::load_dataset;

use crate::cli::StatusArgs;
use crate::output::OutputWriter;

pub fn execute(_args: StatusArgs, output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    output.section("Configuration");
    let mut entries: Vec<_> = config.to_inspection_map().into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    for (key, (value, source)) in entries {
        output.kv(key, format!("{} ({:?})", value, source));
    }

    output.section("Dataset");
    let dataset = load_dataset(&config.dataset_path.value)?;
    output.kv("Dernière mise à jour", dataset.last_update.to_rfc3339());
    output.kv("Centres", dataset.metadata.total_centres);
    output.kv("Régions", dataset.metadata.regions.len());
    output.kv("Départements", dataset.metadata.departements.len());
    output.kv("Types de véhicules", dataset.metadata.vehicules.join(", "));
    output.kv("Types d'énergie", dataset.metadata.energies.join(", "));

    output.result(&dataset.metadata)?;
    Ok(())
}
