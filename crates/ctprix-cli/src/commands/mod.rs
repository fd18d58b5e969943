mod fetch;
mod query;
mod stats;
mod status;

use anyhow::Result;
use ctprix_core::config::{CliConfigOverrides, LayeredConfig};

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;

/// Default config file looked up in the working directory.
const CONFIG_FILE: &str = "ctprix.toml";

pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Fetch(args) => fetch::execute(args, &output, &config).await,
        Commands::Query(args) => query::execute(args, &output, &config),
        Commands::Stats(args) => stats::execute(args, &output, &config),
        Commands::Status(args) => status::execute(args, &output, &config),
    }
}

fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    match &cli.config {
        Some(path) => config = config.load_from_file(path)?,
        None => {
            if std::path::Path::new(CONFIG_FILE).exists() {
                config = config.load_from_file(CONFIG_FILE)?;
            }
        }
    }

    let mut config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        dataset_path: cli.dataset.clone(),
        export_url: None,
        result_limit: None,
    });

    Ok(config)
}
