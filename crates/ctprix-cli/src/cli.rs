use clap::{Parser, Subcommand, ValueEnum};
use ctprix_core::models::{SortBy, SortOrder};
use std::path::PathBuf;

/// ctprix - observatoire des prix du contrôle technique
#[derive(Parser, Debug)]
#[command(name = "ctprix")]
#[command(about = "Browse and compare regulated vehicle-inspection prices across France", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the dataset artifact (overrides config and environment)
    #[arg(long, global = true, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Path to a ctprix.toml config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the open-data export and build the aggregated dataset
    Fetch(FetchArgs),

    /// Filter, search, and sort the inspection centres
    Query(QueryArgs),

    /// Show the national price observatory
    Stats(StatsArgs),

    /// Show dataset and configuration information
    Status(StatusArgs),
}

#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Export URL (defaults to the data.economie.gouv.fr full export)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
}

#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Free-text search over name, commune, address, and postal code
    pub search: Option<String>,

    /// Keep only centres in this region
    #[arg(long)]
    pub region: Option<String>,

    /// Keep only centres in this département (by name)
    #[arg(long)]
    pub departement: Option<String>,

    /// Keep centres offering this vehicle category (repeatable, OR semantics)
    #[arg(long = "vehicule", value_name = "CATEGORY")]
    pub vehicules: Vec<String>,

    /// Keep centres offering this energy category (repeatable, OR semantics)
    #[arg(long = "energie", value_name = "CATEGORY")]
    pub energies: Vec<String>,

    /// Lower bound on the reference price
    #[arg(long)]
    pub prix_min: Option<f64>,

    /// Upper bound on the reference price
    #[arg(long)]
    pub prix_max: Option<f64>,

    /// Sort key (default: prix, or the saved one with --saved)
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Sort direction (default: asc, or the saved one with --saved)
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Reference point "LAT,LNG" for the distance sort and distance column
    #[arg(long, value_name = "LAT,LNG")]
    pub near: Option<String>,

    /// Maximum number of rows to display
    #[arg(long)]
    pub limit: Option<usize>,

    /// Start from the persisted filters instead of a blank state
    #[arg(long)]
    pub saved: bool,

    /// Do not persist the filters used for this query
    #[arg(long)]
    pub no_save: bool,

    /// Explain zero-result states caused by filter interaction
    #[arg(long)]
    pub explain: bool,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {}

#[derive(Parser, Debug)]
pub struct StatusArgs {}

/// Sort key selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Prix,
    Nom,
    Commune,
    Departement,
    Distance,
}

impl From<SortArg> for SortBy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Prix => SortBy::Prix,
            SortArg::Nom => SortBy::Nom,
            SortArg::Commune => SortBy::Commune,
            SortArg::Departement => SortBy::Departement,
            SortArg::Distance => SortBy::Distance,
        }
    }
}

/// Sort direction selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}
