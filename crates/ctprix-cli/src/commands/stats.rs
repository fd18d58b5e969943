//! The national price observatory.

use anyhow::Result;
use ctprix_core::config::LayeredConfig;
use ctprix_engine::compute_stats;
use ctprix_store::load_dataset;

use crate::cli::StatsArgs;
use crate::output::OutputWriter;
use crate::output_types::{format_price, CentreRow, GroupRow, SpreadRow, StatsOutput};

pub fn execute(_args: StatsArgs, output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let dataset = load_dataset(&config.dataset_path.value)?;
    let stats = compute_stats(&dataset.centres);

    let Some(stats) = stats else {
        output.warning("no usable prices in the dataset, nothing to aggregate");
        return output.result(&StatsOutput { stats: None });
    };

    output.section("Prix national");
    output.kv("Centres", stats.nombre_centres);
    output.kv("Prix moyen", format_price(stats.prix_moyen));
    output.kv("Prix médian", format_price(stats.prix_median));
    output.kv("Prix minimum", format_price(stats.prix_min));
    output.kv("Prix maximum", format_price(stats.prix_max));

    output.section("Par région (prix moyen croissant)");
    output.table(stats.par_region.iter().map(GroupRow::from).collect());

    output.section("Top 10 moins chers");
    output.table(stats.top_moins_chers.iter().map(|c| CentreRow::from_centre(c, None)).collect());

    output.section("Top 10 plus chers");
    output.table(stats.top_plus_chers.iter().map(|c| CentreRow::from_centre(c, None)).collect());

    output.section("Plus grands écarts par département");
    output.table(stats.ecarts_max.iter().map(SpreadRow::from).collect());

    output.result(&StatsOutput { stats: Some(stats) })
}
