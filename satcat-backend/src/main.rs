use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use satcat_backend::cli::{self, Cli, Output};
use satcat_backend::config;
use satcat_backend::module::catalog::CatalogFetcher;
use satcat_backend::service::CatalogService;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Load configuration
    let config = config::read_config(args.config.as_deref())?;

    // Initialize logging
    let _logging_guard = satcat_backend::logging::init_logging(
        &config.log_dir,
        "satcat",
        &config.log_level,
        Duration::from_secs(config.log_retention_days.saturating_mul(24 * 60 * 60)),
    )?;

    tracing::info!("SatCat starting, dataset at {}", config.dataset_url());

    let fetcher = CatalogFetcher::from_config(config);
    let service = CatalogService::load(&fetcher)
        .await
        .context("Failed to load satellite catalog")?;

    let output = args.output();
    if matches!(output, Output::Facets | Output::FacetsJson) {
        let facets = service.facets();
        if output == Output::FacetsJson {
            println!("{}", serde_json::to_string_pretty(&facets)?);
        } else {
            println!("{}", cli::render_facets(&facets));
        }
        return Ok(());
    }

    // Zero page or page size exits non-zero here
    let page = args
        .query(&service, config)
        .context("Invalid page request")?;

    if output == Output::Json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        println!("{}", cli::render_table(&page));
    }

    Ok(())
}
