mod charts;
mod config;
mod data;
mod error;
mod fetching;
mod persisting;
mod reports;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use charts::{LineChart, RenderConfig};
use config::Config;
use error::Result;
use reports::kpi_radar::KpiRadarReport;
use reports::kpi_timeseries::KpiTimeseriesReport;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env();

    info!("Checking endpoint {}", config.endpoint_url);
    fetching::check_connectivity(&config).await?;

    info!("Fetching KPI data");
    let records = fetching::fetch_records(&config).await?;
    info!("Fetched {} records", records.len());

    persisting::save_json(&records, &config.json_path()).await?;
    persisting::save_csv(&records, &config.csv_path()).await?;
    info!(
        "Raw data saved to {} and {}",
        config.json_path().display(),
        config.csv_path().display()
    );

    let stats = data::aggregate(&records)?;
    info!("Aggregated {} KPIs", stats.len());

    info!(
        "Rendering {}: {}",
        KpiRadarReport::title(),
        KpiRadarReport::subtitle()
    );
    let radar_config = RenderConfig::new(KpiRadarReport::title(), config.radar_path());
    KpiRadarReport::chart(&stats)?.render(&radar_config)?;
    info!("Radar chart saved to {}", config.radar_path().display());

    let series = KpiTimeseriesReport::series(&records);
    if series.is_empty() {
        info!("No dated observations; skipping time-series outputs");
        return Ok(());
    }

    info!(
        "Rendering {}: {}",
        KpiTimeseriesReport::title(),
        KpiTimeseriesReport::subtitle()
    );
    let line_config = RenderConfig::new(KpiTimeseriesReport::title(), config.timeseries_path())
        .with_figure_size(12.0, 6.0)
        .with_colorbar(false)
        .with_value_labels(false);
    LineChart::new(series.clone()).render(&line_config)?;
    info!(
        "Time-series chart saved to {}",
        config.timeseries_path().display()
    );

    let html = charts::html::render_html(&series, KpiTimeseriesReport::title());
    persisting::save_text(&html, &config.html_path()).await?;
    info!(
        "Interactive chart saved to {}",
        config.html_path().display()
    );

    Ok(())
}
