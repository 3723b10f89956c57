use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

/// A single KPI observation as delivered by the remote endpoint.
///
/// The `date` field stays a raw ISO-8601 string; only the time-series
/// report parses it, and records without one are still valid input for
/// the radar pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiRecord {
    pub kpi_name: String,
    pub value: f64,
    #[serde(default)]
    pub date: Option<String>,
}

fn build_client(config: &Config) -> Result<Client> {
    Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|err| Error::Fetch(format!("Failed to build HTTP client: {err}")))
}

/// Cheap reachability probe before the real fetch. Any response counts;
/// only a transport-level failure (refused, timeout, DNS) is an error.
pub async fn check_connectivity(config: &Config) -> Result<()> {
    let client = build_client(config)?;

    client
        .head(&config.endpoint_url)
        .send()
        .await
        .map_err(|err| {
            Error::Fetch(format!(
                "Endpoint {} is unreachable: {err}",
                config.endpoint_url
            ))
        })?;

    Ok(())
}

pub async fn fetch_records(config: &Config) -> Result<Vec<KpiRecord>> {
    let client = build_client(config)?;

    let response = client
        .get(&config.endpoint_url)
        .send()
        .await
        .map_err(|err| Error::Fetch(format!("Failed to fetch KPI data: {err}")))?
        .error_for_status()
        .map_err(|err| Error::Fetch(format!("KPI endpoint returned an error: {err}")))?;

    let records = response
        .json::<Vec<KpiRecord>>()
        .await
        .map_err(|err| Error::Fetch(format!("Failed to decode KPI payload: {err}")))?;

    Ok(records)
}
