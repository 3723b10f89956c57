use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/kpis";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint_url: String,
    pub timeout: Duration,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let endpoint_url =
            env::var("KPI_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned());
        let output_dir = env::var_os("KPI_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            endpoint_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            output_dir,
        }
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join("kpis_data.json")
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join("kpis_data.csv")
    }

    pub fn radar_path(&self) -> PathBuf {
        self.output_dir.join("kpis_radar.png")
    }

    pub fn timeseries_path(&self) -> PathBuf {
        self.output_dir.join("kpis_timeseries.png")
    }

    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join("kpis_interactive.html")
    }
}
