use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

use crate::charts::color::series_color;
use crate::charts::KpiSeries;
use crate::fetching::KpiRecord;

pub struct KpiTimeseriesReport;

impl KpiTimeseriesReport {
    pub fn title() -> &'static str {
        "KPI Trend"
    }

    pub fn subtitle() -> &'static str {
        "Observations over time"
    }

    /// Groups dated records into one series per KPI, x measured in days
    /// since the earliest observation. Records without a parseable date
    /// are skipped for this chart only.
    pub fn series(records: &[KpiRecord]) -> Vec<KpiSeries> {
        let mut dated: Vec<(&str, DateTime<Utc>, f64)> = Vec::new();

        for record in records {
            let Some(raw) = record.date.as_deref() else {
                continue;
            };
            match parse_date(raw) {
                Some(timestamp) => dated.push((record.kpi_name.as_str(), timestamp, record.value)),
                None => warn!(
                    "Skipping {} observation with unparseable date: {raw}",
                    record.kpi_name
                ),
            }
        }

        let Some(earliest) = dated.iter().map(|&(_, timestamp, _)| timestamp).min() else {
            return Vec::new();
        };

        let mut order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, Vec<(f64, f64)>> = HashMap::new();

        for &(name, timestamp, value) in &dated {
            let days = (timestamp - earliest).num_seconds() as f64 / 86_400.0;
            if !groups.contains_key(name) {
                order.push(name);
            }
            groups.entry(name).or_default().push((days, value));
        }

        order
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let mut points = groups.remove(name).unwrap_or_default();
                points.sort_by(|a, b| a.0.total_cmp(&b.0));
                KpiSeries::new(name, series_color(index), points)
            })
            .collect()
    }
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(timestamp.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|timestamp| timestamp.and_utc())
}
