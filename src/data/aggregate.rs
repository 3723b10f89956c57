use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::fetching::KpiRecord;

/// Per-KPI summary over one run. `normalized` rescales the group mean to
/// [0, 1] relative to the lowest and highest means in the run.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiStats {
    pub kpi_name: String,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub normalized: f64,
}

/// Normalized score assigned to every group when all means are equal and
/// the usual rescaling would divide by zero.
pub const FLAT_NORMALIZED: f64 = 0.5;

/// Groups records by `kpi_name` in first-seen order and computes
/// mean/min/max plus the cross-group normalized score for each group.
pub fn aggregate(records: &[KpiRecord]) -> Result<Vec<KpiStats>> {
    if records.is_empty() {
        return Err(Error::Validation("No records to aggregate".to_owned()));
    }

    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<f64>> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        if record.kpi_name.trim().is_empty() {
            return Err(Error::Validation(format!(
                "Record {index} has an empty kpi_name"
            )));
        }
        if !record.value.is_finite() {
            return Err(Error::Validation(format!(
                "Record {index} ({}) has a non-numeric value",
                record.kpi_name
            )));
        }

        if !groups.contains_key(&record.kpi_name) {
            order.push(record.kpi_name.clone());
        }
        groups
            .entry(record.kpi_name.clone())
            .or_default()
            .push(record.value);
    }

    let mut stats: Vec<KpiStats> = order
        .into_iter()
        .map(|kpi_name| {
            let values = &groups[&kpi_name];
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            KpiStats {
                kpi_name,
                mean,
                min,
                max,
                normalized: 0.0,
            }
        })
        .collect();

    let low = stats.iter().map(|entry| entry.mean).fold(f64::INFINITY, f64::min);
    let high = stats
        .iter()
        .map(|entry| entry.mean)
        .fold(f64::NEG_INFINITY, f64::max);
    let spread = high - low;

    for entry in &mut stats {
        entry.normalized = if spread > f64::EPSILON {
            (entry.mean - low) / spread
        } else {
            FLAT_NORMALIZED
        };
    }

    Ok(stats)
}
