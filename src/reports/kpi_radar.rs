use crate::charts::layout::layout;
use crate::charts::RadarChart;
use crate::data::aggregate::KpiStats;
use crate::error::Result;

pub struct KpiRadarReport;

impl KpiRadarReport {
    pub fn title() -> &'static str {
        "KPI Overview"
    }

    pub fn subtitle() -> &'static str {
        "Relative performance by indicator"
    }

    pub fn chart(stats: &[KpiStats]) -> Result<RadarChart> {
        let vertices = layout(stats)?;
        let scores = stats.iter().map(|entry| entry.normalized).collect();

        Ok(RadarChart::new(vertices, scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::aggregate;
    use crate::error::Error;
    use crate::fetching::KpiRecord;

    #[test]
    fn builds_a_chart_from_aggregated_stats() {
        let records = vec![
            KpiRecord {
                kpi_name: "latency".to_owned(),
                value: 10.0,
                date: None,
            },
            KpiRecord {
                kpi_name: "latency".to_owned(),
                value: 20.0,
                date: None,
            },
            KpiRecord {
                kpi_name: "throughput".to_owned(),
                value: 100.0,
                date: None,
            },
        ];
        let stats = aggregate(&records).unwrap();

        assert!(KpiRadarReport::chart(&stats).is_ok());
    }

    #[test]
    fn empty_stats_surface_the_layout_error() {
        let err = KpiRadarReport::chart(&[]).unwrap_err();

        assert!(matches!(err, Error::Layout(_)));
    }
}
