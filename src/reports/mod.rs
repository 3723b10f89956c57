pub mod kpi_radar;
pub mod kpi_timeseries;
