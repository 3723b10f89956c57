pub mod aggregate;

pub use aggregate::{aggregate, KpiStats};
