use std::path::Path;

use crate::error::{Error, Result};

pub mod color;
pub mod html;
pub mod layout;
pub mod line;
pub mod model;
pub mod radar;

pub use line::LineChart;
#[allow(unused_imports)]
pub use model::{KpiSeries, PolarVertex, RenderConfig};
pub use radar::RadarChart;

pub(crate) fn ensure_writable(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.is_dir() {
        return Err(Error::Render(format!(
            "Output directory does not exist: {}",
            parent.display()
        )));
    }

    Ok(())
}

pub(crate) fn render_err<E: std::error::Error>(err: E) -> Error {
    Error::Render(format!("Failed to draw chart: {err}"))
}
