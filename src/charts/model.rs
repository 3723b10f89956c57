use std::path::PathBuf;

use plotters::style::RGBColor;

/// One vertex of the radar polygon. Angles start at 0 and are raw
/// geometry; the renderer applies the start-at-top clockwise convention.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarVertex {
    pub angle: f64,
    pub value: f64,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub title: String,
    pub output_path: PathBuf,
    pub dpi: u32,
    pub figure_size: (f64, f64),
    pub show_colorbar: bool,
    pub show_value_labels: bool,
}

impl RenderConfig {
    pub fn new(title: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            output_path: output_path.into(),
            dpi: 150,
            figure_size: (10.0, 10.0),
            show_colorbar: true,
            show_value_labels: true,
        }
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi.max(1);
        self
    }

    pub fn with_figure_size(mut self, width: f64, height: f64) -> Self {
        self.figure_size = (width, height);
        self
    }

    pub fn with_colorbar(mut self, show: bool) -> Self {
        self.show_colorbar = show;
        self
    }

    pub fn with_value_labels(mut self, show: bool) -> Self {
        self.show_value_labels = show;
        self
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        let width = (self.figure_size.0 * self.dpi as f64).round().max(1.0) as u32;
        let height = (self.figure_size.1 * self.dpi as f64).round().max(1.0) as u32;
        (width, height)
    }
}

#[derive(Debug, Clone)]
pub struct KpiSeries {
    pub name: String,
    pub color: RGBColor,
    pub points: Vec<(f64, f64)>,
}

impl KpiSeries {
    pub fn new(name: impl Into<String>, color: RGBColor, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            color,
            points,
        }
    }
}
