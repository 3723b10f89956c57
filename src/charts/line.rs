use plotters::prelude::*;

use crate::error::{Error, Result};

use super::model::{KpiSeries, RenderConfig};
use super::{ensure_writable, render_err};

pub struct LineChart {
    series: Vec<KpiSeries>,
}

impl LineChart {
    pub fn new(series: Vec<KpiSeries>) -> Self {
        Self { series }
    }

    fn data_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for series in &self.series {
            for &(x, y) in &series.points {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
                min_y = min_y.min(y);
                max_y = max_y.max(y);
            }
        }

        if min_x.is_finite() && min_y.is_finite() {
            Some((min_x, max_x, min_y, max_y))
        } else {
            None
        }
    }

    pub fn render(&self, config: &RenderConfig) -> Result<()> {
        let Some((min_x, max_x, min_y, max_y)) = self.data_bounds() else {
            return Err(Error::Layout("No dated observations to plot".to_owned()));
        };
        ensure_writable(&config.output_path)?;

        let (width, height) = config.pixel_size();
        let root = BitMapBackend::new(&config.output_path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let x_pad = ((max_x - min_x) * 0.02).max(0.25);
        let y_pad = ((max_y - min_y) * 0.05).max(0.5);

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, ("sans-serif", 30))
            .margin(16)
            .x_label_area_size(48)
            .y_label_area_size(64)
            .build_cartesian_2d(min_x - x_pad..max_x + x_pad, min_y - y_pad..max_y + y_pad)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("Days since first observation")
            .y_desc("Value")
            .draw()
            .map_err(render_err)?;

        for series in &self.series {
            let color = series.color;

            chart
                .draw_series(LineSeries::new(
                    series.points.iter().copied(),
                    color.stroke_width(2),
                ))
                .map_err(render_err)?
                .label(series.name.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });

            chart
                .draw_series(
                    series
                        .points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
                )
                .map_err(render_err)?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err)?;

        root.present().map_err(|err| {
            Error::Render(format!(
                "Failed to write {}: {err}",
                config.output_path.display()
            ))
        })?;

        Ok(())
    }
}
