use std::f64::consts::TAU;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{Error, Result};

use super::color::{label_color, performance_color};
use super::model::{PolarVertex, RenderConfig};
use super::{ensure_writable, render_err};

const RING_COUNT: usize = 4;
const RING_STEPS: usize = 120;
const GRID_COLOR: RGBColor = RGBColor(204, 204, 204);
const LABEL_TEXT: RGBColor = RGBColor(64, 64, 64);
const COLORBAR_WIDTH: u32 = 150;

#[derive(Debug)]
pub struct RadarChart {
    vertices: Vec<PolarVertex>,
    scores: Vec<f64>,
    colors: Vec<RGBColor>,
}

impl RadarChart {
    /// `vertices` is the closed N+1 polygon from the layout engine;
    /// `scores` holds one normalized score per category (length N).
    pub fn new(vertices: Vec<PolarVertex>, scores: Vec<f64>) -> Self {
        let colors = scores.iter().map(|&score| performance_color(score)).collect();
        Self {
            vertices,
            scores,
            colors,
        }
    }

    pub fn render(&self, config: &RenderConfig) -> Result<()> {
        if self.vertices.len() < 2 {
            return Err(Error::Layout(
                "Radar chart needs at least one category".to_owned(),
            ));
        }
        if self.scores.len() + 1 != self.vertices.len() {
            return Err(Error::Layout(format!(
                "Expected {} scores for {} vertices, got {}",
                self.vertices.len() - 1,
                self.vertices.len(),
                self.scores.len()
            )));
        }
        ensure_writable(&config.output_path)?;

        let (width, height) = config.pixel_size();
        let root = BitMapBackend::new(&config.output_path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        if config.show_colorbar && width > COLORBAR_WIDTH * 2 {
            let (plot, bar) = root.split_horizontally(width - COLORBAR_WIDTH);
            self.draw_polygon(&plot, config)?;
            draw_colorbar(&bar)?;
        } else {
            self.draw_polygon(&root, config)?;
        }

        root.present().map_err(|err| {
            Error::Render(format!(
                "Failed to write {}: {err}",
                config.output_path.display()
            ))
        })?;

        Ok(())
    }

    fn draw_polygon<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        config: &RenderConfig,
    ) -> Result<()> {
        let (px_width, px_height) = area.dim_in_pixel();
        let aspect = f64::from(px_width) / f64::from(px_height.max(1));
        let extent = 1.45;
        let (x_extent, y_extent) = if aspect >= 1.0 {
            (extent * aspect, extent)
        } else {
            (extent, extent / aspect)
        };

        let mut chart = ChartBuilder::on(area)
            .caption(&config.title, ("sans-serif", 34))
            .margin(20)
            .build_cartesian_2d(-x_extent..x_extent, -y_extent..y_extent)
            .map_err(render_err)?;

        let category_count = self.vertices.len() - 1;
        let max_value = self
            .vertices
            .iter()
            .map(|vertex| vertex.value)
            .fold(0.0_f64, f64::max)
            .max(f64::MIN_POSITIVE);

        for ring in 1..=RING_COUNT {
            let radius = ring as f64 / RING_COUNT as f64;
            let circle: Vec<(f64, f64)> = (0..=RING_STEPS)
                .map(|step| {
                    let angle = TAU * step as f64 / RING_STEPS as f64;
                    to_screen(angle, radius)
                })
                .collect();
            chart
                .draw_series(std::iter::once(PathElement::new(
                    circle,
                    GRID_COLOR.stroke_width(1),
                )))
                .map_err(render_err)?;
        }

        for vertex in &self.vertices[..category_count] {
            let tip = to_screen(vertex.angle, 1.0);
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(0.0, 0.0), tip],
                    GRID_COLOR.stroke_width(1),
                )))
                .map_err(render_err)?;

            let (label_x, label_y) = to_screen(vertex.angle, 1.18);
            let style = ("sans-serif", 18)
                .into_font()
                .color(&LABEL_TEXT)
                .pos(anchor_for(label_x, label_y));
            chart
                .draw_series(std::iter::once(Text::new(
                    vertex.category.clone(),
                    (label_x, label_y),
                    style,
                )))
                .map_err(render_err)?;
        }

        // Each edge spans two categories; it takes the color of the
        // category it originates from.
        for (index, pair) in self.vertices.windows(2).enumerate() {
            let color = self.colors[index];
            let from = to_screen(pair[0].angle, pair[0].value / max_value);
            let to = to_screen(pair[1].angle, pair[1].value / max_value);

            chart
                .draw_series(std::iter::once(Polygon::new(
                    vec![(0.0, 0.0), from, to],
                    color.mix(0.15),
                )))
                .map_err(render_err)?;
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![from, to],
                    color.stroke_width(3),
                )))
                .map_err(render_err)?;
        }

        for (index, vertex) in self.vertices[..category_count].iter().enumerate() {
            let color = self.colors[index];
            let point = to_screen(vertex.angle, vertex.value / max_value);

            chart
                .draw_series(std::iter::once(Circle::new(point, 5, color.filled())))
                .map_err(render_err)?;

            if config.show_value_labels {
                let text = format!("{:.1}", vertex.value);
                let (label_x, label_y) =
                    to_screen(vertex.angle, vertex.value / max_value + 0.09);
                let half_width = 0.024 * text.len() as f64 + 0.012;
                let half_height = 0.038;

                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [
                            (label_x - half_width, label_y - half_height),
                            (label_x + half_width, label_y + half_height),
                        ],
                        color.filled(),
                    )))
                    .map_err(render_err)?;

                let style = ("sans-serif", 15)
                    .into_font()
                    .color(&label_color(self.scores[index]))
                    .pos(Pos::new(HPos::Center, VPos::Center));
                chart
                    .draw_series(std::iter::once(Text::new(
                        text,
                        (label_x, label_y),
                        style,
                    )))
                    .map_err(render_err)?;
            }
        }

        Ok(())
    }
}

/// Angle 0 points up; increasing angles proceed clockwise.
fn to_screen(angle: f64, radius: f64) -> (f64, f64) {
    (radius * angle.sin(), radius * angle.cos())
}

fn anchor_for(x: f64, y: f64) -> Pos {
    let horizontal = if x < -0.1 {
        HPos::Right
    } else if x > 0.1 {
        HPos::Left
    } else {
        HPos::Center
    };
    let vertical = if y > 0.1 {
        VPos::Bottom
    } else if y < -0.1 {
        VPos::Top
    } else {
        VPos::Center
    };
    Pos::new(horizontal, vertical)
}

fn draw_colorbar<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .margin(24)
        .y_label_area_size(48)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_desc("Relative performance")
        .y_label_formatter(&|value| format!("{value:.2}"))
        .draw()
        .map_err(render_err)?;

    for step in 0..100 {
        let low = step as f64 / 100.0;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(0.0, low), (1.0, low + 0.01)],
                performance_color(low + 0.005).filled(),
            )))
            .map_err(render_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::layout::layout;
    use crate::data::aggregate::KpiStats;

    fn stats(entries: &[(&str, f64, f64)]) -> Vec<KpiStats> {
        entries
            .iter()
            .map(|&(name, mean, normalized)| KpiStats {
                kpi_name: name.to_owned(),
                mean,
                min: mean,
                max: mean,
                normalized,
            })
            .collect()
    }

    fn chart_for(entries: &[(&str, f64, f64)]) -> RadarChart {
        let stats = stats(entries);
        let vertices = layout(&stats).unwrap();
        let scores = stats.iter().map(|entry| entry.normalized).collect();
        RadarChart::new(vertices, scores)
    }

    #[test]
    fn renders_a_radar_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radar.png");
        let chart = chart_for(&[("latency", 15.0, 0.0), ("throughput", 100.0, 1.0)]);
        let config = RenderConfig::new("KPI Overview", &path).with_dpi(40);

        chart.render(&config).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn single_category_renders_without_crashing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spoke.png");
        let chart = chart_for(&[("only", 5.0, 0.5)]);
        let config = RenderConfig::new("Degenerate", &path).with_dpi(40);

        chart.render(&config).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn identical_inputs_render_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        let chart = chart_for(&[("a", 5.0, 0.5), ("b", 7.0, 1.0), ("c", 3.0, 0.0)]);

        chart
            .render(&RenderConfig::new("Same", &first).with_dpi(40))
            .unwrap();
        chart
            .render(&RenderConfig::new("Same", &second).with_dpi(40))
            .unwrap();

        let first_bytes = std::fs::read(&first).unwrap();
        let second_bytes = std::fs::read(&second).unwrap();
        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn missing_output_directory_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("radar.png");
        let chart = chart_for(&[("a", 5.0, 0.5), ("b", 7.0, 1.0)]);
        let config = RenderConfig::new("Nope", &path);

        let err = chart.render(&config).unwrap_err();

        assert!(matches!(err, Error::Render(_)));
        assert!(!path.exists());
    }

    #[test]
    fn mismatched_score_count_is_a_layout_error() {
        let stats = stats(&[("a", 5.0, 0.5), ("b", 7.0, 1.0)]);
        let vertices = layout(&stats).unwrap();
        let chart = RadarChart::new(vertices, vec![0.5]);
        let config = RenderConfig::new("Bad", "radar.png");

        let err = chart.render(&config).unwrap_err();

        assert!(matches!(err, Error::Layout(_)));
    }
}
