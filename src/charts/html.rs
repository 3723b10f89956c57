//! Self-contained interactive rendering of the KPI time series: inline
//! SVG polylines plus embedded CSS/JS, no external assets.

use plotters::style::RGBColor;

use super::model::KpiSeries;

const CHART_WIDTH: f64 = 960.0;
const CHART_HEIGHT: f64 = 440.0;
const PADDING: f64 = 56.0;
const GRID_LINES: usize = 5;

pub fn render_html(series: &[KpiSeries], title: &str) -> String {
    let bounds = data_bounds(series);

    let body = match bounds {
        Some(bounds) => format!(
            r#"<svg viewBox="0 0 {CHART_WIDTH} {CHART_HEIGHT}" role="img">
{grid}
{lines}
</svg>
<ul class="legend">
{legend}
</ul>"#,
            grid = render_grid(bounds),
            lines = render_lines(series, bounds),
            legend = render_legend(series),
        ),
        None => "<p class=\"empty\">No dated observations available.</p>".to_owned(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<div class="container">
<h1>{title}</h1>
{body}
</div>
<script>{js}</script>
</body>
</html>"#,
        css = inline_css(),
        js = inline_javascript(),
    )
}

fn data_bounds(series: &[KpiSeries]) -> Option<(f64, f64, f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for entry in series {
        for &(x, y) in &entry.points {
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

fn to_svg(x: f64, y: f64, bounds: (f64, f64, f64, f64)) -> (f64, f64) {
    let (min_x, max_x, min_y, max_y) = bounds;
    let x_span = (max_x - min_x).max(1e-9);
    let y_span = (max_y - min_y).max(1e-9);

    let sx = PADDING + (x - min_x) / x_span * (CHART_WIDTH - PADDING * 2.0);
    let sy = CHART_HEIGHT - PADDING - (y - min_y) / y_span * (CHART_HEIGHT - PADDING * 2.0);
    (sx, sy)
}

fn render_grid(bounds: (f64, f64, f64, f64)) -> String {
    let (min_x, max_x, min_y, max_y) = bounds;
    let mut parts = Vec::new();

    for step in 0..=GRID_LINES {
        let t = step as f64 / GRID_LINES as f64;

        let y_value = min_y + t * (max_y - min_y);
        let (left, sy) = to_svg(min_x, y_value, bounds);
        let (right, _) = to_svg(max_x, y_value, bounds);
        parts.push(format!(
            r#"<line class="grid" x1="{left:.1}" y1="{sy:.1}" x2="{right:.1}" y2="{sy:.1}"/>
<text class="tick" x="{tick_x:.1}" y="{tick_y:.1}" text-anchor="end">{y_value:.1}</text>"#,
            tick_x = left - 8.0,
            tick_y = sy + 4.0,
        ));

        let x_value = min_x + t * (max_x - min_x);
        let (sx, top) = to_svg(x_value, max_y, bounds);
        let (_, bottom) = to_svg(x_value, min_y, bounds);
        parts.push(format!(
            r#"<line class="grid" x1="{sx:.1}" y1="{top:.1}" x2="{sx:.1}" y2="{bottom:.1}"/>
<text class="tick" x="{sx:.1}" y="{tick_y:.1}" text-anchor="middle">{x_value:.1}</text>"#,
            tick_y = bottom + 18.0,
        ));
    }

    parts.join("\n")
}

fn render_lines(series: &[KpiSeries], bounds: (f64, f64, f64, f64)) -> String {
    series
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let points = entry
                .points
                .iter()
                .map(|&(x, y)| {
                    let (sx, sy) = to_svg(x, y, bounds);
                    format!("{sx:.1},{sy:.1}")
                })
                .collect::<Vec<_>>()
                .join(" ");

            let markers = entry
                .points
                .iter()
                .map(|&(x, y)| {
                    let (sx, sy) = to_svg(x, y, bounds);
                    format!(
                        r#"<circle class="marker" data-series="{index}" cx="{sx:.1}" cy="{sy:.1}" r="4"><title>{name}: {y:.1} (day {x:.1})</title></circle>"#,
                        name = entry.name,
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");

            format!(
                r#"<g class="series" data-series="{index}" stroke="{color}" fill="{color}">
<polyline points="{points}" fill="none" stroke-width="2.5"/>
{markers}
</g>"#,
                color = css_color(entry.color),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_legend(series: &[KpiSeries]) -> String {
    series
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                r#"<li class="legend-item" data-series="{index}"><span class="swatch" style="background:{color}"></span>{name}</li>"#,
                color = css_color(entry.color),
                name = entry.name,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn css_color(color: RGBColor) -> String {
    format!("rgb({},{},{})", color.0, color.1, color.2)
}

fn inline_css() -> &'static str {
    r#"
body { font-family: -apple-system, "Segoe UI", sans-serif; margin: 0; background: #fafafa; color: #222; }
.container { max-width: 1020px; margin: 24px auto; padding: 16px; background: #fff; border: 1px solid #e0e0e0; border-radius: 6px; }
h1 { font-size: 20px; margin: 4px 8px 16px; }
svg { width: 100%; height: auto; }
.grid { stroke: #e3e3e3; stroke-width: 1; }
.tick { fill: #888; font-size: 11px; }
.series { transition: opacity 0.15s ease; }
.series.dimmed { opacity: 0.15; }
.legend { list-style: none; display: flex; flex-wrap: wrap; gap: 16px; padding: 8px; margin: 0; }
.legend-item { cursor: pointer; font-size: 13px; display: flex; align-items: center; gap: 6px; }
.swatch { width: 12px; height: 12px; border-radius: 2px; display: inline-block; }
.empty { padding: 24px; color: #888; }
"#
}

fn inline_javascript() -> &'static str {
    r#"
document.querySelectorAll('.legend-item').forEach(function (item) {
    item.addEventListener('mouseenter', function () {
        var selected = item.dataset.series;
        document.querySelectorAll('.series').forEach(function (series) {
            series.classList.toggle('dimmed', series.dataset.series !== selected);
        });
    });
    item.addEventListener('mouseleave', function () {
        document.querySelectorAll('.series').forEach(function (series) {
            series.classList.remove('dimmed');
        });
    });
});
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::color::series_color;

    fn sample_series() -> Vec<KpiSeries> {
        vec![
            KpiSeries::new("latency", series_color(0), vec![(0.0, 10.0), (1.0, 12.0)]),
            KpiSeries::new("uptime", series_color(1), vec![(0.0, 99.5), (1.0, 99.9)]),
        ]
    }

    #[test]
    fn document_contains_one_polyline_per_series() {
        let html = render_html(&sample_series(), "KPI Trend");

        assert_eq!(html.matches("<polyline").count(), 2);
        assert_eq!(html.matches(r#"class="legend-item""#).count(), 2);
    }

    #[test]
    fn document_carries_the_title() {
        let html = render_html(&sample_series(), "KPI Trend");

        assert!(html.contains("<title>KPI Trend</title>"));
        assert!(html.contains("<h1>KPI Trend</h1>"));
    }

    #[test]
    fn empty_series_renders_a_placeholder() {
        let html = render_html(&[], "KPI Trend");

        assert!(html.contains("No dated observations"));
        assert!(!html.contains("<polyline"));
    }
}
