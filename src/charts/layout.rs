use std::f64::consts::TAU;

use crate::data::aggregate::KpiStats;
use crate::error::{Error, Result};

use super::model::PolarVertex;

/// Maps N categories to N evenly spaced angles and closes the polygon by
/// repeating the first vertex, so the result always has N+1 entries.
/// Category order is preserved from the aggregation.
pub fn layout(stats: &[KpiStats]) -> Result<Vec<PolarVertex>> {
    if stats.is_empty() {
        return Err(Error::Layout(
            "Cannot lay out a radar with zero categories".to_owned(),
        ));
    }

    let count = stats.len();
    let mut vertices: Vec<PolarVertex> = stats
        .iter()
        .enumerate()
        .map(|(index, entry)| PolarVertex {
            angle: TAU * index as f64 / count as f64,
            value: entry.mean,
            category: entry.kpi_name.clone(),
        })
        .collect();

    vertices.push(vertices[0].clone());

    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(names: &[&str]) -> Vec<KpiStats> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| KpiStats {
                kpi_name: (*name).to_owned(),
                mean: 10.0 + index as f64,
                min: 10.0 + index as f64,
                max: 10.0 + index as f64,
                normalized: 0.5,
            })
            .collect()
    }

    #[test]
    fn produces_n_plus_one_vertices_with_closure() {
        let vertices = layout(&stats(&["a", "b", "c"])).unwrap();

        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[3], vertices[0]);
    }

    #[test]
    fn angles_are_evenly_spaced_and_increasing() {
        let vertices = layout(&stats(&["a", "b", "c", "d"])).unwrap();
        let step = TAU / 4.0;

        for (index, vertex) in vertices[..4].iter().enumerate() {
            assert!((vertex.angle - step * index as f64).abs() < 1e-12);
        }
        for pair in vertices[..4].windows(2) {
            assert!(pair[1].angle > pair[0].angle);
        }
    }

    #[test]
    fn category_order_matches_input() {
        let vertices = layout(&stats(&["gamma", "alpha", "beta"])).unwrap();

        let names: Vec<&str> = vertices[..3]
            .iter()
            .map(|vertex| vertex.category.as_str())
            .collect();
        assert_eq!(names, ["gamma", "alpha", "beta"]);
    }

    #[test]
    fn single_category_yields_two_identical_vertices() {
        let vertices = layout(&stats(&["only"])).unwrap();

        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].angle, 0.0);
        assert_eq!(vertices[1], vertices[0]);
    }

    #[test]
    fn empty_stats_is_a_layout_error() {
        let err = layout(&[]).unwrap_err();
        assert!(matches!(err, Error::Layout(_)));
    }
}
