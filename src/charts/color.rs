use plotters::style::RGBColor;

const LOW: RGBColor = RGBColor(255, 0, 0);
const MID: RGBColor = RGBColor(255, 255, 0);
const HIGH: RGBColor = RGBColor(0, 255, 0);

const LABEL_DARK: RGBColor = RGBColor(33, 33, 33);
const LABEL_LIGHT: RGBColor = RGBColor(245, 245, 245);

pub const SERIES_PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Maps a normalized score to the red->yellow->green performance
/// gradient. Input outside [0, 1] is clamped rather than rejected.
pub fn performance_color(normalized: f64) -> RGBColor {
    let score = normalized.clamp(0.0, 1.0);

    if score < 0.5 {
        lerp(LOW, MID, score * 2.0)
    } else {
        lerp(MID, HIGH, (score - 0.5) * 2.0)
    }
}

/// Foreground color for value labels drawn over the performance fill.
pub fn label_color(normalized: f64) -> RGBColor {
    if normalized.clamp(0.0, 1.0) < 0.7 {
        LABEL_DARK
    } else {
        LABEL_LIGHT
    }
}

pub fn series_color(index: usize) -> RGBColor {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

fn lerp(from: RGBColor, to: RGBColor, t: f64) -> RGBColor {
    let channel =
        |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;

    RGBColor(
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_stops_are_exact() {
        assert_eq!(performance_color(0.0), RGBColor(255, 0, 0));
        assert_eq!(performance_color(0.5), RGBColor(255, 255, 0));
        assert_eq!(performance_color(1.0), RGBColor(0, 255, 0));
    }

    #[test]
    fn channels_interpolate_monotonically() {
        // Green rises on the first half, red falls on the second.
        assert!(performance_color(0.1).1 < performance_color(0.3).1);
        assert!(performance_color(0.3).1 < performance_color(0.5).1);
        assert!(performance_color(0.6).0 > performance_color(0.8).0);
        assert!(performance_color(0.8).0 > performance_color(1.0).0);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(performance_color(-0.5), performance_color(0.0));
        assert_eq!(performance_color(1.0000000002), performance_color(1.0));
    }

    #[test]
    fn label_color_switches_at_threshold() {
        assert_eq!(label_color(0.0), LABEL_DARK);
        assert_eq!(label_color(0.69), LABEL_DARK);
        assert_eq!(label_color(0.7), LABEL_LIGHT);
        assert_eq!(label_color(1.0), LABEL_LIGHT);
    }

    #[test]
    fn series_palette_cycles() {
        assert_eq!(series_color(0), series_color(SERIES_PALETTE.len()));
    }
}
