use crate::ObstructionGeometry;
use textplots::{Chart, Plot, Shape};

/// Consumer of an elevation profile.
///
/// `series` holds `(cumulative_distance_m, elevation_m)` pairs in path
/// order.
pub trait Render {
    fn render(&mut self, series: &[(f64, f64)], obstruction: Option<&ObstructionGeometry>);
}

/// Plots the profile to the terminal.
#[derive(Debug, Clone, Copy)]
pub struct TextPlot {
    width: u32,
    height: u32,
}

impl Default for TextPlot {
    fn default() -> Self {
        Self {
            width: 300,
            height: 150,
        }
    }
}

impl TextPlot {
    /// Chart size in braille dots. textplots needs at least 32x3.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(32),
            height: height.max(3),
        }
    }
}

impl Render for TextPlot {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, series: &[(f64, f64)], obstruction: Option<&ObstructionGeometry>) {
        let Some(&(x_max, _)) = series.last() else {
            return;
        };
        let terrain: Vec<(f32, f32)> = series
            .iter()
            .map(|&(distance, elevation)| (distance as f32, elevation as f32))
            .collect();
        let marker: Vec<(f32, f32)> = obstruction
            .and_then(|obstruction| nearest(series, obstruction.distance_transmitter_obstruction))
            .map(|(distance, elevation)| vec![(distance as f32, elevation as f32)])
            .unwrap_or_default();

        let terrain = Shape::Lines(&terrain);
        let marker = Shape::Points(&marker);
        Chart::new(self.width, self.height, 0.0, (x_max as f32).max(1.0))
            .lineplot(&terrain)
            .lineplot(&marker)
            .display();
    }
}

/// Series entry closest to `distance_m`.
fn nearest(series: &[(f64, f64)], distance_m: f64) -> Option<(f64, f64)> {
    series
        .iter()
        .copied()
        .min_by(|(a, _), (b, _)| (a - distance_m).abs().total_cmp(&(b - distance_m).abs()))
}

#[cfg(test)]
mod tests {
    use super::{nearest, Render, TextPlot};
    use crate::ObstructionGeometry;

    #[test]
    fn test_nearest() {
        let series = [(0.0, 1.0), (100.0, 2.0), (200.0, 3.0)];
        assert_eq!(nearest(&series, 140.0), Some((100.0, 2.0)));
        assert_eq!(nearest(&series, 160.0), Some((200.0, 3.0)));
        assert_eq!(nearest(&[], 10.0), None);
    }

    #[test]
    fn test_text_plot_smoke() {
        let series = [(0.0, 410.0), (100.0, 455.0), (200.0, 402.0)];
        let obstruction = ObstructionGeometry::new(100.0, 100.0, 49.0).unwrap();
        TextPlot::new(64, 32).render(&series, Some(&obstruction));
        TextPlot::default().render(&[], None);
    }
}
