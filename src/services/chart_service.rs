use std::path::Path;

use plotters::prelude::*;
use rand::Rng;
use tracing::debug;

use crate::models::{HistogramBin, SimulationParams};

const TITLE: &str = "Monte Carlo Simulation - Return Distribution (5000 simulations)";
const X_DESC: &str = "Final Portfolio Value (USD)";
const Y_DESC: &str = "Frequency";

const PAPER_BG: RGBColor = RGBColor(0x0f, 0x16, 0x20);
const PLOT_BG: RGBColor = RGBColor(0x1a, 0x24, 0x30);
const TEXT: RGBColor = RGBColor(0xe0, 0xe0, 0xe0);
const GRID: RGBColor = RGBColor(0x2a, 0x36, 0x44);
const BAR: RGBColor = RGBColor(0x00, 0xcc, 0xff);

/// Fraction of each bin's width left empty between bars
const BAR_GAP: f64 = 0.1;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("no samples to plot")]
    Empty,
    #[error("{0}")]
    Render(String),
}

/// Draw `count` samples of `mean + std * U * sign` with `U` uniform on
/// `[0, 1)` and a fair random sign. Every sample lies in `[mean - std, mean + std]`.
///
/// This is a signed uniform perturbation, not a normal distribution.
pub fn generate_samples<R: Rng + ?Sized>(rng: &mut R, params: &SimulationParams) -> Vec<f64> {
    (0..params.sample_count)
        .map(|_| {
            let magnitude: f64 = rng.gen();
            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            params.mean + params.std * magnitude * sign
        })
        .collect()
}

/// Split samples into `bin_count` equal-width bins spanning their range
pub fn bin_samples(samples: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if samples.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if max > min { (max - min) / bin_count as f64 } else { 1.0 };

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for &sample in samples {
        let index = (((sample - min) / width) as usize).min(bin_count - 1);
        bins[index].count += 1;
    }

    bins
}

/// Render the histogram as a PNG at `path`
pub fn render_histogram(bins: &[HistogramBin], path: &Path, width: u32, height: u32) -> Result<(), ChartError> {
    let (first, last) = match (bins.first(), bins.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ChartError::Empty),
    };

    let x_min = first.lower;
    let x_max = last.upper;
    let y_max = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64 * 1.1;

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&PAPER_BG)
        .map_err(|e| ChartError::Render(format!("Failed to fill canvas: {}", e)))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 26.0).into_font().color(&TEXT))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)
        .map_err(|e| ChartError::Render(format!("Failed to build chart: {}", e)))?;

    chart
        .plotting_area()
        .fill(&PLOT_BG)
        .map_err(|e| ChartError::Render(format!("Failed to fill plot area: {}", e)))?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .axis_style(&TEXT)
        .light_line_style(&GRID)
        .bold_line_style(&GRID)
        .label_style(("sans-serif", 14.0).into_font().color(&TEXT))
        .axis_desc_style(("sans-serif", 16.0).into_font().color(&TEXT))
        .draw()
        .map_err(|e| ChartError::Render(format!("Failed to draw mesh: {}", e)))?;

    chart
        .draw_series(bins.iter().map(|bin| {
            let gap = (bin.upper - bin.lower) * BAR_GAP / 2.0;
            Rectangle::new(
                [(bin.lower + gap, 0.0), (bin.upper - gap, bin.count as f64)],
                BAR.filled(),
            )
        }))
        .map_err(|e| ChartError::Render(format!("Failed to draw bars: {}", e)))?;

    root.present()
        .map_err(|e| ChartError::Render(format!("Failed to render chart: {}", e)))?;

    Ok(())
}

/// Simulate the return distribution and write its histogram to `path`
pub fn generate_chart(params: &SimulationParams, path: &Path, width: u32, height: u32) -> Result<(), ChartError> {
    let samples = generate_samples(&mut rand::thread_rng(), params);
    let bins = bin_samples(&samples, params.bin_count);
    debug!("Generated {} samples into {} bins", samples.len(), bins.len());

    render_histogram(&bins, path, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_count_and_bounds() {
        let params = SimulationParams::default();
        let mut rng = rand::thread_rng();

        for _ in 0..5 {
            let samples = generate_samples(&mut rng, &params);
            assert_eq!(samples.len(), 5000);
            assert!(samples
                .iter()
                .all(|&s| s >= params.mean - params.std && s <= params.mean + params.std));
        }
    }

    #[test]
    fn test_samples_fall_on_both_sides_of_mean() {
        let params = SimulationParams::default();
        let samples = generate_samples(&mut StdRng::seed_from_u64(7), &params);

        assert!(samples.iter().any(|&s| s < params.mean));
        assert!(samples.iter().any(|&s| s > params.mean));
    }

    #[test]
    fn test_bins_cover_all_samples() {
        let params = SimulationParams::default();
        let samples = generate_samples(&mut StdRng::seed_from_u64(42), &params);
        let bins = bin_samples(&samples, params.bin_count);

        assert_eq!(bins.len(), 50);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 5000);
        for pair in bins.windows(2) {
            assert!((pair[0].upper - pair[1].lower).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bin_edges() {
        let bins = bin_samples(&[0.0, 1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[1].upper, 4.0);
        assert_eq!(bins[0].count, 2);
        assert_eq!(bins[1].count, 3);
    }

    #[test]
    fn test_identical_samples_share_one_bin() {
        let bins = bin_samples(&[5.0, 5.0, 5.0], 4);
        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].count, 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(bin_samples(&[], 50).is_empty());
        let err = render_histogram(&[], Path::new("unused.png"), 10, 10).unwrap_err();
        assert!(matches!(err, ChartError::Empty));
    }
}
