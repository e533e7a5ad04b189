//! Chart generation models

/// One bar of a histogram, covering `[lower, upper)` (the last bin is closed)
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Fixed parameters of the simulated return distribution
#[derive(Debug, Clone, Copy)]
pub struct SimulationParams {
    pub mean: f64,
    pub std: f64,
    pub sample_count: usize,
    pub bin_count: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            mean: 1000.0,
            std: 150.0,
            sample_count: 5000,
            bin_count: 50,
        }
    }
}
