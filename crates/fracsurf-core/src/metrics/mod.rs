pub mod hurst;
pub mod psd;
pub mod stats;

pub use hurst::{compute_hurst, HurstResult};
pub use psd::{fit_psd_slope, nyquist, radial_psd, PsdFit, RadialBin};
pub use stats::{compute_stats, SurfaceStats};

/// Least-squares line through `(xs, ys)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineFit {
    pub slope: f64,
    pub r_squared: f64,
}

/// OLS fit `y = slope · x + c`; R² = 1 − SS_res / SS_tot.
pub(crate) fn fit_line(xs: &[f64], ys: &[f64]) -> LineFit {
    let n = xs.len() as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xx: f64 = xs.iter().map(|x| x * x).sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();

    let denom = n * sum_xx - sum_x * sum_x;
    let slope = if denom.abs() < 1e-12 { 0.0 } else { (n * sum_xy - sum_x * sum_y) / denom };
    let intercept = (sum_y - slope * sum_x) / n;

    let y_mean = sum_y / n;
    let ss_tot: f64 = ys.iter().map(|y| (y - y_mean).powi(2)).sum();
    let ss_res: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (y - (slope * x + intercept)).powi(2))
        .sum();
    let r_squared = if ss_tot < 1e-12 { 0.0 } else { 1.0 - ss_res / ss_tot };

    LineFit { slope, r_squared }
}
