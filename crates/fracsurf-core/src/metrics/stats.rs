//! Areal height parameters of a surface (ISO 25178 style names).
use serde::Serialize;

use crate::grid::Grid;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SurfaceStats {
    pub mean: f64,
    /// Root-mean-square deviation from the mean (Sq).
    pub sq: f64,
    /// Arithmetic mean absolute deviation (Sa).
    pub sa: f64,
    pub min: f64,
    pub max: f64,
    /// Peak-to-valley height (Sz).
    pub sz: f64,
    /// Skewness (Ssk). NaN for a flat surface.
    pub ssk: f64,
    /// Kurtosis (Sku). NaN for a flat surface.
    pub sku: f64,
}

/// Compute height statistics over every cell of `z`.
pub fn compute_stats(z: &Grid) -> SurfaceStats {
    let n = z.len().max(1) as f64;
    let mean = z.data.iter().sum::<f64>() / n;

    let (mut m2, mut m3, mut m4, mut abs) = (0.0, 0.0, 0.0, 0.0);
    for &v in &z.data {
        let d = v - mean;
        let d2 = d * d;
        abs += d.abs();
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    m2 /= n;
    m3 /= n;
    m4 /= n;

    let sq = m2.sqrt();
    let (ssk, sku) = if sq < 1e-300 {
        (f64::NAN, f64::NAN)
    } else {
        (m3 / (sq * sq * sq), m4 / (m2 * m2))
    };
    let min = z.min_value();
    let max = z.max_value();

    SurfaceStats { mean, sq, sa: abs / n, min, max, sz: max - min, ssk, sku }
}
