//! Radially averaged power spectral density and its log-log slope.
//!
//! For a self-affine surface with Hurst exponent H the 2D PSD falls as
//! `k^−2(H+1)`; the slope of `log P` against `log k` recovers H.
use serde::Serialize;

use super::fit_line;
use crate::grid::ComplexField;
use crate::spectrum::wavenumber_axis;

/// One annulus of the radial average.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RadialBin {
    /// Mean `|k|` of the cells in the bin.
    pub k: f64,
    /// Mean `|F|²` of the cells in the bin.
    pub power: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PsdFit {
    pub slope: f64,
    pub r_squared: f64,
    /// Number of bins inside the fit window.
    pub bins: usize,
}

impl PsdFit {
    /// Hurst exponent implied by the slope, `H = −slope / 2 − 1`.
    pub fn hurst(&self) -> f64 {
        -self.slope / 2.0 - 1.0
    }
}

/// Average `|F|²` over annuli of width `2π / max(lx, ly)`; DC is excluded and
/// empty annuli are dropped.  Bins are ordered by increasing `k`.
pub fn radial_psd(field: &ComplexField, lx: f64, ly: f64) -> Vec<RadialBin> {
    let kx = wavenumber_axis(field.nx(), lx);
    let ky = wavenumber_axis(field.ny(), ly);
    let dk = 2.0 * std::f64::consts::PI / lx.max(ly);

    let k_max = kx.iter().map(|k| k.abs()).fold(0.0, f64::max).hypot(
        ky.iter().map(|k| k.abs()).fold(0.0, f64::max),
    );
    let n_bins = (k_max / dk).round() as usize + 1;
    let mut k_sum = vec![0.0; n_bins];
    let mut p_sum = vec![0.0; n_bins];
    let mut count = vec![0usize; n_bins];

    for (j, &kyj) in ky.iter().enumerate() {
        for (i, &kxi) in kx.iter().enumerate() {
            if i == 0 && j == 0 {
                continue;
            }
            let k = kxi.hypot(kyj);
            let b = ((k / dk).round() as usize).min(n_bins - 1);
            k_sum[b] += k;
            p_sum[b] += field.power(j, i);
            count[b] += 1;
        }
    }

    (0..n_bins)
        .filter(|&b| count[b] > 0)
        .map(|b| RadialBin {
            k: k_sum[b] / count[b] as f64,
            power: p_sum[b] / count[b] as f64,
            count: count[b],
        })
        .collect()
}

/// OLS fit of `log P = slope · log k + c` over bins with `k_lo <= k <= k_hi`.
///
/// Bins with zero power are skipped.  Returns `None` if fewer than two bins
/// remain.
pub fn fit_psd_slope(bins: &[RadialBin], k_lo: f64, k_hi: f64) -> Option<PsdFit> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = bins
        .iter()
        .filter(|b| b.k >= k_lo && b.k <= k_hi && b.power > 0.0)
        .map(|b| (b.k.ln(), b.power.ln()))
        .unzip();
    if xs.len() < 2 {
        return None;
    }
    let line = fit_line(&xs, &ys);
    Some(PsdFit { slope: line.slope, r_squared: line.r_squared, bins: xs.len() })
}

/// Nyquist wavenumber `π · n / L` of one axis.
pub fn nyquist(n: usize, length: f64) -> f64 {
    std::f64::consts::PI * n as f64 / length
}
