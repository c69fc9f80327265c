//! Batch spectral validation.
//! Generates many surfaces for one configuration (seeds drawn from a seeded
//! StdRng), measures the PSD slope and variogram Hurst exponent of each, and
//! aggregates mean/std/p10/p90 per generator.  Output: JSON report.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use fracsurf_core::fft::fft2;
use fracsurf_core::metrics::{compute_hurst, fit_psd_slope, nyquist, radial_psd};
use fracsurf_core::{generate_surface, RngKind, SurfaceParams};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "spectral_check", about = "Measure PSD slope and Hurst exponent over many seeds")]
struct Args {
    /// Surfaces per generator.
    #[arg(short = 'n', long, default_value = "32")]
    count: usize,

    /// Seed for the StdRng that draws per-surface seeds.
    #[arg(long, default_value = "42")]
    base_seed: u64,

    /// Grid size (square, power of two).
    #[arg(long, default_value = "256")]
    size: usize,

    /// Fractal dimension.
    #[arg(short = 'D', long, default_value = "2.5")]
    dimension: f64,

    /// Only check this generator (omit for all three).
    #[arg(short, long)]
    rng: Option<String>,

    /// Lower edge of the PSD fit window as a fraction of Nyquist.
    #[arg(long, default_value = "0.1")]
    k_lo: f64,

    /// Upper edge of the PSD fit window as a fraction of Nyquist.
    #[arg(long, default_value = "0.6")]
    k_hi: f64,

    /// Output report path.
    #[arg(short, long, default_value = "data/spectral_check.json")]
    output: PathBuf,
}

// ── Output types ──────────────────────────────────────────────────────────────

#[derive(Serialize, Clone, Copy, Debug)]
struct Stats1 {
    mean: f64,
    std: f64,
    p10: f64,
    p90: f64,
}

#[derive(Serialize)]
struct KindReport {
    rng_kind: RngKind,
    n_surfaces: usize,
    expected_slope: f64,
    expected_hurst: f64,
    psd_slope: Stats1,
    psd_hurst: Stats1,
    variogram_hurst: Stats1,
}

#[derive(Serialize)]
struct Report {
    size: usize,
    dimension: f64,
    base_seed: u64,
    kinds: Vec<KindReport>,
}

struct SurfaceMetrics {
    psd_slope: Option<f64>,
    variogram_hurst: Option<f64>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Linearly interpolated quantile of already sorted samples.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

impl Stats1 {
    /// Summary of the finite samples; `None` when there are none.
    fn from_samples(samples: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut xs: Vec<f64> = samples.into_iter().filter(|v| v.is_finite()).collect();
        if xs.is_empty() {
            return None;
        }
        xs.sort_by(f64::total_cmp);
        let n = xs.len() as f64;
        let mean = xs.iter().sum::<f64>() / n;
        let var = xs.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        Some(Self { mean, std: var.sqrt(), p10: quantile(&xs, 0.1), p90: quantile(&xs, 0.9) })
    }
}

fn measure(params: &SurfaceParams, k_lo: f64, k_hi: f64) -> Result<SurfaceMetrics> {
    let surface = generate_surface(params)
        .with_context(|| format!("seed {} failed", params.seed))?;
    let spectrum = fft2(&surface.z)?;
    let bins = radial_psd(&spectrum, params.length, params.length);
    let ny = nyquist(params.nx.min(params.ny), params.length);
    let fit = fit_psd_slope(&bins, k_lo * ny, k_hi * ny);
    let h = compute_hurst(&surface.z).h;
    Ok(SurfaceMetrics {
        psd_slope: fit.map(|f| f.slope),
        variogram_hurst: (!h.is_nan()).then_some(h),
    })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    if !(args.k_lo < args.k_hi) {
        bail!("--k-lo ({}) must be below --k-hi ({})", args.k_lo, args.k_hi);
    }

    let kinds: Vec<RngKind> = match &args.rng {
        Some(name) => vec![RngKind::from_name(name)],
        None => RngKind::ALL.to_vec(),
    };

    let mut seed_rng = StdRng::seed_from_u64(args.base_seed);
    let seeds: Vec<i64> = (0..args.count).map(|_| seed_rng.gen_range(1..i64::from(i32::MAX))).collect();

    let hurst = 3.0 - args.dimension;
    let mut reports = Vec::new();

    eprintln!(
        "\n{:<12} {:>4} {:>10} {:>10} {:>10}",
        "Generator", "N", "PSD slope", "H (PSD)", "H (vario)"
    );
    eprintln!("{}", "-".repeat(50));

    for kind in kinds {
        let base = SurfaceParams {
            nx: args.size,
            ny: args.size,
            length: 1.0,
            dimension: args.dimension,
            sigma: 1.0,
            rng_kind: kind,
            ..SurfaceParams::default()
        };
        base.validate().context("invalid check configuration")?;

        let results: Vec<Result<SurfaceMetrics>> = seeds
            .par_iter()
            .map(|&seed| measure(&SurfaceParams { seed, ..base.clone() }, args.k_lo, args.k_hi))
            .collect();

        let mut metrics = Vec::with_capacity(results.len());
        for res in results {
            match res {
                Ok(m) => metrics.push(m),
                Err(e) => eprintln!("Warning: {e:#}"),
            }
        }

        let slopes = || metrics.iter().filter_map(|m| m.psd_slope);
        let (Some(psd_slope), Some(psd_hurst), Some(variogram_hurst)) = (
            Stats1::from_samples(slopes()),
            Stats1::from_samples(slopes().map(|s| -s / 2.0 - 1.0)),
            Stats1::from_samples(metrics.iter().filter_map(|m| m.variogram_hurst)),
        ) else {
            bail!("{kind}: no measurable surfaces");
        };

        eprintln!(
            "{:<12} {:>4} {:>10.3} {:>10.3} {:>10.3}",
            kind.as_str(), metrics.len(), psd_slope.mean, psd_hurst.mean, variogram_hurst.mean
        );

        reports.push(KindReport {
            rng_kind: kind,
            n_surfaces: metrics.len(),
            expected_slope: -2.0 * (hurst + 1.0),
            expected_hurst: hurst,
            psd_slope,
            psd_hurst,
            variogram_hurst,
        });
    }

    let report = Report {
        size: args.size,
        dimension: args.dimension,
        base_seed: args.base_seed,
        kinds: reports,
    };
    if let Some(dir) = args.output.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&args.output, serde_json::to_string_pretty(&report)?)
        .with_context(|| format!("cannot write {}", args.output.display()))?;
    eprintln!("\nWrote {}", args.output.display());
    Ok(())
}
