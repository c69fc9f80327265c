//! Command-line front end: generate a fractal rough surface, write it as
//! `{Z, meta}` JSON and optionally as an ASCII STL mesh.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fracsurf_core::metrics::compute_stats;
use fracsurf_core::stl::write_ascii_stl;
use fracsurf_core::{generate_surface, RngKind, SurfaceParams};

#[derive(Parser, Debug)]
#[command(name = "fracsurf", about = "Synthesise self-affine fractal rough surfaces (SRM)")]
struct Args {
    /// JSON configuration file (keys: nx, ny, L, D, sigma, anisotropy, thetaDeg, rngKind, seed).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid columns (power of two).
    #[arg(long)]
    nx: Option<usize>,

    /// Grid rows (power of two).
    #[arg(long)]
    ny: Option<usize>,

    /// Domain side length.
    #[arg(short = 'L', long)]
    length: Option<f64>,

    /// Fractal dimension, 2 < D < 3.
    #[arg(short = 'D', long)]
    dimension: Option<f64>,

    /// Target RMS height.
    #[arg(short, long)]
    sigma: Option<f64>,

    /// Stretch factor along x.
    #[arg(short, long)]
    anisotropy: Option<f64>,

    /// Rotation angle in degrees.
    #[arg(short, long, allow_negative_numbers = true)]
    theta_deg: Option<f64>,

    /// Generator: parkmiller, baysdurham or lecuyer.
    #[arg(short, long)]
    rng: Option<String>,

    /// Random seed.
    #[arg(long, allow_negative_numbers = true, conflicts_with = "random_seed")]
    seed: Option<i64>,

    /// Draw a fresh seed instead of using the configured one.
    #[arg(long)]
    random_seed: bool,

    /// Output JSON path.
    #[arg(short, long, default_value = "surface.json")]
    output: PathBuf,

    /// Also write an ASCII STL mesh to this path.
    #[arg(long)]
    stl: Option<PathBuf>,

    /// Solid name in the STL header.
    #[arg(long, default_value = "surface")]
    name: String,

    /// Debug-level logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Defaults ← config file ← flags.
    fn resolve_params(&self) -> Result<SurfaceParams> {
        let mut params = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("cannot read config {}", path.display()))?;
                SurfaceParams::from_json_str(&text)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => SurfaceParams::default(),
        };

        if let Some(v) = self.nx {
            params.nx = v;
        }
        if let Some(v) = self.ny {
            params.ny = v;
        }
        if let Some(v) = self.length {
            params.length = v;
        }
        if let Some(v) = self.dimension {
            params.dimension = v;
        }
        if let Some(v) = self.sigma {
            params.sigma = v;
        }
        if let Some(v) = self.anisotropy {
            params.anisotropy = v;
        }
        if let Some(v) = self.theta_deg {
            params.theta_deg = v;
        }
        if let Some(name) = &self.rng {
            params.rng_kind = RngKind::from_name(name);
        }
        if let Some(v) = self.seed {
            params.seed = v;
        }
        if self.random_seed {
            params.seed = rand::thread_rng().gen_range(0..i64::from(i32::MAX));
        }
        Ok(params)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let params = args.resolve_params()?;
    debug!(?params, "resolved configuration");

    let result = generate_surface(&params).context("surface generation failed")?;
    info!(
        nx = params.nx,
        ny = params.ny,
        D = params.dimension,
        rng = %params.rng_kind,
        seed = params.seed,
        "generated surface"
    );

    let json = result.to_json().context("cannot serialise surface")?;
    fs::write(&args.output, json)
        .with_context(|| format!("cannot write {}", args.output.display()))?;
    info!("wrote {}", args.output.display());

    if let Some(path) = &args.stl {
        let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        let mut w = BufWriter::new(file);
        write_ascii_stl(&mut w, &result.z, params.length, params.length, &args.name)
            .with_context(|| format!("cannot write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    let s = compute_stats(&result.z);
    println!(
        "Sq={:.6e} Sa={:.6e} Sz={:.6e} Ssk={:.4} Sku={:.4}",
        s.sq, s.sa, s.sz, s.ssk, s.sku
    );
    Ok(())
}
