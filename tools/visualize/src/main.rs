//! Diagnostic visualizer — writes grayscale PNG previews to data/debug/.
//! One image per generator, plus a rotated anisotropic case and a
//! low/high fractal-dimension pair.  Not part of the main pipeline.

use std::fs;
use std::path::Path;

use fracsurf_core::{generate_surface, Grid, RngKind, SurfaceParams};

const N: usize = 512;

// ── Colour helpers ────────────────────────────────────────────────────────────

/// Height → grayscale, stretched over ±3σ (black = valleys, white = peaks).
fn gray(v: f64, sigma: f64) -> u8 {
    let t = ((v / (3.0 * sigma) + 1.0) * 0.5).clamp(0.0, 1.0);
    (t * 255.0).round() as u8
}

fn save_png(z: &Grid, sigma: f64, path: &Path) {
    let mut img = image::GrayImage::new(z.nx as u32, z.ny as u32);
    for r in 0..z.ny {
        for c in 0..z.nx {
            img.put_pixel(c as u32, r as u32, image::Luma([gray(z.get(r, c), sigma)]));
        }
    }
    img.save(path).unwrap_or_else(|e| panic!("failed to save {}: {e}", path.display()));
    println!("Wrote {}", path.display());
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let base = SurfaceParams { nx: N, ny: N, ..SurfaceParams::default() };

    let out_dir = Path::new("data/debug");
    fs::create_dir_all(out_dir).expect("cannot create data/debug/");

    // ── 1. one surface per generator ─────────────────────────────────────────
    for kind in RngKind::ALL {
        println!("Generating {kind} ({N}×{N})…");
        let params = SurfaceParams { rng_kind: kind, ..base.clone() };
        let surface = generate_surface(&params).expect("default params are valid");
        save_png(&surface.z, params.sigma, &out_dir.join(format!("surface_{kind}.png")));
    }

    // ── 2. anisotropic, rotated 30° ──────────────────────────────────────────
    {
        let params = SurfaceParams { anisotropy: 4.0, theta_deg: 30.0, ..base.clone() };
        let surface = generate_surface(&params).expect("anisotropic params are valid");
        save_png(&surface.z, params.sigma, &out_dir.join("anisotropic_30deg.png"));
    }

    // ── 3. smooth vs rough ───────────────────────────────────────────────────
    for (label, dimension) in [("smooth", 2.1), ("rough", 2.8)] {
        let params = SurfaceParams { dimension, ..base.clone() };
        let surface = generate_surface(&params).expect("dimension in (2, 3)");
        save_png(&surface.z, params.sigma, &out_dir.join(format!("dimension_{label}.png")));
    }

    println!("Done.");
}
