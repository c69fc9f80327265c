//! Power-law spectrum with random phases (Spectral Representation Method).
//!
//! Each wavevector gets amplitude `k^−(H+1)`, so power `|F|² ∝ k^−2(H+1)`,
//! the PSD of a self-affine surface with fractal dimension `D = 3 − H`.
//! Phases are uniform on [0, 2π) from a `RandomStream`.
pub mod anisotropic;
pub mod hermitian;

use std::f64::consts::PI;

use crate::grid::ComplexField;
use crate::rng::RandomStream;

pub use hermitian::{enforce_hermitian, is_hermitian};

/// Cells with scaled `k²` below this are treated as DC and left at zero.
pub const DC_THRESHOLD: f64 = 1e-30;

/// Geometry and shape of the target spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralShape {
    pub nx: usize,
    pub ny: usize,
    /// Physical domain length along x.
    pub lx: f64,
    /// Physical domain length along y.
    pub ly: f64,
    /// Hurst exponent.
    pub hurst: f64,
    /// Stretch factor on the rotated x component.
    pub ax: f64,
    /// Stretch factor on the rotated y component.
    pub ay: f64,
    /// Rotation angle in radians.
    pub theta: f64,
}

/// Wavenumbers in FFT-natural order: `[0, 1, …, h, h+1−n, …, −1] · 2π/L`,
/// with `h = n / 2`.
pub fn wavenumber_axis(n: usize, length: f64) -> Vec<f64> {
    let dk = 2.0 * PI / length;
    let h = n / 2;
    (0..n)
        .map(|i| {
            let f = if i <= h { i as f64 } else { i as f64 - n as f64 };
            f * dk
        })
        .collect()
}

/// Fill a fresh complex field with power-law amplitudes and random phases.
///
/// Draws one phase per non-DC cell in row-major order; the DC cell consumes
/// no draw.  The result is not yet symmetric: pass it through
/// [`enforce_hermitian`] before the inverse transform.
pub fn build_spectrum(shape: &SpectralShape, rng: &mut RandomStream) -> ComplexField {
    let kx = wavenumber_axis(shape.nx, shape.lx);
    let ky = wavenumber_axis(shape.ny, shape.ly);
    let alpha = shape.hurst + 1.0;
    let mut field = ComplexField::zeros(shape.nx, shape.ny);

    for (j, &kyj) in ky.iter().enumerate() {
        for (i, &kxi) in kx.iter().enumerate() {
            let k2 = anisotropic::scaled_k2(kxi, kyj, shape.theta, shape.ax, shape.ay);
            if k2 < DC_THRESHOLD {
                continue;
            }
            let k = k2.sqrt();
            let amp = k.powf(-alpha);
            let phi = 2.0 * PI * rng.next_f64();
            field.set(j, i, amp * phi.cos(), amp * phi.sin());
        }
    }
    field
}
