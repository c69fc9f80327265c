//! Radix-2 iterative Cooley–Tukey FFT on split real/imaginary buffers.
//!
//! Forward is unnormalised; inverse divides by `n`.  The 2D transforms are
//! separable: every row, then every column of the intermediate result.
//! With the `threading` feature the row and column passes run on rayon; each
//! 1D transform is still evaluated in the same order, so results are
//! bit-identical to the serial path.
use std::f64::consts::PI;

use crate::error::TransformError;
use crate::grid::{ComplexField, Grid};

#[cfg(feature = "threading")]
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Bit-reversal permutation for a power-of-two length `n`.
pub fn bit_reverse_table(n: usize) -> Vec<usize> {
    let bits = n.trailing_zeros();
    (0..n)
        .map(|i| {
            let mut x = i;
            let mut y = 0usize;
            for _ in 0..bits {
                y = (y << 1) | (x & 1);
                x >>= 1;
            }
            y
        })
        .collect()
}

/// Precomputed state for transforms of one length.
#[derive(Debug, Clone)]
pub struct Radix2Plan {
    n: usize,
    rev: Vec<usize>,
}

impl Radix2Plan {
    pub fn new(n: usize) -> Result<Self, TransformError> {
        if !n.is_power_of_two() {
            return Err(TransformError::LengthNotPowerOfTwo(n));
        }
        Ok(Self { n, rev: bit_reverse_table(n) })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Transform `re + i·im` in place.  Both slices must have length `n`.
    pub fn process(&self, re: &mut [f64], im: &mut [f64], dir: Direction) {
        let n = self.n;
        debug_assert_eq!(re.len(), n);
        debug_assert_eq!(im.len(), n);

        for i in 0..n {
            let j = self.rev[i];
            if j > i {
                re.swap(i, j);
                im.swap(i, j);
            }
        }

        let sign = match dir {
            Direction::Forward => 2.0,
            Direction::Inverse => -2.0,
        };
        let mut len = 2;
        while len <= n {
            let ang = (sign * PI) / len as f64;
            let wr = ang.cos();
            let wi = ang.sin();
            let half = len >> 1;
            for start in (0..n).step_by(len) {
                let mut ur = 1.0;
                let mut ui = 0.0;
                for j in 0..half {
                    let a = start + j;
                    let b = a + half;
                    let ar = re[a];
                    let ai = im[a];
                    let br = re[b] * ur - im[b] * ui;
                    let bi = re[b] * ui + im[b] * ur;
                    re[a] = ar + br;
                    im[a] = ai + bi;
                    re[b] = ar - br;
                    im[b] = ai - bi;
                    let tr = ur * wr - ui * wi;
                    ui = ur * wi + ui * wr;
                    ur = tr;
                }
            }
            len <<= 1;
        }

        if dir == Direction::Inverse {
            let nf = n as f64;
            for v in re.iter_mut() {
                *v /= nf;
            }
            for v in im.iter_mut() {
                *v /= nf;
            }
        }
    }
}

/// One-shot 1D transform.  Allocates a plan; prefer [`Radix2Plan`] in loops.
pub fn fft1d(re: &mut [f64], im: &mut [f64], dir: Direction) -> Result<(), TransformError> {
    let plan = Radix2Plan::new(re.len())?;
    plan.process(re, im, dir);
    Ok(())
}

/// Apply `plan` to every row of `re`/`im` (row length = `plan.len()`).
#[cfg(feature = "threading")]
fn transform_rows(plan: &Radix2Plan, re: &mut [f64], im: &mut [f64], dir: Direction) {
    let n = plan.len();
    re.par_chunks_mut(n)
        .zip(im.par_chunks_mut(n))
        .for_each(|(r, i)| plan.process(r, i, dir));
}

#[cfg(not(feature = "threading"))]
fn transform_rows(plan: &Radix2Plan, re: &mut [f64], im: &mut [f64], dir: Direction) {
    let n = plan.len();
    for (r, i) in re.chunks_mut(n).zip(im.chunks_mut(n)) {
        plan.process(r, i, dir);
    }
}

fn transpose(src: &[f64], rows: usize, cols: usize) -> Vec<f64> {
    let mut out = vec![0.0; src.len()];
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = src[r * cols + c];
        }
    }
    out
}

/// Rows then columns, returning the full complex result.
fn transform2d(field: &ComplexField, dir: Direction) -> Result<ComplexField, TransformError> {
    let nx = field.nx();
    let ny = field.ny();
    let row_plan = Radix2Plan::new(nx)?;
    let col_plan = Radix2Plan::new(ny)?;

    let mut re = field.re.data.clone();
    let mut im = field.im.data.clone();
    transform_rows(&row_plan, &mut re, &mut im, dir);

    // Columns become contiguous rows of length ny.
    let mut re_t = transpose(&re, ny, nx);
    let mut im_t = transpose(&im, ny, nx);
    transform_rows(&col_plan, &mut re_t, &mut im_t, dir);

    Ok(ComplexField {
        re: Grid { data: transpose(&re_t, nx, ny), nx, ny },
        im: Grid { data: transpose(&im_t, nx, ny), nx, ny },
    })
}

/// Separable 2D inverse transform; returns only the real part.
///
/// The imaginary part vanishes for a conjugate-symmetric input and is
/// discarded without being checked.
pub fn ifft2(field: &ComplexField) -> Result<Grid, TransformError> {
    Ok(transform2d(field, Direction::Inverse)?.re)
}

/// Separable 2D forward transform of a complex field.
pub fn fft2_complex(field: &ComplexField) -> Result<ComplexField, TransformError> {
    transform2d(field, Direction::Forward)
}

/// Separable 2D forward transform of a real grid.
pub fn fft2(z: &Grid) -> Result<ComplexField, TransformError> {
    let field = ComplexField { re: z.clone(), im: Grid::zeros(z.nx, z.ny) };
    transform2d(&field, Direction::Forward)
}
