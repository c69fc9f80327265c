use serde::{Deserialize, Serialize};

/// A 2D grid of `f64` values, row-major.
/// Row index runs along Y, column index along X.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Row-major values, length `nx * ny`.
    pub data: Vec<f64>,
    pub nx: usize,
    pub ny: usize,
}

impl Grid {
    /// Create a new Grid filled with the given value.
    pub fn new(nx: usize, ny: usize, fill: f64) -> Self {
        Self { data: vec![fill; nx * ny], nx, ny }
    }

    /// Create a zero-filled Grid.
    pub fn zeros(nx: usize, ny: usize) -> Self {
        Self::new(nx, ny, 0.0)
    }

    /// Wrap an existing row-major buffer. Returns `None` on a length mismatch.
    pub fn from_vec(nx: usize, ny: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == nx * ny).then_some(Self { data, nx, ny })
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.nx + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f64) {
        self.data[row * self.nx + col] = val;
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.nx..(row + 1) * self.nx]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        &mut self.data[row * self.nx..(row + 1) * self.nx]
    }

    /// Copy out column `col` as a contiguous vector (length `ny`).
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.ny).map(|r| self.get(r, col)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.nx.max(1))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn min_value(&self) -> f64 {
        self.data.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn max_value(&self) -> f64 {
        self.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Complex wavenumber-domain field stored as two co-indexed real grids.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexField {
    pub re: Grid,
    pub im: Grid,
}

impl ComplexField {
    pub fn zeros(nx: usize, ny: usize) -> Self {
        Self { re: Grid::zeros(nx, ny), im: Grid::zeros(nx, ny) }
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.re.nx
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.re.ny
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> (f64, f64) {
        (self.re.get(row, col), self.im.get(row, col))
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, re: f64, im: f64) {
        self.re.set(row, col, re);
        self.im.set(row, col, im);
    }

    /// Squared magnitude `re² + im²` at a cell.
    #[inline]
    pub fn power(&self, row: usize, col: usize) -> f64 {
        let (re, im) = self.get(row, col);
        re * re + im * im
    }
}
