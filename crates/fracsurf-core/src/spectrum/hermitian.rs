//! Conjugate symmetry so the inverse transform is real.
use crate::grid::ComplexField;

/// Force `F(−k) = conj(F(k))` in place and zero the origin cell.
///
/// Cells are visited row-major; each one (except the origin) overwrites its
/// mirror `((ny − j) mod ny, (nx − i) mod nx)` with its conjugate.  When the
/// mirror comes up later it writes the same relationship back, so each pair
/// ends up as `(F, conj F)` with `F` the value seen first.  Self-conjugate
/// cells (Nyquist rows/columns) get a zero imaginary part.
pub fn enforce_hermitian(field: &mut ComplexField) {
    let nx = field.nx();
    let ny = field.ny();
    for j in 0..ny {
        for i in 0..nx {
            if i == 0 && j == 0 {
                continue;
            }
            let jj = (ny - j) % ny;
            let ii = (nx - i) % nx;
            let (re, im) = field.get(j, i);
            if jj == j && ii == i {
                field.set(j, i, re, 0.0);
            } else {
                field.set(jj, ii, re, -im);
            }
        }
    }
    field.set(0, 0, 0.0, 0.0);
}

/// True when every cell satisfies the conjugate relation with its mirror and
/// the origin is exactly zero.
pub fn is_hermitian(field: &ComplexField) -> bool {
    let nx = field.nx();
    let ny = field.ny();
    if field.get(0, 0) != (0.0, 0.0) {
        return false;
    }
    (0..ny).all(|j| {
        (0..nx).all(|i| {
            let (re, im) = field.get(j, i);
            let (mre, mim) = field.get((ny - j) % ny, (nx - i) % nx);
            mre == re && mim == -im
        })
    })
}
