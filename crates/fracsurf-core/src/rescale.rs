use crate::grid::Grid;

/// Floor on the sample variance; keeps a flat field from dividing by zero.
pub const VARIANCE_FLOOR: f64 = 1e-20;

/// Shift `z` to zero mean and scale it to standard deviation `target_std`.
///
/// Mean and second moment are accumulated row-major over all cells; the
/// population variance `E[z²] − m²` is floored at [`VARIANCE_FLOOR`].
pub fn rescale(z: &mut Grid, target_std: f64) {
    if z.is_empty() {
        return;
    }
    let n = z.len() as f64;
    let mut s = 0.0;
    let mut s2 = 0.0;
    for &v in &z.data {
        s += v;
        s2 += v * v;
    }
    let m = s / n;
    let sd = (s2 / n - m * m).max(VARIANCE_FLOOR).sqrt();
    let r = target_std / sd;
    for v in z.data.iter_mut() {
        *v = (*v - m) * r;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn output_has_zero_mean_and_target_std() {
        let data: Vec<f64> = (0..64).map(|t| (t as f64 * 0.4).sin() * 5.0 + 3.0).collect();
        let mut g = Grid::from_vec(8, 8, data).unwrap();
        rescale(&mut g, 0.25);
        let n = g.len() as f64;
        let mean = g.data.iter().sum::<f64>() / n;
        let var = g.data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        assert!(mean.abs() < 1e-12);
        assert_relative_eq!(var.sqrt(), 0.25, max_relative = 1e-9);
    }

    #[test]
    fn flat_field_stays_finite() {
        let mut g = Grid::new(4, 4, 2.5);
        rescale(&mut g, 1.0);
        assert!(g.data.iter().all(|v| v.is_finite() && *v == 0.0));
    }

    #[test]
    fn zero_sigma_flattens() {
        let data: Vec<f64> = (0..16).map(|t| t as f64).collect();
        let mut g = Grid::from_vec(4, 4, data).unwrap();
        rescale(&mut g, 0.0);
        assert!(g.data.iter().all(|&v| v == 0.0));
    }
}
