//! Pipeline orchestrator: config → phases → symmetry → inverse FFT → rescale.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::SurfaceError;
use crate::fft::ifft2;
use crate::grid::Grid;
use crate::params::SurfaceParams;
use crate::rescale::rescale;
use crate::rng::{RandomStream, RngKind};
use crate::spectrum::{build_spectrum, enforce_hermitian, SpectralShape};

/// Stretch factor on the y axis; only x is user-controlled.
pub const ANISOTROPY_Y: f64 = 1.0;

/// How a surface was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceMeta {
    pub nx: usize,
    pub ny: usize,
    #[serde(rename = "L")]
    pub length: f64,
    #[serde(rename = "D")]
    pub dimension: f64,
    #[serde(rename = "H")]
    pub hurst: f64,
    pub sigma: f64,
    pub anisotropy: f64,
    #[serde(rename = "thetaDeg")]
    pub theta_deg: f64,
    #[serde(rename = "rngKind")]
    pub rng_kind: RngKind,
    pub seed: i64,
}

/// Height field plus metadata.  Serialises as `{"Z": [[..], ..], "meta": {..}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceResult {
    #[serde(rename = "Z", serialize_with = "serialize_rows")]
    pub z: Grid,
    pub meta: SurfaceMeta,
}

fn serialize_rows<S: Serializer>(grid: &Grid, s: S) -> Result<S::Ok, S::Error> {
    let mut seq = s.serialize_seq(Some(grid.ny))?;
    for row in grid.rows() {
        seq.serialize_element(row)?;
    }
    seq.end()
}

impl SurfaceResult {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Generate one self-affine rough surface.
///
/// The configuration is validated before anything is allocated; an invalid
/// one returns `SurfaceError::Config` and no partial result.  Identical
/// configurations give bit-identical output.
pub fn generate_surface(params: &SurfaceParams) -> Result<SurfaceResult, SurfaceError> {
    params.validate()?;

    let hurst = params.hurst();
    let shape = SpectralShape {
        nx: params.nx,
        ny: params.ny,
        lx: params.length,
        ly: params.length,
        hurst,
        ax: params.anisotropy,
        ay: ANISOTROPY_Y,
        theta: params.theta_rad(),
    };
    let mut rng = RandomStream::new(params.rng_kind, params.seed);

    debug!(nx = shape.nx, ny = shape.ny, hurst, rng = %params.rng_kind, "building spectrum");
    let mut field = build_spectrum(&shape, &mut rng);
    enforce_hermitian(&mut field);

    debug!("inverse transform");
    let mut z = ifft2(&field)?;
    rescale(&mut z, params.sigma);

    Ok(SurfaceResult {
        z,
        meta: SurfaceMeta {
            nx: params.nx,
            ny: params.ny,
            length: params.length,
            dimension: params.dimension,
            hurst,
            sigma: params.sigma,
            anisotropy: params.anisotropy,
            theta_deg: params.theta_deg,
            rng_kind: params.rng_kind,
            seed: params.seed,
        },
    })
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn small(rng_kind: RngKind) -> SurfaceParams {
        SurfaceParams {
            nx: 64,
            ny: 32,
            length: 1.0,
            dimension: 2.3,
            sigma: 0.5,
            anisotropy: 1.0,
            theta_deg: 0.0,
            rng_kind,
            seed: 42,
        }
    }

    /// Reference grid for nx = ny = 8, L = 1, D = 2.5, sigma = 1, parkmiller, seed 42.
    #[rustfmt::skip]
    const GOLDEN_8X8: [f64; 64] = [
        0.6184706254761455, 0.9030761264251047, 0.5048600255689973, -0.31156345202880936, -0.428915560722501, -0.18033925273854925, 1.3974724052381604, 1.1195357450623724,
        1.2066084814204259, 1.6249558710931469, -0.4532818155766472, -0.7848951701440272, -0.831250665261339, -1.2290857012138132, 1.0677580583504278, 1.8905334360455899,
        2.099193006787853, 1.0089144292231274, 0.2294862873199486, 0.3884671170483091, -0.09472064873934019, -1.2627353173458533, 0.25652598153134404, 2.4436894587524187,
        2.1825273436854022, 0.925562341905273, 1.1321337544884011, -0.06821954684497676, -0.6741809288685303, -1.0593737308760514, 0.6378640425948602, 2.0775777280483108,
        0.1575590206891426, -0.08003692896768182, -0.22512463911885738, -1.3662088320729435, -1.0510414632198928, -0.8296411280176934, -0.037044358120323556, 0.6175585603365529,
        -0.8275177570078533, -1.4044622209765516, -1.18408667726266, -0.2947899616327643, -1.3753610710658577, -0.935035770218634, -0.3487559499876587, -0.28581009168781474,
        -0.9506976445375216, -0.009753414152756495, 0.3680307714074353, -0.343657983513583, -0.7438741647606631, -1.1451635781601732, -1.7901675020436885, -1.039073647128863,
        -0.9952064434046503, 0.3425788322183971, 0.6572240665596514, -0.29596160344428724, -0.7064705147758636, 0.04040083372818415, -0.05289291924000821, -0.20216629612530124,
    ];

    #[test]
    fn golden_8x8_parkmiller_seed42() {
        let params = SurfaceParams {
            nx: 8,
            ny: 8,
            length: 1.0,
            dimension: 2.5,
            sigma: 1.0,
            anisotropy: 1.0,
            theta_deg: 0.0,
            rng_kind: RngKind::ParkMiller,
            seed: 42,
        };
        let result = generate_surface(&params).unwrap();
        assert_eq!(result.meta.hurst, 0.5);
        for (idx, (&got, &want)) in result.z.data.iter().zip(GOLDEN_8X8.iter()).enumerate() {
            let tol = 1e-9 * want.abs().max(1.0);
            assert!(
                (got - want).abs() <= tol,
                "cell ({}, {}): got {got:.17e}, want {want:.17e}",
                idx / 8,
                idx % 8
            );
        }
    }

    #[test]
    fn identical_config_is_bit_identical() {
        for kind in RngKind::ALL {
            let a = generate_surface(&small(kind)).unwrap();
            let b = generate_surface(&small(kind)).unwrap();
            assert!(a.z.data.iter().zip(&b.z.data).all(|(x, y)| x.to_bits() == y.to_bits()));
        }
    }

    #[test]
    fn output_is_normalised() {
        for kind in RngKind::ALL {
            let p = small(kind);
            let r = generate_surface(&p).unwrap();
            assert_eq!((r.z.nx, r.z.ny), (64, 32));
            let n = r.z.len() as f64;
            let mean = r.z.data.iter().sum::<f64>() / n;
            let std = (r.z.data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
            assert!(mean.abs() < 1e-6 * p.sigma, "{kind}: mean={mean}");
            assert!((std - p.sigma).abs() < 1e-6 * p.sigma, "{kind}: std={std}");
        }
    }

    #[test]
    fn different_rngs_give_different_surfaces() {
        let a = generate_surface(&small(RngKind::ParkMiller)).unwrap();
        let b = generate_surface(&small(RngKind::BaysDurham)).unwrap();
        let c = generate_surface(&small(RngKind::Lecuyer)).unwrap();
        assert_ne!(a.z, b.z);
        assert_ne!(b.z, c.z);
    }

    #[test]
    fn rotation_and_anisotropy_change_output() {
        let base = generate_surface(&small(RngKind::ParkMiller)).unwrap();
        let rotated = generate_surface(&SurfaceParams {
            anisotropy: 3.0,
            theta_deg: 30.0,
            ..small(RngKind::ParkMiller)
        })
        .unwrap();
        assert_ne!(base.z, rotated.z);
        assert_eq!(rotated.meta.theta_deg, 30.0);
        assert_eq!(rotated.meta.anisotropy, 3.0);
    }

    #[test]
    fn invalid_config_returns_error_without_output() {
        let p = SurfaceParams { nx: 48, ..small(RngKind::ParkMiller) };
        assert_eq!(
            generate_surface(&p).unwrap_err(),
            SurfaceError::Config(ConfigError::NotPowerOfTwo { axis: "nx", value: 48 })
        );
        let p = SurfaceParams { dimension: 3.5, ..small(RngKind::ParkMiller) };
        assert!(matches!(
            generate_surface(&p),
            Err(SurfaceError::Config(ConfigError::InvalidDimension(_)))
        ));
    }

    #[test]
    fn meta_echoes_configuration() {
        let p = small(RngKind::Lecuyer);
        let r = generate_surface(&p).unwrap();
        assert_eq!(r.meta.nx, 64);
        assert_eq!(r.meta.ny, 32);
        assert_eq!(r.meta.length, 1.0);
        assert_eq!(r.meta.dimension, 2.3);
        assert!((r.meta.hurst - 0.7).abs() < 1e-12);
        assert_eq!(r.meta.rng_kind, RngKind::Lecuyer);
        assert_eq!(r.meta.seed, 42);
    }

    #[test]
    fn json_has_rows_and_meta() {
        let r = generate_surface(&SurfaceParams { nx: 4, ny: 2, ..small(RngKind::ParkMiller) })
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&r.to_json().unwrap()).unwrap();
        let rows = v["Z"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].as_array().unwrap().len(), 4);
        assert_eq!(v["meta"]["rngKind"], "parkmiller");
        assert_eq!(v["meta"]["thetaDeg"], 0.0);
        assert!(v["meta"]["H"].is_number());
    }

    #[test]
    fn zero_sigma_gives_flat_surface() {
        let r = generate_surface(&SurfaceParams { sigma: 0.0, ..small(RngKind::ParkMiller) })
            .unwrap();
        assert!(r.z.data.iter().all(|&v| v == 0.0));
    }
}
