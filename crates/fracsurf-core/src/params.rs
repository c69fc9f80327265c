use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rng::RngKind;

pub const DEFAULT_SEED: i64 = 799_753_397;

/// User-facing surface configuration.
///
/// JSON keys follow the desktop front end: `nx, ny, L, D, sigma, anisotropy,
/// thetaDeg, rngKind, seed`.  Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceParams {
    /// Grid columns, power of two. Default 512.
    pub nx: usize,
    /// Grid rows, power of two. Default 512.
    pub ny: usize,
    /// Side length of the square domain. Default 0.1.
    #[serde(rename = "L")]
    pub length: f64,
    /// Fractal dimension in (2, 3). Default 2.1.
    #[serde(rename = "D")]
    pub dimension: f64,
    /// Target RMS height. Default 0.01.
    pub sigma: f64,
    /// Stretch factor on the x axis (y is fixed at 1). Default 1.0.
    pub anisotropy: f64,
    /// Rotation angle in degrees. Default 0.
    #[serde(rename = "thetaDeg")]
    pub theta_deg: f64,
    #[serde(rename = "rngKind")]
    pub rng_kind: RngKind,
    pub seed: i64,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            nx: 512,
            ny: 512,
            length: 0.1,
            dimension: 2.1,
            sigma: 0.01,
            anisotropy: 1.0,
            theta_deg: 0.0,
            rng_kind: RngKind::ParkMiller,
            seed: DEFAULT_SEED,
        }
    }
}

impl SurfaceParams {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Hurst exponent `H = 3 − D`.
    pub fn hurst(&self) -> f64 {
        3.0 - self.dimension
    }

    /// Rotation in radians, computed as `deg · π / 180`.
    pub fn theta_rad(&self) -> f64 {
        self.theta_deg * std::f64::consts::PI / 180.0
    }

    /// Check every field; the first violation is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("nx", self.nx), ("ny", self.ny)] {
            if value < 2 || !value.is_power_of_two() {
                return Err(ConfigError::NotPowerOfTwo { axis, value });
            }
        }
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(ConfigError::InvalidLength(self.length));
        }
        if !(self.dimension.is_finite() && self.dimension > 2.0 && self.dimension < 3.0) {
            return Err(ConfigError::InvalidDimension(self.dimension));
        }
        if !(self.sigma.is_finite() && self.sigma >= 0.0) {
            return Err(ConfigError::InvalidSigma(self.sigma));
        }
        if !(self.anisotropy.is_finite() && self.anisotropy > 0.0) {
            return Err(ConfigError::InvalidAnisotropy(self.anisotropy));
        }
        if !self.theta_deg.is_finite() {
            return Err(ConfigError::InvalidTheta(self.theta_deg));
        }
        Ok(())
    }
}
