//! Error types for surface synthesis.
use thiserror::Error;

/// A configuration rejected before any computation runs.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{axis} = {value} is not a power of two >= 2")]
    NotPowerOfTwo { axis: &'static str, value: usize },
    #[error("domain length L = {0} must be finite and > 0")]
    InvalidLength(f64),
    #[error("fractal dimension D = {0} must lie in the open interval (2, 3)")]
    InvalidDimension(f64),
    #[error("sigma = {0} must be finite and >= 0")]
    InvalidSigma(f64),
    #[error("anisotropy = {0} must be finite and > 0")]
    InvalidAnisotropy(f64),
    #[error("thetaDeg = {0} must be finite")]
    InvalidTheta(f64),
    #[error("could not parse configuration: {0}")]
    Parse(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("transform length {0} is not a power of two")]
    LengthNotPowerOfTwo(usize),
}

#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

pub type Result<T, E = SurfaceError> = std::result::Result<T, E>;
