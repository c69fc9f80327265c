//! Self-affine fractal rough surface synthesis by the Spectral Representation
//! Method: power-law spectrum, random phases, conjugate symmetry, inverse FFT,
//! rescale to a target RMS height.
//!
//! ```no_run
//! use fracsurf_core::{generate_surface, SurfaceParams};
//!
//! let params = SurfaceParams { nx: 256, ny: 256, dimension: 2.3, ..SurfaceParams::default() };
//! let surface = generate_surface(&params)?;
//! assert_eq!(surface.z.len(), 256 * 256);
//! # Ok::<(), fracsurf_core::SurfaceError>(())
//! ```
pub mod error;
pub mod fft;
pub mod generator;
pub mod grid;
pub mod metrics;
pub mod params;
pub mod rescale;
pub mod rng;
pub mod spectrum;
pub mod stl;

pub use error::{ConfigError, SurfaceError, TransformError};
pub use generator::{generate_surface, SurfaceMeta, SurfaceResult};
pub use grid::{ComplexField, Grid};
pub use params::SurfaceParams;
pub use rng::{RandomStream, RngKind};
