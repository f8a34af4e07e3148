//! # tiltfit
//!
//! Camera fitting for tilted (pitched) perspective map views.
//!
//! Given geographic bounds, a viewport and a tilt angle, this library computes
//! the zoom level and target offset that make a tilted camera's projection of
//! the bounds fit inside the padded viewport. The untilted fit follows the
//! usual slippy-map fractional zoom over Web Mercator; the tilt correction is
//! derived from the projection equations of a perspective camera.

pub mod camera;
pub mod core;
pub mod prelude;
pub mod projection;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{CalibrationProfile, CameraCalibration, FitOptions, TiltLimits, TiltPolicy, ZoomLimits},
    geo::{LatLng, LatLngBounds},
    geodesy::Haversine,
    viewport::{Padding, ViewportSize},
};

pub use crate::camera::{
    fit::{fit_tilted_bounds, FitReport, TiltedFitter},
    pose::CameraPose,
};

pub use crate::projection::{
    mercator::{latitude_fraction, meters_per_pixel, zoom_to_fit},
    perspective::{perspective_divisor, tilt_correction, FitConstraint, TiltCorrection},
};

pub use crate::traits::GeodesicOps;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, FitError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum FitError {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("Invalid tilt: {0}")]
    InvalidTilt(String),

    #[error("Non-finite result: {0}")]
    NonFinite(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = FitError;

/// Returns `value` unchanged when finite, otherwise a [`FitError::NonFinite`] naming it.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FitError::NonFinite(format!("{name} evaluated to {value}")))
    }
}
