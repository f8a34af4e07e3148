//! Configuration for camera fitting
//!
//! The fit depends on a few engine-specific numbers: the zoom range of the
//! target map, how far it may be tilted, and the field of view of its camera.
//! They are grouped here and can be picked from a preset or loaded from JSON.

use crate::{
    core::constants::{
        DEFAULT_MAX_TILT, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, FOCAL_SCALE,
        REFERENCE_VIEWPORT_HEIGHT, TILE_SIZE,
    },
    FitError, Result,
};
use serde::{Deserialize, Serialize};

/// Camera calibration presets for known renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalibrationProfile {
    /// Perspective measured against the Google Maps SDK camera
    GoogleMaps,
    Custom(CameraCalibration),
}

impl CalibrationProfile {
    pub fn resolve(&self) -> CameraCalibration {
        match self {
            Self::GoogleMaps => CameraCalibration {
                focal_scale: FOCAL_SCALE,
                reference_viewport_height: REFERENCE_VIEWPORT_HEIGHT,
            },
            Self::Custom(calibration) => calibration.clone(),
        }
    }
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self::GoogleMaps
    }
}

/// Field-of-view calibration of the rendering camera.
///
/// The perspective divisor for a viewport of height `h` is
/// `-1 / (focal_scale * h / reference_viewport_height)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraCalibration {
    pub focal_scale: f64,
    pub reference_viewport_height: f64,
}

impl CameraCalibration {
    /// Effective focal length in pixels for a viewport of the given height
    pub fn focal_length(&self, viewport_height: f64) -> f64 {
        self.focal_scale * (viewport_height / self.reference_viewport_height)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if positive(self.focal_scale) && positive(self.reference_viewport_height) {
            Ok(())
        } else {
            Err(FitError::InvalidOptions(format!(
                "calibration {:?} must be finite and positive",
                self
            )))
        }
    }
}

impl Default for CameraCalibration {
    fn default() -> Self {
        CalibrationProfile::default().resolve()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl ZoomLimits {
    /// Never panics: a NaN limit is ignored, and with inverted limits `max_zoom` wins.
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

/// What to do with a tilt above [`TiltLimits::max_tilt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TiltPolicy {
    Clamp,
    Reject,
}

impl Default for TiltPolicy {
    fn default() -> Self {
        Self::Clamp
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiltLimits {
    pub max_tilt: f64,
    pub policy: TiltPolicy,
}

impl TiltLimits {
    /// Returns the tilt to fit with, in degrees.
    pub fn apply(&self, tilt: f64) -> Result<f64> {
        if !tilt.is_finite() || tilt < 0.0 {
            return Err(FitError::InvalidTilt(format!(
                "tilt {tilt} must be a finite, non-negative angle"
            )));
        }
        if tilt <= self.max_tilt {
            return Ok(tilt);
        }

        match self.policy {
            TiltPolicy::Clamp => {
                log::warn!("Clamping tilt {} to {}", tilt, self.max_tilt);
                Ok(self.max_tilt)
            }
            TiltPolicy::Reject => Err(FitError::InvalidTilt(format!(
                "tilt {} exceeds maximum {}",
                tilt, self.max_tilt
            ))),
        }
    }
}

impl Default for TiltLimits {
    fn default() -> Self {
        Self {
            max_tilt: DEFAULT_MAX_TILT,
            policy: TiltPolicy::default(),
        }
    }
}

/// All knobs used by [`TiltedFitter`](crate::camera::fit::TiltedFitter)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    pub calibration: CameraCalibration,
    pub zoom: ZoomLimits,
    pub tilt: TiltLimits,
    /// Pixel size of the whole world at zoom 0
    pub world_tile_size: f64,
}

impl FitOptions {
    pub fn with_profile(profile: CalibrationProfile) -> Self {
        Self {
            calibration: profile.resolve(),
            ..Self::default()
        }
    }

    /// Parses options from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: FitOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        self.calibration.validate()?;

        if !(self.zoom.min_zoom <= self.zoom.max_zoom) {
            return Err(FitError::InvalidOptions(format!(
                "zoom limits {:?} are inverted",
                self.zoom
            )));
        }
        if !(self.tilt.max_tilt >= 0.0 && self.tilt.max_tilt < 90.0) {
            return Err(FitError::InvalidOptions(format!(
                "maximum tilt {} must lie in [0, 90)",
                self.tilt.max_tilt
            )));
        }
        if !(self.world_tile_size.is_finite() && self.world_tile_size > 0.0) {
            return Err(FitError::InvalidOptions(format!(
                "world tile size {} must be positive",
                self.world_tile_size
            )));
        }
        Ok(())
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            calibration: CameraCalibration::default(),
            zoom: ZoomLimits::default(),
            tilt: TiltLimits::default(),
            world_tile_size: TILE_SIZE,
        }
    }
}
