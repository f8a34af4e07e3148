//! Prelude module for common tiltfit types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use tiltfit::prelude::*;`

pub use crate::core::{
    config::{
        CalibrationProfile, CameraCalibration, FitOptions, TiltLimits, TiltPolicy, ZoomLimits,
    },
    geo::{LatLng, LatLngBounds},
    geodesy::Haversine,
    viewport::{Padding, ViewportSize},
};

pub use crate::camera::{
    fit::{fit_tilted_bounds, FitReport, TiltedFitter},
    pose::CameraPose,
};

pub use crate::projection::{
    mercator::{meters_per_pixel, zoom_to_fit},
    perspective::{FitConstraint, TiltCorrection},
};

pub use crate::traits::GeodesicOps;

pub use crate::{Error as FitError, Result};
