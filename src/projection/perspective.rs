//! Perspective correction for a tilted camera.
//!
//! Tilting the camera around its target shrinks the far edge of the ground
//! rectangle and widens the near edge, turning the fitted rectangle into a
//! trapezoid. Two limits apply: the widened near edge must still fit the
//! container width, and the foreshortened height must still fit vertically.
//! Whichever yields the smaller scale binds. The translation re-centres the
//! trapezoid, which is no longer symmetric around the target.

use crate::core::config::CameraCalibration;
use serde::{Deserialize, Serialize};

/// Which limit produced a [`TiltCorrection`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitConstraint {
    /// No tilt, the untilted fit is used as is
    Untilted,
    /// The near edge's width bound the scale
    Width,
    /// The foreshortened height bound the scale
    Height,
}

/// Vertical scale and translation (pixels at the untilted zoom) to apply to
/// an untilted fit once the camera is tilted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltCorrection {
    pub scale_y: f64,
    pub translate_y: f64,
    pub constraint: FitConstraint,
}

impl TiltCorrection {
    pub fn identity() -> Self {
        Self {
            scale_y: 1.0,
            translate_y: 0.0,
            constraint: FitConstraint::Untilted,
        }
    }

    /// Zoom levels to add to the untilted zoom
    pub fn zoom_delta(&self) -> f64 {
        self.scale_y.log2()
    }
}

impl Default for TiltCorrection {
    fn default() -> Self {
        Self::identity()
    }
}

/// Perspective divisor of the calibrated camera for a viewport `viewport_height` pixels tall.
pub fn perspective_divisor(viewport_height: f64, calibration: &CameraCalibration) -> f64 {
    -1.0 / calibration.focal_length(viewport_height)
}

/// Computes the correction for ground dimensions `width` x `height` (pixels
/// at the untilted zoom) seen at `tilt` degrees inside a container
/// `container_width` pixels wide.
///
/// Only an exact zero tilt returns [`TiltCorrection::identity`]. Any positive
/// tilt goes through the projection formula, whose width branch tends to
/// `container_width / width` as the tilt approaches zero. `width` is the
/// ceiled ground size at the center latitude, so that limit is usually not 1
/// and the fitted zoom jumps between 0 and the smallest positive tilt.
pub fn tilt_correction(
    width: f64,
    height: f64,
    tilt: f64,
    perspective: f64,
    container_width: f64,
) -> TiltCorrection {
    if tilt == 0.0 {
        return TiltCorrection::identity();
    }

    let angle = tilt.to_radians();
    let (sin, cos, tan) = (angle.sin(), angle.cos(), angle.tan());

    let factor_h = height * height * perspective * tan;
    let factor_w = height * perspective * sin * container_width;
    let scale_width = 0.5 * container_width * (1.0 / width + 1.0 / (width - factor_w));
    let scale_height = 1.0 / (cos - 0.25 * factor_h * perspective * sin);

    log::trace!(
        "tilt {}: width scale {:.6}, height scale {:.6}",
        tilt,
        scale_width,
        scale_height
    );

    if scale_width < scale_height {
        TiltCorrection {
            scale_y: scale_width,
            translate_y: (factor_w * height) / (4.0 * width - 2.0 * factor_w),
            constraint: FitConstraint::Width,
        }
    } else {
        TiltCorrection {
            scale_y: scale_height,
            translate_y: 0.25 * factor_h,
            constraint: FitConstraint::Height,
        }
    }
}
