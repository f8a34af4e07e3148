use crate::core::{constants::FIT_BEARING, geo::LatLng};
use serde::{Deserialize, Serialize};

/// Camera position handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Geographic point at the center of the view
    pub target: LatLng,
    /// Fractional zoom level
    pub zoom: f64,
    /// Heading in degrees clockwise from north
    pub bearing: f64,
    /// Pitch in degrees from straight down
    pub tilt: f64,
}

impl CameraPose {
    pub fn new(target: LatLng, zoom: f64, bearing: f64, tilt: f64) -> Self {
        Self {
            target,
            zoom,
            bearing,
            tilt,
        }
    }

    /// North-up, top-down pose
    pub fn top_down(target: LatLng, zoom: f64) -> Self {
        Self::new(target, zoom, FIT_BEARING, 0.0)
    }

    /// Scale factor for the current zoom level
    pub fn scale(&self) -> f64 {
        2_f64.powf(self.zoom)
    }

    pub fn is_tilted(&self) -> bool {
        self.tilt != 0.0
    }
}
