//! Fitting bounds into a tilted camera
//!
//! The untilted fit is computed first; the tilt correction is then expressed
//! in pixels at that zoom and converted back into a zoom delta and a
//! northward shift of the target.

use crate::{
    camera::pose::CameraPose,
    core::{
        config::FitOptions,
        constants::FIT_BEARING,
        geo::{LatLng, LatLngBounds},
        geodesy::Haversine,
        viewport::{Padding, ViewportSize},
    },
    ensure_finite,
    projection::{
        mercator::{ground_resolution, zoom_to_fit},
        perspective::{perspective_divisor, tilt_correction, TiltCorrection},
    },
    traits::GeodesicOps,
    FitError, Result,
};
use serde::{Deserialize, Serialize};

/// Intermediate values of a fit, for diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    /// Zoom that fits the bounds with no tilt
    pub untilted_zoom: f64,
    /// Ground resolution at the bounds' center and the untilted zoom
    pub meters_per_pixel: f64,
    /// Southern edge length in pixels at the untilted zoom
    pub ground_width: f64,
    /// Western edge length in pixels at the untilted zoom
    pub ground_height: f64,
    pub perspective: f64,
    pub correction: TiltCorrection,
    pub pose: CameraPose,
}

/// Computes camera poses that fit bounds into a tilted view.
///
/// Holds no per-request state, so one fitter can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct TiltedFitter<G = Haversine> {
    options: FitOptions,
    geodesy: G,
}

impl TiltedFitter<Haversine> {
    pub fn new(options: FitOptions) -> Self {
        Self::with_geodesy(options, Haversine)
    }
}

impl<G: GeodesicOps> TiltedFitter<G> {
    /// Creates a fitter measuring distances with the renderer's own geodesy
    pub fn with_geodesy(options: FitOptions, geodesy: G) -> Self {
        Self { options, geodesy }
    }

    /// Camera pose that fits `bounds` into the padded viewport at `tilt` degrees
    pub fn fit(
        &self,
        bounds: &LatLngBounds,
        viewport: &ViewportSize,
        tilt: f64,
        padding: &Padding,
    ) -> Result<CameraPose> {
        self.fit_report(bounds, viewport, tilt, padding)
            .map(|report| report.pose)
    }

    /// Like [`fit`](Self::fit), keeping every intermediate value
    pub fn fit_report(
        &self,
        bounds: &LatLngBounds,
        viewport: &ViewportSize,
        tilt: f64,
        padding: &Padding,
    ) -> Result<FitReport> {
        self.options.validate()?;
        let tilt = self.options.tilt.apply(tilt)?;

        let untilted_zoom = zoom_to_fit(bounds, viewport, padding, &self.options)?;
        let container = viewport.inset(padding)?;
        let center = bounds.center_with(&self.geodesy);

        let south_west = bounds.south_west;
        let width_meters = self.geodesy.distance(&bounds.south_east(), &south_west);
        let height_meters = self.geodesy.distance(&bounds.north_west(), &south_west);
        if !(width_meters > 0.0 && height_meters > 0.0) {
            return Err(FitError::InvalidBounds(format!(
                "bounds {:?} measure {} x {} meters",
                bounds, width_meters, height_meters
            )));
        }

        let meters_per_pixel =
            ground_resolution(center.lat, untilted_zoom, self.options.world_tile_size);
        if !(meters_per_pixel.is_finite() && meters_per_pixel > 0.0) {
            return Err(FitError::NonFinite(format!(
                "ground resolution {} at latitude {}",
                meters_per_pixel, center.lat
            )));
        }

        let ground_width = (width_meters / meters_per_pixel).ceil();
        let ground_height = (height_meters / meters_per_pixel).ceil();
        let perspective = perspective_divisor(viewport.height, &self.options.calibration);

        let correction = tilt_correction(
            ground_width,
            ground_height,
            tilt,
            perspective,
            container.width,
        );
        if !(correction.scale_y > 0.0) {
            return Err(FitError::NonFinite(format!(
                "tilt {} gives scale {} for {}x{} px bounds",
                tilt, correction.scale_y, ground_width, ground_height
            )));
        }
        let zoom_delta = ensure_finite("zoom delta", correction.zoom_delta())?;
        let translate_y = ensure_finite("translation", correction.translate_y)?;

        let zoom = self.options.zoom.clamp(untilted_zoom + zoom_delta);
        let target = self.offset_target(&center, translate_y * meters_per_pixel)?;
        let pose = CameraPose::new(target, zoom, FIT_BEARING, tilt);

        log::debug!(
            "fit: untilted zoom {:.4}, {}x{} px, {:?} -> zoom {:.4}, target ({:.6}, {:.6})",
            untilted_zoom,
            ground_width,
            ground_height,
            correction.constraint,
            zoom,
            target.lat,
            target.lng
        );

        Ok(FitReport {
            untilted_zoom,
            meters_per_pixel,
            ground_width,
            ground_height,
            perspective,
            correction,
            pose,
        })
    }

    fn offset_target(&self, center: &LatLng, meters: f64) -> Result<LatLng> {
        let target = self.geodesy.offset(center, meters, FIT_BEARING);
        ensure_finite("target latitude", target.lat)?;
        ensure_finite("target longitude", target.lng)?;
        Ok(target)
    }
}

/// Fits `bounds` into the padded viewport at `tilt` degrees with the default
/// options and haversine geodesy.
pub fn fit_tilted_bounds(
    bounds: &LatLngBounds,
    viewport: &ViewportSize,
    tilt: f64,
    padding: &Padding,
) -> Result<CameraPose> {
    TiltedFitter::new(FitOptions::default()).fit(bounds, viewport, tilt, padding)
}
