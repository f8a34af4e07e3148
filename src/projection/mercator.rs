//! Untilted Web Mercator fitting: the fractional zoom at which a bounds box
//! fills a pixel area, and the ground resolution at a zoom level.

use crate::{
    core::{
        config::FitOptions,
        constants::{EARTH_RADIUS, TILE_SIZE},
        geo::LatLngBounds,
        viewport::{Padding, ViewportSize},
    },
    FitError, Result,
};
use std::f64::consts::PI;

/// Fraction of the Mercator world height between the equator and `latitude`
/// (radians), clamped so the poles stay finite.
pub fn latitude_fraction(latitude: f64) -> f64 {
    let sin = latitude.sin();
    let radians_square = ((1.0 + sin) / (1.0 - sin)).ln() / 2.0;
    radians_square.clamp(-PI, PI) / 2.0
}

/// Zoom at which `fraction` of the world spans exactly `pixels`.
fn axis_zoom(pixels: f64, world_pixels: f64, fraction: f64) -> f64 {
    (pixels / world_pixels / fraction).log2()
}

/// Minimum zoom that fits the untilted `bounds` into the padded viewport.
///
/// The more constraining axis wins and the result never exceeds the
/// configured maximum zoom. Zero-height or zero-width bounds are rejected
/// because no zoom can fit them.
pub fn zoom_to_fit(
    bounds: &LatLngBounds,
    viewport: &ViewportSize,
    padding: &Padding,
    options: &FitOptions,
) -> Result<f64> {
    bounds.validate()?;
    let size = viewport.inset(padding)?;

    let ne_phi = bounds.north_east.lat.to_radians();
    let sw_phi = bounds.south_west.lat.to_radians();
    let fraction_lat = (latitude_fraction(ne_phi) - latitude_fraction(sw_phi)) / PI;
    let fraction_lng = bounds.longitude_span() / 360.0;

    if fraction_lat <= 0.0 || fraction_lng <= 0.0 {
        return Err(FitError::InvalidBounds(format!(
            "bounds {:?} have no area (fractions {} x {})",
            bounds, fraction_lng, fraction_lat
        )));
    }

    let zoom_lat = axis_zoom(size.height, options.world_tile_size, fraction_lat);
    let zoom_lng = axis_zoom(size.width, options.world_tile_size, fraction_lng);
    let zoom = zoom_lat.min(zoom_lng).min(options.zoom.max_zoom);

    log::debug!(
        "zoom_to_fit: lat zoom {:.4}, lng zoom {:.4} -> {:.4}",
        zoom_lat,
        zoom_lng,
        zoom
    );

    Ok(zoom)
}

/// Ground resolution in meters per pixel for a world `world_tile_size` pixels wide at zoom 0
pub fn ground_resolution(latitude: f64, zoom: f64, world_tile_size: f64) -> f64 {
    (latitude.to_radians().cos() * 2.0 * PI * EARTH_RADIUS) / (world_tile_size * 2_f64.powf(zoom))
}

/// Web Mercator meters per pixel at `latitude` (degrees) and `zoom`
pub fn meters_per_pixel(latitude: f64, zoom: f64) -> f64 {
    ground_resolution(latitude, zoom, TILE_SIZE)
}
