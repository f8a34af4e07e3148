//! Shared trait abstractions
//!
//! The fitting math only needs a handful of spherical primitives. They live
//! behind a trait so a caller can plug in the geodesy of the map SDK it is
//! rendering with.

use crate::core::geo::LatLng;

/// Spherical geometry primitives supplied by the rendering collaborator.
pub trait GeodesicOps {
    /// Great-circle ground distance between two coordinates, in meters
    fn distance(&self, from: &LatLng, to: &LatLng) -> f64;

    /// Point at `fraction` of the great-circle path from `from` to `to`
    fn interpolate(&self, from: &LatLng, to: &LatLng, fraction: f64) -> LatLng;

    /// Displaces `from` by `distance` meters along `heading` (degrees clockwise from north)
    fn offset(&self, from: &LatLng, distance: f64, heading: f64) -> LatLng;
}

impl<G: GeodesicOps + ?Sized> GeodesicOps for &G {
    fn distance(&self, from: &LatLng, to: &LatLng) -> f64 {
        (**self).distance(from, to)
    }

    fn interpolate(&self, from: &LatLng, to: &LatLng, fraction: f64) -> LatLng {
        (**self).interpolate(from, to, fraction)
    }

    fn offset(&self, from: &LatLng, distance: f64, heading: f64) -> LatLng {
        (**self).offset(from, distance, heading)
    }
}
