use crate::{core::geo::LatLng, traits::GeodesicOps};
use geo::{HaversineDestination, HaversineDistance, HaversineIntermediate};
use geo_types::Point;

/// Spherical geodesy backed by the `geo` crate's haversine algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Haversine;

impl GeodesicOps for Haversine {
    fn distance(&self, from: &LatLng, to: &LatLng) -> f64 {
        Point::from(*from).haversine_distance(&Point::from(*to))
    }

    fn interpolate(&self, from: &LatLng, to: &LatLng, fraction: f64) -> LatLng {
        // The intermediate formula divides by the angular distance
        if from == to {
            return *from;
        }
        let point = Point::from(*from).haversine_intermediate(&Point::from(*to), fraction);
        LatLng::new(point.y(), LatLng::wrap_lng(point.x()))
    }

    fn offset(&self, from: &LatLng, distance: f64, heading: f64) -> LatLng {
        if distance == 0.0 {
            return *from;
        }
        let point = Point::from(*from).haversine_destination(heading, distance);
        LatLng::new(point.y(), LatLng::wrap_lng(point.x()))
    }
}
