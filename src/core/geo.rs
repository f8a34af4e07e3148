use crate::{
    core::geodesy::Haversine,
    traits::GeodesicOps,
    FitError, Result,
};
use geo_types::{LineString, Polygon};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Like [`is_valid`](Self::is_valid), but reports which coordinate is off.
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(FitError::InvalidCoordinates(format!(
                "non-finite coordinate ({}, {})",
                self.lat, self.lng
            )));
        }
        if !self.is_valid() {
            return Err(FitError::InvalidCoordinates(format!(
                "({}, {}) is outside [-90, 90] x [-180, 180]",
                self.lat, self.lng
            )));
        }
        Ok(())
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<LatLng> for geo_types::Point<f64> {
    fn from(value: LatLng) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

impl From<geo_types::Point<f64>> for LatLng {
    fn from(value: geo_types::Point<f64>) -> Self {
        LatLng::new(value.y(), value.x())
    }
}

/// Represents a bounding box of geographical coordinates.
///
/// `north_east.lng` smaller than `south_west.lng` means the box crosses the
/// antimeridian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Smallest bounds containing both coordinates, given in any order.
    ///
    /// Of the two ways to span the longitudes, the narrower one is used, so
    /// points on either side of ±180° produce antimeridian-crossing bounds.
    pub fn from_coordinates(a: LatLng, b: LatLng) -> Self {
        let south = a.lat.min(b.lat);
        let north = a.lat.max(b.lat);
        let (west, east) = if a.lng <= b.lng { (a.lng, b.lng) } else { (b.lng, a.lng) };

        if east - west > 180.0 {
            Self::from_coords(south, east, north, west)
        } else {
            Self::from_coords(south, west, north, east)
        }
    }

    /// The north-west corner of these bounds.
    pub fn north_west(&self) -> LatLng {
        LatLng::new(self.north_east.lat, self.south_west.lng)
    }

    /// The south-east corner of these bounds.
    pub fn south_east(&self) -> LatLng {
        LatLng::new(self.south_west.lat, self.north_east.lng)
    }

    /// Great-circle midpoint between the north-east and south-west corners.
    pub fn center(&self) -> LatLng {
        self.center_with(&Haversine)
    }

    /// Same as [`center`](Self::center) using a specific geodesic implementation.
    pub fn center_with<G: GeodesicOps + ?Sized>(&self, geodesy: &G) -> LatLng {
        geodesy.interpolate(&self.north_east, &self.south_west, 0.5)
    }

    /// Longitude extent in degrees, going east from the west edge.
    pub fn longitude_span(&self) -> f64 {
        let delta = self.north_east.lng - self.south_west.lng;
        if delta < 0.0 {
            delta + 360.0
        } else {
            delta
        }
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.north_east.lng < self.south_west.lng
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        let in_lat = point.lat >= self.south_west.lat && point.lat <= self.north_east.lat;
        let in_lng = if self.crosses_antimeridian() {
            point.lng >= self.south_west.lng || point.lng <= self.north_east.lng
        } else {
            point.lng >= self.south_west.lng && point.lng <= self.north_east.lng
        };
        in_lat && in_lng
    }

    /// Gets the four corner points, clockwise from the north-west
    pub fn corners(&self) -> [LatLng; 4] {
        [
            self.north_west(),
            self.north_east,
            self.south_east(),
            self.south_west,
        ]
    }

    /// Closed outline of the bounds as a polygon in (lng, lat) order.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let ring: Vec<(f64, f64)> = self
            .corners()
            .iter()
            .map(|corner| (corner.lng, corner.lat))
            .collect();
        Polygon::new(LineString::from(ring), vec![])
    }

    /// Checks both corners and the south/north ordering.
    pub fn validate(&self) -> Result<()> {
        self.south_west.validate()?;
        self.north_east.validate()?;

        if self.south_west.lat > self.north_east.lat {
            return Err(FitError::InvalidBounds(format!(
                "south latitude {} is above north latitude {}",
                self.south_west.lat, self.north_east.lat
            )));
        }
        Ok(())
    }
}
