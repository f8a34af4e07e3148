//! Core constants derived from Web Mercator conventions and the calibration
//! of the reference renderer's camera.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Equatorial radius used by Web Mercator (EPSG:3857), in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude limit of the square Web Mercator world.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Default square tile size in pixels; the whole world is one tile at zoom 0.
pub const TILE_SIZE: f64 = 256.0;

/// Highest zoom level a fitted camera may use.
pub const DEFAULT_MAX_ZOOM: f64 = 21.0;

/// Lowest zoom level a fitted camera may use.
pub const DEFAULT_MIN_ZOOM: f64 = 0.0;

/// Tilt above which the height-fit term becomes unstable (cos φ → 0).
pub const DEFAULT_MAX_TILT: f64 = 85.0;

/// Focal scale of the reference camera, in pixels at the reference height.
pub const FOCAL_SCALE: f64 = 900.0;

/// Viewport height (pixels) at which [`FOCAL_SCALE`] was measured.
pub const REFERENCE_VIEWPORT_HEIGHT: f64 = 480.0;

/// Bearing of a fitted camera (due north).
pub const FIT_BEARING: f64 = 0.0;
