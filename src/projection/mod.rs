pub mod mercator;
pub mod perspective;

// Re-export main functions
pub use mercator::{ground_resolution, latitude_fraction, meters_per_pixel, zoom_to_fit};
pub use perspective::{perspective_divisor, tilt_correction, FitConstraint, TiltCorrection};
