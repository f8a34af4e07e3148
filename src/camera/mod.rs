pub mod fit;
pub mod pose;

// Re-export main types
pub use fit::{fit_tilted_bounds, FitReport, TiltedFitter};
pub use pose::CameraPose;
