use crate::{FitError, Result};
use serde::{Deserialize, Serialize};

/// The size of the map view in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Checks that both dimensions are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(FitError::InvalidViewport(format!(
                "size {}x{} must be finite and non-negative",
                self.width, self.height
            )))
        }
    }

    /// Returns the area left once `padding` is removed from every side.
    ///
    /// Fails when the insets consume a whole dimension, since nothing could be
    /// fitted into what remains.
    pub fn inset(&self, padding: &Padding) -> Result<ViewportSize> {
        self.validate()?;
        padding.validate()?;

        let width = self.width - padding.horizontal();
        let height = self.height - padding.vertical();
        if width <= 0.0 || height <= 0.0 {
            return Err(FitError::InvalidViewport(format!(
                "padding {:?} leaves no room in a {}x{} viewport",
                padding, self.width, self.height
            )));
        }

        Ok(ViewportSize::new(width, height))
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Pixel insets around the viewport edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Padding {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on every side
    pub fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn validate(&self) -> Result<()> {
        let sides = [self.top, self.left, self.bottom, self.right];
        if sides.iter().all(|v| v.is_finite() && *v >= 0.0) {
            Ok(())
        } else {
            Err(FitError::InvalidViewport(format!(
                "padding {:?} must be finite and non-negative",
                self
            )))
        }
    }
}
