//! Container bounds.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed dimensions of every container (pallet) in a run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerBounds {
    /// Plane length (x extent).
    pub length: f64,
    /// Plane width (y extent).
    pub width: f64,
    /// Height budget for stacked layers.
    pub height: f64,
}

impl ContainerBounds {
    /// Creates new bounds.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Area of one layer plane.
    pub fn footprint_area(&self) -> f64 {
        self.length * self.width
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.footprint_area() * self.height
    }

    /// Returns true if a `length x width` rectangle at `(x, y)` lies on the plane.
    pub fn contains_rect(&self, x: f64, y: f64, length: f64, width: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x + length <= self.length && y + width <= self.width
    }

    /// Validates the dimensions.
    pub fn validate(&self) -> Result<()> {
        if [self.length, self.width, self.height]
            .iter()
            .any(|d| !d.is_finite() || *d <= 0.0)
        {
            return Err(Error::InvalidBounds(format!(
                "all dimensions must be positive, got {}x{}x{}",
                self.length, self.width, self.height
            )));
        }
        Ok(())
    }
}
