//! Solver traits and configuration.

use crate::bounds::ContainerBounds;
use crate::catalog::BoxCatalog;
use crate::order::Order;
use crate::result::AllocationResult;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default threshold below which remainder rectangles are discarded.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// How much height a finished layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeightRule {
    /// A layer is as tall as its tallest box.
    #[default]
    TallestPlacement,
    /// Every layer is `layer_height` tall and a container holds at most
    /// `floor(bounds.height / layer_height)` layers.
    Uniform {
        /// Height charged per layer.
        layer_height: f64,
    },
}

/// Configuration for the allocation engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Remainder rectangles with area at or below this are dropped.
    pub epsilon: f64,

    /// Run the small-first gap-fill pass after the greedy pass.
    pub gap_fill: bool,

    /// Layer height accounting.
    pub height_rule: HeightRule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            gap_fill: true,
            height_rule: HeightRule::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the remainder threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Enables or disables the gap-fill pass.
    pub fn with_gap_fill(mut self, enabled: bool) -> Self {
        self.gap_fill = enabled;
        self
    }

    /// Sets the height rule.
    pub fn with_height_rule(mut self, rule: HeightRule) -> Self {
        self.height_rule = rule;
        self
    }

    /// Shorthand for [`HeightRule::Uniform`].
    pub fn with_uniform_layer_height(self, layer_height: f64) -> Self {
        self.with_height_rule(HeightRule::Uniform { layer_height })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(Error::ConfigError(format!(
                "epsilon must be a positive number, got {}",
                self.epsilon
            )));
        }
        if let HeightRule::Uniform { layer_height } = self.height_rule {
            if !layer_height.is_finite() || layer_height <= 0.0 {
                return Err(Error::ConfigError(format!(
                    "uniform layer height must be a positive number, got {}",
                    layer_height
                )));
            }
        }
        Ok(())
    }
}

/// Trait for allocation solvers.
///
/// Implementations validate their inputs before packing; the packing itself
/// never fails and reports unplaceable demand in the result instead.
pub trait Solver {
    /// Allocates `order` into as few containers as the solver manages.
    fn solve(
        &self,
        bounds: &ContainerBounds,
        catalog: &BoxCatalog,
        order: &Order,
    ) -> Result<AllocationResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.epsilon, DEFAULT_EPSILON);
        assert!(config.gap_fill);
        assert_eq!(config.height_rule, HeightRule::TallestPlacement);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = Config::new()
            .with_gap_fill(false)
            .with_uniform_layer_height(9.0);
        assert!(!config.gap_fill);
        assert_eq!(
            config.height_rule,
            HeightRule::Uniform { layer_height: 9.0 }
        );
    }

    #[test]
    fn test_validation() {
        assert!(Config::new().with_epsilon(0.0).validate().is_err());
        assert!(Config::new().with_epsilon(f64::NAN).validate().is_err());
        assert!(Config::new()
            .with_uniform_layer_height(-1.0)
            .validate()
            .is_err());
    }
}
