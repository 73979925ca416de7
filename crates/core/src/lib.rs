//! # U-Pallet Core
//!
//! Shared data model and abstractions for the U-Pallet allocation engine.
//!
//! This crate holds the types that flow between the 2D layer packer and the 3D
//! container stacker, plus the configuration and solver seam that front-ends
//! talk to.
//!
//! ## Core Components
//!
//! - **Inputs**: [`BoxCatalog`], [`BoxType`], [`Order`], [`ContainerBounds`]
//! - **Outputs**: [`Placement`], [`Layer`], [`Container`], [`AllocationResult`]
//! - **Solver trait**: [`Solver`] plus its [`Config`] and [`HeightRule`]
//!
//! ## Configuration
//!
//! ```rust
//! use u_pallet_core::{Config, HeightRule};
//!
//! let config = Config::new()
//!     .with_gap_fill(true)
//!     .with_height_rule(HeightRule::TallestPlacement);
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod bounds;
pub mod catalog;
pub mod error;
pub mod order;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use bounds::ContainerBounds;
pub use catalog::{BoxCatalog, BoxName, BoxType};
pub use error::{Error, Result};
pub use order::{Order, OrderLine};
pub use placement::{CountTable, Placement, PlacementStats};
pub use result::{AllocationResult, AllocationSummary, Container, Layer, StackStop, Termination};
pub use solver::{Config, HeightRule, Solver, DEFAULT_EPSILON};
