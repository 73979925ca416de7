//! # U-Pallet
//!
//! Allocates rectangular boxes onto pallet layers and stacks the layers into
//! height-bounded pallets, using as few pallets as the greedy engine manages.
//!
//! ## Quick Start
//!
//! ```rust
//! use u_pallet::{allocate, BoxCatalog, BoxType, ContainerBounds, Order};
//!
//! let bounds = ContainerBounds::new(42.0, 42.0, 90.0);
//! let catalog: BoxCatalog = [
//!     BoxType::new("AZ17", 40.0, 24.0, 9.0),
//!     BoxType::new("AZ2", 12.0, 8.0, 9.0),
//! ]
//! .into_iter()
//! .collect();
//! let order = Order::new().with("AZ17", 4).with("AZ2", 30);
//!
//! let result = allocate(&bounds, &catalog, order);
//! assert!(result.all_placed());
//! ```
//!
//! ## Feature Flags
//!
//! - `d2` (default): single-layer packing
//! - `d3` (default): layer stacking and whole-order allocation
//! - `serde`: Serialization support

/// Core data model and solver traits.
pub use u_pallet_core as core;

/// Layer-plane packing.
#[cfg(feature = "d2")]
pub use u_pallet_d2 as d2;

/// Container stacking and allocation.
#[cfg(feature = "d3")]
pub use u_pallet_d3 as d3;

// Re-export commonly used types at root level
pub use u_pallet_core::{
    AllocationResult, AllocationSummary, BoxCatalog, BoxType, Config, Container, ContainerBounds,
    Error, HeightRule, Layer, Order, Placement, Result, Solver,
};

#[cfg(feature = "d3")]
pub use u_pallet_d3::{allocate, allocate_with_config, PalletPacker};
