//! # U-Pallet 3D
//!
//! Container stacking and whole-order allocation for the U-Pallet engine.
//!
//! Layers packed by `u-pallet-d2` are stacked into containers until the
//! height budget is spent, and containers are opened until the order is
//! satisfied or a fresh container cannot take anything.
//!
//! ```rust
//! use u_pallet_d3::{allocate, BoxCatalog, BoxType, ContainerBounds, Order};
//!
//! let bounds = ContainerBounds::new(40.0, 40.0, 90.0);
//! let catalog: BoxCatalog = [BoxType::new("A", 40.0, 40.0, 10.0)].into_iter().collect();
//! let result = allocate(&bounds, &catalog, Order::new().with("A", 3));
//!
//! assert_eq!(result.containers_used(), 1);
//! assert_eq!(result.containers[0].layers.len(), 3);
//! ```

pub mod packer;
pub mod stacker;

// Re-exports
pub use packer::{allocate, allocate_with_config, PalletPacker};
pub use stacker::pack_container;
pub use u_pallet_core::{
    AllocationResult, BoxCatalog, BoxType, Config, Container, ContainerBounds, Error, HeightRule,
    Layer, Order, Placement, Result, Solver, StackStop, Termination,
};
