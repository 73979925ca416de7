//! # U-Pallet 2D
//!
//! Layer-plane packing for the U-Pallet allocation engine.
//!
//! Each pallet layer is packed as an independent 2D problem:
//!
//! - [`FreeSpaceTracker`] keeps the free rectangles of one plane and owns the
//!   best-area-fit and guillotine-split rules.
//! - [`LayerPacker`] fills one plane from an order with a large-first greedy
//!   pass followed by a small-first gap-fill pass.

pub mod free_space;
pub mod layer;

// Re-exports
pub use free_space::{best_fit, guillotine_split, Fit, FreeRect, FreeSpaceTracker};
pub use layer::{pack_layer, LayerPacker};
pub use u_pallet_core::{BoxCatalog, BoxType, Config, ContainerBounds, Order, Placement};
