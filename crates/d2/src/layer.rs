//! Single-layer packing.
//!
//! A layer is packed in two passes over one [`FreeSpaceTracker`]:
//!
//! 1. **Greedy**: box types in descending footprint area, each placed at its
//!    best fit over the whole free set until it runs out or stops fitting.
//! 2. **Gap fill**: the free list is scanned front to back and each rectangle
//!    is offered to the remaining box types in ascending footprint area. After
//!    a placement the scan stays on the same index, since the list shifted.
//!
//! Equal footprint areas keep the order's line order in both passes.

use crate::free_space::FreeSpaceTracker;
use u_pallet_core::{BoxCatalog, BoxType, Config, ContainerBounds, Order, Placement};

/// Packs one layer plane from an order.
pub struct LayerPacker<'a> {
    bounds: &'a ContainerBounds,
    catalog: &'a BoxCatalog,
    config: &'a Config,
}

impl<'a> LayerPacker<'a> {
    /// Creates a packer for the plane of `bounds`.
    pub fn new(bounds: &'a ContainerBounds, catalog: &'a BoxCatalog, config: &'a Config) -> Self {
        Self {
            bounds,
            catalog,
            config,
        }
    }

    /// Packs one layer, decrementing `order` for every placement.
    ///
    /// An empty result means no remaining box fits an empty plane.
    pub fn pack(&self, order: &mut Order) -> Vec<Placement> {
        let mut placements = Vec::new();
        let mut tracker = FreeSpaceTracker::for_bounds(self.bounds, self.config.epsilon);

        let mut candidates = self.candidates(order);
        if candidates.is_empty() {
            return placements;
        }

        candidates.sort_by(|a, b| b.footprint_area().total_cmp(&a.footprint_area()));
        for box_type in &candidates {
            while order.quantity(box_type.name()) > 0 {
                let Some(fit) = tracker.place(box_type.length(), box_type.width()) else {
                    break;
                };
                order.decrement(box_type.name());
                placements.push(fit.to_placement(box_type));
            }
        }
        let greedy_count = placements.len();

        self.gap_fill_pass(&mut tracker, order, &mut placements);

        log::debug!(
            "layer packed: {} greedy + {} gap-fill placements, {} free rects ({:.3} area) left",
            greedy_count,
            placements.len() - greedy_count,
            tracker.len(),
            tracker.free_area()
        );

        placements
    }

    /// Runs [`Self::fill_gaps`] unless `config.gap_fill` is off.
    fn gap_fill_pass(
        &self,
        tracker: &mut FreeSpaceTracker,
        order: &mut Order,
        placements: &mut Vec<Placement>,
    ) {
        if self.config.gap_fill {
            self.fill_gaps(tracker, order, placements);
        }
    }

    fn fill_gaps(
        &self,
        tracker: &mut FreeSpaceTracker,
        order: &mut Order,
        placements: &mut Vec<Placement>,
    ) {
        let mut remaining = self.candidates(order);
        if remaining.is_empty() {
            return;
        }
        remaining.sort_by(|a, b| a.footprint_area().total_cmp(&b.footprint_area()));

        let mut index = 0;
        while index < tracker.len() {
            let mut filled = false;
            for box_type in &remaining {
                if order.quantity(box_type.name()) == 0 {
                    continue;
                }
                if let Some(fit) = tracker.place_in(index, box_type.length(), box_type.width()) {
                    order.decrement(box_type.name());
                    placements.push(fit.to_placement(box_type));
                    filled = true;
                    break;
                }
            }
            if !filled {
                index += 1;
            }
        }
    }

    /// Placeable catalog entries with remaining demand, in order line order.
    fn candidates(&self, order: &Order) -> Vec<&'a BoxType> {
        order
            .remaining_names()
            .into_iter()
            .filter_map(|name| self.catalog.get(name))
            .filter(|b| b.is_placeable())
            .collect()
    }
}

/// Packs one layer of `bounds` from `order`.
///
/// See [`LayerPacker::pack`].
pub fn pack_layer(
    bounds: &ContainerBounds,
    catalog: &BoxCatalog,
    order: &mut Order,
    config: &Config,
) -> Vec<Placement> {
    LayerPacker::new(bounds, catalog, config).pack(order)
}
