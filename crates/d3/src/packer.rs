//! Allocation driver: opens containers until the order is exhausted.

use crate::stacker::pack_container;
use u_pallet_core::solver::{Config, Solver};
use u_pallet_core::{
    AllocationResult, BoxCatalog, ContainerBounds, Error, Order, Result, Termination,
};

/// Allocates `order` into containers with the default configuration.
///
/// This never fails. Demand that no empty container can take is reported in
/// [`AllocationResult::unsatisfied`].
pub fn allocate(bounds: &ContainerBounds, catalog: &BoxCatalog, order: Order) -> AllocationResult {
    allocate_with_config(bounds, catalog, order, &Config::default())
}

/// Allocates `order` into containers.
///
/// The order is owned by the run and consumed as boxes are placed. A
/// container that receives no layer ends the run, since opening further
/// empty containers cannot make progress.
pub fn allocate_with_config(
    bounds: &ContainerBounds,
    catalog: &BoxCatalog,
    mut order: Order,
    config: &Config,
) -> AllocationResult {
    let mut result = AllocationResult::new(*bounds);

    while order.total_remaining() > 0 {
        let container = pack_container(bounds, catalog, &mut order, config);
        if container.layers.is_empty() {
            result.termination = Termination::Stalled;
            break;
        }

        log::debug!(
            "container {} closed ({:?}): {} layers, {} boxes, height {:.3}",
            result.containers.len() + 1,
            container.stop,
            container.layers.len(),
            container.placed_count(),
            container.consumed_height
        );
        result.containers.push(container);
    }

    result.unsatisfied = order
        .iter()
        .filter(|line| line.quantity > 0)
        .map(|line| (line.name.clone(), line.quantity))
        .collect();

    if result.termination == Termination::Stalled {
        log::warn!(
            "allocation stalled with {} boxes unplaced: {:?}",
            result.unsatisfied_count(),
            result.unsatisfied
        );
    }
    log::info!(
        "allocated {} boxes into {} containers ({} utilization)",
        result.placed_count(),
        result.containers_used(),
        result.utilization_percent()
    );

    result
}

/// Pallet packing solver.
///
/// Validates its inputs and then runs [`allocate_with_config`].
#[derive(Debug, Clone, Default)]
pub struct PalletPacker {
    config: Config,
}

impl PalletPacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Solver for PalletPacker {
    fn solve(
        &self,
        bounds: &ContainerBounds,
        catalog: &BoxCatalog,
        order: &Order,
    ) -> Result<AllocationResult> {
        self.config.validate()?;
        bounds.validate()?;
        catalog.validate()?;
        if let Some(line) = order
            .iter()
            .find(|line| line.quantity > 0 && !catalog.contains(&line.name))
        {
            return Err(Error::UnknownBox(line.name.clone()));
        }

        Ok(allocate_with_config(
            bounds,
            catalog,
            order.clone(),
            &self.config,
        ))
    }
}
