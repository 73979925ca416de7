//! Allocation result representation.

use crate::bounds::ContainerBounds;
use crate::catalog::BoxName;
use crate::placement::{CountTable, Placement, PlacementStats};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One z-level slice of a container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layer {
    /// Placements in the order they were made.
    pub placements: Vec<Placement>,
    /// Height this layer was charged against the container budget.
    pub height: f64,
}

impl Layer {
    /// Creates a layer charged at its tallest placement.
    pub fn new(placements: Vec<Placement>) -> Self {
        let height = tallest(&placements);
        Self { placements, height }
    }

    /// Creates a layer charged at a fixed height.
    pub fn with_height(placements: Vec<Placement>, height: f64) -> Self {
        Self { placements, height }
    }

    /// Max placed height, zero for an empty layer.
    pub fn tallest(&self) -> f64 {
        tallest(&self.placements)
    }

    /// Number of boxes on this layer.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Boxes per name on this layer.
    pub fn counts(&self) -> CountTable {
        self.stats().by_name
    }

    /// Placement statistics for this layer.
    pub fn stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.placements)
    }
}

fn tallest(placements: &[Placement]) -> f64 {
    placements
        .iter()
        .map(|p| p.placed_height)
        .fold(0.0, f64::max)
}

/// Why a container stopped receiving layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StackStop {
    /// The height budget (or layer cap) was reached.
    HeightReached,
    /// A fresh layer plane could not take any remaining box.
    NoPlacement,
    /// Nothing was left to place.
    OrderSatisfied,
}

/// A bounded-height stack of layers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Layers from bottom to top.
    pub layers: Vec<Layer>,
    /// Sum of layer heights.
    pub consumed_height: f64,
    /// Which rule closed this container.
    pub stop: StackStop,
}

impl Container {
    /// Number of boxes in the container.
    pub fn placed_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// Iterates every placement, bottom layer first.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.layers.iter().flat_map(|l| l.placements.iter())
    }

    /// Boxes per name in this container.
    pub fn counts(&self) -> CountTable {
        PlacementStats::from_placements(self.placements()).by_name
    }
}

/// How an allocation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// Every ordered box was placed.
    Satisfied,
    /// A fresh container could not take any remaining box.
    Stalled,
}

/// Result of an allocation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationResult {
    /// Bounds every container shares.
    pub bounds: ContainerBounds,
    /// Containers in the order they were opened.
    pub containers: Vec<Container>,
    /// Demand left over when the run stalled, zero quantities omitted.
    pub unsatisfied: BTreeMap<BoxName, u32>,
    /// How the run ended.
    pub termination: Termination,
}

impl AllocationResult {
    /// Creates an empty, satisfied result.
    pub fn new(bounds: ContainerBounds) -> Self {
        Self {
            bounds,
            containers: Vec::new(),
            unsatisfied: BTreeMap::new(),
            termination: Termination::Satisfied,
        }
    }

    /// Number of containers used.
    pub fn containers_used(&self) -> usize {
        self.containers.len()
    }

    /// Returns true if every ordered box was placed.
    pub fn all_placed(&self) -> bool {
        self.unsatisfied.is_empty()
    }

    /// Total number of placed boxes.
    pub fn placed_count(&self) -> usize {
        self.containers.iter().map(Container::placed_count).sum()
    }

    /// Total boxes left unplaced.
    pub fn unsatisfied_count(&self) -> u64 {
        self.unsatisfied.values().map(|&q| u64::from(q)).sum()
    }

    /// Iterates every placement across all containers.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.containers.iter().flat_map(|c| c.placements())
    }

    /// Grand-total boxes per name.
    pub fn counts(&self) -> CountTable {
        PlacementStats::from_placements(self.placements()).by_name
    }

    /// Placed volume over the volume of all containers used.
    pub fn utilization(&self) -> f64 {
        let capacity = self.bounds.volume() * self.containers.len() as f64;
        if capacity > 0.0 {
            PlacementStats::from_placements(self.placements()).total_volume / capacity
        } else {
            0.0
        }
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }
}

/// Summary statistics for an allocation result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationSummary {
    /// Number of containers used.
    pub containers_used: usize,
    /// Number of layers across all containers.
    pub layers_used: usize,
    /// Boxes placed.
    pub total_placed: usize,
    /// Boxes left unplaced.
    pub total_unsatisfied: u64,
    /// Volume utilization percentage.
    pub utilization_percent: f64,
}

impl From<&AllocationResult> for AllocationSummary {
    fn from(result: &AllocationResult) -> Self {
        Self {
            containers_used: result.containers_used(),
            layers_used: result.containers.iter().map(|c| c.layers.len()).sum(),
            total_placed: result.placed_count(),
            total_unsatisfied: result.unsatisfied_count(),
            utilization_percent: result.utilization() * 100.0,
        }
    }
}
