//! Placement records produced by the layer packer.

use crate::catalog::BoxName;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-name count table consumed by reports.
pub type CountTable = BTreeMap<BoxName, usize>;

/// A box positioned on a layer plane.
///
/// `placed_length` and `placed_width` are the footprint as oriented, so for a
/// rotated placement they are the box type's width and length respectively.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Name of the placed box type.
    pub box_name: BoxName,
    /// Min corner x.
    pub x: f64,
    /// Min corner y.
    pub y: f64,
    /// Oriented extent along x.
    pub placed_length: f64,
    /// Oriented extent along y.
    pub placed_width: f64,
    /// Box height.
    pub placed_height: f64,
    /// Whether the footprint was turned 90 degrees.
    pub rotated: bool,
}

impl Placement {
    /// Creates a new unrotated placement.
    pub fn new(
        box_name: impl Into<BoxName>,
        x: f64,
        y: f64,
        placed_length: f64,
        placed_width: f64,
        placed_height: f64,
    ) -> Self {
        Self {
            box_name: box_name.into(),
            x,
            y,
            placed_length,
            placed_width,
            placed_height,
            rotated: false,
        }
    }

    /// Sets the rotated flag.
    pub fn with_rotated(mut self, rotated: bool) -> Self {
        self.rotated = rotated;
        self
    }

    /// Footprint area.
    pub fn area(&self) -> f64 {
        self.placed_length * self.placed_width
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.area() * self.placed_height
    }

    /// Max corner x.
    pub fn max_x(&self) -> f64 {
        self.x + self.placed_length
    }

    /// Max corner y.
    pub fn max_y(&self) -> f64 {
        self.y + self.placed_width
    }

    /// Returns true if the two footprints share a region of positive area.
    ///
    /// Touching edges do not count as overlap.
    pub fn overlaps(&self, other: &Placement) -> bool {
        let overlap_x = self.max_x().min(other.max_x()) - self.x.max(other.x);
        let overlap_y = self.max_y().min(other.max_y()) - self.y.max(other.y);
        overlap_x > 1e-9 && overlap_y > 1e-9
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Number of rotated placements.
    pub rotated_count: usize,
    /// Placements per box name.
    pub by_name: CountTable,
    /// Sum of footprint areas.
    pub total_area: f64,
    /// Sum of box volumes.
    pub total_volume: f64,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements<'a, I>(placements: I) -> Self
    where
        I: IntoIterator<Item = &'a Placement>,
    {
        let mut stats = Self::default();

        for p in placements {
            stats.count += 1;
            if p.rotated {
                stats.rotated_count += 1;
            }
            *stats.by_name.entry(p.box_name.clone()).or_insert(0) += 1;
            stats.total_area += p.area();
            stats.total_volume += p.volume();
        }

        stats
    }
}
