//! Free-rectangle tracking for a single layer plane.
//!
//! The tracker holds the regions of a plane that are still available. Placing
//! a box picks the free rectangle that would be left with the least unused
//! area (best-area fit, trying the box both ways round), removes it, and
//! replaces it with at most two guillotine remainders.
//!
//! Rectangles are kept in insertion order: a removed rectangle keeps the
//! relative order of the others and remainders are appended at the end. Ties
//! in best fit go to the earliest rectangle, unrotated before rotated, so the
//! order is part of the tracker's observable behavior.

use u_pallet_core::{BoxType, ContainerBounds, Placement, DEFAULT_EPSILON};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned free region of a layer plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FreeRect {
    /// Min corner x.
    pub x: f64,
    /// Min corner y.
    pub y: f64,
    /// Extent along x.
    pub length: f64,
    /// Extent along y.
    pub width: f64,
}

impl FreeRect {
    /// Creates a new free rectangle.
    pub fn new(x: f64, y: f64, length: f64, width: f64) -> Self {
        Self {
            x,
            y,
            length,
            width,
        }
    }

    /// Returns the area.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Whether a `length x width` footprint fits without turning it.
    pub fn admits(&self, length: f64, width: f64) -> bool {
        length <= self.length && width <= self.width
    }
}

/// A chosen position for a box inside one free rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// Index of the consumed rectangle in the tracker's list.
    pub index: usize,
    /// Min corner x.
    pub x: f64,
    /// Min corner y.
    pub y: f64,
    /// Oriented extent along x.
    pub length: f64,
    /// Oriented extent along y.
    pub width: f64,
    /// Whether the box was turned 90 degrees.
    pub rotated: bool,
    /// Rectangle area minus box area.
    pub leftover: f64,
}

impl Fit {
    /// Turns the fit into a placement record for `box_type`.
    pub fn to_placement(&self, box_type: &BoxType) -> Placement {
        Placement::new(
            box_type.name(),
            self.x,
            self.y,
            self.length,
            self.width,
            box_type.height(),
        )
        .with_rotated(self.rotated)
    }
}

/// Finds the best-area fit for a `length x width` box among `rects`.
///
/// Returns `None` if no rectangle admits the box in either orientation.
pub fn best_fit(rects: &[FreeRect], length: f64, width: f64) -> Option<Fit> {
    let box_area = length * width;
    let mut best: Option<Fit> = None;

    for (index, rect) in rects.iter().enumerate() {
        let leftover = rect.area() - box_area;

        for (used_length, used_width, rotated) in [(length, width, false), (width, length, true)]
        {
            if !rect.admits(used_length, used_width) {
                continue;
            }
            // Strict comparison keeps the first candidate on ties.
            if best.map_or(true, |b| leftover < b.leftover) {
                best = Some(Fit {
                    index,
                    x: rect.x,
                    y: rect.y,
                    length: used_length,
                    width: used_width,
                    rotated,
                    leftover,
                });
            }
        }
    }

    best
}

/// Splits `rect` after a `used_length x used_width` box is placed at its
/// min corner.
///
/// Yields the right remainder (as wide as the box) followed by the top
/// remainder (full rectangle length), skipping any whose area is not above
/// `epsilon`.
pub fn guillotine_split(
    rect: &FreeRect,
    used_length: f64,
    used_width: f64,
    epsilon: f64,
) -> impl Iterator<Item = FreeRect> {
    let right = FreeRect::new(
        rect.x + used_length,
        rect.y,
        rect.length - used_length,
        used_width,
    );
    let top = FreeRect::new(
        rect.x,
        rect.y + used_width,
        rect.length,
        rect.width - used_width,
    );
    [right, top].into_iter().filter(move |r| r.area() > epsilon)
}

/// Mutable set of free rectangles for one layer.
#[derive(Debug, Clone)]
pub struct FreeSpaceTracker {
    rects: Vec<FreeRect>,
    epsilon: f64,
}

impl FreeSpaceTracker {
    /// Creates a tracker holding one rectangle spanning the whole plane.
    pub fn new(length: f64, width: f64) -> Self {
        Self::with_epsilon(length, width, DEFAULT_EPSILON)
    }

    /// Creates a tracker with a custom remainder threshold.
    pub fn with_epsilon(length: f64, width: f64, epsilon: f64) -> Self {
        Self {
            rects: vec![FreeRect::new(0.0, 0.0, length, width)],
            epsilon,
        }
    }

    /// Creates a tracker for the plane of a container.
    pub fn for_bounds(bounds: &ContainerBounds, epsilon: f64) -> Self {
        Self::with_epsilon(bounds.length, bounds.width, epsilon)
    }

    /// Current free rectangles in list order.
    pub fn rects(&self) -> &[FreeRect] {
        &self.rects
    }

    /// Number of free rectangles.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns true if no free space is left.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Sum of free rectangle areas.
    pub fn free_area(&self) -> f64 {
        self.rects.iter().map(FreeRect::area).sum()
    }

    /// Best fit over every free rectangle, without committing it.
    pub fn best_fit(&self, length: f64, width: f64) -> Option<Fit> {
        best_fit(&self.rects, length, width)
    }

    /// Places a box at its best fit over the whole free set.
    pub fn place(&mut self, length: f64, width: f64) -> Option<Fit> {
        let fit = self.best_fit(length, width)?;
        self.commit(&fit);
        Some(fit)
    }

    /// Places a box inside the rectangle at `index` only.
    ///
    /// Returns `None`, leaving the set unchanged, if the index is out of range
    /// or the box does not fit that rectangle either way round.
    pub fn place_in(&mut self, index: usize, length: f64, width: f64) -> Option<Fit> {
        let rect = self.rects.get(index)?;
        let mut fit = best_fit(std::slice::from_ref(rect), length, width)?;
        fit.index = index;
        self.commit(&fit);
        Some(fit)
    }

    fn commit(&mut self, fit: &Fit) {
        let rect = self.rects.remove(fit.index);
        self.rects
            .extend(guillotine_split(&rect, fit.length, fit.width, self.epsilon));
    }
}
