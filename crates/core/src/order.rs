//! Remaining demand per box type.

use crate::catalog::BoxName;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderLine {
    /// Box type name.
    pub name: BoxName,
    /// Remaining quantity.
    pub quantity: u32,
}

/// Mapping from box name to remaining quantity.
///
/// Lines keep their insertion order; the layer packer relies on it to break
/// ties between box types of equal footprint area, so two runs over the same
/// order always produce the same containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    lines: Vec<OrderLine>,
    index: HashMap<BoxName, usize>,
}

impl Order {
    /// Creates an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantity for `name`, keeping its original position if present.
    pub fn insert(&mut self, name: impl Into<BoxName>, quantity: u32) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&idx) => self.lines[idx].quantity = quantity,
            None => {
                self.index.insert(name.clone(), self.lines.len());
                self.lines.push(OrderLine { name, quantity });
            }
        }
    }

    /// Adds `quantity` to the demand for `name`.
    pub fn add(&mut self, name: impl Into<BoxName>, quantity: u32) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(quantity);
            }
            None => self.insert(name, quantity),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<BoxName>, quantity: u32) -> Self {
        self.insert(name, quantity);
        self
    }

    /// Remaining quantity for `name` (zero if never ordered).
    pub fn quantity(&self, name: &str) -> u32 {
        self.index
            .get(name)
            .map_or(0, |&idx| self.lines[idx].quantity)
    }

    /// Decrements the remaining quantity for `name`.
    ///
    /// Returns false, leaving the order unchanged, when nothing remains.
    pub fn decrement(&mut self, name: &str) -> bool {
        match self.index.get(name) {
            Some(&idx) if self.lines[idx].quantity > 0 => {
                self.lines[idx].quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Sum of all remaining quantities.
    pub fn total_remaining(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Returns true when every quantity is zero.
    pub fn is_satisfied(&self) -> bool {
        self.lines.iter().all(|l| l.quantity == 0)
    }

    /// Names with remaining quantity > 0, in insertion order.
    pub fn remaining_names(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.quantity > 0)
            .map(|l| l.name.as_str())
            .collect()
    }

    /// Iterates all lines, including satisfied ones.
    pub fn iter(&self) -> impl Iterator<Item = &OrderLine> {
        self.lines.iter()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the order has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<N: Into<BoxName>> FromIterator<(N, u32)> for Order {
    fn from_iter<I: IntoIterator<Item = (N, u32)>>(iter: I) -> Self {
        let mut order = Self::new();
        for (name, quantity) in iter {
            order.add(name, quantity);
        }
        order
    }
}
