//! Box types and the catalog they are looked up in.

use crate::{Error, Result};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique name of a box type.
pub type BoxName = String;

/// A rectangular box with a fixed footprint and height.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxType {
    name: BoxName,
    length: f64,
    width: f64,
    height: f64,
}

impl BoxType {
    /// Creates a new box type.
    pub fn new(name: impl Into<BoxName>, length: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            length,
            width,
            height,
        }
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the footprint length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the footprint width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Plan-view area, `length * width`.
    pub fn footprint_area(&self) -> f64 {
        self.length * self.width
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.footprint_area() * self.height
    }

    /// Whether the packer may ever place this box.
    ///
    /// Zero, negative or non-finite dimensions make a box permanently
    /// unplaceable; its demand is left untouched.
    pub fn is_placeable(&self) -> bool {
        [self.length, self.width, self.height]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0)
    }

    /// Validates the dimensions.
    pub fn validate(&self) -> Result<()> {
        for (label, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidBoxType {
                    name: self.name.clone(),
                    reason: format!("{} must be a positive number, got {}", label, value),
                });
            }
        }
        Ok(())
    }
}

/// Static lookup of box types by name.
///
/// Iteration follows insertion order. Inserting a name twice replaces the
/// earlier definition in place.
#[derive(Debug, Clone, Default)]
pub struct BoxCatalog {
    boxes: Vec<BoxType>,
    index: HashMap<BoxName, usize>,
}

impl BoxCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a box type, replacing any existing entry with the same name.
    pub fn insert(&mut self, box_type: BoxType) {
        match self.index.get(box_type.name()) {
            Some(&idx) => self.boxes[idx] = box_type,
            None => {
                self.index
                    .insert(box_type.name().to_string(), self.boxes.len());
                self.boxes.push(box_type);
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_box(mut self, box_type: BoxType) -> Self {
        self.insert(box_type);
        self
    }

    /// Looks up a box type by name.
    pub fn get(&self, name: &str) -> Option<&BoxType> {
        self.index.get(name).map(|&idx| &self.boxes[idx])
    }

    /// Returns true if the catalog defines `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of box types.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Iterates box types in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BoxType> {
        self.boxes.iter()
    }

    /// Validates every entry.
    pub fn validate(&self) -> Result<()> {
        self.boxes.iter().try_for_each(BoxType::validate)
    }
}

impl FromIterator<BoxType> for BoxCatalog {
    fn from_iter<I: IntoIterator<Item = BoxType>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for box_type in iter {
            catalog.insert(box_type);
        }
        catalog
    }
}
