//! Pallet job definitions.

use serde::{Deserialize, Serialize};
use u_pallet::core::OrderLine;
use u_pallet::{BoxCatalog, BoxType, ContainerBounds, Order};

/// Summary information about a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInfo {
    /// Job name
    pub name: String,
    /// Number of box types in the catalog
    pub box_types: usize,
    /// Number of order lines
    pub order_lines: usize,
    /// Total boxes ordered
    pub total_boxes: u64,
}

/// Everything needed for one allocation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PalletJob {
    /// Job name
    pub name: String,
    /// Pallet dimensions
    pub bounds: ContainerBounds,
    /// Box catalog, in definition order
    pub boxes: Vec<BoxType>,
    /// Ordered quantities, in line order
    pub order: Vec<OrderLine>,
}

impl PalletJob {
    /// The stock job: a 42 x 42 x 90 pallet with the AZ box range, all 9 high.
    pub fn default_job() -> Self {
        const BOX_HEIGHT: f64 = 9.0;
        let lines: [(&str, f64, f64, u32); 15] = [
            ("AZ17", 40.0, 24.0, 47),
            ("AZ13", 40.0, 16.0, 12),
            ("AZ6", 40.0, 11.3, 15),
            ("AZ16", 24.0, 20.0, 72),
            ("AZ4", 24.0, 10.0, 1),
            ("AZ3", 24.0, 8.0, 64),
            ("AZ15", 22.9, 19.3, 65),
            ("AZ11", 22.7, 13.0, 24),
            ("AZ14", 22.375, 18.75, 3),
            ("AZ10", 22.375, 12.75, 12),
            ("AZ12", 20.0, 16.0, 24),
            ("AZ8", 18.375, 11.6, 24),
            ("AZ5", 18.375, 11.0, 47),
            ("AZ7", 12.0, 11.375, 24),
            ("AZ2", 12.0, 8.0, 95),
        ];

        Self {
            name: "default".to_string(),
            bounds: ContainerBounds::new(42.0, 42.0, 90.0),
            boxes: lines
                .iter()
                .map(|&(name, l, w, _)| BoxType::new(name, l, w, BOX_HEIGHT))
                .collect(),
            order: lines
                .iter()
                .map(|&(name, _, _, quantity)| OrderLine {
                    name: name.to_string(),
                    quantity,
                })
                .collect(),
        }
    }

    /// Returns job information.
    pub fn info(&self) -> JobInfo {
        JobInfo {
            name: self.name.clone(),
            box_types: self.boxes.len(),
            order_lines: self.order.len(),
            total_boxes: self.order.iter().map(|l| u64::from(l.quantity)).sum(),
        }
    }

    /// Builds the catalog.
    pub fn catalog(&self) -> BoxCatalog {
        self.boxes.iter().cloned().collect()
    }

    /// Builds the order.
    ///
    /// A name listed twice keeps its first position and its last quantity.
    pub fn order(&self) -> Order {
        let mut order = Order::new();
        for line in &self.order {
            order.insert(line.name.clone(), line.quantity);
        }
        order
    }

    /// Replaces the order lines.
    pub fn with_order(mut self, order: &Order) -> Self {
        self.order = order.iter().cloned().collect();
        self
    }
}
