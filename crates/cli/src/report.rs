//! Text reports for allocation results.

use std::fmt;
use u_pallet::core::CountTable;
use u_pallet::{AllocationResult, AllocationSummary};

fn format_counts(counts: &CountTable) -> String {
    counts
        .iter()
        .map(|(name, count)| format!("{} x{}", name, count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders per-layer, per-pallet and grand-total box counts.
pub fn render_report(result: &AllocationResult) -> String {
    Report(result).to_string()
}

/// Text report of an allocation result.
pub struct Report<'a>(pub &'a AllocationResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.0)
    }
}

fn write_report(out: &mut fmt::Formatter<'_>, result: &AllocationResult) -> fmt::Result {
    let bounds = &result.bounds;
    writeln!(
        out,
        "Pallet {} x {} x {}",
        bounds.length, bounds.width, bounds.height
    )?;
    writeln!(out, "{:=<60}", "")?;

    for (ci, container) in result.containers.iter().enumerate() {
        writeln!(
            out,
            "Pallet {}: {} layer(s), height {:.2} ({:?})",
            ci + 1,
            container.layers.len(),
            container.consumed_height,
            container.stop
        )?;
        for (li, layer) in container.layers.iter().enumerate() {
            writeln!(
                out,
                "  Layer {:>2} (h={:.2}): {}",
                li + 1,
                layer.height,
                format_counts(&layer.counts())
            )?;
        }
        writeln!(out, "  Total: {}", format_counts(&container.counts()))?;
    }

    writeln!(out, "{:-<60}", "")?;
    writeln!(out, "Grand total:")?;
    for (name, count) in result.counts() {
        writeln!(out, "  {:<12} {:>6}", name, count)?;
    }

    if !result.unsatisfied.is_empty() {
        writeln!(out, "Unsatisfied:")?;
        for (name, quantity) in &result.unsatisfied {
            writeln!(out, "  {:<12} {:>6}", name, quantity)?;
        }
    }

    let summary = AllocationSummary::from(result);
    writeln!(
        out,
        "Pallets used: {}  layers: {}  boxes: {}  unplaced: {}  utilization: {:.1}%",
        summary.containers_used,
        summary.layers_used,
        summary.total_placed,
        summary.total_unsatisfied,
        summary.utilization_percent
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_pallet::{allocate, BoxCatalog, BoxType, ContainerBounds, Order};

    #[test]
    fn test_report_lists_layers_and_totals() {
        let bounds = ContainerBounds::new(40.0, 40.0, 90.0);
        let catalog: BoxCatalog = [BoxType::new("A", 40.0, 40.0, 10.0)].into_iter().collect();
        let result = allocate(&bounds, &catalog, Order::new().with("A", 3));

        let report = render_report(&result);

        assert!(report.contains("Pallet 1: 3 layer(s)"));
        assert!(report.contains("Layer  3 (h=10.00): A x1"));
        assert!(report.contains("  Total: A x3"));
        assert!(report.contains("Pallets used: 1"));
        assert!(!report.contains("Unsatisfied"));
    }

    #[test]
    fn test_report_shows_unsatisfied() {
        let bounds = ContainerBounds::new(10.0, 10.0, 10.0);
        let catalog: BoxCatalog = [BoxType::new("A", 20.0, 5.0, 5.0)].into_iter().collect();
        let result = allocate(&bounds, &catalog, Order::new().with("A", 2));

        let report = render_report(&result);

        assert!(report.contains("Unsatisfied:"));
        assert!(report.contains("Pallets used: 0"));
        assert!(report.contains("unplaced: 2"));
    }

    #[test]
    fn test_report_displays_like_rendered_string() {
        let bounds = ContainerBounds::new(10.0, 10.0, 10.0);
        let catalog: BoxCatalog = [BoxType::new("A", 5.0, 5.0, 5.0)].into_iter().collect();
        let result = allocate(&bounds, &catalog, Order::new().with("A", 5));

        let shown = format!("{}", Report(&result));
        assert!(shown.contains("Pallet 1: 2 layer(s)"));
        assert!(shown.contains("Layer  2 (h=5.00): A x1"));
        assert_eq!(shown, render_report(&result));
    }
}
