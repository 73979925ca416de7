//! End-to-end allocation tests.
//!
//! Runs whole orders through `allocate` and checks the resulting containers.

use approx::assert_relative_eq;
use u_pallet_d3::{
    allocate, allocate_with_config, AllocationResult, BoxCatalog, BoxType, Config,
    ContainerBounds, Order, PalletPacker, Solver, StackStop, Termination,
};

fn catalog(boxes: &[(&str, f64, f64, f64)]) -> BoxCatalog {
    boxes
        .iter()
        .map(|&(name, l, w, h)| BoxType::new(name, l, w, h))
        .collect()
}

/// Checks non-overlap, containment and the height rule for every container.
fn assert_well_formed(result: &AllocationResult) {
    let bounds = &result.bounds;
    for (ci, container) in result.containers.iter().enumerate() {
        let mut running = 0.0;
        for (li, layer) in container.layers.iter().enumerate() {
            assert!(
                running < bounds.height,
                "container {} layer {} started at height {}",
                ci,
                li,
                running
            );
            assert!(!layer.is_empty());
            running += layer.height;

            for (i, a) in layer.placements.iter().enumerate() {
                assert!(
                    bounds.contains_rect(a.x, a.y, a.placed_length, a.placed_width),
                    "{:?} leaves the plane",
                    a
                );
                for b in &layer.placements[i + 1..] {
                    assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
                }
            }
        }
        assert_relative_eq!(container.consumed_height, running, epsilon = 1e-9);
    }
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_single_type_stacks_in_one_container() {
        let bounds = ContainerBounds::new(40.0, 40.0, 90.0);
        let catalog = catalog(&[("A", 40.0, 40.0, 10.0)]);

        let result = allocate(&bounds, &catalog, Order::new().with("A", 3));

        assert_eq!(result.containers_used(), 1);
        let container = &result.containers[0];
        assert_eq!(container.layers.len(), 3);
        assert_relative_eq!(container.consumed_height, 30.0);
        for layer in &container.layers {
            assert_eq!(layer.len(), 1);
            let p = &layer.placements[0];
            assert_eq!(p.box_name, "A");
            assert_relative_eq!(p.x, 0.0);
            assert_relative_eq!(p.y, 0.0);
            assert!(!p.rotated);
        }
        assert_eq!(result.termination, Termination::Satisfied);
        assert_well_formed(&result);
    }

    #[test]
    fn test_oversized_box_yields_no_containers() {
        let bounds = ContainerBounds::new(10.0, 10.0, 10.0);
        let catalog = catalog(&[("A", 20.0, 5.0, 5.0)]);

        let result = allocate(&bounds, &catalog, Order::new().with("A", 1));

        assert_eq!(result.containers_used(), 0);
        assert_eq!(result.termination, Termination::Stalled);
        assert_eq!(result.unsatisfied.get("A"), Some(&1));
    }

    #[test]
    fn test_two_strips_share_one_layer() {
        let bounds = ContainerBounds::new(10.0, 10.0, 10.0);
        let catalog = catalog(&[("A", 10.0, 4.0, 5.0), ("B", 10.0, 6.0, 5.0)]);

        let result = allocate(&bounds, &catalog, Order::new().with("A", 1).with("B", 1));

        assert_eq!(result.containers_used(), 1);
        assert_eq!(result.containers[0].layers.len(), 1);
        let layer = &result.containers[0].layers[0];
        assert_eq!(layer.len(), 2);

        let covered: f64 = layer.placements.iter().map(|p| p.area()).sum();
        assert_relative_eq!(covered, bounds.footprint_area());

        let a = layer.placements.iter().find(|p| p.box_name == "A").unwrap();
        let b = layer.placements.iter().find(|p| p.box_name == "B").unwrap();
        assert_relative_eq!(b.y, 0.0);
        assert_relative_eq!(a.y, 6.0);
        assert_relative_eq!(a.placed_length, 10.0);
        assert_relative_eq!(a.placed_width, 4.0);
        assert_well_formed(&result);
    }

    #[test]
    fn test_tall_box_sets_layer_height() {
        let bounds = ContainerBounds::new(12.0, 6.0, 15.0);
        let catalog = catalog(&[("tall", 6.0, 6.0, 10.0), ("short", 6.0, 6.0, 5.0)]);
        let order = Order::new().with("tall", 2).with("short", 2);

        let result = allocate(&bounds, &catalog, order);

        // Both tall boxes share the first layer; the shorts go on top.
        let first = &result.containers[0];
        assert_relative_eq!(first.layers[0].height, 10.0);
        assert_eq!(first.layers[0].counts().get("tall"), Some(&2));
        assert_relative_eq!(first.layers[1].height, 5.0);
        assert_relative_eq!(first.consumed_height, 15.0);
        assert_eq!(result.containers_used(), 1);
        assert_well_formed(&result);
    }

    #[test]
    fn test_layer_over_budget_is_kept() {
        let bounds = ContainerBounds::new(6.0, 6.0, 15.0);
        let catalog = catalog(&[("tall", 6.0, 6.0, 10.0)]);

        let result = allocate(&bounds, &catalog, Order::new().with("tall", 3));

        // 0 < 15 and 10 < 15, so two layers fit before the budget closes.
        assert_eq!(result.containers_used(), 2);
        let first = &result.containers[0];
        assert_eq!(first.layers.len(), 2);
        assert_relative_eq!(first.consumed_height, 20.0);
        assert_eq!(first.stop, StackStop::HeightReached);
        assert_well_formed(&result);
    }

    #[test]
    fn test_rotation_when_only_turned_box_fits() {
        let bounds = ContainerBounds::new(10.0, 6.0, 5.0);
        let catalog = catalog(&[("A", 6.0, 10.0, 5.0)]);

        let result = allocate(&bounds, &catalog, Order::new().with("A", 1));

        assert_eq!(result.containers_used(), 1);
        let p = &result.containers[0].layers[0].placements[0];
        assert!(p.rotated);
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 0.0);
        assert_relative_eq!(p.placed_length, 10.0);
        assert_relative_eq!(p.placed_width, 6.0);
        assert_well_formed(&result);
    }
}

mod behavior_tests {
    use super::*;

    fn default_job() -> (ContainerBounds, BoxCatalog, Order) {
        let boxes = [
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
        let catalog = boxes
            .iter()
            .map(|&(name, l, w, _)| BoxType::new(name, l, w, 9.0))
            .collect();
        let order = boxes.iter().map(|&(name, _, _, qty)| (name, qty)).collect();
        (ContainerBounds::new(42.0, 42.0, 90.0), catalog, order)
    }

    #[test]
    fn test_default_job_places_everything() {
        let (bounds, catalog, order) = default_job();
        let requested = order.total_remaining();

        let result = allocate(&bounds, &catalog, order.clone());

        assert!(result.all_placed());
        assert_eq!(result.placed_count() as u64, requested);
        for line in order.iter() {
            assert_eq!(
                result.counts().get(&line.name).copied().unwrap_or(0),
                line.quantity as usize,
                "count mismatch for {}",
                line.name
            );
        }
        for container in &result.containers {
            assert!(container.layers.len() <= 10);
        }
        assert!(result.utilization() > 0.0 && result.utilization() <= 1.0);
        assert_well_formed(&result);
    }

    #[test]
    fn test_allocation_is_deterministic() {
        let (bounds, catalog, order) = default_job();

        let first = allocate(&bounds, &catalog, order.clone());
        let second = allocate(&bounds, &catalog, order);

        assert_eq!(first, second);
    }

    #[test]
    fn test_uniform_height_matches_fixed_layer_count() {
        let (bounds, catalog, order) = default_job();
        let config = Config::default().with_uniform_layer_height(9.0);

        let result = allocate_with_config(&bounds, &catalog, order, &config);

        assert!(result.all_placed());
        for container in &result.containers {
            assert!(container.layers.len() <= 10);
            for layer in &container.layers {
                assert_relative_eq!(layer.height, 9.0);
            }
        }
    }

    #[test]
    fn test_gap_fill_toggle_does_not_lose_boxes() {
        let (bounds, catalog, order) = default_job();
        let requested = order.total_remaining();

        let config = Config::default().with_gap_fill(false);
        let result = allocate_with_config(&bounds, &catalog, order, &config);

        assert_eq!(result.placed_count() as u64, requested);
        assert_well_formed(&result);
    }

    #[test]
    fn test_partial_shortfall_is_reported() {
        let bounds = ContainerBounds::new(10.0, 10.0, 10.0);
        let catalog = catalog(&[
            ("fits", 5.0, 5.0, 5.0),
            ("flat", 5.0, 5.0, 0.0),
            ("wide", 5.0, 11.0, 1.0),
        ]);
        let order = Order::new()
            .with("fits", 9)
            .with("flat", 2)
            .with("wide", 1)
            .with("unknown", 4);

        let result = allocate(&bounds, &catalog, order);

        assert_eq!(result.placed_count(), 9);
        assert_eq!(result.termination, Termination::Stalled);
        assert_eq!(result.unsatisfied.get("flat"), Some(&2));
        assert_eq!(result.unsatisfied.get("wide"), Some(&1));
        assert_eq!(result.unsatisfied.get("unknown"), Some(&4));
        assert!(!result.unsatisfied.contains_key("fits"));
        assert_well_formed(&result);
    }

    #[test]
    fn test_solver_matches_free_function() {
        let (bounds, catalog, order) = default_job();

        let via_solver = PalletPacker::default_config()
            .solve(&bounds, &catalog, &order)
            .unwrap();
        let direct = allocate(&bounds, &catalog, order);

        assert_eq!(via_solver, direct);
    }
}
