//! Stacking layers into one container.

use u_pallet_core::{
    BoxCatalog, Config, Container, ContainerBounds, HeightRule, Layer, Order, StackStop,
};
use u_pallet_d2::pack_layer;

/// Fills one container with layers until its height budget is spent.
///
/// A layer is charged after it has been packed, so the last layer may take
/// the consumed height past `bounds.height`; no further layer is started once
/// the budget is reached. The returned container may have no layers, which
/// means nothing in `order` fits an empty plane.
pub fn pack_container(
    bounds: &ContainerBounds,
    catalog: &BoxCatalog,
    order: &mut Order,
    config: &Config,
) -> Container {
    let layer_cap = match config.height_rule {
        HeightRule::TallestPlacement => None,
        HeightRule::Uniform { layer_height } => {
            Some((bounds.height / layer_height).floor().max(0.0) as usize)
        }
    };

    let mut layers: Vec<Layer> = Vec::new();
    let mut consumed_height = 0.0;
    let mut stop = StackStop::HeightReached;

    while consumed_height < bounds.height && layer_cap.map_or(true, |cap| layers.len() < cap) {
        if order.is_satisfied() {
            stop = StackStop::OrderSatisfied;
            break;
        }

        let placements = pack_layer(bounds, catalog, order, config);
        if placements.is_empty() {
            stop = StackStop::NoPlacement;
            break;
        }

        let layer = match config.height_rule {
            HeightRule::TallestPlacement => Layer::new(placements),
            HeightRule::Uniform { layer_height } => Layer::with_height(placements, layer_height),
        };
        consumed_height += layer.height;

        log::debug!(
            "layer {} stacked: {} boxes, height {:.3}, consumed {:.3} of {:.3}",
            layers.len() + 1,
            layer.len(),
            layer.height,
            consumed_height,
            bounds.height
        );
        layers.push(layer);
    }

    Container {
        layers,
        consumed_height,
        stop,
    }
}
