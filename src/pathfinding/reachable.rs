//! Dijkstra-style reachability within a movement budget

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ahash::AHashMap;
use ordered_float::OrderedFloat;

use crate::hex::Axial;

use super::{Frontier, PathNode, SearchOptions, TraversalCost};

/// Every cell reachable from `start` for at most `max_cost`, with the
/// cheapest discovered cost to reach it.
///
/// Uniform-cost expansion; frontier nodes whose tentative cost exceeds
/// `max_cost` are pruned. The result always contains `start` at cost 0.
/// Blocked cells are never entered. Exhausting `options.max_iterations`
/// returns whatever was settled so far.
pub fn reachable<C: TraversalCost>(
    start: Axial,
    max_cost: f32,
    cost: &C,
    options: &SearchOptions,
) -> AHashMap<Axial, PathNode> {
    let mut settled: AHashMap<Axial, PathNode> = AHashMap::new();
    let mut best_cost: AHashMap<Axial, f32> = AHashMap::new();
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;
    let mut iterations = 0usize;

    best_cost.insert(start, 0.0);
    open.push(Reverse(Frontier {
        priority: OrderedFloat(0.0),
        seq,
        hex: start,
        cost: 0.0,
    }));

    while let Some(Reverse(current)) = open.pop() {
        if settled.contains_key(&current.hex) {
            continue;
        }
        settled.insert(current.hex, PathNode::new(current.hex, current.cost));

        iterations += 1;
        if iterations >= options.max_iterations {
            tracing::debug!(
                iterations,
                ?start,
                "reachability expansion exhausted its iteration budget"
            );
            break;
        }

        for neighbor in current.hex.neighbors() {
            if settled.contains_key(&neighbor) {
                continue;
            }
            if options.blocked.contains(&neighbor.key()) {
                continue;
            }

            let step = cost.step_cost(current.hex, neighbor, &options.capabilities);
            if !step.is_finite() {
                continue;
            }

            let tentative = current.cost + step;
            if tentative > max_cost {
                continue;
            }
            if tentative >= *best_cost.get(&neighbor).unwrap_or(&f32::INFINITY) {
                continue;
            }

            best_cost.insert(neighbor, tentative);
            seq += 1;
            open.push(Reverse(Frontier {
                priority: OrderedFloat(tentative),
                seq,
                hex: neighbor,
                cost: tentative,
            }));
        }
    }

    settled
}
