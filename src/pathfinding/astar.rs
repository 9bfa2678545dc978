//! A* single-target search

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ahash::{AHashMap, AHashSet};
use ordered_float::OrderedFloat;

use crate::core::EngineConfig;
use crate::hex::Axial;

use super::{Frontier, PathNode, PathResult, SearchOptions, TraversalCost};

/// Find the cheapest path from `start` to `goal`.
///
/// The heuristic is hex distance scaled by the cost floor, which keeps it
/// admissible while the cheapest legal step costs `cost_floor`. Cells in
/// `options.blocked` are skipped unless they are the goal itself. An
/// unreachable or impassable goal and an exhausted iteration or cost budget
/// all report `found = false` with an empty path.
pub fn find_path<C: TraversalCost>(
    start: Axial,
    goal: Axial,
    cost: &C,
    options: &SearchOptions,
    config: &EngineConfig,
) -> PathResult {
    if start == goal {
        return PathResult {
            path: vec![PathNode::new(start, 0.0)],
            total_cost: 0.0,
            found: true,
            iterations: 0,
        };
    }

    let heuristic_scale = config.cost_floor;
    let heuristic = |hex: Axial| hex.distance(&goal) as f32 * heuristic_scale;

    let mut open = BinaryHeap::new();
    let mut best_cost: AHashMap<Axial, f32> = AHashMap::new();
    let mut came_from: AHashMap<Axial, Axial> = AHashMap::new();
    let mut closed: AHashSet<Axial> = AHashSet::new();
    let mut seq = 0u64;
    let mut iterations = 0usize;

    best_cost.insert(start, 0.0);
    open.push(Reverse(Frontier {
        priority: OrderedFloat(heuristic(start)),
        seq,
        hex: start,
        cost: 0.0,
    }));

    while let Some(Reverse(current)) = open.pop() {
        if closed.contains(&current.hex) {
            continue;
        }

        if current.hex == goal {
            return PathResult {
                path: reconstruct(&came_from, &best_cost, goal),
                total_cost: current.cost,
                found: true,
                iterations,
            };
        }

        closed.insert(current.hex);
        iterations += 1;
        if iterations >= options.max_iterations {
            tracing::debug!(
                iterations,
                ?start,
                ?goal,
                "path search exhausted its iteration budget"
            );
            return PathResult::not_found(iterations);
        }

        for neighbor in current.hex.neighbors() {
            if closed.contains(&neighbor) {
                continue;
            }
            if neighbor != goal && options.blocked.contains(&neighbor.key()) {
                continue;
            }

            let step = cost.step_cost(current.hex, neighbor, &options.capabilities);
            if !step.is_finite() {
                continue;
            }

            let tentative = current.cost + step;
            if let Some(max_cost) = options.max_cost {
                if tentative > max_cost {
                    continue;
                }
            }
            if tentative >= *best_cost.get(&neighbor).unwrap_or(&f32::INFINITY) {
                continue;
            }

            best_cost.insert(neighbor, tentative);
            came_from.insert(neighbor, current.hex);
            seq += 1;
            open.push(Reverse(Frontier {
                priority: OrderedFloat(tentative + heuristic(neighbor)),
                seq,
                hex: neighbor,
                cost: tentative,
            }));
        }
    }

    PathResult::not_found(iterations)
}

/// Walk the parent links back from the goal, emitting cumulative costs.
fn reconstruct(
    came_from: &AHashMap<Axial, Axial>,
    best_cost: &AHashMap<Axial, f32>,
    goal: Axial,
) -> Vec<PathNode> {
    let mut path = vec![PathNode::new(goal, best_cost[&goal])];
    let mut current = goal;

    while let Some(&parent) = came_from.get(&current) {
        path.push(PathNode::new(parent, best_cost[&parent]));
        current = parent;
    }

    path.reverse();
    path
}
