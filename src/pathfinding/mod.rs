//! Graph search over the hex grid
//!
//! A* single-target search and Dijkstra-style reachability, both driven by
//! the passability rule engine through an injected cost function. Both are
//! synchronous pure functions of their inputs, bounded by `max_iterations`.

pub mod astar;
pub mod reachable;

pub use astar::find_path;
pub use reachable::reachable;

use ahash::AHashSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::hex::Axial;
use crate::rules::{resolve, CapabilitySet, PassabilityBundle};

/// Per-step traversal cost. `f32::INFINITY` marks an impassable step.
pub trait TraversalCost {
    fn step_cost(&self, from: Axial, to: Axial, caps: &CapabilitySet) -> f32;
}

impl<F> TraversalCost for F
where
    F: Fn(Axial, Axial, &CapabilitySet) -> f32,
{
    fn step_cost(&self, from: Axial, to: Axial, caps: &CapabilitySet) -> f32 {
        self(from, to, caps)
    }
}

/// Source of per-cell rule bundles, typically backed by live map state.
///
/// Must be deterministic for the duration of one search call.
pub trait CellLookup {
    /// Rule bundle for a cell, or `None` for cells outside the map.
    fn bundle_at(&self, hex: Axial) -> Option<PassabilityBundle>;
}

/// Composes a cell lookup with the rule engine into a step cost.
pub struct BundleCost<'a, L: CellLookup> {
    lookup: &'a L,
    cost_floor: f32,
}

impl<'a, L: CellLookup> BundleCost<'a, L> {
    pub fn new(lookup: &'a L, cost_floor: f32) -> Self {
        Self { lookup, cost_floor }
    }
}

impl<L: CellLookup> TraversalCost for BundleCost<'_, L> {
    fn step_cost(&self, _from: Axial, to: Axial, caps: &CapabilitySet) -> f32 {
        match self.lookup.bundle_at(to) {
            Some(bundle) => {
                let verdict = resolve(&bundle, caps, self.cost_floor);
                if verdict.passable {
                    verdict.cost
                } else {
                    f32::INFINITY
                }
            }
            None => f32::INFINITY,
        }
    }
}

/// Options shared by both search operations.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub capabilities: CapabilitySet,
    /// Cell keys excluded from traversal except as the destination.
    pub blocked: AHashSet<i64>,
    /// Prune any tentative cost above this value.
    pub max_cost: Option<f32>,
    /// Expansion cap; exhaustion reports the same as unreachability.
    pub max_iterations: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            capabilities: CapabilitySet::new(),
            blocked: AHashSet::new(),
            max_cost: None,
            max_iterations: crate::core::EngineConfig::default().max_iterations,
        }
    }
}

/// A node on a found path: hex plus cumulative cost from the start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    pub hex: Axial,
    pub cost: f32,
}

impl PathNode {
    pub fn new(hex: Axial, cost: f32) -> Self {
        Self { hex, cost }
    }
}

/// Result of a single-target search.
///
/// `found = false` with an empty path covers an unreachable goal, an
/// impassable goal cell, and an exhausted iteration/cost budget alike; the
/// `iterations` counter is the only way to tell exhaustion apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Vec<PathNode>,
    pub total_cost: f32,
    pub found: bool,
    pub iterations: usize,
}

impl PathResult {
    pub(crate) fn not_found(iterations: usize) -> Self {
        Self {
            path: Vec::new(),
            total_cost: 0.0,
            found: false,
            iterations,
        }
    }
}

/// Frontier entry for the shared priority queue.
///
/// Ordered by (priority, insertion sequence) so ties break deterministically
/// in insertion order.
pub(crate) struct Frontier {
    pub priority: OrderedFloat<f32>,
    pub seq: u64,
    pub hex: Axial,
    pub cost: f32,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    #[test]
    fn test_frontier_orders_by_priority_then_insertion() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(Frontier {
            priority: OrderedFloat(2.0),
            seq: 0,
            hex: Axial::new(0, 0),
            cost: 2.0,
        }));
        heap.push(Reverse(Frontier {
            priority: OrderedFloat(1.0),
            seq: 2,
            hex: Axial::new(1, 0),
            cost: 1.0,
        }));
        heap.push(Reverse(Frontier {
            priority: OrderedFloat(1.0),
            seq: 1,
            hex: Axial::new(0, 1),
            cost: 1.0,
        }));

        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|Reverse(f)| f.seq)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_closure_implements_traversal_cost() {
        let cost = |_from: Axial, to: Axial, _caps: &CapabilitySet| {
            if to.q < 0 {
                f32::INFINITY
            } else {
                1.0
            }
        };
        let caps = CapabilitySet::new();
        assert_eq!(
            cost.step_cost(Axial::ZERO, Axial::new(1, 0), &caps),
            1.0
        );
        assert!(cost
            .step_cost(Axial::ZERO, Axial::new(-1, 0), &caps)
            .is_infinite());
    }
}
