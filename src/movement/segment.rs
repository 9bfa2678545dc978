//! Path segmentation into resource bands
//!
//! Splits an already-found path into the ordered bands consumed by different
//! movement resources, for rendering and for reporting resource usage.
//! Adjacent segments share their boundary node so each renders as a
//! continuous polyline.

use serde::{Deserialize, Serialize};

use crate::pathfinding::PathNode;

use super::resources::MovementResources;

/// Which resource band a path node falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentClass {
    /// Paid from the primary movement pool.
    Primary,
    /// Paid from the n-th secondary pool (1-based).
    Secondary(u32),
    /// Beyond the total budget.
    Unreachable,
}

/// A contiguous run of same-classification nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub class: SegmentClass,
    pub nodes: Vec<PathNode>,
}

/// How much of each resource the move consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsedResources {
    pub movement: f32,
    pub secondary_used: u32,
}

/// A path partitioned into resource bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentedPath {
    pub segments: Vec<PathSegment>,
    pub used: UsedResources,
    pub reachable: bool,
}

impl SegmentedPath {
    /// Cumulative cost of the whole path.
    pub fn total_cost(&self) -> f32 {
        self.segments
            .last()
            .and_then(|s| s.nodes.last())
            .map_or(0.0, |n| n.cost)
    }
}

/// Band for a cumulative cost: the smallest pool boundary it does not exceed.
fn classify(cost: f32, resources: &MovementResources) -> SegmentClass {
    if cost <= resources.primary_pool {
        return SegmentClass::Primary;
    }
    let mut boundary = resources.primary_pool;
    for i in 1..=resources.secondary_pool_count {
        boundary += resources.secondary_pool_size;
        if cost <= boundary {
            return SegmentClass::Secondary(i);
        }
    }
    SegmentClass::Unreachable
}

/// Partition `path` into resource bands.
///
/// Paths shorter than 2 nodes require no movement: empty segment list,
/// `reachable = true`, zero usage.
pub fn segment(path: &[PathNode], resources: &MovementResources) -> SegmentedPath {
    if path.len() < 2 {
        return SegmentedPath {
            segments: Vec::new(),
            used: UsedResources {
                movement: 0.0,
                secondary_used: 0,
            },
            reachable: true,
        };
    }

    let total = path.last().map_or(0.0, |n| n.cost);

    let mut segments: Vec<PathSegment> = Vec::new();
    let mut current_class = classify(path[0].cost, resources);
    let mut current_nodes = vec![path[0]];

    for &node in &path[1..] {
        let class = classify(node.cost, resources);
        if class != current_class {
            // Each segment starts at the previous run's last node so the
            // rendered polyline stays continuous.
            let shared = *current_nodes.last().expect("segment run is never empty");
            segments.push(PathSegment {
                class: current_class,
                nodes: current_nodes,
            });
            current_nodes = vec![shared];
            current_class = class;
        }
        current_nodes.push(node);
    }
    segments.push(PathSegment {
        class: current_class,
        nodes: current_nodes,
    });

    let movement = total.min(resources.primary_pool);
    let secondary_used = if total > resources.primary_pool && resources.secondary_pool_size > 0.0 {
        let excess = total - resources.primary_pool;
        ((excess / resources.secondary_pool_size).ceil() as u32).min(resources.secondary_pool_count)
    } else {
        0
    };
    let reachable = segments
        .last()
        .is_some_and(|s| s.class != SegmentClass::Unreachable);

    SegmentedPath {
        segments,
        used: UsedResources {
            movement,
            secondary_used,
        },
        reachable,
    }
}
