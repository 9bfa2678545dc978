//! Movement resource pools

use serde::{Deserialize, Serialize};

/// A mover's movement budget: a primary pool plus a fixed number of discrete
/// bonus ("surge") pools consumed in order once the primary pool runs out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementResources {
    pub primary_pool: f32,
    pub secondary_pool_count: u32,
    pub secondary_pool_size: f32,
}

impl MovementResources {
    pub fn new(primary_pool: f32, secondary_pool_count: u32, secondary_pool_size: f32) -> Self {
        Self {
            primary_pool,
            secondary_pool_count,
            secondary_pool_size,
        }
    }

    /// Total budget across every pool.
    pub fn total_budget(&self) -> f32 {
        self.primary_pool + self.secondary_pool_count as f32 * self.secondary_pool_size
    }
}
