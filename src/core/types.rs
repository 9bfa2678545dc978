//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for tokens on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u32);

impl TokenId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Wall-clock timestamp in milliseconds, shared between session peers
pub type TimestampMs = f64;
