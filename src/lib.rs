//! Hexmove - tactical movement engine for hex-grid virtual tabletops

pub mod animation;
pub mod core;
pub mod hex;
pub mod movement;
pub mod pathfinding;
pub mod rules;
