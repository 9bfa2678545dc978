//! Token movement animation
//!
//! Converts a discrete hex path into a continuously-interpolated pixel
//! trajectory with eased timing and 12-sector facing derivation. The render
//! loop polls each animation once per frame; everything that happened in a
//! frame comes back as a [`track::TickResult`] instead of callbacks.

pub mod facing;
pub mod registry;
pub mod spline;
pub mod track;

pub use facing::{Facing, FACING_SECTORS};
pub use registry::AnimationRegistry;
pub use track::{AnimationPhase, HexChange, MoveAnimation, ReplayPlan, TickResult, TickUpdate};
