//! Discrete facing sectors derived from movement direction

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::hex::Orientation;

/// Number of facing sectors (30 degrees each).
pub const FACING_SECTORS: u8 = 12;

/// One of 12 directional sectors a token visually points toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Facing(pub u8);

impl Facing {
    /// Neutral facing used when no direction can be derived.
    pub const NEUTRAL: Facing = Facing(0);

    /// Quantize an angle (radians, 0 = +x, counter-clockwise) to a sector.
    ///
    /// Pointy-top grids are rotated a quarter turn relative to flat-top, so
    /// the sector index shifts by 3 (+90 degrees).
    pub fn from_angle(angle: f32, orientation: Orientation) -> Self {
        let normalized = (angle / TAU).rem_euclid(1.0);
        let mut sector = (normalized * FACING_SECTORS as f32).round() as u8 % FACING_SECTORS;
        if orientation == Orientation::Pointy {
            sector = (sector + 3) % FACING_SECTORS;
        }
        Facing(sector)
    }

    /// Center angle of this sector in radians.
    pub fn angle(&self) -> f32 {
        self.0 as f32 / FACING_SECTORS as f32 * TAU
    }
}
