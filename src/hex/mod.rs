//! Hex grid coordinate system
//!
//! Axial (q, r) coordinates with support for both flat-top and pointy-top
//! hexagons. Pure geometry; no map state lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::error::{HexMoveError, Result};

/// Axial hex coordinate. The third cubic coordinate s = -q - r is derived,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    pub const ZERO: Axial = Axial { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Derived third cubic coordinate (q + r + s == 0).
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Convert to cube coordinates for algorithms.
    pub const fn to_cube(&self) -> (i32, i32, i32) {
        (self.q, self.s(), self.r)
    }

    /// Stable integer key for hash maps and wire records.
    pub fn key(&self) -> i64 {
        ((self.q as i64) << 32) | (self.r as u32 as i64)
    }

    /// Inverse of [`Axial::key`].
    pub fn from_key(key: i64) -> Self {
        Self::new((key >> 32) as i32, key as i32)
    }

    /// The 6 adjacent hexes. Order is stable; the index doubles as a
    /// direction 0..5.
    pub fn neighbors(&self) -> [Axial; 6] {
        [
            Axial::new(self.q + 1, self.r),
            Axial::new(self.q + 1, self.r - 1),
            Axial::new(self.q, self.r - 1),
            Axial::new(self.q - 1, self.r),
            Axial::new(self.q - 1, self.r + 1),
            Axial::new(self.q, self.r + 1),
        ]
    }

    /// Distance to another hex (in hex steps).
    pub fn distance(&self, other: &Axial) -> i32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        (dq.abs() + (dq + dr).abs() + dr.abs()) / 2
    }
}

/// Hexagon orientation (fixed per grid instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Flat,
    Pointy,
}

const SQRT_3: f32 = 1.732_050_8;

impl Orientation {
    /// Forward basis (axial -> pixel): [m00, m01, m10, m11].
    fn forward(&self) -> [f32; 4] {
        match self {
            Orientation::Pointy => [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
            Orientation::Flat => [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
        }
    }

    /// Inverse basis (pixel -> fractional axial).
    fn inverse(&self) -> [f32; 4] {
        match self {
            Orientation::Pointy => [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
            Orientation::Flat => [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
        }
    }

    /// Angle of corner 0, in degrees. Flat-top hexes have a corner at 0°,
    /// pointy-top at 30°.
    fn corner_offset_deg(&self) -> f32 {
        match self {
            Orientation::Flat => 0.0,
            Orientation::Pointy => 30.0,
        }
    }
}

/// Geometric transform between axial coordinates and pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    pub orientation: Orientation,
    pub size: f32,
    pub origin: Vec2,
}

impl HexLayout {
    /// Create a layout. Rejects non-finite or non-positive sizes and
    /// non-finite origins.
    pub fn new(orientation: Orientation, size: f32, origin: Vec2) -> Result<Self> {
        if !(size.is_finite() && size > 0.0) {
            return Err(HexMoveError::InvalidHexSize(size));
        }
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return Err(HexMoveError::NonFiniteOrigin(origin.x, origin.y));
        }
        Ok(Self {
            orientation,
            size,
            origin,
        })
    }

    /// Pixel position of a hex center.
    pub fn axial_to_pixel(&self, hex: Axial) -> Vec2 {
        let [m00, m01, m10, m11] = self.orientation.forward();
        let x = self.size * (m00 * hex.q as f32 + m01 * hex.r as f32);
        let y = self.size * (m10 * hex.q as f32 + m11 * hex.r as f32);
        Vec2::new(x, y) + self.origin
    }

    /// Nearest hex to a pixel position. Rejects non-finite input.
    pub fn pixel_to_axial(&self, pos: Vec2) -> Result<Axial> {
        if !(pos.x.is_finite() && pos.y.is_finite()) {
            return Err(HexMoveError::NonFinitePixel(pos.x, pos.y));
        }
        let local = (pos - self.origin) / self.size;
        let [m00, m01, m10, m11] = self.orientation.inverse();
        let q = m00 * local.x + m01 * local.y;
        let r = m10 * local.x + m11 * local.y;
        Ok(axial_round(q, r))
    }

    /// Pixel position of corner `i` (0..6) of a hex.
    pub fn corner(&self, hex: Axial, i: u8) -> Vec2 {
        let angle = (60.0 * (i % 6) as f32 + self.orientation.corner_offset_deg()).to_radians();
        self.axial_to_pixel(hex) + Vec2::new(self.size * angle.cos(), self.size * angle.sin())
    }

    /// Pixel centers for a hex path, in order.
    pub fn pixel_path(&self, path: &[Axial]) -> Vec<Vec2> {
        path.iter().map(|&h| self.axial_to_pixel(h)).collect()
    }
}

/// Round fractional axial coordinates to the containing hex.
///
/// Rounds q, r, s independently, then reconstructs the axis with the largest
/// rounding error from the other two so q + r + s stays 0.
pub fn axial_round(q: f32, r: f32) -> Axial {
    let s = -q - r;

    let mut rq = q.round();
    let mut rr = r.round();
    let rs = s.round();

    let q_diff = (rq - q).abs();
    let r_diff = (rr - r).abs();
    let s_diff = (rs - s).abs();

    if q_diff > r_diff && q_diff > s_diff {
        rq = -rr - rs;
    } else if r_diff > s_diff {
        rr = -rq - rs;
    }

    Axial::new(rq as i32, rr as i32)
}

/// Hexes approximating the straight segment between `a` and `b`.
///
/// Linear interpolation of cubic coordinates with per-step rounding. Returns
/// exactly `distance + 1` hexes, first = a, last = b.
pub fn line_trace(a: Axial, b: Axial) -> Vec<Axial> {
    let n = a.distance(&b);
    if n == 0 {
        return vec![a];
    }

    // Tiny nudge keeps samples off hex edges so rounding is unambiguous.
    const NUDGE: f32 = 1e-6;

    let mut out = Vec::with_capacity(n as usize + 1);
    for i in 0..=n {
        let t = i as f32 / n as f32;
        let q = a.q as f32 + (b.q - a.q) as f32 * t + NUDGE;
        let r = a.r as f32 + (b.r - a.r) as f32 * t + NUDGE;
        out.push(axial_round(q, r));
    }
    out
}
