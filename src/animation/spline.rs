//! Catmull-Rom interpolation and easing over pixel paths

use glam::Vec2;

/// Cubic ease-in-out timing curve.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Evaluate a uniform Catmull-Rom spline through `points` at `t` in [0, 1].
///
/// The curve passes through every point; the 4-point window is clamped at
/// the path ends by repeating the boundary point.
pub fn catmull_rom(points: &[Vec2], t: f32) -> Vec2 {
    match points.len() {
        0 => return Vec2::ZERO,
        1 => return points[0],
        _ => {}
    }

    let t = t.clamp(0.0, 1.0);
    let segments = points.len() - 1;
    let scaled = t * segments as f32;
    let i = (scaled.floor() as usize).min(segments - 1);
    let local = scaled - i as f32;

    let p0 = points[i.saturating_sub(1)];
    let p1 = points[i];
    let p2 = points[i + 1];
    let p3 = points[(i + 2).min(points.len() - 1)];

    let t2 = local * local;
    let t3 = t2 * local;

    0.5 * (2.0 * p1
        + (p2 - p0) * local
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
}

/// Tangent direction at `t`, sampled via a small symmetric finite difference.
///
/// Not normalized; callers only need the angle. Near the path ends the
/// difference window collapses to one side.
pub fn tangent(points: &[Vec2], t: f32) -> Vec2 {
    const EPS: f32 = 1e-3;
    let before = catmull_rom(points, (t - EPS).max(0.0));
    let after = catmull_rom(points, (t + EPS).min(1.0));
    after - before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_line() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(30.0, 0.0),
        ]
    }

    #[test]
    fn test_ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let eased = ease_in_out_cubic(i as f32 / 100.0);
            assert!(eased >= prev);
            prev = eased;
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range() {
        assert_eq!(ease_in_out_cubic(-1.0), 0.0);
        assert_eq!(ease_in_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_spline_passes_through_endpoints() {
        let points = straight_line();
        assert_eq!(catmull_rom(&points, 0.0), points[0]);
        assert_eq!(catmull_rom(&points, 1.0), *points.last().unwrap());
    }

    #[test]
    fn test_spline_passes_through_interior_points() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(20.0, -5.0),
            Vec2::new(30.0, 0.0),
        ];
        // t landing exactly on an interior point has local = 0.
        let at_second = catmull_rom(&points, 1.0 / 3.0);
        assert!((at_second - points[1]).length() < 1e-3);
    }

    #[test]
    fn test_spline_on_straight_line_stays_on_line() {
        let points = straight_line();
        for i in 0..=20 {
            let pos = catmull_rom(&points, i as f32 / 20.0);
            assert!(pos.y.abs() < 1e-4);
            assert!((0.0..=30.0).contains(&pos.x));
        }
    }

    #[test]
    fn test_spline_degenerate_inputs() {
        assert_eq!(catmull_rom(&[], 0.5), Vec2::ZERO);
        let single = [Vec2::new(3.0, 4.0)];
        assert_eq!(catmull_rom(&single, 0.5), single[0]);
    }

    #[test]
    fn test_spline_is_deterministic() {
        let points = straight_line();
        let a = catmull_rom(&points, 0.37);
        let b = catmull_rom(&points, 0.37);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tangent_points_along_travel() {
        let points = straight_line();
        let dir = tangent(&points, 0.5);
        assert!(dir.x > 0.0);
        assert!(dir.y.abs() < 1e-4);
    }
}
