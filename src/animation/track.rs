//! A single token's movement animation
//!
//! State machine: Idle -> Running -> Completed (or Cancelled via `stop`).
//! Only `Running` permits per-frame updates. All interpolation math is a pure
//! function of the inputs and the sampled timestamp, so a fixed (path,
//! duration, progress) triple reproduces bit-identical positions and facings.

use glam::Vec2;

use crate::core::config::EngineConfig;
use crate::core::types::TimestampMs;
use crate::hex::{Axial, Orientation};

use super::facing::Facing;
use super::spline;

/// Lifecycle of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Running,
    Completed,
    Cancelled,
}

/// Continuous state reported for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickUpdate {
    pub position: Vec2,
    pub facing: Facing,
    /// Eased progress in [0, 1].
    pub progress: f32,
}

/// A whole-hex transition crossed during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexChange {
    pub hex: Axial,
    pub index: usize,
}

/// Everything that happened in one frame, polled by the render loop.
///
/// A slow frame that jumps several hexes still reports one `HexChange` per
/// crossed hex, in order, so per-hex side effects never get skipped.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub update: Option<TickUpdate>,
    pub hex_changes: Vec<HexChange>,
    /// Final facing, reported exactly once on the completing frame.
    pub completed: Option<Facing>,
}

/// How an observer should present a remotely computed move.
#[derive(Debug)]
pub enum ReplayPlan {
    /// Too stale to animate: place the token at its final hex immediately.
    SkipToEnd { hex: Axial, facing: Facing },
    /// Animate the remaining slice of the path.
    Animate(MoveAnimation),
}

/// Movement animation for one token.
#[derive(Debug, Clone)]
pub struct MoveAnimation {
    phase: AnimationPhase,
    path: Vec<Axial>,
    pixel_path: Vec<Vec2>,
    duration_ms: f32,
    start_ms: TimestampMs,
    orientation: Orientation,
    hex_index: usize,
    last_facing: Facing,
    /// Externally supplied completion facing (replay near path end).
    final_facing: Option<Facing>,
}

impl MoveAnimation {
    /// Begin an animation at `now_ms`.
    ///
    /// Returns the animation plus the events produced by starting it: a
    /// degenerate pixel path (fewer than 2 points) completes immediately
    /// with a neutral facing and never enters `Running`.
    pub fn start(
        path: Vec<Axial>,
        pixel_path: Vec<Vec2>,
        duration_ms: f32,
        orientation: Orientation,
        now_ms: TimestampMs,
    ) -> (Self, TickResult) {
        if pixel_path.len() < 2 {
            let animation = Self {
                phase: AnimationPhase::Completed,
                path,
                pixel_path,
                duration_ms,
                start_ms: now_ms,
                orientation,
                hex_index: 0,
                last_facing: Facing::NEUTRAL,
                final_facing: None,
            };
            let result = TickResult {
                update: None,
                hex_changes: Vec::new(),
                completed: Some(Facing::NEUTRAL),
            };
            return (animation, result);
        }

        let animation = Self {
            phase: AnimationPhase::Running,
            path,
            pixel_path,
            duration_ms: duration_ms.max(1.0),
            start_ms: now_ms,
            orientation,
            hex_index: 0,
            last_facing: Facing::NEUTRAL,
            final_facing: None,
        };
        (animation, TickResult::default())
    }

    /// Plan the presentation of a move that started at `start_ms` on another
    /// participant's clock.
    ///
    /// Elapsed time beyond `duration + replay_tolerance_ms` skips the
    /// animation entirely; otherwise the path is sliced at the current
    /// progress and the remainder animated over what is left of the duration
    /// (at least `replay_min_duration_ms`). A supplied `final_facing` is
    /// preserved when the remaining slice is too short to recompute a stable
    /// tangent.
    #[allow(clippy::too_many_arguments)]
    pub fn replay(
        path: Vec<Axial>,
        pixel_path: Vec<Vec2>,
        duration_ms: f32,
        orientation: Orientation,
        start_ms: TimestampMs,
        now_ms: TimestampMs,
        final_facing: Option<Facing>,
        config: &EngineConfig,
    ) -> ReplayPlan {
        let final_hex = path.last().copied().unwrap_or(Axial::ZERO);
        let end_facing = || {
            final_facing.unwrap_or_else(|| match pixel_path.len() {
                0 | 1 => Facing::NEUTRAL,
                _ => facing_at(&pixel_path, 1.0, orientation, Facing::NEUTRAL),
            })
        };

        let elapsed = (now_ms - start_ms) as f32;
        if elapsed >= duration_ms + config.replay_tolerance_ms {
            return ReplayPlan::SkipToEnd {
                hex: final_hex,
                facing: end_facing(),
            };
        }

        let hex_count = path.len().min(pixel_path.len());
        if hex_count < 2 {
            return ReplayPlan::SkipToEnd {
                hex: final_hex,
                facing: end_facing(),
            };
        }

        // Raw progress places the slice; negative elapsed (observer clock
        // behind the sender) replays from the beginning. The live animator
        // indexes hexes by eased progress, so an observer joining mid-move
        // may lag the sender by a hex until the slice catches up.
        let progress = (elapsed / duration_ms).clamp(0.0, 1.0);
        let start_index = ((progress * (hex_count - 1) as f32).floor() as usize).min(hex_count - 1);
        if start_index >= hex_count - 1 {
            return ReplayPlan::SkipToEnd {
                hex: final_hex,
                facing: end_facing(),
            };
        }

        let remaining_path = path[start_index..].to_vec();
        let remaining_pixels = pixel_path[start_index..].to_vec();
        let remaining_ms = (duration_ms - elapsed.max(0.0)).max(config.replay_min_duration_ms);

        let (mut animation, _) = Self::start(
            remaining_path,
            remaining_pixels,
            remaining_ms,
            orientation,
            now_ms,
        );
        // A slice this short cannot produce a trustworthy final tangent.
        if animation.pixel_path.len() < 3 {
            animation.final_facing = final_facing;
        }
        ReplayPlan::Animate(animation)
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Hex the token currently occupies along the path.
    pub fn current_hex(&self) -> Option<Axial> {
        if self.phase == AnimationPhase::Completed {
            return self.path.last().copied();
        }
        self.path.get(self.hex_index).copied()
    }

    /// Cancel a running animation. Takes effect before the next frame; no
    /// completion event fires afterwards.
    pub fn stop(&mut self) {
        if self.phase == AnimationPhase::Running {
            self.phase = AnimationPhase::Cancelled;
        }
    }

    /// Advance to `now_ms` and report everything that happened.
    pub fn tick(&mut self, now_ms: TimestampMs) -> TickResult {
        if self.phase != AnimationPhase::Running {
            return TickResult::default();
        }

        let elapsed = (now_ms - self.start_ms) as f32;
        let raw = (elapsed / self.duration_ms).clamp(0.0, 1.0);
        let eased = spline::ease_in_out_cubic(raw);

        let position = spline::catmull_rom(&self.pixel_path, eased);
        let facing = facing_at(&self.pixel_path, eased, self.orientation, self.last_facing);
        self.last_facing = facing;

        let mut hex_changes = Vec::new();
        let hex_count = self.path.len();
        if hex_count > 1 {
            let target =
                ((eased * (hex_count - 1) as f32).floor() as usize).min(hex_count - 1);
            while self.hex_index < target {
                self.hex_index += 1;
                hex_changes.push(HexChange {
                    hex: self.path[self.hex_index],
                    index: self.hex_index,
                });
            }
        }

        let completed = if raw >= 1.0 {
            self.phase = AnimationPhase::Completed;
            Some(self.final_facing.unwrap_or(facing))
        } else {
            None
        };

        TickResult {
            update: Some(TickUpdate {
                position,
                facing,
                progress: eased,
            }),
            hex_changes,
            completed,
        }
    }
}

/// Facing of the spline tangent at `t`, falling back when the tangent
/// degenerates to zero length.
fn facing_at(pixel_path: &[Vec2], t: f32, orientation: Orientation, fallback: Facing) -> Facing {
    let dir = spline::tangent(pixel_path, t);
    if dir.length_squared() < 1e-12 {
        return fallback;
    }
    Facing::from_angle(dir.y.atan2(dir.x), orientation)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A path of hexes whose centers sit on a horizontal line, 10px apart.
    fn straight_path(len: i32) -> (Vec<Axial>, Vec<Vec2>) {
        let path: Vec<Axial> = (0..len).map(|q| Axial::new(q, 0)).collect();
        let pixels: Vec<Vec2> = (0..len).map(|i| Vec2::new(i as f32 * 10.0, 0.0)).collect();
        (path, pixels)
    }

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn test_short_pixel_path_completes_immediately() {
        let (animation, result) = MoveAnimation::start(
            vec![Axial::ZERO],
            vec![Vec2::ZERO],
            500.0,
            Orientation::Flat,
            0.0,
        );
        assert_eq!(animation.phase(), AnimationPhase::Completed);
        assert_eq!(result.completed, Some(Facing::NEUTRAL));
        assert!(result.update.is_none());
    }

    #[test]
    fn test_positions_follow_path_and_complete() {
        let (path, pixels) = straight_path(4);
        let (mut animation, _) =
            MoveAnimation::start(path, pixels.clone(), 1000.0, Orientation::Flat, 0.0);

        let mid = animation.tick(500.0);
        let update = mid.update.unwrap();
        assert!(update.progress > 0.0 && update.progress < 1.0);
        assert!(update.position.x > pixels[0].x);
        assert!(update.position.x < pixels[3].x);
        assert!(mid.completed.is_none());

        let end = animation.tick(1000.0);
        assert_eq!(animation.phase(), AnimationPhase::Completed);
        assert!(end.completed.is_some());
        assert_eq!(end.update.unwrap().position, pixels[3]);
    }

    #[test]
    fn test_hex_changes_fire_once_per_hex_in_order() {
        let (path, pixels) = straight_path(5);
        let (mut animation, _) =
            MoveAnimation::start(path.clone(), pixels, 1000.0, Orientation::Flat, 0.0);

        let mut seen = Vec::new();
        for frame in 1..=50 {
            let result = animation.tick(frame as f64 * 20.0);
            seen.extend(result.hex_changes);
        }

        let indices: Vec<usize> = seen.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        for change in &seen {
            assert_eq!(change.hex, path[change.index]);
        }
    }

    #[test]
    fn test_slow_frame_emits_skipped_hexes_in_order() {
        let (path, pixels) = straight_path(5);
        let (mut animation, _) =
            MoveAnimation::start(path, pixels, 1000.0, Orientation::Flat, 0.0);

        // One giant frame straight to the end.
        let result = animation.tick(1000.0);
        let indices: Vec<usize> = result.hex_changes.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        assert!(result.completed.is_some());
    }

    #[test]
    fn test_stop_cancels_without_completion() {
        let (path, pixels) = straight_path(4);
        let (mut animation, _) =
            MoveAnimation::start(path, pixels, 1000.0, Orientation::Flat, 0.0);

        animation.tick(300.0);
        animation.stop();
        assert_eq!(animation.phase(), AnimationPhase::Cancelled);

        let after = animation.tick(2000.0);
        assert!(after.update.is_none());
        assert!(after.completed.is_none());
    }

    #[test]
    fn test_facing_derived_from_travel_direction() {
        let (path, pixels) = straight_path(4);
        // The pixel path runs along +x, so the flat-top facing is sector 0.
        let (mut animation, _) =
            MoveAnimation::start(path, pixels, 1000.0, Orientation::Flat, 0.0);
        let update = animation.tick(500.0).update.unwrap();
        assert_eq!(update.facing, Facing(0));
    }

    #[test]
    fn test_tick_math_is_deterministic() {
        let (path, pixels) = straight_path(4);
        let run = || {
            let (mut animation, _) = MoveAnimation::start(
                path.clone(),
                pixels.clone(),
                1000.0,
                Orientation::Flat,
                0.0,
            );
            let update = animation.tick(337.0).update.unwrap();
            (update.position, update.facing, update.progress)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_replay_past_tolerance_skips_to_end() {
        let (path, pixels) = straight_path(4);
        let plan = MoveAnimation::replay(
            path.clone(),
            pixels,
            1000.0,
            Orientation::Flat,
            0.0,
            4000.0, // elapsed = duration + 3000ms > tolerance
            Some(Facing(2)),
            &config(),
        );
        match plan {
            ReplayPlan::SkipToEnd { hex, facing } => {
                assert_eq!(hex, *path.last().unwrap());
                assert_eq!(facing, Facing(2));
            }
            ReplayPlan::Animate(_) => panic!("expected skip"),
        }
    }

    #[test]
    fn test_replay_mid_move_animates_remainder() {
        let (path, pixels) = straight_path(5);
        let plan = MoveAnimation::replay(
            path.clone(),
            pixels,
            1000.0,
            Orientation::Flat,
            0.0,
            500.0,
            None,
            &config(),
        );
        match plan {
            ReplayPlan::Animate(animation) => {
                assert_eq!(animation.phase(), AnimationPhase::Running);
                // Sliced at floor(0.5 * 4) = index 2.
                assert_eq!(animation.current_hex(), Some(path[2]));
            }
            ReplayPlan::SkipToEnd { .. } => panic!("expected animation"),
        }
    }

    #[test]
    fn test_replay_near_end_preserves_supplied_facing() {
        let (path, pixels) = straight_path(5);
        let plan = MoveAnimation::replay(
            path,
            pixels,
            1000.0,
            Orientation::Flat,
            0.0,
            960.0, // last slice, stretched to the minimum duration
            Some(Facing(7)),
            &config(),
        );
        match plan {
            ReplayPlan::Animate(mut animation) => {
                let result = animation.tick(960.0 + config().replay_min_duration_ms as f64);
                assert_eq!(result.completed, Some(Facing(7)));
            }
            ReplayPlan::SkipToEnd { facing, .. } => assert_eq!(facing, Facing(7)),
        }
    }

    #[test]
    fn test_replay_with_observer_clock_behind_starts_from_beginning() {
        let (path, pixels) = straight_path(4);
        let plan = MoveAnimation::replay(
            path.clone(),
            pixels,
            1000.0,
            Orientation::Flat,
            500.0,
            0.0, // now before the sender's start timestamp
            None,
            &config(),
        );
        match plan {
            ReplayPlan::Animate(animation) => {
                assert_eq!(animation.current_hex(), Some(path[0]));
            }
            ReplayPlan::SkipToEnd { .. } => panic!("expected animation"),
        }
    }
}
