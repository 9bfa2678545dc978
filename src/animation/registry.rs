//! Explicitly-owned registry of running animations
//!
//! One registry per view, keyed by token. Parallel tests (or split-screen
//! views) hold independent registries; there is no process-wide state. Each
//! animation is mutated only by the registry's own tick loop, so no locking
//! is needed in the single-threaded frame-driven model.

use ahash::AHashMap;
use glam::Vec2;

use crate::core::types::{TimestampMs, TokenId};
use crate::hex::{Axial, Orientation};

use super::track::{AnimationPhase, MoveAnimation, TickResult};

#[derive(Debug, Default)]
pub struct AnimationRegistry {
    animations: AHashMap<TokenId, MoveAnimation>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an animation for a token, replacing any prior one.
    ///
    /// Returns the start events; a degenerate path completes immediately and
    /// never occupies a registry slot.
    pub fn start(
        &mut self,
        token: TokenId,
        path: Vec<Axial>,
        pixel_path: Vec<Vec2>,
        duration_ms: f32,
        orientation: Orientation,
        now_ms: TimestampMs,
    ) -> TickResult {
        let (animation, result) =
            MoveAnimation::start(path, pixel_path, duration_ms, orientation, now_ms);
        if animation.phase() == AnimationPhase::Running {
            tracing::debug!(?token, "animation started");
            self.animations.insert(token, animation);
        } else {
            self.animations.remove(&token);
        }
        result
    }

    /// Adopt an already-constructed animation (e.g. a replay slice).
    pub fn insert(&mut self, token: TokenId, animation: MoveAnimation) {
        if animation.phase() == AnimationPhase::Running {
            self.animations.insert(token, animation);
        }
    }

    pub fn is_animating(&self, token: TokenId) -> bool {
        self.animations
            .get(&token)
            .is_some_and(|a| a.phase() == AnimationPhase::Running)
    }

    pub fn get(&self, token: TokenId) -> Option<&MoveAnimation> {
        self.animations.get(&token)
    }

    /// Cancel and drop a token's animation. No completion event fires.
    pub fn stop(&mut self, token: TokenId) {
        if let Some(mut animation) = self.animations.remove(&token) {
            animation.stop();
            tracing::debug!(?token, "animation cancelled");
        }
    }

    /// Advance every animation one frame. Entries that completed this frame
    /// are dropped after their results are collected; results are ordered by
    /// token for reproducibility.
    pub fn tick_all(&mut self, now_ms: TimestampMs) -> Vec<(TokenId, TickResult)> {
        let mut tokens: Vec<TokenId> = self.animations.keys().copied().collect();
        tokens.sort_by_key(|t| t.0);

        let mut results = Vec::with_capacity(tokens.len());
        for token in tokens {
            if let Some(animation) = self.animations.get_mut(&token) {
                results.push((token, animation.tick(now_ms)));
            }
        }

        self.animations
            .retain(|_, a| a.phase() == AnimationPhase::Running);
        results
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}
