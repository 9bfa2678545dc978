//! Engine configuration with documented constants
//!
//! All tuning values are collected here with explanations of their purpose
//! and how they interact with each other.

/// Configuration for the movement engine
///
/// These values match the behavior expected by the surrounding tabletop
/// application. Changing them changes which paths are legal and how remote
/// movement replays look.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    // === PASSABILITY / SEARCH ===
    /// Minimum resolved traversal cost for a passable cell
    ///
    /// The fastest legal traversal (e.g. a paved road) costs 0.5. The only
    /// value below the floor is the explicit cost-0 grant for moving through
    /// an allied token. The A* heuristic is scaled by this floor so it stays
    /// admissible; lowering the floor without rescaling the heuristic would
    /// break path optimality.
    pub cost_floor: f32,

    /// Safety valve for both search operations
    ///
    /// A search that expands this many cells without resolving reports "no
    /// path", indistinguishable from genuine unreachability except through
    /// the iteration counter on the result. At 10_000 expansions this is far
    /// beyond any sane tabletop map.
    pub max_iterations: usize,

    // === REPLAY ===
    /// Clock-skew allowance for replay-from-elapsed (milliseconds)
    ///
    /// An observer whose elapsed time exceeds the animation duration by more
    /// than this skips the animation and places the token at its final hex.
    /// 2000ms absorbs typical wall-clock disagreement between peers.
    pub replay_tolerance_ms: f32,

    /// Shortest animation a replay will run (milliseconds)
    ///
    /// When an observer joins near the end of a move, the remaining slice is
    /// stretched to at least this long so the token visibly travels instead
    /// of teleporting.
    pub replay_min_duration_ms: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cost_floor: 0.5,
            max_iterations: 10_000,
            replay_tolerance_ms: 2000.0,
            replay_min_duration_ms: 100.0,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if !(self.cost_floor > 0.0 && self.cost_floor.is_finite()) {
            return Err(format!(
                "cost_floor ({}) must be finite and positive",
                self.cost_floor
            ));
        }

        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }

        if self.replay_tolerance_ms < 0.0 {
            return Err(format!(
                "replay_tolerance_ms ({}) must be non-negative",
                self.replay_tolerance_ms
            ));
        }

        if self.replay_min_duration_ms <= 0.0 {
            return Err(format!(
                "replay_min_duration_ms ({}) must be positive",
                self.replay_min_duration_ms
            ));
        }

        Ok(())
    }
}
