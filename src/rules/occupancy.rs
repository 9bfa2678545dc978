//! Token-source rule construction
//!
//! Builds the `tokens` rule list for a cell from its occupant. The mover's
//! own cell and allied occupants are handled before the generic occupied-cell
//! rule.

use crate::core::types::TokenId;

use super::passability::PassabilityRule;

/// Capability tag that lets a mover slip through hostile occupants.
pub const PHASING_TAG: &str = "phasing";

/// Relationship between a mover and a cell's occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupantRelation {
    Ally,
    Hostile,
}

/// Token rules for a cell occupied by `occupant` (or empty).
///
/// The mover's own cell never blocks. Allies grant a cost-0 passthrough.
/// Anyone else costs 1 to phase through and blocks otherwise.
pub fn occupant_rules(
    occupant: Option<(TokenId, OccupantRelation)>,
    mover: TokenId,
) -> Vec<PassabilityRule> {
    match occupant {
        None => Vec::new(),
        Some((id, _)) if id == mover => Vec::new(),
        Some((_, OccupantRelation::Ally)) => vec![PassabilityRule::open(0.0)],
        Some((_, OccupantRelation::Hostile)) => vec![
            PassabilityRule::open(1.0).requiring(PHASING_TAG),
            PassabilityRule::barrier(),
        ],
    }
}
