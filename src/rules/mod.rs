pub mod occupancy;
pub mod passability;

pub use occupancy::{occupant_rules, OccupantRelation, PHASING_TAG};
pub use passability::{
    resolve, CapabilitySet, PassabilityBundle, PassabilityRule, Traversal, MAX_DAMAGE_CATEGORY,
};
