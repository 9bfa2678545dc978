//! Passability rule composition
//!
//! Each cell carries up to four independent rule lists (terrain, placed
//! objects, occupying tokens, transient effects). [`resolve`] folds them into
//! a single traversal verdict for one mover's capability set. Bundles are
//! assembled fresh per query because token occupancy and effects are dynamic.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Highest damage category a rule may carry.
pub const MAX_DAMAGE_CATEGORY: u8 = 7;

/// Default traversal cost when no source contributes an explicit rule.
const DEFAULT_CELL_COST: f32 = 1.0;

/// Capability tags of a mover (e.g. "flight", "swimming", "phasing").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    tags: AHashSet<String>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn insert(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// True when every required tag is present (subset test). An empty
    /// requirement list matches anyone.
    pub fn satisfies(&self, requires: &[String]) -> bool {
        requires.iter().all(|tag| self.tags.contains(tag))
    }
}

/// A single passability rule.
///
/// Rules within one source list are ordered specific-to-general; the first
/// matching rule wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassabilityRule {
    /// Tags the mover must have for this rule to match. Empty matches anyone.
    #[serde(default)]
    pub requires: Vec<String>,
    /// Traversal cost contributed by this rule.
    #[serde(default = "default_rule_cost")]
    pub cost: f32,
    /// Damage category 0..=7 applied on traversal.
    #[serde(default)]
    pub damage: u8,
    /// Replace the additive cost total with this rule's cost instead of
    /// adding to it. Competing overrides resolve to the maximum.
    #[serde(default)]
    pub override_cost: bool,
    /// Absolute non-traversal regardless of capabilities.
    #[serde(default)]
    pub blocked: bool,
}

fn default_rule_cost() -> f32 {
    1.0
}

impl Default for PassabilityRule {
    fn default() -> Self {
        Self {
            requires: Vec::new(),
            cost: default_rule_cost(),
            damage: 0,
            override_cost: false,
            blocked: false,
        }
    }
}

impl PassabilityRule {
    /// A rule anyone may traverse at the given cost.
    pub fn open(cost: f32) -> Self {
        Self {
            cost,
            ..Default::default()
        }
    }

    /// A rule that denies traversal outright.
    pub fn barrier() -> Self {
        Self {
            blocked: true,
            ..Default::default()
        }
    }

    pub fn requiring(mut self, tag: impl Into<String>) -> Self {
        self.requires.push(tag.into());
        self
    }

    pub fn with_damage(mut self, damage: u8) -> Self {
        self.damage = damage.min(MAX_DAMAGE_CATEGORY);
        self
    }

    pub fn overriding(mut self) -> Self {
        self.override_cost = true;
        self
    }
}

/// The four ordered rule lists for one cell.
///
/// An explicit struct rather than a generic map so the fixed source order
/// {terrain, objects, tokens, effects} is checked at compile time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassabilityBundle {
    pub terrain: Vec<PassabilityRule>,
    pub objects: Vec<PassabilityRule>,
    pub tokens: Vec<PassabilityRule>,
    pub effects: Vec<PassabilityRule>,
}

impl PassabilityBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_terrain(mut self, rules: Vec<PassabilityRule>) -> Self {
        self.terrain = rules;
        self
    }

    pub fn with_objects(mut self, rules: Vec<PassabilityRule>) -> Self {
        self.objects = rules;
        self
    }

    pub fn with_tokens(mut self, rules: Vec<PassabilityRule>) -> Self {
        self.tokens = rules;
        self
    }

    pub fn with_effects(mut self, rules: Vec<PassabilityRule>) -> Self {
        self.effects = rules;
        self
    }
}

/// Resolved verdict for one cell and one mover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Traversal {
    pub passable: bool,
    pub cost: f32,
    pub damage: u8,
}

impl Traversal {
    pub fn impassable() -> Self {
        Self {
            passable: false,
            cost: f32::INFINITY,
            damage: 0,
        }
    }
}

/// First rule in the list the mover's capabilities satisfy.
///
/// A `blocked` rule reached before any match denies the source outright, as
/// does a non-empty list with no match at all.
fn first_match<'a>(
    rules: &'a [PassabilityRule],
    caps: &CapabilitySet,
) -> Option<&'a PassabilityRule> {
    for rule in rules {
        if rule.blocked {
            return None;
        }
        if caps.satisfies(&rule.requires) {
            return Some(rule);
        }
    }
    None
}

/// Combine a cell's four rule sources into a single verdict.
///
/// Sources are scanned in fixed order. An empty list is an implicit pass that
/// contributes nothing; a bundle where no source matched an explicit rule
/// resolves to the default cost 1. Override rules replace the additive sum
/// (maximum wins when several sources override). The final cost is clamped to
/// `cost_floor` unless an explicit cost-0 rule matched (allied passthrough).
pub fn resolve(bundle: &PassabilityBundle, caps: &CapabilitySet, cost_floor: f32) -> Traversal {
    let mut sum = 0.0_f32;
    let mut override_cost: Option<f32> = None;
    let mut damage = 0u8;
    let mut matched_explicit = false;
    let mut zero_cost_grant = false;

    for rules in [
        &bundle.terrain,
        &bundle.objects,
        &bundle.tokens,
        &bundle.effects,
    ] {
        if rules.is_empty() {
            continue;
        }
        let Some(rule) = first_match(rules, caps) else {
            return Traversal::impassable();
        };

        matched_explicit = true;
        if rule.cost == 0.0 {
            zero_cost_grant = true;
        }
        if rule.override_cost {
            override_cost = Some(override_cost.map_or(rule.cost, |c| c.max(rule.cost)));
        } else {
            sum += rule.cost;
        }
        damage = damage.max(rule.damage.min(MAX_DAMAGE_CATEGORY));
    }

    let mut cost = override_cost.unwrap_or(sum);
    if !matched_explicit {
        cost = DEFAULT_CELL_COST;
    }
    if !(zero_cost_grant && cost == 0.0) {
        cost = cost.max(cost_floor);
    }

    Traversal {
        passable: true,
        cost,
        damage,
    }
}
