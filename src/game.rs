//! Game layer for Conquest.
//!
//! Implements the rules of the territory game:
//! - Map: a fixed-cardinality store of territory records
//! - Combat: dice rolls, troop decrements, conquest transfers
//! - Missions: victory predicates evaluated over the store
//! - Session state tying a player faction to a map and mission

mod combat;
mod invariants;
mod map;
mod mission;
mod state;

pub use combat::{
    apply_rolls, resolve_attack, roll_die, validate_attack, BattleReport, CombatOutcome,
    MIN_ATTACK_TROOPS,
};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use map::{Faction, Map, Territory, TerritoryId, MIN_TERRITORIES};
pub use mission::Mission;
pub use state::GameState;
