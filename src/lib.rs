// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Conquest: a territory-conquest board game simulator.
//!
//! This crate implements the core of a simplified "Risk"-style game:
//! - A fixed-cardinality store of territory records
//! - Dice-based combat resolution with in-place troop and ownership transfer
//! - Mission predicates evaluated over the store
//! - Seeded auto-played campaigns for statistics gathering
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI (register/play/campaign/      │
//! │   simulate)                         │
//! ├─────────────────────────────────────┤
//! │   Campaign runner (sim)             │
//! ├─────────────────────────────────────┤
//! │   Combat & Mission Engine (game)    │
//! └─────────────────────────────────────┘
//! ```
//!
//! Randomness is injected: every dice roll draws from a caller-supplied
//! [`rand::Rng`], so a session seeds one generator, threads it through,
//! and tests substitute fixed-sequence generators.

pub mod error;
pub mod game;
pub mod sim;

pub use error::AttackError;

// Re-export key game types at crate root for convenience
pub use game::{
    BattleReport, CombatOutcome, Faction, GameState, Map, Mission, Territory, TerritoryId,
};
