//! Error types for the combat engine.

use std::fmt;

use crate::game::Faction;

/// Reasons an attack selection is rejected before combat is resolved.
///
/// These are precondition violations, recovered by the caller's input
/// loop. The combat resolver is never invoked with an invalid pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackError {
    /// A territory index is outside the store.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of territories in the store.
        len: usize,
    },
    /// Attacker and defender are the same territory.
    SelfAttack,
    /// Attacker and defender belong to the same faction.
    SameFaction(Faction),
    /// Attacker holds too few troops to attack.
    InsufficientTroops {
        /// Troops currently held by the attacker.
        have: u32,
        /// Minimum troops required to attack.
        need: u32,
    },
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::OutOfRange { index, len } => {
                write!(f, "territory {index} does not exist (valid: 0..{len})")
            }
            AttackError::SelfAttack => write!(f, "a territory cannot attack itself"),
            AttackError::SameFaction(faction) => {
                write!(f, "cannot attack a territory of the same faction ({faction})")
            }
            AttackError::InsufficientTroops { have, need } => {
                write!(f, "attacker has {have} troops, needs at least {need}")
            }
        }
    }
}

impl std::error::Error for AttackError {}

/// Result type for attack validation and resolution.
pub type AttackResult<T> = Result<T, AttackError>;
