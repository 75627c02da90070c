//! Store invariants - sanity checks that detect bugs.
//!
//! A correctly driven game can never violate these: combat floors both
//! records at one troop and never clears a faction label. If a check
//! fires, the engine has a bug.

use crate::game::Map;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all store invariants.
///
/// Returns the violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(map: &Map) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for (id, territory) in map.iter() {
        if territory.troops == 0 {
            violations.push(InvariantViolation {
                message: format!("Territory {id} ('{}') holds zero troops", territory.name),
            });
        }

        if territory.owner.as_str().is_empty() {
            violations.push(InvariantViolation {
                message: format!("Territory {id} ('{}') has an empty faction", territory.name),
            });
        }

        if territory.name.is_empty() {
            violations.push(InvariantViolation {
                message: format!("Territory {id} has an empty name"),
            });
        }
    }

    violations
}

/// Assert all store invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with a detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(map: &Map) {
    let violations = check_invariants(map);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Store invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_map: &Map) {}
