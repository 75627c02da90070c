//! Combat resolution.
//!
//! A battle is one pair of opposed d6 rolls. The attacker needs a strictly
//! higher roll; ties favor the defender. A winning attack removes exactly one
//! defending troop, and ownership transfers only when the defender reaches
//! zero, relocating half of the attacker's troops into the conquered
//! territory.

use rand::Rng;

use crate::error::{AttackError, AttackResult};
use crate::game::{Map, Territory, TerritoryId};

/// Minimum troops a territory must hold to launch an attack.
///
/// One troop always stays behind, so an attacker needs at least two.
pub const MIN_ATTACK_TROOPS: u32 = 2;

/// Roll a single six-sided die.
#[must_use]
pub fn roll_die<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(1..=6)
}

/// State transition applied by one battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// Attack roll beat the defense roll; the defender lost one troop
    /// and still holds the territory.
    AttackerWins {
        /// Defending troops remaining after the loss.
        defender_troops: u32,
    },
    /// The defender was reduced to zero: ownership transferred to the
    /// attacker's faction and troops relocated into the territory.
    Conquest {
        /// Troops moved from the attacker into the conquered territory.
        troops_moved: u32,
    },
    /// Defense roll tied or beat the attack roll; the attacker lost one
    /// troop (never below 1). The defender is untouched.
    DefenderWins {
        /// Attacking troops remaining after the loss.
        attacker_troops: u32,
    },
}

/// Record of a resolved battle.
///
/// The roll values and outcome numbers match the applied state mutation
/// exactly; display layers render the narrative from this report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleReport {
    /// Index of the attacking territory.
    pub attacker: TerritoryId,
    /// Index of the defending territory.
    pub defender: TerritoryId,
    /// The attacker's die.
    pub attack_roll: u8,
    /// The defender's die.
    pub defense_roll: u8,
    /// The transition applied to both records.
    pub outcome: CombatOutcome,
}

/// Check the preconditions for an attack without resolving it.
///
/// Input loops call this to reject a selection and re-prompt before any
/// dice are rolled.
///
/// # Errors
///
/// Returns the first violated precondition: an out-of-range index, a
/// self-target, a same-faction target, or an attacker below
/// [`MIN_ATTACK_TROOPS`].
pub fn validate_attack(
    map: &Map,
    attacker: TerritoryId,
    defender: TerritoryId,
) -> AttackResult<()> {
    let len = map.len();
    let Some(att) = map.get(attacker) else {
        return Err(AttackError::OutOfRange {
            index: attacker,
            len,
        });
    };
    let Some(def) = map.get(defender) else {
        return Err(AttackError::OutOfRange {
            index: defender,
            len,
        });
    };
    if attacker == defender {
        return Err(AttackError::SelfAttack);
    }
    if att.owner == def.owner {
        return Err(AttackError::SameFaction(att.owner.clone()));
    }
    if att.troops < MIN_ATTACK_TROOPS {
        return Err(AttackError::InsufficientTroops {
            have: att.troops,
            need: MIN_ATTACK_TROOPS,
        });
    }
    Ok(())
}

/// Apply one pair of rolls to an attacker/defender pair.
///
/// This is the pure state transition: no dice, no validation. Callers
/// must pass two distinct records of differing factions.
pub fn apply_rolls(
    attacker: &mut Territory,
    defender: &mut Territory,
    attack_roll: u8,
    defense_roll: u8,
) -> CombatOutcome {
    if attack_roll > defense_roll {
        defender.troops = defender.troops.saturating_sub(1);
        if defender.troops == 0 {
            // Conquest: the faction flips and half the attacking troops
            // relocate, leaving at least one behind.
            defender.owner = attacker.owner.clone();
            let moved = (attacker.troops / 2).min(attacker.troops.saturating_sub(1));
            attacker.troops -= moved;
            defender.troops = moved;
            CombatOutcome::Conquest {
                troops_moved: moved,
            }
        } else {
            CombatOutcome::AttackerWins {
                defender_troops: defender.troops,
            }
        }
    } else {
        // Ties favor the defender. The attacker keeps a floor of one troop.
        if attacker.troops > 1 {
            attacker.troops -= 1;
        }
        CombatOutcome::DefenderWins {
            attacker_troops: attacker.troops,
        }
    }
}

/// Validate an attack, roll one pair of dice, and apply the outcome.
///
/// Mutates both records in place and returns the report describing
/// exactly what happened. Performs exactly one pair of rolls and at most
/// one ownership transfer per invocation.
///
/// # Errors
///
/// Returns [`AttackError`] if a precondition fails; in that case no dice
/// are rolled and the store is untouched.
pub fn resolve_attack<R: Rng>(
    map: &mut Map,
    attacker: TerritoryId,
    defender: TerritoryId,
    rng: &mut R,
) -> AttackResult<BattleReport> {
    validate_attack(map, attacker, defender)?;

    let attack_roll = roll_die(rng);
    let defense_roll = roll_die(rng);

    match map.pair_mut(attacker, defender) {
        Some((att, def)) => {
            let outcome = apply_rolls(att, def, attack_roll, defense_roll);
            Ok(BattleReport {
                attacker,
                defender,
                attack_roll,
                defense_roll,
                outcome,
            })
        }
        // validate_attack already rejected equal and out-of-range indices
        None => Err(AttackError::SelfAttack),
    }
}
