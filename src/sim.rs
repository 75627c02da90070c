//! Seeded auto-played campaigns.
//!
//! Runs the mission variant without a console: each turn one uniformly
//! random valid attacker/defender pair is resolved, until the mission
//! holds or the turn limit is reached. Every dice roll and every pair
//! selection draws from one generator seeded per game, so a campaign is
//! fully determined by its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::game::{assert_invariants, validate_attack, GameState, TerritoryId};

/// Configuration for auto-played campaigns.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Maximum number of turns before the campaign is abandoned.
    pub max_turns: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { max_turns: 100 }
    }
}

/// Outcome of one auto-played campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CampaignResult {
    /// Seed the campaign was played with.
    pub seed: u64,
    /// Tag of the mission drawn for the player.
    pub mission_tag: char,
    /// Whether the mission held before the turn limit.
    pub won: bool,
    /// Turns actually played.
    pub turns_played: u32,
}

/// All currently valid attacker/defender pairs on the map.
fn valid_pairs(game: &GameState) -> Vec<(TerritoryId, TerritoryId)> {
    let len = game.map.len();
    let mut pairs = Vec::new();
    for attacker in 0..len {
        for defender in 0..len {
            if validate_attack(&game.map, attacker, defender).is_ok() {
                pairs.push((attacker, defender));
            }
        }
    }
    pairs
}

/// Play one campaign to completion.
///
/// Builds the standard campaign position, draws a mission, then resolves
/// one random battle per turn. Stops when the mission holds, when no
/// valid attack remains, or when `config.max_turns` is reached.
#[must_use]
pub fn run_campaign(seed: u64, config: &SimConfig) -> CampaignResult {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = GameState::standard_campaign();
    let mission_tag = game.assign_mission(&mut rng).tag();

    while game.turn() < config.max_turns && !game.mission_accomplished() {
        let pairs = valid_pairs(&game);
        if pairs.is_empty() {
            break;
        }
        let (attacker, defender) = pairs[rng.gen_range(0..pairs.len())];

        if game.attack(attacker, defender, &mut rng).is_err() {
            break;
        }
        assert_invariants(&game.map);
        game.advance_turn();
    }

    CampaignResult {
        seed,
        mission_tag,
        won: game.mission_accomplished(),
        turns_played: game.turn(),
    }
}
