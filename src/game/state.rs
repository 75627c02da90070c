//! Game session state.

use rand::Rng;

use crate::error::AttackResult;
use crate::game::{
    resolve_attack, BattleReport, Faction, Map, Mission, Territory, TerritoryId,
};

/// A running game session: the territory store, the player's faction,
/// an optional mission, and the turn counter.
///
/// The session exclusively owns the store; the combat resolver and
/// mission evaluator borrow it per call.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The territory store.
    pub map: Map,
    /// Faction played by the human (or auto-player).
    pub player: Faction,
    /// Victory condition, if this session uses missions.
    mission: Option<Mission>,
    /// Completed turns.
    turn: u32,
}

impl GameState {
    /// Create a session without a mission (the free-play variants).
    #[must_use]
    pub fn new(map: Map, player: Faction) -> Self {
        Self {
            map,
            player,
            mission: None,
            turn: 0,
        }
    }

    /// Create a session with a pre-selected mission.
    #[must_use]
    pub fn with_mission(map: Map, player: Faction, mission: Mission) -> Self {
        Self {
            map,
            player,
            mission: Some(mission),
            turn: 0,
        }
    }

    /// The campaign variant's starting position: four territories, the
    /// player on "Verde".
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // the literal map always satisfies Map::new
    pub fn standard_campaign() -> Self {
        let map = Map::new(vec![
            Territory::new("Brasil", "Verde", 5),
            Territory::new("Argentina", "Vermelho", 3),
            Territory::new("Canada", "Azul", 2),
            Territory::new("Peru", "Verde", 4),
        ])
        .expect("standard campaign map has four territories");
        Self::new(map, Faction::new("Verde"))
    }

    /// Draw a mission from the catalog if none is assigned yet.
    ///
    /// A mission is bound once per session; repeated calls keep the
    /// first draw.
    pub fn assign_mission<R: Rng>(&mut self, rng: &mut R) -> &Mission {
        self.mission.get_or_insert_with(|| Mission::draw(rng))
    }

    /// The session's mission, if one is assigned.
    #[must_use]
    pub fn mission(&self) -> Option<&Mission> {
        self.mission.as_ref()
    }

    /// Resolve an attack between two territories of the store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AttackError`] if the selection violates a
    /// precondition; the store is untouched in that case.
    pub fn attack<R: Rng>(
        &mut self,
        attacker: TerritoryId,
        defender: TerritoryId,
        rng: &mut R,
    ) -> AttackResult<BattleReport> {
        resolve_attack(&mut self.map, attacker, defender, rng)
    }

    /// Whether the assigned mission currently holds for the player.
    ///
    /// A session without a mission is never accomplished.
    #[must_use]
    pub fn mission_accomplished(&self) -> bool {
        self.mission
            .as_ref()
            .is_some_and(|m| m.evaluate(&self.map, &self.player))
    }

    /// Completed turns.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Advance to the next turn.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_standard_campaign_layout() {
        let game = GameState::standard_campaign();
        assert_eq!(game.map.len(), 4);
        assert_eq!(game.player, Faction::new("Verde"));
        assert_eq!(game.map.owner_of("Canada"), Some(&Faction::new("Azul")));
        assert_eq!(game.turn(), 0);
        assert!(game.mission().is_none());
    }

    #[test]
    fn test_mission_assigned_once() {
        let mut game = GameState::standard_campaign();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let first = game.assign_mission(&mut rng).clone();
        // Further draws must not replace the bound mission.
        for _ in 0..20 {
            assert_eq!(*game.assign_mission(&mut rng), first);
        }
    }

    #[test]
    fn test_no_mission_never_accomplished() {
        let game = GameState::standard_campaign();
        assert!(!game.mission_accomplished());
    }

    #[test]
    fn test_mission_accomplished_tracks_map() {
        let map = GameState::standard_campaign().map;
        let mut game = GameState::with_mission(
            map,
            Faction::new("Verde"),
            Mission::CaptureTerritory("Canada".to_string()),
        );
        assert!(!game.mission_accomplished());

        game.map.get_mut(2).unwrap().owner = Faction::new("Verde");
        assert!(game.mission_accomplished());
    }

    #[test]
    fn test_attack_delegates_and_counts_turns() {
        let mut game = GameState::standard_campaign();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let report = game.attack(0, 1, &mut rng).unwrap();
        assert_eq!(report.attacker, 0);
        assert_eq!(report.defender, 1);

        game.advance_turn();
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_attack_rejects_same_faction() {
        let mut game = GameState::standard_campaign();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        assert!(game.attack(0, 3, &mut rng).is_err());
    }
}
