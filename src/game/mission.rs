//! Mission predicates: the victory conditions of the campaign variant.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::{Faction, Map};

/// Troop threshold for the garrisoned-territories mission.
const GARRISON_TROOPS: u32 = 4;

/// Rival faction hunted by the elimination mission in the standard catalog.
const CATALOG_RIVAL: &str = "Azul";

/// Territory targeted by the capture mission in the standard catalog.
const CATALOG_TARGET: &str = "Canada";

/// A victory-condition predicate, bound to one faction for a session.
///
/// Assigned once at game start (drawn uniformly from the five-entry
/// catalog), read-only thereafter, and evaluated against the store after
/// every battle. Each variant carries only the data its predicate needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mission {
    /// Hold at least three territories.
    HoldThree,
    /// Wipe the given rival faction off the map.
    EliminateFaction(Faction),
    /// Hold at least five territories garrisoned with four or more troops.
    FiveGarrisoned,
    /// Hold the territory with the given name.
    CaptureTerritory(String),
    /// Hold at least ten territories.
    HoldTen,
}

impl Mission {
    /// Draw a mission uniformly at random from the standard catalog.
    #[must_use]
    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..5u8) {
            0 => Mission::HoldThree,
            1 => Mission::EliminateFaction(Faction::new(CATALOG_RIVAL)),
            2 => Mission::FiveGarrisoned,
            3 => Mission::CaptureTerritory(CATALOG_TARGET.to_string()),
            _ => Mission::HoldTen,
        }
    }

    /// The mission's stable one-letter tag.
    #[must_use]
    pub fn tag(&self) -> char {
        match self {
            Mission::HoldThree => 'A',
            Mission::EliminateFaction(_) => 'B',
            Mission::FiveGarrisoned => 'C',
            Mission::CaptureTerritory(_) => 'D',
            Mission::HoldTen => 'E',
        }
    }

    /// Look up a catalog mission by its tag.
    ///
    /// Returns `None` for an unrecognized tag; callers treat a missing
    /// mission as not yet satisfied rather than as an error.
    #[must_use]
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag.to_ascii_uppercase() {
            'A' => Some(Mission::HoldThree),
            'B' => Some(Mission::EliminateFaction(Faction::new(CATALOG_RIVAL))),
            'C' => Some(Mission::FiveGarrisoned),
            'D' => Some(Mission::CaptureTerritory(CATALOG_TARGET.to_string())),
            'E' => Some(Mission::HoldTen),
            _ => None,
        }
    }

    /// Human-readable description for display.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Mission::HoldThree => "Conquer 3 territories".to_string(),
            Mission::EliminateFaction(rival) => {
                format!("Eliminate every {rival} territory")
            }
            Mission::FiveGarrisoned => format!(
                "Conquer 5 territories with at least {GARRISON_TROOPS} troops each"
            ),
            Mission::CaptureTerritory(name) => format!("Conquer the territory '{name}'"),
            Mission::HoldTen => "Conquer 10 territories in total".to_string(),
        }
    }

    /// Evaluate the predicate for a faction over the current store.
    ///
    /// Pure and deterministic: one linear scan of the store, no mutation.
    /// Calling it twice on an unchanged store yields the same result.
    #[must_use]
    pub fn evaluate(&self, map: &Map, faction: &Faction) -> bool {
        match self {
            Mission::HoldThree => map.count_owned_by(faction) >= 3,
            Mission::EliminateFaction(rival) => !map.faction_present(rival),
            Mission::FiveGarrisoned => map.count_garrisoned_by(faction, GARRISON_TROOPS) >= 5,
            Mission::CaptureTerritory(name) => map.owner_of(name) == Some(faction),
            Mission::HoldTen => map.count_owned_by(faction) >= 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::game::Territory;

    fn map_with_verde_count(verde: usize, total: usize) -> Map {
        let territories = (0..total)
            .map(|i| {
                let owner = if i < verde { "Verde" } else { "Vermelho" };
                Territory::new(format!("T{i}"), owner, 3)
            })
            .collect();
        Map::new(territories).unwrap()
    }

    #[test]
    fn test_hold_three_threshold() {
        let verde = Faction::new("Verde");
        assert!(Mission::HoldThree.evaluate(&map_with_verde_count(3, 6), &verde));
        assert!(!Mission::HoldThree.evaluate(&map_with_verde_count(2, 6), &verde));
    }

    #[test]
    fn test_eliminate_faction() {
        let verde = Faction::new("Verde");
        let mission = Mission::EliminateFaction(Faction::new("Azul"));

        let mut map = Map::new(vec![
            Territory::new("Brasil", "Verde", 5),
            Territory::new("Canada", "Azul", 2),
        ])
        .unwrap();
        assert!(!mission.evaluate(&map, &verde));

        map.get_mut(1).unwrap().owner = Faction::new("Verde");
        assert!(mission.evaluate(&map, &verde));
    }

    #[test]
    fn test_five_garrisoned() {
        let verde = Faction::new("Verde");

        let strong = (0..5).map(|i| Territory::new(format!("S{i}"), "Verde", 4));
        let weak = (0..3).map(|i| Territory::new(format!("W{i}"), "Verde", 3));
        let map = Map::new(strong.chain(weak).collect()).unwrap();
        assert!(Mission::FiveGarrisoned.evaluate(&map, &verde));

        // Four garrisoned is one short, however many weak holdings exist.
        let strong = (0..4).map(|i| Territory::new(format!("S{i}"), "Verde", 9));
        let weak = (0..6).map(|i| Territory::new(format!("W{i}"), "Verde", 3));
        let map = Map::new(strong.chain(weak).collect()).unwrap();
        assert!(!Mission::FiveGarrisoned.evaluate(&map, &verde));
    }

    #[test]
    fn test_capture_territory_tracks_owner() {
        let verde = Faction::new("Verde");
        let mission = Mission::CaptureTerritory("Canada".to_string());

        let mut map = Map::new(vec![
            Territory::new("Brasil", "Verde", 5),
            Territory::new("Canada", "Azul", 2),
        ])
        .unwrap();
        assert!(!mission.evaluate(&map, &verde));

        map.get_mut(1).unwrap().owner = Faction::new("Verde");
        assert!(mission.evaluate(&map, &verde));
    }

    #[test]
    fn test_capture_territory_missing_name() {
        let verde = Faction::new("Verde");
        let mission = Mission::CaptureTerritory("Atlantis".to_string());
        assert!(!mission.evaluate(&map_with_verde_count(3, 3), &verde));
    }

    #[test]
    fn test_hold_ten_threshold() {
        let verde = Faction::new("Verde");
        assert!(Mission::HoldTen.evaluate(&map_with_verde_count(10, 12), &verde));
        assert!(!Mission::HoldTen.evaluate(&map_with_verde_count(9, 12), &verde));
    }

    #[test]
    fn test_evaluate_idempotent() {
        let verde = Faction::new("Verde");
        let map = map_with_verde_count(3, 6);

        for mission in ['A', 'B', 'C', 'D', 'E'].map(|t| Mission::from_tag(t).unwrap()) {
            let first = mission.evaluate(&map, &verde);
            let second = mission.evaluate(&map, &verde);
            assert_eq!(first, second, "mission {} not idempotent", mission.tag());
        }
    }

    #[test]
    fn test_tag_round_trip() {
        for tag in ['A', 'B', 'C', 'D', 'E'] {
            let mission = Mission::from_tag(tag).unwrap();
            assert_eq!(mission.tag(), tag);
        }
        assert_eq!(Mission::from_tag('a').map(|m| m.tag()), Some('A'));
        assert!(Mission::from_tag('F').is_none());
        assert!(Mission::from_tag('?').is_none());
    }

    #[test]
    fn test_draw_covers_catalog() {
        let mut seen = [false; 5];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..200 {
            let mission = Mission::draw(&mut rng);
            let idx = (mission.tag() as usize) - ('A' as usize);
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 5]);
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let descriptions: Vec<_> = ['A', 'B', 'C', 'D', 'E']
            .iter()
            .map(|&t| Mission::from_tag(t).unwrap().description())
            .collect();
        for (i, a) in descriptions.iter().enumerate() {
            assert!(!a.is_empty());
            for b in descriptions.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
