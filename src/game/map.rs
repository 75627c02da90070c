//! Territory records and the map store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a territory in the store.
pub type TerritoryId = usize;

/// A faction, identified by its army color label (e.g. "Verde", "Azul").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Faction(String);

impl Faction {
    /// Create a faction from its color label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The faction's color label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Faction {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Faction {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// A single territory: a named region held by a faction with some troops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Display name, also the lookup key for capture missions.
    pub name: String,
    /// Faction currently controlling the territory.
    pub owner: Faction,
    /// Troops stationed here. Combat never drives this below 1.
    pub troops: u32,
}

impl Territory {
    /// Create a new territory record.
    #[must_use]
    pub fn new(name: impl Into<String>, owner: impl Into<Faction>, troops: u32) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            troops,
        }
    }
}

/// Minimum number of territories a playable map must hold.
pub const MIN_TERRITORIES: usize = 2;

/// The territory store: an ordered, fixed-cardinality collection of records.
///
/// Created once at session start and mutated in place. Conquest changes a
/// record's owner and troops; territories are never added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    /// Territory records, addressed by [`TerritoryId`].
    territories: Vec<Territory>,
}

impl Map {
    /// Create a map from registered territories.
    ///
    /// Returns `None` if fewer than [`MIN_TERRITORIES`] records are given;
    /// a smaller map has no valid attacker/defender pair.
    #[must_use]
    pub fn new(territories: Vec<Territory>) -> Option<Self> {
        if territories.len() < MIN_TERRITORIES {
            return None;
        }
        Some(Self { territories })
    }

    /// Number of territories in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Whether the store is empty. Always `false` for a constructed map.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Get a reference to the territory at the given index.
    #[must_use]
    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id)
    }

    /// Get a mutable reference to the territory at the given index.
    #[must_use]
    pub fn get_mut(&mut self, id: TerritoryId) -> Option<&mut Territory> {
        self.territories.get_mut(id)
    }

    /// Borrow two distinct territories mutably at once.
    ///
    /// Returns `None` if the indices are equal or out of range. The combat
    /// resolver uses this to mutate attacker and defender in one call.
    #[must_use]
    pub fn pair_mut(
        &mut self,
        a: TerritoryId,
        b: TerritoryId,
    ) -> Option<(&mut Territory, &mut Territory)> {
        if a == b || a >= self.territories.len() || b >= self.territories.len() {
            return None;
        }
        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    /// Iterate over all territories with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (TerritoryId, &Territory)> {
        self.territories.iter().enumerate()
    }

    /// Iterate over the territories owned by a faction.
    pub fn owned_by<'a>(&'a self, faction: &'a Faction) -> impl Iterator<Item = &'a Territory> {
        self.territories.iter().filter(move |t| t.owner == *faction)
    }

    /// Count territories owned by a faction.
    #[must_use]
    pub fn count_owned_by(&self, faction: &Faction) -> usize {
        self.owned_by(faction).count()
    }

    /// Count territories owned by a faction holding at least `min_troops`.
    #[must_use]
    pub fn count_garrisoned_by(&self, faction: &Faction, min_troops: u32) -> usize {
        self.owned_by(faction)
            .filter(|t| t.troops >= min_troops)
            .count()
    }

    /// Whether any territory is still owned by the given faction.
    #[must_use]
    pub fn faction_present(&self, faction: &Faction) -> bool {
        self.territories.iter().any(|t| t.owner == *faction)
    }

    /// Look up the owner of the territory with the given name.
    ///
    /// Names are compared exactly. Returns `None` if no territory matches.
    #[must_use]
    pub fn owner_of(&self, name: &str) -> Option<&Faction> {
        self.territories
            .iter()
            .find(|t| t.name == name)
            .map(|t| &t.owner)
    }

    /// Sum of troops across the whole store.
    #[must_use]
    pub fn total_troops(&self) -> u64 {
        self.territories.iter().map(|t| u64::from(t.troops)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_territories() -> Vec<Territory> {
        vec![
            Territory::new("Brasil", "Verde", 5),
            Territory::new("Argentina", "Vermelho", 3),
        ]
    }

    #[test]
    fn test_map_creation() {
        let map = Map::new(two_territories()).unwrap();
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_map_rejects_too_few() {
        assert!(Map::new(vec![]).is_none());
        assert!(Map::new(vec![Territory::new("Brasil", "Verde", 5)]).is_none());
    }

    #[test]
    fn test_get_and_get_mut() {
        let mut map = Map::new(two_territories()).unwrap();
        assert_eq!(map.get(0).unwrap().name, "Brasil");
        assert!(map.get(2).is_none());

        map.get_mut(1).unwrap().troops = 7;
        assert_eq!(map.get(1).unwrap().troops, 7);
    }

    #[test]
    fn test_pair_mut_both_orders() {
        let mut map = Map::new(two_territories()).unwrap();

        let (a, b) = map.pair_mut(0, 1).unwrap();
        assert_eq!(a.name, "Brasil");
        assert_eq!(b.name, "Argentina");

        let (b, a) = map.pair_mut(1, 0).unwrap();
        assert_eq!(b.name, "Argentina");
        assert_eq!(a.name, "Brasil");
    }

    #[test]
    fn test_pair_mut_rejects_invalid() {
        let mut map = Map::new(two_territories()).unwrap();
        assert!(map.pair_mut(0, 0).is_none());
        assert!(map.pair_mut(0, 5).is_none());
        assert!(map.pair_mut(5, 0).is_none());
    }

    #[test]
    fn test_counting_helpers() {
        let map = Map::new(vec![
            Territory::new("Brasil", "Verde", 5),
            Territory::new("Peru", "Verde", 3),
            Territory::new("Canada", "Azul", 2),
            Territory::new("Argentina", "Vermelho", 4),
        ])
        .unwrap();

        let verde = Faction::new("Verde");
        assert_eq!(map.count_owned_by(&verde), 2);
        assert_eq!(map.count_garrisoned_by(&verde, 4), 1);
        assert!(map.faction_present(&Faction::new("Azul")));
        assert!(!map.faction_present(&Faction::new("Preto")));
        assert_eq!(map.owner_of("Canada"), Some(&Faction::new("Azul")));
        assert_eq!(map.owner_of("Chile"), None);
        assert_eq!(map.total_troops(), 14);
    }
}
