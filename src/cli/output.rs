//! Output formatting utilities for CLI.

use conquest::game::{BattleReport, CombatOutcome, Faction, Map, Mission, TerritoryId};
use conquest::sim::CampaignResult;
use serde::Serialize;

/// Render the store as an aligned table.
pub(crate) fn format_map(map: &Map) -> String {
    let mut output = String::new();

    output.push_str("-------------------------- MAP ---------------------------\n");
    output.push_str(&format!(
        "| {:<4} | {:<30} | {:<10} | {:<6} |\n",
        "ID", "NAME", "OWNER", "TROOPS"
    ));
    output.push_str(
        "|------|--------------------------------|------------|--------|\n",
    );
    for (id, territory) in map.iter() {
        output.push_str(&format!(
            "| {id:<4} | {:<30} | {:<10} | {:<6} |\n",
            territory.name, territory.owner, territory.troops
        ));
    }
    output.push_str("-----------------------------------------------------------\n");

    output
}

fn territory_name(map: &Map, id: TerritoryId) -> &str {
    map.get(id).map_or("unknown", |t| t.name.as_str())
}

/// Render the pre-battle announcement. Call before resolving: it reads
/// the records as they stand.
pub(crate) fn format_attack_header(
    map: &Map,
    attacker: TerritoryId,
    defender: TerritoryId,
) -> String {
    let unknown = Faction::new("unknown");
    let att_owner = map.get(attacker).map_or(&unknown, |t| &t.owner);
    let att_troops = map.get(attacker).map_or(0, |t| t.troops);
    let def_owner = map.get(defender).map_or(&unknown, |t| &t.owner);
    let def_troops = map.get(defender).map_or(0, |t| t.troops);

    format!(
        "Battle: {} ({att_owner}, {att_troops} troops) attacks {} ({def_owner}, {def_troops} troops)!",
        territory_name(map, attacker),
        territory_name(map, defender),
    )
}

/// Render the battle narrative from a report and the post-battle store.
///
/// All numbers come straight from the report, so the narrative matches
/// the applied mutation exactly.
pub(crate) fn format_battle(report: &BattleReport, map: &Map) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Dice rolled: attacker ({}) vs defender ({})\n",
        report.attack_roll, report.defense_roll
    ));

    match report.outcome {
        CombatOutcome::AttackerWins { defender_troops } => {
            output.push_str(&format!(
                "THE ATTACK SUCCEEDED! {} loses 1 troop ({defender_troops} remain).\n",
                territory_name(map, report.defender)
            ));
        }
        CombatOutcome::Conquest { troops_moved } => {
            let unknown = Faction::new("unknown");
            let new_owner = map.get(report.defender).map_or(&unknown, |t| &t.owner);
            output.push_str(&format!(
                "TERRITORY CONQUERED! {} now belongs to {new_owner}.\n",
                territory_name(map, report.defender)
            ));
            output.push_str(&format!(
                "Troops moved: {troops_moved} transferred from {} to {}.\n",
                territory_name(map, report.attacker),
                territory_name(map, report.defender)
            ));
        }
        CombatOutcome::DefenderWins { attacker_troops } => {
            output.push_str(&format!(
                "THE DEFENSE HELD! {} drops to {attacker_troops} troops.\n",
                territory_name(map, report.attacker)
            ));
        }
    }

    output
}

/// Render the mission banner shown at campaign start.
pub(crate) fn format_mission(mission: &Mission) -> String {
    format!(
        "---------------- YOUR MISSION ----------------\n\
         | Mission {}: {}\n\
         ----------------------------------------------",
        mission.tag(),
        mission.description()
    )
}

/// Render the victory banner.
pub(crate) fn format_victory(player: &Faction, mission: &Mission) -> String {
    format!(
        "#################################################\n\
         # CONGRATULATIONS! {player} ACCOMPLISHED THE MISSION! #\n\
         # Mission {}: {}\n\
         #################################################",
        mission.tag(),
        mission.description()
    )
}

/// Number of missions in the catalog.
const CATALOG_SIZE: usize = 5;

/// Mission tags, in catalog order.
const TAGS: [char; CATALOG_SIZE] = ['A', 'B', 'C', 'D', 'E'];

/// Aggregated statistics over many auto-played campaigns.
///
/// Built per worker thread and merged, so the parallel runner needs no
/// shared mutable state.
#[derive(Debug, Default)]
pub(crate) struct SimulationStats {
    /// Campaigns accumulated.
    pub(crate) games_played: u64,
    /// Campaigns where the mission held before the turn limit.
    pub(crate) wins: u64,
    /// Sum of turns across all campaigns.
    total_turns: u64,
    /// Campaigns per mission tag (A..E).
    mission_games: [u64; CATALOG_SIZE],
    /// Wins per mission tag (A..E).
    mission_wins: [u64; CATALOG_SIZE],
}

impl SimulationStats {
    /// Create empty stats.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a campaign result.
    pub(crate) fn add_result(&mut self, result: &CampaignResult) {
        self.games_played += 1;
        self.total_turns += u64::from(result.turns_played);
        if result.won {
            self.wins += 1;
        }

        if let Some(index) = TAGS.iter().position(|&t| t == result.mission_tag) {
            self.mission_games[index] += 1;
            if result.won {
                self.mission_wins[index] += 1;
            }
        }
    }

    /// Merge another worker's stats into this one.
    pub(crate) fn merge(&mut self, other: &Self) {
        self.games_played += other.games_played;
        self.wins += other.wins;
        self.total_turns += other.total_turns;
        for (mine, theirs) in self.mission_games.iter_mut().zip(other.mission_games) {
            *mine += theirs;
        }
        for (mine, theirs) in self.mission_wins.iter_mut().zip(other.mission_wins) {
            *mine += theirs;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn win_rate(wins: u64, games: u64) -> f64 {
        if games == 0 {
            0.0
        } else {
            wins as f64 / games as f64
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean_turns(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games_played as f64
        }
    }
}

/// Format aggregated simulation results as human-readable text.
pub(crate) fn format_simulation_text(stats: &SimulationStats) -> String {
    let mut output = String::new();

    output.push_str(&format!("Campaigns played: {}\n", stats.games_played));
    output.push_str(&format!(
        "Missions accomplished: {} ({:.1}%)\n",
        stats.wins,
        SimulationStats::win_rate(stats.wins, stats.games_played) * 100.0
    ));
    output.push_str(&format!("Mean turns per campaign: {:.1}\n\n", stats.mean_turns()));

    output.push_str("Per mission:\n");
    for (i, (&games, &wins)) in stats
        .mission_games
        .iter()
        .zip(stats.mission_wins.iter())
        .enumerate()
    {
        output.push_str(&format!(
            "  Mission {}: {wins}/{games} won ({:.1}%)\n",
            TAGS[i],
            SimulationStats::win_rate(wins, games) * 100.0
        ));
    }

    output
}

/// JSON-serializable simulation summary.
#[derive(Debug, Serialize)]
pub(crate) struct JsonSimulationResult {
    /// Base seed the run started from.
    pub(crate) base_seed: u64,
    /// Campaigns played.
    pub(crate) games: u64,
    /// Campaigns won.
    pub(crate) wins: u64,
    /// Fraction of campaigns won.
    pub(crate) win_rate: f64,
    /// Mean turns per campaign.
    pub(crate) mean_turns: f64,
    /// Per-mission breakdown.
    pub(crate) missions: Vec<JsonMissionStats>,
}

/// JSON-serializable per-mission statistics.
#[derive(Debug, Serialize)]
pub(crate) struct JsonMissionStats {
    /// Mission tag (A..E).
    pub(crate) tag: char,
    /// Campaigns that drew this mission.
    pub(crate) games: u64,
    /// Campaigns that won with this mission.
    pub(crate) wins: u64,
    /// Fraction won.
    pub(crate) win_rate: f64,
}

impl JsonSimulationResult {
    /// Build the JSON summary from aggregated stats.
    pub(crate) fn from_stats(stats: &SimulationStats, base_seed: u64) -> Self {
        let missions = stats
            .mission_games
            .iter()
            .zip(stats.mission_wins.iter())
            .enumerate()
            .map(|(i, (&games, &wins))| JsonMissionStats {
                tag: TAGS[i],
                games,
                wins,
                win_rate: SimulationStats::win_rate(wins, games),
            })
            .collect();

        Self {
            base_seed,
            games: stats.games_played,
            wins: stats.wins,
            win_rate: SimulationStats::win_rate(stats.wins, stats.games_played),
            mean_turns: stats.mean_turns(),
            missions,
        }
    }
}
