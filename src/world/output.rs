//! World output and serialization

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::StarId;
use crate::faction::Faction;
use crate::galaxy::{Galaxy, LaneKind, StarRegion};
use crate::start::SelectionTier;
use crate::world::pipeline::World;

/// Serializable snapshot of a generated world
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub seed: u64,
    pub galaxy: Galaxy,
    pub factions: Vec<Faction>,
    pub starting_system_id: StarId,
    pub starting_tier: SelectionTier,
    pub statistics: WorldStats,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldStats {
    pub star_count: usize,
    pub core_stars: usize,
    pub disk_stars: usize,
    pub planet_count: usize,
    pub spanning_lanes: usize,
    pub local_lanes: usize,
    pub faction_territories: Vec<TerritoryStat>,
    pub unclaimed_systems: usize,
    pub generation_time_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerritoryStat {
    pub faction: String,
    pub systems: usize,
}

impl WorldStats {
    pub fn collect(world: &World) -> Self {
        let galaxy = &world.galaxy;
        let faction_territories: Vec<TerritoryStat> = world
            .factions
            .iter()
            .map(|f| TerritoryStat { faction: f.name.clone(), systems: f.territory_size() })
            .collect();
        let claimed: usize = faction_territories.iter().map(|t| t.systems).sum();

        Self {
            star_count: galaxy.stars.len(),
            core_stars: galaxy.count_region(StarRegion::Core),
            disk_stars: galaxy.count_region(StarRegion::Disk),
            planet_count: galaxy.planet_count(),
            spanning_lanes: galaxy.count_lanes(LaneKind::Spanning),
            local_lanes: galaxy.count_lanes(LaneKind::Local),
            faction_territories,
            unclaimed_systems: galaxy.stars.len().saturating_sub(claimed),
            generation_time_ms: world.generation_time_ms,
        }
    }

    pub fn lane_count(&self) -> usize {
        self.spanning_lanes + self.local_lanes
    }
}

impl WorldSnapshot {
    pub fn new(world: World) -> Self {
        let statistics = WorldStats::collect(&world);
        Self {
            seed: world.seed,
            galaxy: world.galaxy,
            factions: world.factions,
            starting_system_id: world.starting_system_id,
            starting_tier: world.starting_tier,
            statistics,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let stats = &self.statistics;
        let start_name = self
            .galaxy
            .star(self.starting_system_id)
            .map_or("unknown", |s| s.name.as_str());
        let territories: Vec<String> = stats
            .faction_territories
            .iter()
            .map(|t| format!("{} ({})", t.faction, t.systems))
            .collect();

        format!(
            "Seed {} generated in {}ms\n{} stars ({} core, {} disk), {} planets, {} lanes ({} spanning, {} local)\nFactions: {}\nStart: {} [{:?}]",
            self.seed,
            stats.generation_time_ms,
            stats.star_count,
            stats.core_stars,
            stats.disk_stars,
            stats.planet_count,
            stats.lane_count(),
            stats.spanning_lanes,
            stats.local_lanes,
            if territories.is_empty() { "none".to_string() } else { territories.join(", ") },
            start_name,
            self.starting_tier,
        )
    }
}

impl From<World> for WorldSnapshot {
    fn from(world: World) -> Self {
        Self::new(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{GalaxyConfig, WorldConfig};
    use crate::world::generate_world;

    fn snapshot(seed: u64) -> WorldSnapshot {
        let config = WorldConfig {
            galaxy: GalaxyConfig { max_stars: 120, ..GalaxyConfig::default() },
            ..WorldConfig::default()
        };
        WorldSnapshot::new(generate_world(&config, seed).unwrap())
    }

    #[test]
    fn test_stats_add_up() {
        let snap = snapshot(42);
        let stats = &snap.statistics;

        // Centre star is neither core nor disk
        assert_eq!(stats.core_stars + stats.disk_stars + 1, stats.star_count);
        assert_eq!(stats.lane_count(), snap.galaxy.hyperspace_lanes.len());
        assert_eq!(stats.spanning_lanes, stats.star_count - 1);
        let claimed: usize = stats.faction_territories.iter().map(|t| t.systems).sum();
        assert_eq!(claimed + stats.unclaimed_systems, stats.star_count);
    }

    #[test]
    fn test_json_output() {
        let snap = snapshot(3);
        let json = snap.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["seed"], 3);
        assert!(value["galaxy"]["stars"].is_array());
        assert!(value["statistics"]["star_count"].as_u64().unwrap() > 1);
    }

    #[test]
    fn test_summary_names_start() {
        let snap = snapshot(8);
        let start = snap.galaxy.star(snap.starting_system_id).unwrap().name.clone();
        let summary = snap.summary();

        assert!(summary.starts_with("Seed 8"));
        assert!(summary.contains(&start));
    }
}
