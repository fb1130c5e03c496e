//! Player starting-system selection
//!
//! Candidates are filtered through a relaxation cascade: strict
//! habitability and faction distance first, then a looser distance, then a
//! pure farthest-point pick. Each relaxation is logged as a warning.

use ahash::AHashMap;
use ordered_float::OrderedFloat;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::StartConfig;
use crate::core::error::{GalaxyError, Result};
use crate::core::types::{StarId, Vector2D};
use crate::faction::types::Faction;
use crate::galaxy::planet::StarSystem;

/// Which constraint tier produced the starting system
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionTier {
    Strict,
    Relaxed,
    Fallback,
}

#[derive(Clone, Copy, Debug)]
pub struct StartingSystem<'a> {
    pub system: &'a StarSystem,
    pub tier: SelectionTier,
}

/// Pick the player's starting system from `systems`.
///
/// Errors only when no system orbits a non-exotic star.
pub fn select_starting_system<'a, R: Rng + ?Sized>(
    systems: &'a [StarSystem],
    factions: &[Faction],
    config: &StartConfig,
    rng: &mut R,
) -> Result<StartingSystem<'a>> {
    let faction_positions = faction_system_positions(systems, factions);
    let habitable: Vec<&StarSystem> = systems.iter().filter(|s| !s.star.star_type.is_exotic()).collect();

    if habitable.is_empty() {
        return Err(GalaxyError::NoHabitableSystem);
    }

    // Strict: enough planets, well clear of every faction, best-ranked
    let mut strict: Vec<&StarSystem> = habitable
        .iter()
        .copied()
        .filter(|s| s.planet_count() >= config.min_planets)
        .filter(|s| clear_of(s, &faction_positions, config.min_faction_distance))
        .collect();

    if !strict.is_empty() {
        strict.sort_by_key(|s| std::cmp::Reverse(start_rank(s)));
        strict.truncate(config.top_candidates);
        if let Some(system) = strict.choose(rng).copied() {
            tracing::debug!("Starting system {} chosen from {} strict candidates", system.star.name, strict.len());
            return Ok(StartingSystem { system, tier: SelectionTier::Strict });
        }
    }

    let relaxed_distance = config.min_faction_distance * config.relaxed_distance_factor;
    tracing::warn!(
        "No strict starting candidate; relaxing to {:.0} units and any planet count",
        relaxed_distance
    );

    let relaxed: Vec<&StarSystem> = habitable
        .iter()
        .copied()
        .filter(|s| clear_of(s, &faction_positions, relaxed_distance))
        .collect();

    if let Some(system) = relaxed.choose(rng).copied() {
        return Ok(StartingSystem { system, tier: SelectionTier::Relaxed });
    }

    tracing::warn!("No relaxed starting candidate; falling back to the system farthest from all factions");

    let system = habitable
        .iter()
        .copied()
        .max_by_key(|s| OrderedFloat(nearest_faction_distance(s, &faction_positions)))
        .ok_or(GalaxyError::NoHabitableSystem)?;

    Ok(StartingSystem { system, tier: SelectionTier::Fallback })
}

/// `2 * planets + resources`; higher is a better start
pub fn start_rank(system: &StarSystem) -> usize {
    2 * system.planet_count() + system.resources.len()
}

fn faction_system_positions(systems: &[StarSystem], factions: &[Faction]) -> Vec<Vector2D> {
    let by_id: AHashMap<StarId, Vector2D> = systems.iter().map(|s| (s.id, s.star.position)).collect();
    factions
        .iter()
        .flat_map(|f| f.controlled_systems.iter())
        .filter_map(|id| by_id.get(id).copied())
        .collect()
}

fn clear_of(system: &StarSystem, faction_positions: &[Vector2D], min_distance: f32) -> bool {
    nearest_faction_distance(system, faction_positions) >= min_distance
}

/// Infinite when no faction controls anything
fn nearest_faction_distance(system: &StarSystem, faction_positions: &[Vector2D]) -> f32 {
    faction_positions
        .iter()
        .map(|p| p.distance(&system.star.position))
        .fold(f32::INFINITY, f32::min)
}
