//! Territory expansion
//!
//! Factions grow one star at a time, preferring unclaimed stars packed
//! closely against their existing territory. The claim registry is shared
//! by every faction, so a star claimed by one faction is never offered to
//! the next.

use ahash::AHashMap;
use ordered_float::OrderedFloat;

use crate::core::config::FactionConfig;
use crate::core::types::{FactionId, StarId, Vector2D, GALACTIC_CENTER_ID};
use crate::faction::types::Faction;
use crate::galaxy::star::Star;

/// Which faction owns which star
#[derive(Clone, Debug, Default)]
pub struct ClaimRegistry {
    claims: AHashMap<StarId, FactionId>,
}

impl ClaimRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self, star: StarId) -> bool {
        self.claims.contains_key(&star)
    }

    pub fn owner(&self, star: StarId) -> Option<FactionId> {
        self.claims.get(&star).copied()
    }

    /// Record a claim. Returns false if the star already has an owner.
    pub fn claim(&mut self, star: StarId, faction: FactionId) -> bool {
        if self.is_claimed(star) {
            return false;
        }
        self.claims.insert(star, faction);
        true
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

/// Systems each faction tries to reach: `(total_stars - 1) / divisor`,
/// the centre black hole excluded from the count.
pub fn territory_target(total_stars: usize, divisor: usize) -> usize {
    total_stars.saturating_sub(1) / divisor.max(1)
}

/// Can a faction ever own this star?
pub fn is_claimable(star: &Star, registry: &ClaimRegistry) -> bool {
    star.id != GALACTIC_CENTER_ID && !registry.is_claimed(star.id)
}

/// Grow `faction` until it controls `target` systems or nothing is left
/// to claim.
pub fn expand_territory(
    faction: &mut Faction,
    stars: &[Star],
    positions: &AHashMap<StarId, Vector2D>,
    registry: &mut ClaimRegistry,
    target: usize,
    config: &FactionConfig,
) {
    let mut territory: Vec<Vector2D> = faction
        .controlled_systems
        .iter()
        .filter_map(|id| positions.get(id).copied())
        .collect();

    while faction.controlled_systems.len() < target {
        let next = best_frontier_star(stars, &territory, registry, config)
            .or_else(|| nearest_to_centroid(stars, &territory, registry));

        let Some(star) = next else {
            tracing::debug!("{} ran out of claimable stars", faction.name);
            break;
        };

        registry.claim(star.id, faction.id);
        faction.controlled_systems.insert(star.id);
        territory.push(star.position);
    }

    tracing::debug!(
        "{} expanded to {}/{} systems",
        faction.name,
        faction.controlled_systems.len(),
        target
    );
}

/// Highest-scoring unclaimed star with at least one controlled star in
/// `nearby_radius`.
fn best_frontier_star<'a>(
    stars: &'a [Star],
    territory: &[Vector2D],
    registry: &ClaimRegistry,
    config: &FactionConfig,
) -> Option<&'a Star> {
    if territory.is_empty() {
        return None;
    }

    stars
        .iter()
        .filter(|s| is_claimable(s, registry))
        .filter_map(|star| frontier_score(star.position, territory, config).map(|score| (star, score)))
        .max_by_key(|(_, score)| OrderedFloat(*score))
        .map(|(star, _)| star)
}

/// `adjacent_weight * adjacent + nearby_weight * nearby
///  - avg_distance_weight * avg - min_distance_weight * min`,
/// or `None` when no controlled star is within `nearby_radius`.
pub fn frontier_score(position: Vector2D, territory: &[Vector2D], config: &FactionConfig) -> Option<f32> {
    let mut nearby = 0;
    let mut adjacent = 0;
    let mut min_distance = f32::INFINITY;
    let mut total_distance = 0.0;

    for owned in territory {
        let distance = position.distance(owned);
        if distance <= config.nearby_radius {
            nearby += 1;
        }
        if distance <= config.adjacent_radius {
            adjacent += 1;
        }
        min_distance = min_distance.min(distance);
        total_distance += distance;
    }

    if nearby == 0 {
        return None;
    }

    let avg_distance = total_distance / territory.len() as f32;
    Some(
        config.adjacent_weight * adjacent as f32 + config.nearby_weight * nearby as f32
            - config.avg_distance_weight * avg_distance
            - config.min_distance_weight * min_distance,
    )
}

fn nearest_to_centroid<'a>(
    stars: &'a [Star],
    territory: &[Vector2D],
    registry: &ClaimRegistry,
) -> Option<&'a Star> {
    if territory.is_empty() {
        return None;
    }

    let sum = territory.iter().fold(Vector2D::default(), |acc, p| acc + *p);
    let centroid = sum * (1.0 / territory.len() as f32);

    stars
        .iter()
        .filter(|s| is_claimable(s, registry))
        .min_by_key(|s| OrderedFloat(s.position.distance(&centroid)))
}
