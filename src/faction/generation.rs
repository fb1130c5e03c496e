//! Initial faction generation

use ahash::AHashMap;
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};

use crate::core::config::FactionConfig;
use crate::core::types::{FactionId, StarId, Vector2D};
use crate::faction::diplomacy::compute_relations;
use crate::faction::expansion::{expand_territory, territory_target, ClaimRegistry};
use crate::faction::placement::choose_home_star;
use crate::faction::types::{pick_color, Faction, FactionTraits, FactionType};
use crate::galaxy::star::Star;

/// Place `faction_count` factions, grow their territory and compute
/// relations.
///
/// Homes are placed for every faction first, then territories grow one
/// faction at a time through a shared claim registry, so earlier factions
/// get first pick of contested stars.
pub fn generate_initial_factions<R: Rng + ?Sized>(
    stars: &[Star],
    config: &FactionConfig,
    rng: &mut R,
) -> Vec<Faction> {
    let positions: AHashMap<StarId, Vector2D> = stars.iter().map(|s| (s.id, s.position)).collect();
    let mut registry = ClaimRegistry::new();
    let mut factions: Vec<Faction> = Vec::with_capacity(config.faction_count);
    let mut homes: Vec<Vector2D> = Vec::with_capacity(config.faction_count);
    let mut colors: Vec<String> = Vec::with_capacity(config.faction_count);

    for index in 0..config.faction_count {
        let Some(home) = choose_home_star(stars, &homes, &registry, config.home_candidate_samples, rng) else {
            tracing::warn!("No free star left for faction {}, placed {}", index, factions.len());
            break;
        };

        let id = FactionId(index as u32);
        registry.claim(home.id, id);
        homes.push(home.position);

        let faction_type = FactionType::random(rng);
        let color = pick_color(&colors, rng);
        colors.push(color.clone());

        factions.push(Faction {
            id,
            name: faction_type.generate_name(rng),
            faction_type,
            traits: FactionTraits::generate(faction_type, rng),
            color,
            home_system_id: home.id,
            controlled_systems: BTreeSet::from([home.id]),
            relations: BTreeMap::new(),
        });
    }

    let target = territory_target(stars.len(), config.territory_divisor);
    for faction in &mut factions {
        expand_territory(faction, stars, &positions, &mut registry, target, config);
    }

    compute_relations(&mut factions, &positions, config);

    tracing::info!(
        "Generated {} factions, {} systems claimed (target {} each)",
        factions.len(),
        registry.len(),
        target
    );

    factions
}
