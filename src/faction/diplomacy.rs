//! Initial diplomatic relations

use ahash::AHashMap;

use crate::core::config::FactionConfig;
use crate::core::types::{FactionId, StarId, Vector2D};
use crate::faction::types::Faction;

pub const RELATION_MIN: f32 = -100.0;
pub const RELATION_MAX: f32 = 100.0;

/// True when any system of `a` lies within `distance` of any system of `b`
pub fn shares_border(
    a: &Faction,
    b: &Faction,
    positions: &AHashMap<StarId, Vector2D>,
    distance: f32,
) -> bool {
    let b_positions: Vec<Vector2D> = b
        .controlled_systems
        .iter()
        .filter_map(|id| positions.get(id).copied())
        .collect();

    a.controlled_systems
        .iter()
        .filter_map(|id| positions.get(id))
        .any(|pa| b_positions.iter().any(|pb| pa.distance(pb) <= distance))
}

/// Opinion of `a` toward `b`, clamped to [-100, 100]
pub fn relation_score(a: &Faction, b: &Faction, bordering: bool, config: &FactionConfig) -> f32 {
    let mut score = config.diplomatic_weight * (a.traits.diplomatic + b.traits.diplomatic)
        - config.aggressive_weight * (a.traits.aggressive + b.traits.aggressive);

    if a.faction_type == b.faction_type {
        score += config.same_type_bonus;
    }

    if bordering {
        score -= config.border_penalty;
    }

    score.clamp(RELATION_MIN, RELATION_MAX)
}

/// Fill every faction's relation map with one score per other faction.
///
/// Each direction is computed on its own; the formula is symmetric in its
/// inputs, so both directions agree, but nothing forces them to.
pub fn compute_relations(
    factions: &mut [Faction],
    positions: &AHashMap<StarId, Vector2D>,
    config: &FactionConfig,
) {
    let mut scores: Vec<(usize, FactionId, f32)> = Vec::new();

    for (i, a) in factions.iter().enumerate() {
        for (j, b) in factions.iter().enumerate() {
            if i == j {
                continue;
            }
            let bordering = shares_border(a, b, positions, config.border_distance);
            scores.push((i, b.id, relation_score(a, b, bordering, config)));
        }
    }

    for (i, other, score) in scores {
        factions[i].relations.insert(other, score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faction::types::{FactionTraits, FactionType};
    use std::collections::{BTreeMap, BTreeSet};

    fn faction(id: u32, faction_type: FactionType, diplomatic: f32, aggressive: f32, systems: &[u32]) -> Faction {
        Faction {
            id: FactionId(id),
            name: format!("F{}", id),
            faction_type,
            traits: FactionTraits { diplomatic, aggressive, ..FactionTraits::default() },
            color: "#000000".to_string(),
            home_system_id: StarId(systems[0]),
            controlled_systems: systems.iter().map(|s| StarId(*s)).collect::<BTreeSet<_>>(),
            relations: BTreeMap::new(),
        }
    }

    fn lookup() -> AHashMap<StarId, Vector2D> {
        [
            (StarId(1), Vector2D::new(0.0, 0.0)),
            (StarId(2), Vector2D::new(250.0, 0.0)),
            (StarId(3), Vector2D::new(2000.0, 0.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_score_formula() {
        let config = FactionConfig::default();
        let a = faction(0, FactionType::Corporate, 0.5, 0.5, &[1]);
        let b = faction(1, FactionType::Imperial, 0.5, 0.5, &[3]);

        // 20 * 1.0 - 15 * 1.0
        assert!((relation_score(&a, &b, false, &config) - 5.0).abs() < 1e-4);
        assert!((relation_score(&a, &b, true, &config) + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_same_type_bonus() {
        let config = FactionConfig::default();
        let a = faction(0, FactionType::Nomadic, 0.5, 0.5, &[1]);
        let b = faction(1, FactionType::Nomadic, 0.5, 0.5, &[3]);
        assert!((relation_score(&a, &b, false, &config) - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_score_is_clamped() {
        let config = FactionConfig { diplomatic_weight: 200.0, ..FactionConfig::default() };
        let a = faction(0, FactionType::Federation, 1.0, 0.0, &[1]);
        let b = faction(1, FactionType::Federation, 1.0, 0.0, &[3]);
        assert_eq!(relation_score(&a, &b, false, &config), RELATION_MAX);
    }

    #[test]
    fn test_border_detection() {
        let positions = lookup();
        let a = faction(0, FactionType::Corporate, 0.5, 0.5, &[1]);
        let near = faction(1, FactionType::Corporate, 0.5, 0.5, &[2]);
        let far = faction(2, FactionType::Corporate, 0.5, 0.5, &[3]);

        assert!(shares_border(&a, &near, &positions, 300.0));
        assert!(!shares_border(&a, &far, &positions, 300.0));
    }

    #[test]
    fn test_relations_fill_both_directions() {
        let positions = lookup();
        let config = FactionConfig::default();
        let mut factions = vec![
            faction(0, FactionType::Corporate, 0.6, 0.3, &[1]),
            faction(1, FactionType::Militaristic, 0.4, 0.7, &[2]),
            faction(2, FactionType::Theocratic, 0.5, 0.5, &[3]),
        ];

        compute_relations(&mut factions, &positions, &config);

        for f in &factions {
            assert_eq!(f.relations.len(), 2);
            assert!(!f.relations.contains_key(&f.id));
            for score in f.relations.values() {
                assert!((RELATION_MIN..=RELATION_MAX).contains(score));
            }
        }

        let ab = factions[0].relation_with(FactionId(1)).unwrap();
        let ba = factions[1].relation_with(FactionId(0)).unwrap();
        assert!((ab - ba).abs() < 1e-4);
    }
}
