//! Planets, star systems and the planet type table

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{PlanetId, StarId, Vector2D};
use crate::galaxy::naming::generate_planet_name;
use crate::galaxy::resource::{generate_resources, Resource, ResourceType};
use crate::galaxy::star::Star;
use crate::galaxy::weighted::weighted_choice;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetType {
    Terran,
    Ocean,
    Desert,
    Ice,
    Volcanic,
    Barren,
    GasGiant,
    Toxic,
}

impl PlanetType {
    /// Relative planet size range
    pub fn size_range(&self) -> std::ops::Range<f32> {
        match self {
            Self::GasGiant => 2.0..4.0,
            _ => 0.5..1.5,
        }
    }
}

/// One entry of the planet type distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetTypeInfo {
    pub planet_type: PlanetType,
    pub probability: f32,
}

pub const PLANET_TYPES: [PlanetTypeInfo; 8] = [
    PlanetTypeInfo { planet_type: PlanetType::Terran, probability: 0.1 },
    PlanetTypeInfo { planet_type: PlanetType::Ocean, probability: 0.1 },
    PlanetTypeInfo { planet_type: PlanetType::Desert, probability: 0.15 },
    PlanetTypeInfo { planet_type: PlanetType::Ice, probability: 0.15 },
    PlanetTypeInfo { planet_type: PlanetType::Volcanic, probability: 0.1 },
    PlanetTypeInfo { planet_type: PlanetType::Barren, probability: 0.2 },
    PlanetTypeInfo { planet_type: PlanetType::GasGiant, probability: 0.15 },
    PlanetTypeInfo { planet_type: PlanetType::Toxic, probability: 0.05 },
];

const ORBIT_SPEED_RANGE: std::ops::Range<f32> = 0.001..0.01;

/// A structure placed on a planet's surface by the building layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub kind: String,
    pub position: Vector2D,
}

/// Surface location where an extractor can be placed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourcePatch {
    pub resource_type: ResourceType,
    pub position: Vector2D,
    pub amount: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub planet_type: PlanetType,
    pub size: f32,
    pub orbit_speed: f32,
    pub resources: Vec<Resource>,

    // Filled in by the building layer, empty at generation
    pub buildings: Vec<Building>,
    pub resource_patches: Vec<ResourcePatch>,

    pub star_id: StarId,
}

/// A star and everything orbiting it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub id: StarId,
    pub star: Star,
    pub planets: Vec<Planet>,
    /// Display list copied from the first planet's resources
    pub resources: Vec<Resource>,
}

impl StarSystem {
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    /// Every resource across every planet of the system
    pub fn total_resources(&self) -> impl Iterator<Item = &Resource> {
        self.planets.iter().flat_map(|p| p.resources.iter())
    }
}

fn planet_weights() -> Vec<(PlanetType, f32)> {
    PLANET_TYPES.iter().map(|info| (info.planet_type, info.probability)).collect()
}

/// Build the system around `star` with `min..=max` planets.
///
/// `next_planet_id` is advanced once per planet so ids stay unique across
/// the whole galaxy.
pub fn generate_system<R: Rng + ?Sized>(
    star: &Star,
    planet_range: std::ops::RangeInclusive<usize>,
    next_planet_id: &mut u32,
    rng: &mut R,
) -> StarSystem {
    let weights = planet_weights();
    let count = rng.gen_range(planet_range);
    let mut planets = Vec::with_capacity(count);

    for index in 0..count {
        let planet_type = weighted_choice(rng, &weights)
            .copied()
            .unwrap_or(PlanetType::Barren);

        let planet = Planet {
            id: PlanetId(*next_planet_id),
            name: generate_planet_name(&star.name, index),
            planet_type,
            size: rng.gen_range(planet_type.size_range()),
            orbit_speed: rng.gen_range(ORBIT_SPEED_RANGE),
            resources: generate_resources(planet_type, rng),
            buildings: Vec::new(),
            resource_patches: Vec::new(),
            star_id: star.id,
        };
        *next_planet_id += 1;
        planets.push(planet);
    }

    let resources = planets
        .first()
        .map(|p| p.resources.clone())
        .unwrap_or_default();

    StarSystem {
        id: star.id,
        star: star.clone(),
        planets,
        resources,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galaxy::star::{StarRegion, StarType};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_star() -> Star {
        Star {
            id: StarId(4),
            position: Vector2D::new(10.0, 10.0),
            name: "Kethara".to_string(),
            star_type: StarType::YellowDwarf,
            size: 1.0,
            color: "#ffe66d".to_string(),
            region: StarRegion::Disk,
        }
    }

    #[test]
    fn test_system_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let star = test_star();
        let mut next_id = 100;

        for _ in 0..50 {
            let system = generate_system(&star, 1..=5, &mut next_id, &mut rng);
            assert_eq!(system.id, star.id);
            assert!((1..=5).contains(&system.planet_count()));

            for planet in &system.planets {
                assert_eq!(planet.star_id, star.id);
                assert!(planet.buildings.is_empty());
                assert!(planet.resource_patches.is_empty());
                assert!(planet.size_in_range());
                assert!(planet.orbit_speed >= 0.001 && planet.orbit_speed < 0.01);
            }
        }
    }

    #[test]
    fn test_system_resources_mirror_first_planet() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut next_id = 0;
        let system = generate_system(&test_star(), 1..=5, &mut next_id, &mut rng);
        assert_eq!(system.resources, system.planets[0].resources);
    }

    #[test]
    fn test_planet_ids_unique_and_sequential() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut next_id = 0;
        let a = generate_system(&test_star(), 3..=3, &mut next_id, &mut rng);
        let b = generate_system(&test_star(), 2..=2, &mut next_id, &mut rng);

        let ids: Vec<u32> = a.planets.iter().chain(b.planets.iter()).map(|p| p.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(next_id, 5);
    }

    #[test]
    fn test_planet_names_use_star_name() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut next_id = 0;
        let system = generate_system(&test_star(), 2..=2, &mut next_id, &mut rng);
        assert_eq!(system.planets[0].name, "Kethara-B");
        assert_eq!(system.planets[1].name, "Kethara-C");
    }

    impl Planet {
        fn size_in_range(&self) -> bool {
            self.planet_type.size_range().contains(&self.size)
        }
    }
}
